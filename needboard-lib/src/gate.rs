//! The shared-secret check in front of the admin screens.
//!
//! This is a convenience gate, not authentication: the secret is a plain constant, compared
//! case-insensitively, with no lockout or hashing.

/// The admin key, in upper case.
pub const ADMIN_SECRET: &str = "SAOMATEUS2025";

/// Whether `candidate` matches the admin key, ignoring case.
pub fn check(candidate: &str) -> bool {
    candidate.to_uppercase() == ADMIN_SECRET
}
