//! Which screen is showing, plus the login form's password buffer.

use strum::Display;
use tracing::{debug, warn};

use crate::gate;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Display)]
pub enum View {
    /// Public listing of needs
    #[default]
    Listing,
    /// Password prompt for the restricted area
    Login,
    /// Add/remove records
    Admin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    Accepted,
    Rejected,
    /// A login was submitted while the prompt wasn't showing
    NotPrompting,
}

/// Three-state screen selector.
///
/// [`View::Admin`] is only reachable through [`ViewController::submit_login`]. Leaving
/// [`View::Login`] for any other screen clears the password buffer. Nothing here is persisted,
/// so a fresh controller always starts at [`View::Listing`].
#[derive(Debug, Default, Clone)]
pub struct ViewController {
    view: View,
    password: String,
}

impl ViewController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    /// Update the password buffer. Ignored outside the login prompt.
    pub fn set_password(&mut self, password: impl Into<String>) {
        if self.view == View::Login {
            self.password = password.into();
        }
    }

    /// The "restricted area" button: opens the login prompt from the listing, and acts as
    /// "back to site" everywhere else.
    pub fn toggle_restricted(&mut self) {
        let target = match self.view {
            View::Listing => View::Login,
            View::Login | View::Admin => View::Listing,
        };

        self.transition(target);
    }

    /// The brand/home element.
    pub fn go_home(&mut self) {
        self.transition(View::Listing);
    }

    /// Move to `target` if it is reachable from the current screen. Returns whether the move
    /// happened.
    pub fn navigate(&mut self, target: View) -> bool {
        let allowed = match (self.view, target) {
            (_, View::Listing) => true,
            (View::Listing | View::Login, View::Login) => true,
            (View::Admin, View::Login) | (_, View::Admin) => false,
        };

        if allowed {
            self.transition(target);
        } else {
            warn!("Ignoring navigation from {} to {target}", self.view);
        }

        allowed
    }

    /// Check the password buffer against the admin key.
    pub fn submit_login(&mut self) -> LoginOutcome {
        if self.view != View::Login {
            return LoginOutcome::NotPrompting;
        }

        if gate::check(&self.password) {
            self.transition(View::Admin);
            LoginOutcome::Accepted
        } else {
            debug!("Rejected admin key");
            LoginOutcome::Rejected
        }
    }

    fn transition(&mut self, target: View) {
        if self.view == target {
            return;
        }

        if self.view == View::Login {
            self.password.clear();
        }

        debug!("View {} -> {target}", self.view);

        self.view = target;
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn at_login(password: &str) -> ViewController {
        let mut views = ViewController::new();
        views.toggle_restricted();
        views.set_password(password);
        views
    }

    #[test]
    fn test_starts_at_listing() {
        let views = ViewController::new();

        assert_eq!(views.view(), View::Listing);
        assert_eq!(views.password(), "");
    }

    #[test]
    fn test_toggle_restricted() {
        let mut views = ViewController::new();

        views.toggle_restricted();
        assert_eq!(views.view(), View::Login);

        views.toggle_restricted();
        assert_eq!(views.view(), View::Listing);
    }

    #[test]
    fn test_successful_login() {
        let mut views = at_login("saomateus2025");

        assert_eq!(views.submit_login(), LoginOutcome::Accepted);
        assert_eq!(views.view(), View::Admin);
        assert_eq!(views.password(), "");
    }

    #[test]
    fn test_failed_login_keeps_password() {
        let mut views = at_login("errada");

        assert_eq!(views.submit_login(), LoginOutcome::Rejected);
        assert_eq!(views.view(), View::Login);
        assert_eq!(views.password(), "errada");
    }

    #[test]
    fn test_leaving_login_clears_password() {
        let mut views = at_login("meio digitada");

        views.go_home();

        assert_eq!(views.view(), View::Listing);
        assert_eq!(views.password(), "");

        views.toggle_restricted();
        views.set_password("outra");
        views.toggle_restricted();

        assert_eq!(views.password(), "");
    }

    #[test]
    fn test_admin_back_to_listing() {
        let mut views = at_login("SAOMATEUS2025");
        views.submit_login();

        views.toggle_restricted();
        assert_eq!(views.view(), View::Listing);

        let mut views = at_login("SAOMATEUS2025");
        views.submit_login();

        views.go_home();
        assert_eq!(views.view(), View::Listing);
    }

    #[test]
    fn test_navigate_cannot_skip_login() {
        let mut views = ViewController::new();

        assert!(!views.navigate(View::Admin));
        assert_eq!(views.view(), View::Listing);

        assert!(views.navigate(View::Login));
        assert!(!views.navigate(View::Admin));
        assert_eq!(views.view(), View::Login);
    }

    #[test]
    fn test_no_admin_to_login() {
        let mut views = at_login("saomateus2025");
        views.submit_login();

        assert!(!views.navigate(View::Login));
        assert_eq!(views.view(), View::Admin);
        assert!(views.navigate(View::Listing));
    }

    #[test]
    fn test_password_ignored_outside_login() {
        let mut views = ViewController::new();

        views.set_password("SAOMATEUS2025");

        assert_eq!(views.password(), "");
        assert_eq!(views.submit_login(), LoginOutcome::NotPrompting);
        assert_eq!(views.view(), View::Listing);
    }
}
