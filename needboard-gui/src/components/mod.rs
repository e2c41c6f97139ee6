//! One module per screen, plus the header and the donation overlay.
//!
//! Stateless pieces are plain `view` functions; [`admin_panel::AdminPanel`] keeps its form
//! state and reports what the parent should do through an [`admin_panel::Action`].

pub mod admin_panel;
pub mod donation_modal;
pub mod header;
pub mod listing;
pub mod login;
