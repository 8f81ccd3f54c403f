//! # Modals Module
//!
//! The two lead-supply dialogs for the access tab.
//!
//! ## Module Organization:
//! - `request_leads` - ask the Triad3 team for a new lead list
//! - `upload_leads` - pick a CSV file from the team lead's own base
//! - `shared` - common overlay frame and backdrop handling
//!
//! ## Architecture:
//! Each dialog is self-contained: it renders its own form, decides between
//! confirm and dismiss, and reports confirmation as a `ScreenEvent`.

pub mod request_leads;
pub mod shared;
pub mod upload_leads;
