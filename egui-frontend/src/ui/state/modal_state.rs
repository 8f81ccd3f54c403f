//! # Modal State Module
//!
//! Visibility flags and input buffers for the two lead-supply dialogs.
//!
//! ## Responsibilities:
//! - Request-leads and upload-leads dialog visibility
//! - Per-dialog input buffers, reset on open
//!
//! ## Purpose:
//! The two dialogs are independent {closed, open} machines. Their inputs
//! (requested quantity, chosen CSV path) are display-only: confirm emits an
//! event with no payload, matching the current product behavior.

use std::path::PathBuf;

/// Modal visibility and per-dialog input buffers
#[derive(Debug, Default)]
pub struct ModalState {
    /// Whether the request-leads dialog is visible
    pub show_request_leads_modal: bool,

    /// Whether the upload-leads dialog is visible
    pub show_upload_leads_modal: bool,

    /// Requested lead quantity as typed; not read by the confirm handler
    pub request_quantity: String,

    /// CSV path chosen through the native picker; displayed only
    pub selected_csv: Option<PathBuf>,

    /// Suppresses backdrop-click close on the frame a dialog opens
    pub modal_just_opened: bool,
}

impl ModalState {
    /// Create modal state with both dialogs hidden
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the request-leads dialog with a fresh quantity field
    pub fn open_request_leads(&mut self) {
        self.request_quantity.clear();
        self.show_request_leads_modal = true;
        self.modal_just_opened = true;
    }

    /// Open the upload-leads dialog with no file selected
    pub fn open_upload_leads(&mut self) {
        self.selected_csv = None;
        self.show_upload_leads_modal = true;
        self.modal_just_opened = true;
    }

    pub fn close_request_leads(&mut self) {
        self.show_request_leads_modal = false;
    }

    pub fn close_upload_leads(&mut self) {
        self.show_upload_leads_modal = false;
    }

    /// Hide both dialogs
    pub fn hide_all_modals(&mut self) {
        self.show_request_leads_modal = false;
        self.show_upload_leads_modal = false;
    }

    pub fn any_modal_open(&self) -> bool {
        self.show_request_leads_modal || self.show_upload_leads_modal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialogs_start_closed() {
        let modals = ModalState::new();
        assert!(!modals.any_modal_open());
    }

    #[test]
    fn test_open_request_leads_resets_quantity() {
        let mut modals = ModalState::new();
        modals.request_quantity = "50".to_string();
        modals.open_request_leads();
        assert!(modals.show_request_leads_modal);
        assert!(modals.request_quantity.is_empty());
        assert!(modals.modal_just_opened);
    }

    #[test]
    fn test_open_upload_leads_clears_selection() {
        let mut modals = ModalState::new();
        modals.selected_csv = Some(PathBuf::from("/tmp/leads.csv"));
        modals.open_upload_leads();
        assert!(modals.show_upload_leads_modal);
        assert!(modals.selected_csv.is_none());
    }

    #[test]
    fn test_close_leaves_other_dialog_alone() {
        let mut modals = ModalState::new();
        modals.open_request_leads();
        modals.open_upload_leads();
        modals.close_request_leads();
        assert!(!modals.show_request_leads_modal);
        assert!(modals.show_upload_leads_modal);

        modals.hide_all_modals();
        assert!(!modals.any_modal_open());
    }
}
