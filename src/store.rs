//! Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. All changes go
//! through the transition methods on [`ComplaintState`].

use leptos::prelude::*;
use reactive_stores::Store;

use crate::error::ApiError;
use crate::models::{Complaint, NewComplaint};

/// Label of the submit control while idle
pub const SUBMIT_LABEL: &str = "Submit Complaint";
/// Label of the submit control while a save is in flight
pub const SUBMITTING_LABEL: &str = "Submitting...";

/// Application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct ComplaintState {
    /// Complaints in server response order
    pub complaints: Vec<Complaint>,
    /// Draft title bound to the form
    pub title_draft: String,
    /// Draft body bound to the form
    pub body_draft: String,
    /// List fetch in flight
    pub is_loading: bool,
    /// Save in flight
    pub is_saving: bool,
    /// Last list fetch failure, shown above the list
    pub fetch_error: Option<String>,
    /// Last save failure, shown in the form
    pub save_error: Option<String>,
    /// Bumped by every list fetch; only the newest completion is applied
    pub fetch_generation: u64,
}

/// Issued by [`ComplaintState::begin_fetch`], handed back on completion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// What the list area shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListStatus {
    Loading,
    Empty,
    Populated,
}

impl ListStatus {
    pub fn derive(is_loading: bool, count: usize) -> Self {
        if is_loading {
            ListStatus::Loading
        } else if count == 0 {
            ListStatus::Empty
        } else {
            ListStatus::Populated
        }
    }
}

pub fn submit_label(is_saving: bool) -> &'static str {
    if is_saving { SUBMITTING_LABEL } else { SUBMIT_LABEL }
}

impl ComplaintState {
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.fetch_generation += 1;
        self.is_loading = true;
        FetchTicket(self.fetch_generation)
    }

    /// Apply a list fetch result. Returns false if a newer fetch superseded it.
    pub fn finish_fetch(&mut self, ticket: FetchTicket, result: Result<Vec<Complaint>, ApiError>) -> bool {
        if ticket.0 != self.fetch_generation {
            return false;
        }
        self.is_loading = false;
        match result {
            Ok(complaints) => {
                self.complaints = complaints;
                self.fetch_error = None;
            }
            Err(e) => self.fetch_error = Some(e.to_string()),
        }
        true
    }

    /// Start a save from the current drafts. `None` while a save is in flight.
    pub fn begin_save(&mut self) -> Option<NewComplaint> {
        if self.is_saving {
            return None;
        }
        self.is_saving = true;
        self.save_error = None;
        Some(NewComplaint {
            title: self.title_draft.clone(),
            body: self.body_draft.clone(),
        })
    }

    /// Apply a save result. Returns true when the list should be reloaded.
    pub fn finish_save(&mut self, result: Result<(), ApiError>) -> bool {
        self.is_saving = false;
        match result {
            Ok(()) => {
                self.title_draft.clear();
                self.body_draft.clear();
                self.save_error = None;
                true
            }
            Err(e) => {
                self.save_error = Some(e.to_string());
                false
            }
        }
    }
}

/// Type alias for the store
pub type ComplaintStore = Store<ComplaintState>;

/// Get the complaint store from context
pub fn use_complaint_store() -> ComplaintStore {
    expect_context::<ComplaintStore>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ComplaintId;

    fn status(state: &ComplaintState) -> ListStatus {
        ListStatus::derive(state.is_loading, state.complaints.len())
    }

    fn cold_soup() -> Complaint {
        Complaint {
            id: ComplaintId::Number(1),
            title: "Cold soup".to_string(),
            body: "It was cold.".to_string(),
        }
    }

    #[test]
    fn test_initial_state() {
        let state = ComplaintState::default();
        assert!(state.complaints.is_empty());
        assert!(!state.is_loading);
        assert!(!state.is_saving);
        assert_eq!(state.fetch_error, None);
        assert_eq!(state.save_error, None);
        assert_eq!(submit_label(state.is_saving), "Submit Complaint");
    }

    #[test]
    fn test_fetch_lifecycle() {
        let mut state = ComplaintState::default();
        let ticket = state.begin_fetch();
        assert_eq!(status(&state), ListStatus::Loading);

        assert!(state.finish_fetch(ticket, Ok(vec![cold_soup()])));
        assert_eq!(status(&state), ListStatus::Populated);
        assert_eq!(state.complaints, vec![cold_soup()]);
    }

    #[test]
    fn test_loading_hides_existing_list() {
        let mut state = ComplaintState::default();
        let ticket = state.begin_fetch();
        state.finish_fetch(ticket, Ok(vec![cold_soup()]));

        state.begin_fetch();
        assert_eq!(status(&state), ListStatus::Loading);
    }

    #[test]
    fn test_fetch_empty_list() {
        let mut state = ComplaintState::default();
        let ticket = state.begin_fetch();
        state.finish_fetch(ticket, Ok(Vec::new()));
        assert_eq!(status(&state), ListStatus::Empty);
    }

    #[test]
    fn test_fetch_failure_clears_loading() {
        let mut state = ComplaintState::default();
        let ticket = state.begin_fetch();
        state.finish_fetch(ticket, Err(ApiError::Network("offline".to_string())));

        assert!(!state.is_loading);
        assert_eq!(state.fetch_error.as_deref(), Some("network error: offline"));
        assert_eq!(status(&state), ListStatus::Empty);
    }

    #[test]
    fn test_stale_fetch_ignored() {
        let mut state = ComplaintState::default();
        let first = state.begin_fetch();
        let second = state.begin_fetch();

        assert!(state.finish_fetch(second, Ok(vec![cold_soup()])));
        assert!(!state.finish_fetch(first, Ok(Vec::new())));
        assert_eq!(state.complaints.len(), 1);
        assert!(!state.is_loading);
    }

    #[test]
    fn test_save_uses_drafts() {
        let mut state = ComplaintState::default();
        state.title_draft = "Test Title".to_string();
        state.body_draft = "Test Body".to_string();

        let payload = state.begin_save().unwrap();
        assert_eq!(payload.title, "Test Title");
        assert_eq!(payload.body, "Test Body");
        assert!(state.is_saving);
        assert_eq!(submit_label(state.is_saving), "Submitting...");
    }

    #[test]
    fn test_second_click_while_saving_is_ignored() {
        let mut state = ComplaintState::default();
        assert!(state.begin_save().is_some());
        assert!(state.begin_save().is_none());
        assert!(state.begin_save().is_none());

        state.finish_save(Ok(()));
        assert!(state.begin_save().is_some());
    }

    #[test]
    fn test_save_success() {
        let mut state = ComplaintState::default();
        state.title_draft = "Test Title".to_string();
        state.body_draft = "Test Body".to_string();
        state.begin_save();
        assert!(state.finish_save(Ok(())));

        assert!(!state.is_saving);
        assert_eq!(submit_label(state.is_saving), "Submit Complaint");
        assert!(state.title_draft.is_empty());
        assert!(state.body_draft.is_empty());
        assert_eq!(state.save_error, None);
    }

    #[test]
    fn test_save_rejected() {
        let mut state = ComplaintState::default();
        state.title_draft = "Keep me".to_string();
        state.begin_save();
        assert!(!state.finish_save(Err(ApiError::Rejected)));

        assert!(!state.is_saving);
        assert_eq!(state.save_error.as_deref(), Some("Failed to save complaint."));
        assert_eq!(state.title_draft, "Keep me");
    }

    #[test]
    fn test_new_save_clears_previous_error() {
        let mut state = ComplaintState::default();
        state.begin_save();
        state.finish_save(Err(ApiError::Rejected));
        state.begin_save();
        assert_eq!(state.save_error, None);
    }

    #[test]
    fn test_fetch_failure_keeps_loaded_list() {
        let mut state = ComplaintState::default();
        let ticket = state.begin_fetch();
        state.finish_fetch(ticket, Ok(vec![cold_soup()]));

        let ticket = state.begin_fetch();
        state.finish_fetch(ticket, Err(ApiError::Status { status: 503, url: "x".to_string() }));

        assert_eq!(state.complaints, vec![cold_soup()]);
        assert_eq!(status(&state), ListStatus::Populated);
        assert!(state.fetch_error.is_some());
    }

    #[test]
    fn test_save_error_survives_fetch_completion() {
        let mut state = ComplaintState::default();
        let ticket = state.begin_fetch();
        state.begin_save();
        state.finish_save(Err(ApiError::Rejected));

        state.finish_fetch(ticket, Ok(Vec::new()));
        assert_eq!(state.save_error.as_deref(), Some("Failed to save complaint."));
        assert_eq!(state.fetch_error, None);

        let ticket = state.begin_fetch();
        state.finish_fetch(ticket, Err(ApiError::Network("offline".to_string())));
        assert_eq!(state.save_error.as_deref(), Some("Failed to save complaint."));
        assert_eq!(state.fetch_error.as_deref(), Some("network error: offline"));
    }

    #[test]
    fn test_successful_save_leaves_fetch_error_alone() {
        let mut state = ComplaintState::default();
        let ticket = state.begin_fetch();
        state.finish_fetch(ticket, Err(ApiError::Network("offline".to_string())));

        state.begin_save();
        assert!(state.finish_save(Ok(())));
        assert_eq!(state.fetch_error.as_deref(), Some("network error: offline"));
    }
}
