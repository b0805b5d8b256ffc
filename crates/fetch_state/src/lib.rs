//! View-state synchronization for fetch cycles.
//!
//! This crate provides:
//! - FetchState: the three mutually exclusive render states of a
//!   fetch-driven view (loading, loaded, failed)
//! - FetchGuard/FetchTicket: stale-response detection so a completion is
//!   only applied if no newer fetch has started since it was issued
//! - FetchError: the failure taxonomy of one fetch cycle

use std::cell::Cell;
use std::rc::Rc;
use thiserror::Error;

/// Errors from a single fetch cycle.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("server returned status {0}")]
    Status(u16),

    #[error("could not decode response body: {0}")]
    Decode(String),
}

/// Result type for fetch operations.
pub type Result<T> = std::result::Result<T, FetchError>;

/// Render state of a fetch-driven view.
///
/// Exactly one state holds at a time. A view starts in `Loading` and moves
/// to `Loaded` or `Failed` when its request resolves; it only returns to
/// `Loading` when a new fetch cycle starts.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        FetchState::Loading
    }
}

impl<T> FetchState<T> {
    /// Whether the view is waiting on an unresolved request.
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    /// The loaded payload, if any.
    pub fn data(&self) -> Option<&T> {
        match self {
            FetchState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    /// The user-visible failure message, if any.
    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Owner of the fetch cycles of one view instance.
///
/// Each call to [`issue`](FetchGuard::issue) starts a new cycle and
/// invalidates every ticket issued before it; [`retire`](FetchGuard::retire)
/// invalidates without starting one (used when the view unmounts). Shares a
/// counter through `Rc<Cell<_>>`, so it is single-threaded by construction,
/// like the event loop it serves.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FetchGuard {
    latest: Rc<Cell<u64>>,
}

impl FetchGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new fetch cycle, invalidating all previously issued tickets.
    pub fn issue(&self) -> FetchTicket {
        let seq = self.latest.get() + 1;
        self.latest.set(seq);
        FetchTicket {
            seq,
            latest: Rc::clone(&self.latest),
        }
    }

    /// Invalidate every outstanding ticket without starting a new cycle.
    pub fn retire(&self) {
        self.latest.set(self.latest.get() + 1);
    }
}

/// Token tied to one fetch cycle.
///
/// A completion may only be applied to view state while its ticket
/// [`is_current`](FetchTicket::is_current); otherwise a newer cycle owns the
/// state and the result is discarded.
#[derive(Debug, Clone)]
pub struct FetchTicket {
    seq: u64,
    latest: Rc<Cell<u64>>,
}

impl FetchTicket {
    /// Whether this ticket still owns the view state.
    pub fn is_current(&self) -> bool {
        self.latest.get() == self.seq
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_loading() {
        let state = FetchState::<Vec<u32>>::default();

        assert!(state.is_loading());
        assert_eq!(state.data(), None);
        assert_eq!(state.error(), None);
    }

    #[test]
    fn test_loaded_holds_data() {
        let state = FetchState::Loaded(vec!["Arsenal", "Chelsea"]);

        assert!(!state.is_loading());
        assert_eq!(state.data(), Some(&vec!["Arsenal", "Chelsea"]));
        assert_eq!(state.error(), None);
    }

    #[test]
    fn test_failed_carries_message() {
        let state = FetchState::<Vec<u32>>::Failed("Failed to fetch matches".to_string());

        assert!(!state.is_loading());
        assert_eq!(state.data(), None);
        assert_eq!(state.error(), Some("Failed to fetch matches"));
    }

    #[test]
    fn test_reload_replaces_data() {
        // Re-fetching an identical payload yields an identical state: the
        // list is replaced wholesale, never merged.
        let first = FetchState::Loaded(vec![1, 2, 3]);
        let second = FetchState::Loaded(vec![1, 2, 3]);

        assert_eq!(first, second);
    }

    #[test]
    fn test_first_ticket_is_current() {
        let guard = FetchGuard::new();
        let ticket = guard.issue();

        assert!(ticket.is_current());
    }

    #[test]
    fn test_new_issue_invalidates_previous() {
        let guard = FetchGuard::new();
        let first = guard.issue();
        let second = guard.issue();

        assert!(!first.is_current());
        assert!(second.is_current());
    }

    #[test]
    fn test_retire_invalidates_outstanding() {
        let guard = FetchGuard::new();
        let ticket = guard.issue();

        guard.retire();

        assert!(!ticket.is_current());
    }

    #[test]
    fn test_out_of_order_completion_discarded() {
        // The user selects league A, then league B before A's response
        // lands. Whichever order the responses arrive in, only B's may be
        // applied.
        let guard = FetchGuard::new();
        let for_a = guard.issue();
        let for_b = guard.issue();

        let mut state = FetchState::Loading;
        if for_b.is_current() {
            state = FetchState::Loaded("B");
        }
        if for_a.is_current() {
            state = FetchState::Loaded("A");
        }

        assert_eq!(state, FetchState::Loaded("B"));
    }

    #[test]
    fn test_ticket_clone_tracks_currency() {
        let guard = FetchGuard::new();
        let ticket = guard.issue();
        let moved_into_future = ticket.clone();

        assert!(moved_into_future.is_current());
        guard.issue();
        assert!(!moved_into_future.is_current());
    }

    #[test]
    fn test_guards_are_independent() {
        // One view's new cycle must not invalidate another view's ticket.
        let home = FetchGuard::new();
        let list = FetchGuard::new();

        let list_ticket = list.issue();
        home.issue();
        home.issue();

        assert!(list_ticket.is_current());
    }

    #[test]
    fn test_fetch_error_display() {
        assert_eq!(
            FetchError::Transport("connection refused".to_string()).to_string(),
            "request failed: connection refused"
        );
        assert_eq!(
            FetchError::Status(503).to_string(),
            "server returned status 503"
        );
        assert_eq!(
            FetchError::Decode("missing field `date`".to_string()).to_string(),
            "could not decode response body: missing field `date`"
        );
    }
}
