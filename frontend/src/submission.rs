//! Lifecycle of a single comment submission.

use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use leptos::logging::log;
use leptos::{RwSignal, SignalUpdate};
use shared::{NewDiaryComment, ValidationError};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(SubmissionFailure),
}

/// Why a submission ended in `Failed`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionFailure {
    /// Rejected locally; nothing was sent.
    Invalid(ValidationError),
    /// The request failed; carries the error text from the client.
    Request(String),
}

/// Proof that a request was started; carries the generation it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionTicket(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Succeeded,
    Failed,
    /// The ticket was issued before a `cancel`; the result was dropped.
    Stale,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionTracker {
    state: SubmissionState,
    generation: u64,
}

impl SubmissionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn is_busy(&self) -> bool {
        self.state == SubmissionState::Submitting
    }

    /// Start a request. Returns `None` while another one is in flight.
    pub fn begin(&mut self) -> Option<SubmissionTicket> {
        if self.is_busy() {
            return None;
        }
        self.state = SubmissionState::Submitting;
        Some(SubmissionTicket(self.generation))
    }

    pub fn finish(&mut self, ticket: SubmissionTicket, result: Result<(), String>) -> Completion {
        if ticket.0 != self.generation || !self.is_busy() {
            return Completion::Stale;
        }
        match result {
            Ok(()) => {
                self.state = SubmissionState::Succeeded;
                Completion::Succeeded
            }
            Err(reason) => {
                self.state = SubmissionState::Failed(SubmissionFailure::Request(reason));
                Completion::Failed
            }
        }
    }

    /// Record a failure that happened before any request was sent.
    pub fn reject(&mut self, err: ValidationError) {
        if !self.is_busy() {
            self.state = SubmissionState::Failed(SubmissionFailure::Invalid(err));
        }
    }

    /// Forget any request in flight. Its completion will be `Stale`.
    pub fn cancel(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.state = SubmissionState::Idle;
    }

    /// Return to `Idle` once a success or failure has been shown.
    pub fn acknowledge(&mut self) {
        if matches!(
            self.state,
            SubmissionState::Succeeded | SubmissionState::Failed(_)
        ) {
            self.state = SubmissionState::Idle;
        }
    }
}

/// Somewhere a `SubmissionTracker` lives.
///
/// `with_tracker` returns `None` when the storage is gone (for a signal,
/// once its owner has been disposed).
pub trait TrackerStore {
    fn with_tracker<R>(&self, f: impl FnOnce(&mut SubmissionTracker) -> R) -> Option<R>;
}

impl TrackerStore for RwSignal<SubmissionTracker> {
    fn with_tracker<R>(&self, f: impl FnOnce(&mut SubmissionTracker) -> R) -> Option<R> {
        self.try_update(f)
    }
}

impl TrackerStore for Rc<RefCell<SubmissionTracker>> {
    fn with_tracker<R>(&self, f: impl FnOnce(&mut SubmissionTracker) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// Validate, send and settle one comment.
///
/// `send` is called at most once, and `reload` only after `send` succeeded
/// for a request that was not cancelled in the meantime.
pub async fn submit_comment<S, Submit, Fut, E, Reload>(
    store: &S,
    entry_id: i32,
    body: String,
    send: Submit,
    reload: Reload,
) -> SubmissionState
where
    S: TrackerStore,
    Submit: FnOnce(i32, NewDiaryComment) -> Fut,
    Fut: Future<Output = Result<(), E>>,
    E: std::fmt::Display,
    Reload: FnOnce(),
{
    let current = |store: &S| {
        store
            .with_tracker(|t| t.state().clone())
            .unwrap_or_default()
    };

    let comment = match NewDiaryComment::new(body) {
        Ok(comment) => comment,
        Err(e) => {
            store.with_tracker(|t| t.reject(e));
            return current(store);
        }
    };

    let Some(ticket) = store.with_tracker(|t| t.begin()).flatten() else {
        return current(store);
    };

    log!("submitting comment for entry {}", entry_id);
    let result = send(entry_id, comment).await.map_err(|e| e.to_string());

    match store.with_tracker(|t| t.finish(ticket, result)) {
        Some(Completion::Succeeded) => reload(),
        Some(Completion::Failed) => {}
        Some(Completion::Stale) | None => {
            log!("dropping stale comment result for entry {}", entry_id);
        }
    }

    current(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::Cell;

    fn store() -> Rc<RefCell<SubmissionTracker>> {
        Rc::new(RefCell::new(SubmissionTracker::new()))
    }

    #[test]
    fn test_tracker_happy_path() {
        let mut tracker = SubmissionTracker::new();
        let ticket = tracker.begin().unwrap();
        assert!(tracker.is_busy());
        assert_eq!(tracker.finish(ticket, Ok(())), Completion::Succeeded);
        assert_eq!(tracker.state(), &SubmissionState::Succeeded);
        tracker.acknowledge();
        assert_eq!(tracker.state(), &SubmissionState::Idle);
    }

    #[test]
    fn test_tracker_refuses_second_begin_while_busy() {
        let mut tracker = SubmissionTracker::new();
        let _ticket = tracker.begin().unwrap();
        assert_eq!(tracker.begin(), None);
    }

    #[test]
    fn test_tracker_drops_results_after_cancel() {
        let mut tracker = SubmissionTracker::new();
        let old = tracker.begin().unwrap();
        tracker.cancel();
        assert_eq!(tracker.state(), &SubmissionState::Idle);

        let fresh = tracker.begin().unwrap();
        assert_eq!(tracker.finish(old, Ok(())), Completion::Stale);
        assert!(tracker.is_busy());
        assert_eq!(
            tracker.finish(fresh, Err("boom".to_string())),
            Completion::Failed
        );
        assert_eq!(
            tracker.state(),
            &SubmissionState::Failed(SubmissionFailure::Request("boom".to_string()))
        );
    }

    #[test]
    fn test_submit_calls_send_once_then_reload_once() {
        let store = store();
        let sent = RefCell::new(Vec::new());
        let reloads = Cell::new(0);

        let state = block_on(submit_comment(
            &store,
            5,
            "Lovely post".to_string(),
            |id, comment: NewDiaryComment| {
                sent.borrow_mut().push((id, comment.body));
                async { Ok::<(), String>(()) }
            },
            || reloads.set(reloads.get() + 1),
        ));

        assert_eq!(state, SubmissionState::Succeeded);
        assert_eq!(*sent.borrow(), vec![(5, "Lovely post".to_string())]);
        assert_eq!(reloads.get(), 1);
    }

    #[test]
    fn test_failed_send_reports_reason_and_skips_reload() {
        let store = store();
        let reloads = Cell::new(0);

        let state = block_on(submit_comment(
            &store,
            5,
            "Lovely post".to_string(),
            |_, _| async { Err::<(), String>("server said no".to_string()) },
            || reloads.set(reloads.get() + 1),
        ));

        assert_eq!(
            state,
            SubmissionState::Failed(SubmissionFailure::Request("server said no".to_string()))
        );
        assert_eq!(reloads.get(), 0);
    }

    #[test]
    fn test_invalid_body_never_reaches_the_network() {
        let store = store();
        let sends = Cell::new(0);

        let state = block_on(submit_comment(
            &store,
            5,
            "   ".to_string(),
            |_, _| {
                sends.set(sends.get() + 1);
                async { Ok::<(), String>(()) }
            },
            || {},
        ));

        assert_eq!(sends.get(), 0);
        assert_eq!(
            state,
            SubmissionState::Failed(SubmissionFailure::Invalid(ValidationError::EmptyComment))
        );
    }

    #[test]
    fn test_overlong_body_keeps_the_counts() {
        let store = store();
        let state = block_on(submit_comment(
            &store,
            5,
            "x".repeat(2001),
            |_, _| async { Ok::<(), String>(()) },
            || {},
        ));

        assert_eq!(
            state,
            SubmissionState::Failed(SubmissionFailure::Invalid(ValidationError::CommentTooLong {
                max: 2000,
                actual: 2001,
            }))
        );
    }

    #[test]
    fn test_submit_while_busy_is_ignored() {
        let store = store();
        store.borrow_mut().begin();
        let sends = Cell::new(0);

        let state = block_on(submit_comment(
            &store,
            5,
            "again".to_string(),
            |_, _| {
                sends.set(sends.get() + 1);
                async { Ok::<(), String>(()) }
            },
            || {},
        ));

        assert_eq!(sends.get(), 0);
        assert_eq!(state, SubmissionState::Submitting);
    }

    #[test]
    fn test_cancel_during_flight_suppresses_reload() {
        let store = store();
        let reloads = Cell::new(0);
        let store_for_send = store.clone();

        let state = block_on(submit_comment(
            &store,
            5,
            "Lovely post".to_string(),
            move |_, _| {
                // The form goes away while the request is pending.
                store_for_send.borrow_mut().cancel();
                async { Ok::<(), String>(()) }
            },
            || reloads.set(reloads.get() + 1),
        ));

        assert_eq!(state, SubmissionState::Idle);
        assert_eq!(reloads.get(), 0);
    }
}
