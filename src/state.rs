//! Application-wide state shared through Yew context.
//!
//! Lifecycle of the cached allocation: empty on page load, replaced by every
//! successful budget cycle, read (never written) by the combined-goals form.

use std::cell::RefCell;
use std::rc::Rc;

use yew::prelude::*;

use crate::models::Amounts;

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    allocation: Option<Amounts>,
    in_flight: usize,
    notice: Option<Notice>,
    notices_sent: u64,
}

pub enum AppAction {
    /// A budget cycle succeeded.
    CacheAllocation(Amounts),
    BeginLoading,
    EndLoading,
    Notify(String),
    /// Hides the notice with this id if it is still the one showing.
    DismissNotice(u64),
}

impl Reducible for AppState {
    type Action = AppAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            AppAction::CacheAllocation(allocation) => next.allocation = Some(allocation),
            AppAction::BeginLoading => next.in_flight += 1,
            AppAction::EndLoading => next.in_flight = next.in_flight.saturating_sub(1),
            AppAction::Notify(message) => {
                next.notices_sent += 1;
                next.notice = Some(Notice {
                    id: next.notices_sent,
                    message,
                });
            }
            AppAction::DismissNotice(id) => {
                if next.notice.as_ref().map(|n| n.id) == Some(id) {
                    next.notice = None;
                }
            }
        }
        next.into()
    }
}

impl AppState {
    pub fn allocation(&self) -> Option<&Amounts> {
        self.allocation.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }
}

pub type AppContext = UseReducerHandle<AppState>;

/// Keeps the loading overlay up until dropped, on every exit path.
pub struct LoadingGuard {
    dispatch: Callback<AppAction>,
}

impl LoadingGuard {
    pub fn begin(dispatch: Callback<AppAction>) -> Self {
        dispatch.emit(AppAction::BeginLoading);
        Self { dispatch }
    }
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.dispatch.emit(AppAction::EndLoading);
    }
}

/// Identifies one request cycle of one form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Per-form bookkeeping: whether a cycle is in flight, and which one is current.
#[derive(Debug, Default)]
pub struct SubmissionTracker {
    generation: u64,
    in_flight: bool,
}

impl SubmissionTracker {
    /// Starts a cycle; any earlier cycle stops being current.
    pub fn begin(&mut self) -> Ticket {
        self.generation += 1;
        self.in_flight = true;
        Ticket(self.generation)
    }

    /// Ends a cycle. Returns false for a superseded cycle, whose response
    /// must not be rendered.
    pub fn finish(&mut self, ticket: Ticket) -> bool {
        if ticket.0 != self.generation {
            return false;
        }
        self.in_flight = false;
        true
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.generation
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight
    }
}

/// Hook-side handle: the tracker plus a state flag that re-renders the form
/// (to disable its submit button) while a cycle is in flight.
#[derive(Clone)]
pub struct SubmissionHandle {
    tracker: Rc<RefCell<SubmissionTracker>>,
    busy: UseStateHandle<bool>,
}

impl SubmissionHandle {
    pub fn is_busy(&self) -> bool {
        *self.busy || self.tracker.borrow().is_busy()
    }

    pub fn begin(&self) -> Ticket {
        self.busy.set(true);
        self.tracker.borrow_mut().begin()
    }

    pub fn finish(&self, ticket: Ticket) -> bool {
        let current = self.tracker.borrow_mut().finish(ticket);
        if current {
            self.busy.set(false);
        }
        current
    }
}

#[hook]
pub fn use_submission() -> SubmissionHandle {
    let tracker = use_mut_ref(SubmissionTracker::default);
    let busy = use_state(|| false);
    SubmissionHandle { tracker, busy }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(state: AppState, action: AppAction) -> AppState {
        (*Rc::new(state).reduce(action)).clone()
    }

    #[test]
    fn test_allocation_starts_empty_and_is_replaced() {
        let state = AppState::default();
        assert!(state.allocation().is_none());

        let mut first = Amounts::new();
        first.insert("savings".into(), 1000.0);
        let state = reduce(state, AppAction::CacheAllocation(first));

        let mut second = Amounts::new();
        second.insert("savings".into(), 2000.0);
        let state = reduce(state, AppAction::CacheAllocation(second.clone()));

        assert_eq!(state.allocation(), Some(&second));
    }

    #[test]
    fn test_loading_counts_overlapping_cycles() {
        let state = reduce(AppState::default(), AppAction::BeginLoading);
        let state = reduce(state, AppAction::BeginLoading);
        let state = reduce(state, AppAction::EndLoading);
        assert!(state.is_loading());
        let state = reduce(state, AppAction::EndLoading);
        assert!(!state.is_loading());
        let state = reduce(state, AppAction::EndLoading);
        assert!(!state.is_loading());
    }

    #[test]
    fn test_dismiss_only_hides_matching_notice() {
        let state = reduce(AppState::default(), AppAction::Notify("first".into()));
        let first_id = state.notice().unwrap().id;
        let state = reduce(state, AppAction::Notify("second".into()));

        let state = reduce(state, AppAction::DismissNotice(first_id));
        assert_eq!(state.notice().unwrap().message, "second");

        let second_id = state.notice().unwrap().id;
        let state = reduce(state, AppAction::DismissNotice(second_id));
        assert!(state.notice().is_none());
    }

    #[test]
    fn test_loading_guard_ends_on_drop() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let dispatch = {
            let log = log.clone();
            Callback::from(move |action: AppAction| {
                log.borrow_mut().push(matches!(action, AppAction::BeginLoading));
            })
        };

        {
            let _guard = LoadingGuard::begin(dispatch);
            assert_eq!(*log.borrow(), vec![true]);
        }

        assert_eq!(*log.borrow(), vec![true, false]);
    }

    #[test]
    fn test_superseded_ticket_is_discarded() {
        let mut tracker = SubmissionTracker::default();
        let stale = tracker.begin();
        let fresh = tracker.begin();

        assert!(!tracker.is_current(stale));
        assert!(!tracker.finish(stale));
        assert!(tracker.is_busy());

        assert!(tracker.finish(fresh));
        assert!(!tracker.is_busy());
    }
}
