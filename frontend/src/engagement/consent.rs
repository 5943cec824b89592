use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use log::{debug, info, warn};
use thiserror::Error;

use super::scheduler::{Cancellable, Scheduler};
use super::storage::{KeyValueStore, StorageError};
use crate::config::{Timings, COOKIE_CONSENT_KEY};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsentChoice {
    Accepted,
    Rejected,
    Dismissed,
}

impl ConsentChoice {
    pub fn as_str(self) -> &'static str {
        match self {
            ConsentChoice::Accepted => "accepted",
            ConsentChoice::Rejected => "rejected",
            ConsentChoice::Dismissed => "dismissed",
        }
    }
}

impl fmt::Display for ConsentChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown choice: {0:?}")]
pub struct UnknownChoice(pub String);

impl FromStr for ConsentChoice {
    type Err = UnknownChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "accepted" => Ok(ConsentChoice::Accepted),
            "rejected" => Ok(ConsentChoice::Rejected),
            "dismissed" => Ok(ConsentChoice::Dismissed),
            other => Err(UnknownChoice(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerState {
    Hidden,
    PendingReveal,
    VisibleSummary,
    VisibleDetailed,
    Resolved,
}

impl BannerState {
    pub fn is_visible(self) -> bool {
        matches!(self, BannerState::VisibleSummary | BannerState::VisibleDetailed)
    }
}

struct Inner {
    store: Rc<dyn KeyValueStore>,
    state: BannerState,
    choice: Option<ConsentChoice>,
    reveal: Option<Cancellable>,
    on_change: Rc<dyn Fn(BannerState)>,
}

/// Cookie preferences banner.
///
/// Shown once per visitor after a short delay, until one of accept, reject
/// or close is picked. The pick is written to `ather-cookie-consent` and the
/// banner never comes back while that key holds a value.
pub struct ConsentBanner {
    inner: Rc<RefCell<Inner>>,
}

impl ConsentBanner {
    pub fn mount(
        store: Rc<dyn KeyValueStore>,
        scheduler: &dyn Scheduler,
        timings: &Timings,
        on_change: impl Fn(BannerState) + 'static,
    ) -> Self {
        let recorded = store.get(COOKIE_CONSENT_KEY).filter(|v| !v.is_empty());
        let inner = Rc::new(RefCell::new(Inner {
            store,
            state: BannerState::Hidden,
            choice: None,
            reveal: None,
            on_change: Rc::new(on_change),
        }));

        if let Some(value) = recorded {
            let choice = match value.parse::<ConsentChoice>() {
                Ok(choice) => Some(choice),
                Err(e) => {
                    debug!("Stored consent is {}, treating it as resolved", e);
                    None
                }
            };
            let mut state = inner.borrow_mut();
            state.state = BannerState::Resolved;
            state.choice = choice;
            info!("Cookie consent already recorded ({})", value);
            drop(state);
            return Self { inner };
        }

        let weak = Rc::downgrade(&inner);
        let reveal = scheduler.after(
            timings.consent_reveal_ms,
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    Self::transition(&inner, |state| {
                        (state == BannerState::PendingReveal).then_some(BannerState::VisibleSummary)
                    });
                }
            }),
        );
        {
            let mut state = inner.borrow_mut();
            state.state = BannerState::PendingReveal;
            state.reveal = Some(reveal);
        }
        debug!("Cookie banner reveal in {}ms", timings.consent_reveal_ms);

        Self { inner }
    }

    /// Applies `step` to the current state and notifies on change.
    fn transition(
        inner: &Rc<RefCell<Inner>>,
        step: impl FnOnce(BannerState) -> Option<BannerState>,
    ) -> bool {
        let (next, on_change) = {
            let mut state = inner.borrow_mut();
            let Some(next) = step(state.state) else {
                return false;
            };
            state.state = next;
            (next, state.on_change.clone())
        };
        on_change(next);
        true
    }

    pub fn state(&self) -> BannerState {
        self.inner.borrow().state
    }

    pub fn is_visible(&self) -> bool {
        self.state().is_visible()
    }

    /// The recorded choice, once resolved with a recognised value.
    pub fn choice(&self) -> Option<ConsentChoice> {
        self.inner.borrow().choice
    }

    /// "Customize" / "Hide Details". Never touches storage.
    pub fn toggle_details(&self) {
        Self::transition(&self.inner, |state| match state {
            BannerState::VisibleSummary => Some(BannerState::VisibleDetailed),
            BannerState::VisibleDetailed => Some(BannerState::VisibleSummary),
            _ => None,
        });
    }

    pub fn accept_all(&self) -> Result<(), StorageError> {
        self.resolve(ConsentChoice::Accepted)
    }

    pub fn reject_all(&self) -> Result<(), StorageError> {
        self.resolve(ConsentChoice::Rejected)
    }

    pub fn close(&self) -> Result<(), StorageError> {
        self.resolve(ConsentChoice::Dismissed)
    }

    /// Records `choice` and hides the banner. The banner hides even when
    /// the write fails; the error is handed back for the caller to report.
    pub fn resolve(&self, choice: ConsentChoice) -> Result<(), StorageError> {
        let written = {
            let mut state = self.inner.borrow_mut();
            if !state.state.is_visible() {
                return Ok(());
            }
            state.choice = Some(choice);
            state.store.set(COOKIE_CONSENT_KEY, choice.as_str())
        };

        match &written {
            Ok(()) => info!("Cookie consent recorded: {}", choice),
            Err(e) => warn!("Cookie consent {} not persisted: {}", choice, e),
        }
        Self::transition(&self.inner, |_| Some(BannerState::Resolved));
        written
    }

    /// Cancels a pending reveal. A visible banner stays as it is.
    pub fn teardown(&self) {
        let reveal = {
            let mut state = self.inner.borrow_mut();
            if state.state == BannerState::PendingReveal {
                state.state = BannerState::Hidden;
            }
            state.reveal.take()
        };
        drop(reveal);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engagement::testing::{ManualScheduler, MemoryStorage};

    fn mount(store: &MemoryStorage, scheduler: &ManualScheduler) -> ConsentBanner {
        ConsentBanner::mount(Rc::new(store.clone()), scheduler, &Timings::default(), |_| {})
    }

    fn mount_visible(store: &MemoryStorage) -> (ConsentBanner, ManualScheduler) {
        let scheduler = ManualScheduler::default();
        let banner = mount(store, &scheduler);
        scheduler.advance(3_000);
        assert!(banner.is_visible());
        (banner, scheduler)
    }

    #[test]
    fn reveals_after_three_seconds_and_not_before() {
        let store = MemoryStorage::default();
        let scheduler = ManualScheduler::default();
        let banner = mount(&store, &scheduler);

        assert_eq!(banner.state(), BannerState::PendingReveal);
        scheduler.advance(2_999);
        assert_eq!(banner.state(), BannerState::PendingReveal);
        scheduler.advance(1);
        assert_eq!(banner.state(), BannerState::VisibleSummary);
    }

    #[test]
    fn each_action_writes_its_own_value() {
        let cases: [(fn(&ConsentBanner) -> Result<(), StorageError>, &str); 3] = [
            (ConsentBanner::accept_all, "accepted"),
            (ConsentBanner::reject_all, "rejected"),
            (ConsentBanner::close, "dismissed"),
        ];

        for (action, expected) in cases {
            let store = MemoryStorage::default();
            let (banner, _scheduler) = mount_visible(&store);

            action(&banner).unwrap();

            assert_eq!(banner.state(), BannerState::Resolved);
            assert_eq!(store.value(COOKIE_CONSENT_KEY).as_deref(), Some(expected));
        }
    }

    #[test]
    fn resolved_visitor_never_sees_banner_again() {
        let store = MemoryStorage::default();
        let (banner, _) = mount_visible(&store);
        banner.reject_all().unwrap();

        let scheduler = ManualScheduler::default();
        let reloaded = mount(&store, &scheduler);
        assert_eq!(reloaded.state(), BannerState::Resolved);
        assert_eq!(reloaded.choice(), Some(ConsentChoice::Rejected));
        assert_eq!(scheduler.pending(), 0);

        scheduler.advance(10_000);
        assert!(!reloaded.is_visible());
    }

    #[test]
    fn unrecognised_stored_value_still_counts_as_resolved() {
        let store = MemoryStorage::default();
        store.insert(COOKIE_CONSENT_KEY, "yes-please");
        let scheduler = ManualScheduler::default();
        let banner = mount(&store, &scheduler);

        assert_eq!(banner.state(), BannerState::Resolved);
        assert_eq!(banner.choice(), None);
    }

    #[test]
    fn customize_toggles_without_writing() {
        let store = MemoryStorage::default();
        let (banner, _) = mount_visible(&store);

        for _ in 0..3 {
            banner.toggle_details();
            assert_eq!(banner.state(), BannerState::VisibleDetailed);
            banner.toggle_details();
            assert_eq!(banner.state(), BannerState::VisibleSummary);
        }
        assert_eq!(store.write_attempts(), 0);
    }

    #[test]
    fn resolving_from_details_view_works() {
        let store = MemoryStorage::default();
        let (banner, _) = mount_visible(&store);
        banner.toggle_details();
        banner.accept_all().unwrap();

        assert_eq!(banner.state(), BannerState::Resolved);
        assert_eq!(store.value(COOKIE_CONSENT_KEY).as_deref(), Some("accepted"));
    }

    #[test]
    fn actions_before_reveal_are_ignored() {
        let store = MemoryStorage::default();
        let scheduler = ManualScheduler::default();
        let banner = mount(&store, &scheduler);

        banner.accept_all().unwrap();
        banner.toggle_details();
        assert_eq!(banner.state(), BannerState::PendingReveal);
        assert_eq!(store.write_attempts(), 0);
    }

    #[test]
    fn failed_write_still_hides_banner() {
        let store = MemoryStorage::read_only();
        let (banner, _) = mount_visible(&store);

        let err = banner.accept_all().unwrap_err();
        assert!(matches!(err, StorageError::Write { .. }));
        assert_eq!(banner.state(), BannerState::Resolved);
        assert_eq!(store.value(COOKIE_CONSENT_KEY), None);
    }

    #[test]
    fn second_resolution_is_a_no_op() {
        let store = MemoryStorage::default();
        let (banner, _) = mount_visible(&store);
        banner.accept_all().unwrap();
        banner.close().unwrap();

        assert_eq!(store.write_attempts(), 1);
        assert_eq!(store.value(COOKIE_CONSENT_KEY).as_deref(), Some("accepted"));
    }

    #[test]
    fn teardown_cancels_reveal() {
        let store = MemoryStorage::default();
        let scheduler = ManualScheduler::default();
        let banner = mount(&store, &scheduler);

        banner.teardown();
        scheduler.advance(5_000);
        assert_eq!(banner.state(), BannerState::Hidden);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn notifies_each_transition() {
        let store = MemoryStorage::default();
        let scheduler = ManualScheduler::default();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let banner = ConsentBanner::mount(
            Rc::new(store.clone()),
            &scheduler,
            &Timings::default(),
            move |state| sink.borrow_mut().push(state),
        );

        scheduler.advance(3_000);
        banner.toggle_details();
        banner.close().unwrap();

        assert_eq!(
            *seen.borrow(),
            vec![
                BannerState::VisibleSummary,
                BannerState::VisibleDetailed,
                BannerState::Resolved
            ]
        );
    }

    #[test]
    fn choice_round_trips_through_its_stored_form() {
        for choice in [ConsentChoice::Accepted, ConsentChoice::Rejected, ConsentChoice::Dismissed] {
            assert_eq!(choice.as_str().parse::<ConsentChoice>(), Ok(choice));
        }
        assert_eq!(
            "maybe".parse::<ConsentChoice>(),
            Err(UnknownChoice("maybe".into()))
        );
    }
}
