use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use log::{debug, info, warn};
use serde::Serialize;
use thiserror::Error;

use super::consent::UnknownChoice;
use super::notice::{Notice, Notifier};
use super::scheduler::{Cancellable, Scheduler};
use super::storage::KeyValueStore;
use crate::config::{Timings, FORM_SUBMITTED_KEY, FORM_SUBMITTED_MARKER};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ModelInterest {
    #[serde(rename = "rizta")]
    Rizta,
    #[serde(rename = "450s")]
    Ather450S,
    #[serde(rename = "450apex")]
    Ather450Apex,
    #[serde(rename = "all")]
    CompareAll,
}

impl ModelInterest {
    pub const ALL: [ModelInterest; 4] = [
        ModelInterest::Rizta,
        ModelInterest::Ather450S,
        ModelInterest::Ather450Apex,
        ModelInterest::CompareAll,
    ];

    pub fn value(self) -> &'static str {
        match self {
            ModelInterest::Rizta => "rizta",
            ModelInterest::Ather450S => "450s",
            ModelInterest::Ather450Apex => "450apex",
            ModelInterest::CompareAll => "all",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ModelInterest::Rizta => "Ather Rizta",
            ModelInterest::Ather450S => "Ather 450S",
            ModelInterest::Ather450Apex => "Ather 450 Apex",
            ModelInterest::CompareAll => "Compare All Models",
        }
    }
}

impl FromStr for ModelInterest {
    type Err = UnknownChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ModelInterest::ALL
            .into_iter()
            .find(|m| m.value() == s)
            .ok_or_else(|| UnknownChoice(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PrimaryInterest {
    TestRide,
    Purchase,
    Information,
    Charging,
    Accessories,
}

impl PrimaryInterest {
    pub const ALL: [PrimaryInterest; 5] = [
        PrimaryInterest::TestRide,
        PrimaryInterest::Purchase,
        PrimaryInterest::Information,
        PrimaryInterest::Charging,
        PrimaryInterest::Accessories,
    ];

    pub fn value(self) -> &'static str {
        match self {
            PrimaryInterest::TestRide => "test-ride",
            PrimaryInterest::Purchase => "purchase",
            PrimaryInterest::Information => "information",
            PrimaryInterest::Charging => "charging",
            PrimaryInterest::Accessories => "accessories",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PrimaryInterest::TestRide => "Test Ride",
            PrimaryInterest::Purchase => "Ready to Purchase",
            PrimaryInterest::Information => "More Information",
            PrimaryInterest::Charging => "Charging Solutions",
            PrimaryInterest::Accessories => "Accessories",
        }
    }
}

impl FromStr for PrimaryInterest {
    type Err = UnknownChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PrimaryInterest::ALL
            .into_iter()
            .find(|i| i.value() == s)
            .ok_or_else(|| UnknownChoice(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    Name,
    Email,
    Phone,
    Terms,
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RequiredField::Name => "name",
            RequiredField::Email => "email",
            RequiredField::Phone => "phone",
            RequiredField::Terms => "terms agreement",
        })
    }
}

fn field_list(fields: &[RequiredField]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("missing required fields: {}", field_list(.missing))]
pub struct ValidationError {
    pub missing: Vec<RequiredField>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadFormDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub model: Option<ModelInterest>,
    pub interest: Option<PrimaryInterest>,
    pub agreed_to_terms: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftEdit {
    Name(String),
    Email(String),
    Phone(String),
    City(String),
    Model(Option<ModelInterest>),
    Interest(Option<PrimaryInterest>),
    AgreedToTerms(bool),
}

impl LeadFormDraft {
    pub fn apply(&mut self, edit: DraftEdit) {
        match edit {
            DraftEdit::Name(v) => self.name = v,
            DraftEdit::Email(v) => self.email = v,
            DraftEdit::Phone(v) => self.phone = v,
            DraftEdit::City(v) => self.city = v,
            DraftEdit::Model(v) => self.model = v,
            DraftEdit::Interest(v) => self.interest = v,
            DraftEdit::AgreedToTerms(v) => self.agreed_to_terms = v,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let blank = |s: &str| s.trim().is_empty();
        let mut missing = Vec::new();
        if blank(&self.name) {
            missing.push(RequiredField::Name);
        }
        if blank(&self.email) {
            missing.push(RequiredField::Email);
        }
        if blank(&self.phone) {
            missing.push(RequiredField::Phone);
        }
        if !self.agreed_to_terms {
            missing.push(RequiredField::Terms);
        }
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { missing })
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitPhase {
    Idle,
    Submitting,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Accepted; completes after the simulated latency.
    Started,
    Rejected(ValidationError),
    /// A submission is already in flight.
    Busy,
}

struct Inner {
    draft: LeadFormDraft,
    phase: SubmitPhase,
    pending: Option<Cancellable>,
    store: Rc<dyn KeyValueStore>,
    notifier: Rc<dyn Notifier>,
    on_close: Rc<dyn Fn()>,
    on_change: Rc<dyn Fn()>,
}

/// The test-ride request form behind the lead dialog.
///
/// Validates locally, then fakes a network round trip. While that is in
/// flight both submit and cancel are refused. A completed submission marks
/// `ather-form-submitted`, clears the draft and closes the dialog.
pub struct LeadForm {
    inner: Rc<RefCell<Inner>>,
    scheduler: Rc<dyn Scheduler>,
    latency_ms: u32,
}

impl LeadForm {
    pub fn new(
        store: Rc<dyn KeyValueStore>,
        scheduler: Rc<dyn Scheduler>,
        notifier: Rc<dyn Notifier>,
        timings: &Timings,
        on_close: impl Fn() + 'static,
        on_change: impl Fn() + 'static,
    ) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                draft: LeadFormDraft::default(),
                phase: SubmitPhase::Idle,
                pending: None,
                store,
                notifier,
                on_close: Rc::new(on_close),
                on_change: Rc::new(on_change),
            })),
            scheduler,
            latency_ms: timings.submit_latency_ms,
        }
    }

    pub fn draft(&self) -> LeadFormDraft {
        self.inner.borrow().draft.clone()
    }

    pub fn phase(&self) -> SubmitPhase {
        self.inner.borrow().phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase() == SubmitPhase::Submitting
    }

    pub fn edit(&self, edit: DraftEdit) {
        let on_change = {
            let mut state = self.inner.borrow_mut();
            state.draft.apply(edit);
            state.on_change.clone()
        };
        on_change();
    }

    pub fn submit(&self) -> SubmitOutcome {
        let (draft, notifier) = {
            let state = self.inner.borrow();
            if state.phase == SubmitPhase::Submitting {
                debug!("Submit ignored, already submitting");
                return SubmitOutcome::Busy;
            }
            (state.draft.clone(), state.notifier.clone())
        };

        if let Err(e) = draft.validate() {
            info!("Lead form rejected: {}", e);
            notifier.notify(Notice::destructive(
                "Please fill all required fields",
                "Make sure to complete all required information and agree to terms.",
            ));
            return SubmitOutcome::Rejected(e);
        }

        match serde_json::to_string(&draft) {
            Ok(payload) => debug!("Submitting lead {}", payload),
            Err(e) => warn!("Could not serialize lead: {}", e),
        }

        let weak = Rc::downgrade(&self.inner);
        let pending = self.scheduler.after(
            self.latency_ms,
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    Self::complete(&inner);
                }
            }),
        );

        let (previous, on_change) = {
            let mut state = self.inner.borrow_mut();
            state.phase = SubmitPhase::Submitting;
            (state.pending.replace(pending), state.on_change.clone())
        };
        drop(previous);
        on_change();
        SubmitOutcome::Started
    }

    fn complete(inner: &Rc<RefCell<Inner>>) {
        let (written, notifier, on_close, on_change) = {
            let mut state = inner.borrow_mut();
            if state.phase != SubmitPhase::Submitting {
                return;
            }
            state.phase = SubmitPhase::Idle;
            state.draft = LeadFormDraft::default();
            let written = state.store.set(FORM_SUBMITTED_KEY, FORM_SUBMITTED_MARKER);
            (
                written,
                state.notifier.clone(),
                state.on_close.clone(),
                state.on_change.clone(),
            )
        };

        if let Err(e) = written {
            warn!("Submission flag not persisted: {}", e);
        }
        info!("Lead submitted");
        notifier.notify(Notice::info(
            "Thank you for your interest!",
            "Our team will contact you within 24 hours to schedule your test ride.",
        ));
        on_close();
        on_change();
    }

    /// Discards the draft and closes. Refused while submitting.
    pub fn cancel(&self) -> bool {
        let callbacks = {
            let mut state = self.inner.borrow_mut();
            if state.phase == SubmitPhase::Submitting {
                return false;
            }
            state.draft = LeadFormDraft::default();
            (state.on_close.clone(), state.on_change.clone())
        };
        let (on_close, on_change) = callbacks;
        on_close();
        on_change();
        true
    }

    /// Abandons an in-flight submission.
    pub fn teardown(&self) {
        let pending = {
            let mut state = self.inner.borrow_mut();
            state.phase = SubmitPhase::Idle;
            state.pending.take()
        };
        drop(pending);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engagement::notice::NoticeKind;
    use crate::engagement::orchestrator::EngagementOrchestrator;
    use crate::engagement::testing::{ManualScheduler, ManualUnload, MemoryStorage, RecordingNotifier};
    use std::cell::Cell;

    struct Harness {
        store: MemoryStorage,
        scheduler: ManualScheduler,
        notifier: RecordingNotifier,
        closes: Rc<Cell<usize>>,
    }

    impl Harness {
        fn new(store: MemoryStorage) -> Self {
            Self {
                store,
                scheduler: ManualScheduler::default(),
                notifier: RecordingNotifier::default(),
                closes: Rc::new(Cell::new(0)),
            }
        }

        fn form(&self) -> LeadForm {
            let closes = self.closes.clone();
            LeadForm::new(
                Rc::new(self.store.clone()),
                Rc::new(self.scheduler.clone()),
                Rc::new(self.notifier.clone()),
                &Timings::default(),
                move || closes.set(closes.get() + 1),
                || {},
            )
        }
    }

    fn fill(form: &LeadForm) {
        form.edit(DraftEdit::Name("A".into()));
        form.edit(DraftEdit::Email("a@b.com".into()));
        form.edit(DraftEdit::Phone("123".into()));
        form.edit(DraftEdit::AgreedToTerms(true));
    }

    #[test]
    fn each_missing_requirement_blocks_submission() {
        let blanks = [
            (DraftEdit::Name(String::new()), RequiredField::Name),
            (DraftEdit::Email("  ".into()), RequiredField::Email),
            (DraftEdit::Phone(String::new()), RequiredField::Phone),
            (DraftEdit::AgreedToTerms(false), RequiredField::Terms),
        ];

        for (blank, field) in blanks {
            let h = Harness::new(MemoryStorage::default());
            let form = h.form();
            fill(&form);
            form.edit(DraftEdit::City("Pune".into()));
            form.edit(blank);
            let before = form.draft();

            let outcome = form.submit();

            assert_eq!(
                outcome,
                SubmitOutcome::Rejected(ValidationError { missing: vec![field] })
            );
            assert_eq!(form.phase(), SubmitPhase::Idle);
            assert_eq!(form.draft(), before);
            h.scheduler.advance(5_000);
            assert_eq!(h.store.value(FORM_SUBMITTED_KEY), None);
            assert_eq!(h.closes.get(), 0);
            let notices = h.notifier.notices();
            assert_eq!(notices.len(), 1);
            assert_eq!(notices[0].kind, NoticeKind::Destructive);
        }
    }

    #[test]
    fn successful_submission_completes_after_latency() {
        let h = Harness::new(MemoryStorage::default());
        let form = h.form();
        fill(&form);
        form.edit(DraftEdit::Model(Some(ModelInterest::Ather450Apex)));

        assert_eq!(form.submit(), SubmitOutcome::Started);
        assert!(form.is_submitting());

        h.scheduler.advance(1_999);
        assert_eq!(h.store.value(FORM_SUBMITTED_KEY), None);
        assert_eq!(h.closes.get(), 0);

        h.scheduler.advance(1);
        assert_eq!(form.phase(), SubmitPhase::Idle);
        assert_eq!(form.draft(), LeadFormDraft::default());
        assert_eq!(h.store.value(FORM_SUBMITTED_KEY).as_deref(), Some(FORM_SUBMITTED_MARKER));
        assert_eq!(h.closes.get(), 1);
        let notices = h.notifier.notices();
        assert_eq!(notices.last().map(|n| n.kind), Some(NoticeKind::Info));
    }

    #[test]
    fn rapid_double_submit_completes_once() {
        let h = Harness::new(MemoryStorage::default());
        let form = h.form();
        fill(&form);

        assert_eq!(form.submit(), SubmitOutcome::Started);
        assert_eq!(form.submit(), SubmitOutcome::Busy);

        h.scheduler.advance(10_000);
        assert_eq!(h.closes.get(), 1);
        assert_eq!(h.store.write_attempts(), 1);
        assert_eq!(h.notifier.notices().len(), 1);
    }

    #[test]
    fn cancel_is_refused_while_submitting() {
        let h = Harness::new(MemoryStorage::default());
        let form = h.form();
        fill(&form);
        form.submit();

        assert!(!form.cancel());
        assert!(form.is_submitting());
        assert_eq!(h.closes.get(), 0);
    }

    #[test]
    fn cancel_discards_draft_and_closes() {
        let h = Harness::new(MemoryStorage::default());
        let form = h.form();
        fill(&form);

        assert!(form.cancel());
        assert_eq!(form.draft(), LeadFormDraft::default());
        assert_eq!(h.closes.get(), 1);
        assert_eq!(h.store.write_attempts(), 0);
    }

    #[test]
    fn failed_flag_write_still_closes() {
        let h = Harness::new(MemoryStorage::read_only());
        let form = h.form();
        fill(&form);
        form.submit();
        h.scheduler.advance(2_000);

        assert_eq!(h.closes.get(), 1);
        assert_eq!(form.draft(), LeadFormDraft::default());
    }

    #[test]
    fn teardown_abandons_submission() {
        let h = Harness::new(MemoryStorage::default());
        let form = h.form();
        fill(&form);
        form.submit();
        form.teardown();
        h.scheduler.advance(5_000);

        assert_eq!(h.store.value(FORM_SUBMITTED_KEY), None);
        assert_eq!(h.closes.get(), 0);
    }

    #[test]
    fn dwell_prompt_then_submission_closes_dialog_and_marks_visitor() {
        let store = MemoryStorage::default();
        let scheduler = ManualScheduler::default();
        let unload = ManualUnload::default();
        let notifier = RecordingNotifier::default();
        let timings = Timings::default();

        let engine = Rc::new(EngagementOrchestrator::mount(
            Rc::new(store.clone()),
            &scheduler,
            &unload,
            &timings,
            |_| {},
        ));
        let closer = engine.clone();
        let form = LeadForm::new(
            Rc::new(store.clone()),
            Rc::new(scheduler.clone()),
            Rc::new(notifier.clone()),
            &timings,
            move || closer.close_dialog(),
            || {},
        );

        scheduler.advance(30_000);
        assert!(engine.is_dialog_open());
        assert_eq!(store.value(FORM_SUBMITTED_KEY), None);

        fill(&form);
        assert_eq!(form.submit(), SubmitOutcome::Started);
        scheduler.advance(2_000);

        assert!(!engine.is_dialog_open());
        assert!(store.value(FORM_SUBMITTED_KEY).is_some());
        assert!(!engine.is_armed());

        let reloaded = EngagementOrchestrator::mount(
            Rc::new(store.clone()),
            &scheduler,
            &unload,
            &timings,
            |_| {},
        );
        assert!(!reloaded.is_armed());
    }

    #[test]
    fn draft_serializes_with_select_values() {
        let draft = LeadFormDraft {
            name: "A".into(),
            model: Some(ModelInterest::Ather450S),
            interest: Some(PrimaryInterest::TestRide),
            agreed_to_terms: true,
            ..LeadFormDraft::default()
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["model"], "450s");
        assert_eq!(json["interest"], "test-ride");
        assert_eq!(json["agreedToTerms"], true);
    }

    #[test]
    fn select_values_parse() {
        assert_eq!("450apex".parse::<ModelInterest>(), Ok(ModelInterest::Ather450Apex));
        assert_eq!("charging".parse::<PrimaryInterest>(), Ok(PrimaryInterest::Charging));
        assert!("scooter".parse::<ModelInterest>().is_err());
    }

    #[test]
    fn validation_error_lists_fields() {
        let err = LeadFormDraft::default().validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "missing required fields: name, email, phone, terms agreement"
        );
    }
}
