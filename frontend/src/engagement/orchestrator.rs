use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, info};

use super::scheduler::{Cancellable, Scheduler};
use super::storage::{flag_present, KeyValueStore};
use super::unload::UnloadSignal;
use crate::config::{Timings, FORM_SUBMITTED_KEY};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptSource {
    Dwell,
    ExitIntent,
    UserAction,
}

struct Inner {
    store: Rc<dyn KeyValueStore>,
    dialog_open: bool,
    prompt_requested: bool,
    dwell: Option<Cancellable>,
    exit_intent: Option<Cancellable>,
    dwell_spent: bool,
    exit_intent_spent: bool,
    torn_down: bool,
    on_change: Rc<dyn Fn(bool)>,
}

impl Inner {
    /// Opens the dialog for a pending request. A request made while the
    /// dialog is open stays pending until it closes.
    fn reconcile(&mut self) -> bool {
        if !self.prompt_requested || self.dialog_open {
            return false;
        }
        self.prompt_requested = false;
        self.dialog_open = true;
        true
    }

    fn is_armed(&self) -> bool {
        (self.dwell.is_some() && !self.dwell_spent)
            || (self.exit_intent.is_some() && !self.exit_intent_spent)
    }

    fn disarm(&mut self) -> (Option<Cancellable>, Option<Cancellable>) {
        (self.dwell.take(), self.exit_intent.take())
    }
}

/// Decides when the lead dialog opens during one page view.
///
/// Reads `ather-form-submitted` once at mount. If absent, a dwell timer and
/// an exit-intent listener are armed; both funnel into the same request so the
/// dialog never opens twice for one burst. Dropping the orchestrator (or
/// calling [`teardown`](Self::teardown)) cancels both.
pub struct EngagementOrchestrator {
    inner: Rc<RefCell<Inner>>,
}

impl EngagementOrchestrator {
    pub fn mount(
        store: Rc<dyn KeyValueStore>,
        scheduler: &dyn Scheduler,
        unload: &dyn UnloadSignal,
        timings: &Timings,
        on_change: impl Fn(bool) + 'static,
    ) -> Self {
        let already_submitted = flag_present(store.as_ref(), FORM_SUBMITTED_KEY);
        let inner = Rc::new(RefCell::new(Inner {
            store,
            dialog_open: false,
            prompt_requested: false,
            dwell: None,
            exit_intent: None,
            dwell_spent: false,
            exit_intent_spent: false,
            torn_down: false,
            on_change: Rc::new(on_change),
        }));

        if already_submitted {
            info!("Lead form already submitted, not scheduling the prompt");
            return Self { inner };
        }

        let weak = Rc::downgrade(&inner);
        let dwell = scheduler.after(
            timings.dwell_ms,
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    Self::trigger(&inner, PromptSource::Dwell);
                }
            }),
        );

        let weak = Rc::downgrade(&inner);
        let exit_intent = unload.subscribe(Box::new(move || {
            if let Some(inner) = weak.upgrade() {
                Self::trigger(&inner, PromptSource::ExitIntent);
            }
        }));

        {
            let mut state = inner.borrow_mut();
            state.dwell = Some(dwell);
            state.exit_intent = Some(exit_intent);
        }
        info!("Lead prompt armed, dwell {}ms", timings.dwell_ms);

        Self { inner }
    }

    fn trigger(inner: &Rc<RefCell<Inner>>, source: PromptSource) {
        let opened = {
            let mut state = inner.borrow_mut();
            if state.torn_down {
                return;
            }
            match source {
                PromptSource::Dwell => {
                    if state.dwell_spent {
                        return;
                    }
                    state.dwell_spent = true;
                }
                PromptSource::ExitIntent => {
                    if state.exit_intent_spent || state.dialog_open {
                        return;
                    }
                    state.exit_intent_spent = true;
                }
                PromptSource::UserAction => {
                    if state.dialog_open {
                        return;
                    }
                }
            }
            state.prompt_requested = true;
            state.reconcile()
        };

        if opened {
            debug!("Lead dialog opened by {:?}", source);
            Self::emit(inner, true);
        }
    }

    fn emit(inner: &Rc<RefCell<Inner>>, open: bool) {
        let on_change = inner.borrow().on_change.clone();
        on_change(open);
    }

    /// Opening an open dialog does nothing.
    pub fn open_dialog(&self) {
        Self::trigger(&self.inner, PromptSource::UserAction);
    }

    /// Closes the dialog. A prompt that came due while it was open reopens
    /// it right away, unless a submission has been recorded in the meantime.
    pub fn close_dialog(&self) {
        let (was_open, reopen, disarmed) = {
            let mut state = self.inner.borrow_mut();
            let was_open = std::mem::replace(&mut state.dialog_open, false);
            let submitted = (state.is_armed() || state.prompt_requested)
                && flag_present(state.store.as_ref(), FORM_SUBMITTED_KEY);
            let disarmed = if submitted {
                info!("Lead form submitted, disarming the prompt");
                state.prompt_requested = false;
                Some(state.disarm())
            } else {
                None
            };
            let reopen = was_open && !state.torn_down && state.reconcile();
            (was_open, reopen, disarmed)
        };
        drop(disarmed);

        if was_open {
            Self::emit(&self.inner, false);
        }
        if reopen {
            debug!("Lead dialog reopened for a prompt that came due while open");
            Self::emit(&self.inner, true);
        }
    }

    pub fn is_dialog_open(&self) -> bool {
        self.inner.borrow().dialog_open
    }

    /// Whether an automatic trigger can still open the dialog.
    pub fn is_armed(&self) -> bool {
        let state = self.inner.borrow();
        !state.torn_down && state.is_armed()
    }

    pub fn teardown(&self) {
        let handles = {
            let mut state = self.inner.borrow_mut();
            state.torn_down = true;
            state.disarm()
        };
        drop(handles);
        debug!("Engagement orchestrator torn down");
    }
}
