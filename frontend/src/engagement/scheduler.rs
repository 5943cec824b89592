use gloo_timers::callback::Timeout;

/// Handle to a pending timer or a live subscription.
///
/// Cancelling happens on [`Cancellable::cancel`] or on drop, whichever comes
/// first. Cancelling something that already fired is a no-op.
#[must_use = "dropping a Cancellable cancels it"]
pub struct Cancellable {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Cancellable {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// A handle with nothing behind it.
    pub fn noop() -> Self {
        Self { cancel: None }
    }

    pub fn cancel(mut self) {
        self.run();
    }

    fn run(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Cancellable {
    fn drop(&mut self) {
        self.run();
    }
}

impl std::fmt::Debug for Cancellable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cancellable")
            .field("armed", &self.cancel.is_some())
            .finish()
    }
}

/// Runs a task once after a delay.
pub trait Scheduler {
    fn after(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Cancellable;
}

/// `setTimeout` via gloo. Dropping the `Timeout` clears it.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn after(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Cancellable {
        let timeout = Timeout::new(delay_ms, task);
        Cancellable::new(move || drop(timeout))
    }
}
