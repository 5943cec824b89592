//! In-memory stand-ins for the browser ports.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use super::notice::{Notice, Notifier};
use super::scheduler::{Cancellable, Scheduler};
use super::storage::{KeyValueStore, StorageError};
use super::unload::UnloadSignal;

#[derive(Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
    unreadable: Rc<Cell<bool>>,
    read_only: Rc<Cell<bool>>,
    write_attempts: Rc<Cell<usize>>,
}

impl MemoryStorage {
    /// Every read comes back empty, as when storage access throws.
    pub fn unreadable() -> Self {
        let store = Self::default();
        store.unreadable.set(true);
        store
    }

    /// Every write fails, as when the quota is exhausted.
    pub fn read_only() -> Self {
        let store = Self::default();
        store.read_only.set(true);
        store
    }

    pub fn insert(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    /// Raw contents, bypassing the unreadable switch.
    pub fn value(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    pub fn write_attempts(&self) -> usize {
        self.write_attempts.get()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        if self.unreadable.get() {
            return None;
        }
        self.value(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.write_attempts.set(self.write_attempts.get() + 1);
        if self.read_only.get() {
            return Err(StorageError::Write {
                key: key.to_string(),
                reason: "QuotaExceededError".to_string(),
            });
        }
        self.insert(key, value);
        Ok(())
    }
}

struct PendingTask {
    id: u64,
    due: u64,
    task: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct VirtualClock {
    now: u64,
    next_id: u64,
    pending: Vec<PendingTask>,
}

/// Virtual time. Tasks run only inside [`ManualScheduler::advance`].
#[derive(Clone, Default)]
pub struct ManualScheduler {
    clock: Rc<RefCell<VirtualClock>>,
}

impl ManualScheduler {
    pub fn now(&self) -> u64 {
        self.clock.borrow().now
    }

    pub fn pending(&self) -> usize {
        self.clock.borrow().pending.len()
    }

    /// Moves time forward, running due tasks in deadline order.
    pub fn advance(&self, ms: u64) {
        let target = self.now() + ms;
        loop {
            // The borrow is released before the task runs so tasks may
            // schedule or cancel freely.
            let next = {
                let mut clock = self.clock.borrow_mut();
                let due = clock
                    .pending
                    .iter()
                    .enumerate()
                    .filter(|(_, p)| p.due <= target)
                    .min_by_key(|(_, p)| (p.due, p.id))
                    .map(|(i, _)| i);
                match due {
                    Some(i) => {
                        let task = clock.pending.remove(i);
                        clock.now = task.due;
                        Some(task.task)
                    }
                    None => {
                        clock.now = target;
                        None
                    }
                }
            };
            match next {
                Some(task) => task(),
                None => break,
            }
        }
    }
}

impl Scheduler for ManualScheduler {
    fn after(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Cancellable {
        let id = {
            let mut clock = self.clock.borrow_mut();
            let id = clock.next_id;
            clock.next_id += 1;
            let due = clock.now + u64::from(delay_ms);
            clock.pending.push(PendingTask { id, due, task });
            id
        };
        let clock = Rc::downgrade(&self.clock);
        Cancellable::new(move || {
            if let Some(clock) = clock.upgrade() {
                clock.borrow_mut().pending.retain(|p| p.id != id);
            }
        })
    }
}

type Listener = Rc<RefCell<Box<dyn FnMut()>>>;

#[derive(Clone, Default)]
pub struct ManualUnload {
    listeners: Rc<RefCell<Vec<(u64, Listener)>>>,
    next_id: Rc<Cell<u64>>,
}

impl ManualUnload {
    pub fn fire(&self) {
        let current: Vec<Listener> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();
        for listener in current {
            (listener.borrow_mut())();
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

impl UnloadSignal for ManualUnload {
    fn subscribe(&self, listener: Box<dyn FnMut()>) -> Cancellable {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.listeners
            .borrow_mut()
            .push((id, Rc::new(RefCell::new(listener))));
        let listeners = Rc::downgrade(&self.listeners);
        Cancellable::new(move || {
            if let Some(listeners) = listeners.upgrade() {
                listeners.borrow_mut().retain(|(i, _)| *i != id);
            }
        })
    }
}

#[derive(Clone, Default)]
pub struct RecordingNotifier {
    notices: Rc<RefCell<Vec<Notice>>>,
}

impl RecordingNotifier {
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.borrow_mut().push(notice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tasks_run_in_deadline_order_and_not_early() {
        let scheduler = ManualScheduler::default();
        let log = Rc::new(RefCell::new(Vec::new()));

        let first = log.clone();
        let _late = scheduler.after(30, Box::new(move || first.borrow_mut().push("late")));
        let second = log.clone();
        let _early = scheduler.after(3, Box::new(move || second.borrow_mut().push("early")));

        scheduler.advance(2);
        assert!(log.borrow().is_empty());

        scheduler.advance(28);
        assert_eq!(*log.borrow(), vec!["early", "late"]);
        assert_eq!(scheduler.now(), 30);
    }

    #[test]
    fn cancelled_task_never_runs() {
        let scheduler = ManualScheduler::default();
        let ran = Rc::new(Cell::new(false));
        let flag = ran.clone();
        let handle = scheduler.after(5, Box::new(move || flag.set(true)));
        handle.cancel();
        scheduler.advance(10);
        assert!(!ran.get());
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn unsubscribed_listener_is_not_called() {
        let unload = ManualUnload::default();
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        let sub = unload.subscribe(Box::new(move || counter.set(counter.get() + 1)));
        unload.fire();
        drop(sub);
        unload.fire();
        assert_eq!(hits.get(), 1);
        assert_eq!(unload.listener_count(), 0);
    }
}
