//! Page-level engagement: when the lead dialog and the cookie banner show up,
//! and what gets remembered across visits.
//!
//! The controllers never reach for browser globals. Storage, timers and the
//! unload signal come in through the ports in [`storage`], [`scheduler`] and
//! [`unload`], each of which also holds its browser adapter, so the same
//! controllers run against the page and against the fakes in `testing`.

pub mod consent;
pub mod lead_form;
pub mod notice;
pub mod orchestrator;
pub mod scheduler;
pub mod storage;
pub mod unload;

#[cfg(test)]
pub mod testing;

pub use consent::{BannerState, ConsentBanner};
pub use lead_form::{DraftEdit, LeadForm, ModelInterest, PrimaryInterest};
pub use notice::{Notice, NoticeKind};
pub use orchestrator::EngagementOrchestrator;
pub use scheduler::BrowserScheduler;
pub use storage::{BrowserStorage, StorageError};
pub use unload::BrowserUnloadSignal;
