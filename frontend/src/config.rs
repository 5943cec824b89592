use log::Level;

pub const FORM_SUBMITTED_KEY: &str = "ather-form-submitted";
pub const COOKIE_CONSENT_KEY: &str = "ather-cookie-consent";
pub const FORM_SUBMITTED_MARKER: &str = "true";

/// Delays that drive the page, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    pub dwell_ms: u32,
    pub consent_reveal_ms: u32,
    pub submit_latency_ms: u32,
    pub carousel_interval_ms: u32,
    pub toast_ms: u32,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            dwell_ms: 30_000,
            consent_reveal_ms: 3_000,
            submit_latency_ms: 2_000,
            carousel_interval_ms: 5_000,
            toast_ms: 5_000,
        }
    }
}

pub fn timings() -> Timings {
    Timings::default()
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
