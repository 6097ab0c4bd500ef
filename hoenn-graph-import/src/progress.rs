//! Pipeline progress reporting.

/// Trait for receiving pipeline progress updates.
pub trait ImportProgress {
    /// Called when a phase starts (e.g., "Importing raw location data...").
    fn on_phase(&self, message: &str);

    /// Called when a phase has produced `count` records of `label`.
    fn on_count(&self, label: &str, count: usize);

    /// Called when the pipeline is complete.
    fn on_complete(&self, message: &str);
}

/// A no-op progress reporter that discards all updates.
pub struct SilentProgress;

impl ImportProgress for SilentProgress {
    fn on_phase(&self, _message: &str) {}
    fn on_count(&self, _label: &str, _count: usize) {}
    fn on_complete(&self, _message: &str) {}
}

/// A progress reporter that logs to the `log` crate.
pub struct LogProgress;

impl ImportProgress for LogProgress {
    fn on_phase(&self, message: &str) {
        log::info!("{}", message);
    }

    fn on_count(&self, label: &str, count: usize) {
        log::info!("  {} {}", count, label);
    }

    fn on_complete(&self, message: &str) {
        log::info!("{}", message);
    }
}
