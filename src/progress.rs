// src/progress.rs
use tracing::{debug, info};

/// Lightweight progress reporting used by long-running operations (collect/annotate).
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start of a stage with the total number of items (if known).
    fn begin(&mut self, _stage: &str, _total: usize) {}

    /// A batch is about to start. `index` is 0-based.
    fn batch(&mut self, _index: usize, _count: usize) {}

    /// Called when one logical unit completes (a page was fetched and read).
    fn item_done(&mut self, _url: &str) {}

    /// Called when one logical unit was given up on.
    fn item_failed(&mut self, _url: &str, _reason: &str) {}

    /// Called at the end of a stage, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Progress as log lines. Per-item events only show up at `debug`.
#[derive(Default)]
pub struct LogProgress {
    stage: String,
    total: usize,
    done: usize,
    failed: usize,
}

impl Progress for LogProgress {
    fn begin(&mut self, stage: &str, total: usize) {
        self.stage = s!(stage);
        self.total = total;
        self.done = 0;
        self.failed = 0;
        info!(stage, total, "started");
    }

    fn batch(&mut self, index: usize, count: usize) {
        info!(stage = %self.stage, batch = index + 1, count, done = self.done, total = self.total, "batch");
    }

    fn item_done(&mut self, url: &str) {
        self.done += 1;
        debug!(stage = %self.stage, url, "done");
    }

    fn item_failed(&mut self, url: &str, reason: &str) {
        self.failed += 1;
        debug!(stage = %self.stage, url, reason, "failed");
    }

    fn finish(&mut self) {
        info!(stage = %self.stage, done = self.done, failed = self.failed, "finished");
    }
}
