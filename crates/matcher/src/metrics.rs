use std::sync::{Arc, OnceLock, RwLock};
use std::time::{Duration, Instant};

/// Metrics observer for set operations.
pub trait MatchMetrics: Send + Sync {
    /// Called after every `add`; `added` is false for skipped duplicates.
    fn record_add(&self, latency: Duration, added: bool);
    /// Called after every `get`/`ranked` with the number of hits returned.
    fn record_get(&self, latency: Duration, results: usize);
}

/// Install or clear the global match metrics recorder.
pub fn set_match_metrics(recorder: Option<Arc<dyn MatchMetrics>>) {
    let lock = metrics_lock();
    let mut guard = lock.write().expect("match metrics lock poisoned");
    *guard = recorder;
}

fn metrics_lock() -> &'static RwLock<Option<Arc<dyn MatchMetrics>>> {
    static METRICS: OnceLock<RwLock<Option<Arc<dyn MatchMetrics>>>> = OnceLock::new();
    METRICS.get_or_init(|| RwLock::new(None))
}

fn metrics_recorder() -> Option<Arc<dyn MatchMetrics>> {
    let guard = metrics_lock()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.clone()
}

pub(crate) struct MetricsSpan {
    recorder: Arc<dyn MatchMetrics>,
    start: Instant,
}

impl MetricsSpan {
    pub(crate) fn start() -> Option<Self> {
        metrics_recorder().map(|recorder| Self {
            recorder,
            start: Instant::now(),
        })
    }

    pub(crate) fn record_add(self, added: bool) {
        self.recorder.record_add(self.start.elapsed(), added);
    }

    pub(crate) fn record_get(self, results: usize) {
        self.recorder.record_get(self.start.elapsed(), results);
    }
}
