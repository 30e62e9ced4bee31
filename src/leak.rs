use crate::config::DEFAULT_MAX_LISTENERS;
use crate::error::LeakWarning;

/// Threshold check run after every registration.
///
/// Lives inside the registry so the threshold is scoped to one emitter and
/// read under the same lock as the live count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeakHeuristic {
    max_listeners: usize,
}

impl Default for LeakHeuristic {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_LISTENERS)
    }
}

impl LeakHeuristic {
    pub fn new(max_listeners: usize) -> Self {
        Self { max_listeners }
    }

    pub fn max_listeners(&self) -> usize {
        self.max_listeners
    }

    pub fn set_max_listeners(&mut self, max: usize) {
        self.max_listeners = max;
    }

    /// Returns a warning when `live` exceeds the threshold. Every
    /// registration above the threshold warns again.
    pub fn check(&self, event: &str, live: usize) -> Option<LeakWarning> {
        (live > self.max_listeners).then(|| LeakWarning {
            event: event.to_string(),
            count: live,
            max: self.max_listeners,
        })
    }
}
