//! Emitter configuration.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Default leak-warning threshold, matching Node's `EventEmitter`.
pub const DEFAULT_MAX_LISTENERS: usize = 10;

/// Settings applied when an [`EventEmitter`](crate::EventEmitter) is created.
///
/// Missing fields fall back to their defaults when deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EmitterConfig {
    /// Live listener count above which a [`LeakWarning`](crate::LeakWarning)
    /// is raised. `usize::MAX` effectively disables the warning.
    pub max_listeners: usize,
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self {
            max_listeners: DEFAULT_MAX_LISTENERS,
        }
    }
}

impl EmitterConfig {
    /// Parse a JSON document such as `{"maxListeners": 50}`.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
