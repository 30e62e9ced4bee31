use std::sync::Arc;

use crate::{
    config::EmitterConfig,
    diagnostics::Diagnostics,
    error::{LeakWarning, ListenerError},
};

use super::EventEmitter;

/// Fluent construction of an [`EventEmitter`] with configuration and
/// diagnostics hooks.
#[derive(Debug, Default)]
pub struct EmitterBuilder {
    config: EmitterConfig,
    diagnostics: Diagnostics,
}

impl EmitterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: EmitterConfig) -> Self {
        self.config = config;
        self
    }

    pub fn max_listeners(mut self, max: usize) -> Self {
        self.config.max_listeners = max;
        self
    }

    /// Observe every listener fault (signature mismatch, returned error,
    /// panic). Runs on the emitting thread with no lock held.
    pub fn on_listener_error<F>(mut self, hook: F) -> Self
    where
        F: Fn(&ListenerError) + Send + Sync + 'static,
    {
        self.diagnostics.on_listener_error = Some(Arc::new(hook));
        self
    }

    /// Observe leak warnings. Runs on the registering thread with no lock
    /// held.
    pub fn on_leak_warning<F>(mut self, hook: F) -> Self
    where
        F: Fn(&LeakWarning) + Send + Sync + 'static,
    {
        self.diagnostics.on_leak_warning = Some(Arc::new(hook));
        self
    }

    pub fn build(self) -> EventEmitter {
        EventEmitter::from_parts(self.config, self.diagnostics)
    }
}
