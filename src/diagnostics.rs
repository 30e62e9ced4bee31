//! Diagnostic channel for listener faults and leak warnings.
//!
//! Every report is logged through `tracing`. Callers that want to observe
//! reports programmatically install hooks; hooks always run with the
//! registry lock released, so they may call back into the emitter.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

use crate::error::{LeakWarning, ListenerError};

/// Closure type for listener-fault hooks.
pub type ListenerErrorHook = dyn Fn(&ListenerError) + Send + Sync;

/// Closure type for leak-warning hooks.
pub type LeakWarningHook = dyn Fn(&LeakWarning) + Send + Sync;

/// Optional observers for the faults an emitter reports.
#[derive(Clone, Default)]
pub struct Diagnostics {
    pub on_listener_error: Option<Arc<ListenerErrorHook>>,
    pub on_leak_warning: Option<Arc<LeakWarningHook>>,
}

impl std::fmt::Debug for Diagnostics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Diagnostics")
            .field("on_listener_error", &self.on_listener_error.as_ref().map(|_| "<fn>"))
            .field("on_leak_warning", &self.on_leak_warning.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

impl Diagnostics {
    pub(crate) fn listener_error(&self, err: &ListenerError) {
        match err {
            ListenerError::SignatureMismatch {
                event,
                listener,
                expected,
                received,
            } => tracing::error!(
                event = %event,
                listener = *listener,
                expected = *expected,
                received = *received,
                "callback signature mismatch, listener skipped"
            ),
            ListenerError::InvocationFailure {
                event,
                listener,
                source,
            } => tracing::error!(
                event = %event,
                listener = *listener,
                error = %source,
                "listener failed during emit"
            ),
        }

        if let Some(hook) = &self.on_listener_error {
            // A misbehaving hook must not interrupt dispatch.
            let _ = catch_unwind(AssertUnwindSafe(|| hook(err)));
        }
    }

    pub(crate) fn leak_warning(&self, warning: &LeakWarning) {
        tracing::warn!(
            event = %warning.event,
            count = warning.count,
            max = warning.max,
            "{warning}"
        );

        if let Some(hook) = &self.on_leak_warning {
            let _ = catch_unwind(AssertUnwindSafe(|| hook(warning)));
        }
    }
}
