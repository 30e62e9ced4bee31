use std::any::Any;
use std::sync::Arc;

use crate::{
    error::ListenerError,
    listener::InvokeError,
    registry::ListenerEntry,
    types::EmitReport,
};

use super::EventEmitter;

impl EventEmitter {
    /// Emit `event` with `args` to all currently registered listeners.
    ///
    /// `args` is the argument tuple: `()` for none, `(x,)` for one,
    /// `(x, y)` for two. The [`emit!`](crate::emit) macro builds it for you.
    ///
    /// A snapshot of the listener list is taken under the lock; the lock is
    /// then released and every snapshot entry is tried in registration
    /// order. Listeners added during this emit are not called until the
    /// next one; listeners removed during it are still called this round.
    /// Faults are isolated per listener and never returned as an error.
    pub fn emit<A: Any>(&self, event: &str, args: A) -> EmitReport {
        let snapshot: Vec<Arc<ListenerEntry>> = {
            let registry = self.registry.lock();
            registry.snapshot(event)
        };
        if snapshot.is_empty() {
            return EmitReport::default();
        }
        let has_once = snapshot.iter().any(|entry| entry.is_once());

        // Lock is released, so callbacks can safely call on()/off()/emit().
        let mut report = EmitReport {
            listeners: snapshot.len(),
            ..EmitReport::default()
        };
        for entry in &snapshot {
            match self.invoke_entry(event, entry, &args) {
                Ok(true) => report.invoked += 1,
                Ok(false) => {}
                Err(err) => {
                    self.diagnostics.listener_error(&err);
                    report.errors.push(err);
                }
            }
        }

        if has_once {
            let removed = self.registry.lock().prune_fired(event);
            if removed > 0 {
                tracing::trace!(event, removed, "once listeners pruned");
            }
        }
        report
    }

    /// Returns `Ok(false)` when a once-entry was already claimed by another
    /// emit and is skipped.
    fn invoke_entry<A: Any>(
        &self,
        event: &str,
        entry: &ListenerEntry,
        args: &A,
    ) -> Result<bool, ListenerError> {
        // A once-entry is consumed by the attempt, even when the argument
        // types do not match.
        if !entry.claim() {
            return Ok(false);
        }
        let callback = entry.callback();
        if !callback.accepts::<A>() {
            return Err(signature_mismatch(event, entry, callback.signature(), std::any::type_name::<A>()));
        }

        match callback.try_invoke(args) {
            Ok(()) => Ok(true),
            Err(InvokeError::SignatureMismatch { expected, received }) => {
                Err(signature_mismatch(event, entry, expected, received))
            }
            Err(InvokeError::Failed(source)) => Err(ListenerError::InvocationFailure {
                event: event.to_string(),
                listener: entry.id(),
                source,
            }),
        }
    }
}

fn signature_mismatch(
    event: &str,
    entry: &ListenerEntry,
    expected: &'static str,
    received: &'static str,
) -> ListenerError {
    ListenerError::SignatureMismatch {
        event: event.to_string(),
        listener: entry.id(),
        expected,
        received,
    }
}
