//! `EventEmitter`: thread-safe, string-keyed, synchronous pub/sub.
//!
//! # Threading model
//!
//! All methods take `&self`. The registry (entries, live count and the
//! leak threshold) sits behind one `parking_lot::Mutex`; critical sections
//! only splice or copy vectors. The lock is never held while a listener or
//! a diagnostics hook runs, so listeners may call `on`/`once`/`off`/`emit`
//! on the same emitter without deadlocking.
//!
//! The emitter is not `Clone`: every snapshot and every lock acquisition
//! refers to the one registry it owns. Share it across threads with
//! `Arc<EventEmitter>` or scoped borrows.

mod builder;
mod dispatch;

pub use builder::EmitterBuilder;

use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;

use crate::{
    config::EmitterConfig,
    diagnostics::Diagnostics,
    listener::{Callback, ErasedCallback},
    registry::{ListenerEntry, Registry},
    types::{EventName, ListenerId, ListenerKind},
};

pub struct EventEmitter {
    registry: Mutex<Registry>,
    next_id: AtomicU64,
    diagnostics: Diagnostics,
}

impl std::fmt::Debug for EventEmitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let registry = self.registry.lock();
        f.debug_struct("EventEmitter")
            .field("listeners", &registry.count())
            .field("max_listeners", &registry.max_listeners())
            .field("events", &registry.event_names())
            .finish()
    }
}

impl Default for EventEmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl EventEmitter {
    /// Create an empty emitter with the default configuration
    /// (`max_listeners = 10`, no diagnostics hooks).
    pub fn new() -> Self {
        Self::with_config(EmitterConfig::default())
    }

    pub fn with_config(config: EmitterConfig) -> Self {
        Self::from_parts(config, Diagnostics::default())
    }

    pub fn builder() -> EmitterBuilder {
        EmitterBuilder::new()
    }

    pub(crate) fn from_parts(config: EmitterConfig, diagnostics: Diagnostics) -> Self {
        Self {
            registry: Mutex::new(Registry::new(config.max_listeners)),
            next_id: AtomicU64::new(1),
            diagnostics,
        }
    }

    // -----------------------------------------------------------------------
    // Registration
    // -----------------------------------------------------------------------

    /// Register a persistent listener for `event`.
    ///
    /// The callback's parameter types fix the argument tuple it accepts;
    /// emits with any other tuple skip it with a signature mismatch.
    pub fn on<Args, F>(&self, event: &str, callback: F) -> ListenerId
    where
        Args: Clone + 'static,
        F: Callback<Args>,
    {
        self.add_listener(event, ErasedCallback::new(callback), ListenerKind::Persistent)
    }

    /// Register a listener that is removed after its first invocation.
    pub fn once<Args, F>(&self, event: &str, callback: F) -> ListenerId
    where
        Args: Clone + 'static,
        F: Callback<Args>,
    {
        self.add_listener(event, ErasedCallback::new(callback), ListenerKind::Once)
    }

    fn add_listener(&self, event: &str, callback: ErasedCallback, kind: ListenerKind) -> ListenerId {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let signature = callback.signature();
        let warning = self
            .registry
            .lock()
            .register(event, ListenerEntry::new(id, kind, callback));

        tracing::trace!(event, listener = id, once = kind.is_once(), signature, "listener registered");

        // Reported after the lock is released so hooks may re-enter.
        if let Some(warning) = warning {
            self.diagnostics.leak_warning(&warning);
        }
        id
    }

    // -----------------------------------------------------------------------
    // Removal
    // -----------------------------------------------------------------------

    /// Remove every listener registered for `event`. No-op when absent.
    pub fn off(&self, event: &str) {
        let removed = self.registry.lock().unregister(event);
        if removed > 0 {
            tracing::trace!(event, removed, "listeners removed");
        }
    }

    /// Remove every listener for every event and reset the count to zero.
    pub fn off_all(&self) {
        let removed = self.registry.lock().unregister_all();
        tracing::trace!(removed, "all listeners removed");
    }

    /// Remove the single listener `id`. Returns `false` if it is no longer
    /// registered (already removed, or a once-listener that has fired).
    pub fn remove_listener(&self, id: ListenerId) -> bool {
        self.registry.lock().remove_by_id(id)
    }

    // -----------------------------------------------------------------------
    // Introspection
    // -----------------------------------------------------------------------

    /// Number of live listeners across all events.
    pub fn listener_count(&self) -> usize {
        self.registry.lock().count()
    }

    pub fn listener_count_for(&self, event: &str) -> usize {
        self.registry.lock().count_for(event)
    }

    pub fn has_listeners(&self, event: &str) -> bool {
        self.listener_count_for(event) > 0
    }

    /// Events with at least one listener, sorted by name.
    pub fn event_names(&self) -> Vec<EventName> {
        self.registry.lock().event_names()
    }

    pub fn max_listeners(&self) -> usize {
        self.registry.lock().max_listeners()
    }

    /// Change the leak-warning threshold. Existing listeners are unaffected;
    /// the new value applies from the next registration.
    pub fn set_max_listeners(&self, max: usize) {
        self.registry.lock().set_max_listeners(max);
    }
}
