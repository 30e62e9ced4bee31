use crate::error::ListenerError;

/// A listener ID returned by [`EventEmitter::on`](crate::EventEmitter::on)
/// and [`EventEmitter::once`](crate::EventEmitter::once). Ids are never
/// reused within one emitter.
pub type ListenerId = u64;

/// Event names are plain strings; identity is string equality.
pub type EventName = String;

/// Whether a listener stays registered after it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenerKind {
    /// Registered with `on`; fires on every emit.
    Persistent,
    /// Registered with `once`; removed after its first invocation.
    Once,
}

impl ListenerKind {
    pub fn is_once(self) -> bool {
        matches!(self, Self::Once)
    }
}

/// Outcome of a single [`emit`](crate::EventEmitter::emit).
///
/// Purely observational: per-listener faults are collected here instead of
/// being returned as an error.
#[derive(Debug, Default)]
pub struct EmitReport {
    /// Number of entries in the snapshot taken for this emit.
    pub listeners: usize,
    /// Number of listeners that ran to completion without error.
    pub invoked: usize,
    /// Faults in snapshot order.
    pub errors: Vec<ListenerError>,
}

impl EmitReport {
    /// True when the event had no listeners at snapshot time.
    pub fn is_empty(&self) -> bool {
        self.listeners == 0
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn signature_mismatches(&self) -> usize {
        self.errors.iter().filter(|e| e.is_signature_mismatch()).count()
    }
}
