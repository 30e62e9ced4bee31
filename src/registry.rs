//! Listener registry: event name → ordered listener entries.
//!
//! The registry itself is not synchronised; [`EventEmitter`](crate::EventEmitter)
//! keeps it behind a single `parking_lot::Mutex`. Entries are stored as
//! `Arc<ListenerEntry>` so a snapshot is a vector of ref-count bumps.
//!
//! Invariant: `live` equals the sum of all sequence lengths, and no event
//! maps to an empty sequence.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::LeakWarning;
use crate::leak::LeakHeuristic;
use crate::listener::ErasedCallback;
use crate::types::{EventName, ListenerId, ListenerKind};

// ============================================================================
// ListenerEntry
// ============================================================================

/// One registration: an erased callback plus its once/persistent flag.
#[derive(Debug)]
pub struct ListenerEntry {
    id: ListenerId,
    kind: ListenerKind,
    callback: ErasedCallback,
    /// Set exactly once for a once-entry, when an emit first reaches it.
    fired: AtomicBool,
}

impl ListenerEntry {
    pub fn new(id: ListenerId, kind: ListenerKind, callback: ErasedCallback) -> Self {
        Self {
            id,
            kind,
            callback,
            fired: AtomicBool::new(false),
        }
    }

    pub fn id(&self) -> ListenerId {
        self.id
    }

    pub fn kind(&self) -> ListenerKind {
        self.kind
    }

    pub fn is_once(&self) -> bool {
        self.kind.is_once()
    }

    pub fn callback(&self) -> &ErasedCallback {
        &self.callback
    }

    /// Claim the right to invoke this entry. Persistent entries can always
    /// be invoked; a once-entry is claimable by exactly one caller.
    pub fn claim(&self) -> bool {
        match self.kind {
            ListenerKind::Persistent => true,
            ListenerKind::Once => self
                .fired
                .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
                .is_ok(),
        }
    }

    /// True for a once-entry that has been claimed.
    pub fn has_fired(&self) -> bool {
        self.is_once() && self.fired.load(Ordering::Acquire)
    }
}

// ============================================================================
// Registry
// ============================================================================

#[derive(Debug, Default)]
pub struct Registry {
    events: HashMap<EventName, Vec<Arc<ListenerEntry>>>,
    live: usize,
    leak: LeakHeuristic,
}

impl Registry {
    pub fn new(max_listeners: usize) -> Self {
        Self {
            events: HashMap::new(),
            live: 0,
            leak: LeakHeuristic::new(max_listeners),
        }
    }

    /// Append `entry` to `event`'s sequence and run the leak check.
    ///
    /// Never fails; the returned warning is informational.
    pub fn register(&mut self, event: &str, entry: ListenerEntry) -> Option<LeakWarning> {
        self.events
            .entry(event.to_string())
            .or_default()
            .push(Arc::new(entry));
        self.live += 1;
        self.leak.check(event, self.live)
    }

    /// Drop every entry for `event`. Returns how many were removed.
    pub fn unregister(&mut self, event: &str) -> usize {
        let removed = self.events.remove(event).map_or(0, |entries| entries.len());
        self.live -= removed;
        removed
    }

    /// Drop everything. Returns how many entries were removed.
    pub fn unregister_all(&mut self) -> usize {
        let removed = self.live;
        self.events.clear();
        self.live = 0;
        removed
    }

    /// Remove a single entry by id, wherever it is registered.
    pub fn remove_by_id(&mut self, id: ListenerId) -> bool {
        let Some((event, pos)) = self.events.iter().find_map(|(event, entries)| {
            entries
                .iter()
                .position(|e| e.id() == id)
                .map(|pos| (event.clone(), pos))
        }) else {
            return false;
        };

        if let Some(entries) = self.events.get_mut(&event) {
            entries.remove(pos);
            self.live -= 1;
            if entries.is_empty() {
                self.events.remove(&event);
            }
        }
        true
    }

    /// Independent copy of `event`'s current sequence (empty if absent).
    pub fn snapshot(&self, event: &str) -> Vec<Arc<ListenerEntry>> {
        self.events.get(event).cloned().unwrap_or_default()
    }

    /// Remove once-entries of `event` that have fired and are still present.
    ///
    /// Entries added after the caller's snapshot have not fired and are kept;
    /// entries already removed elsewhere are not counted twice.
    pub fn prune_fired(&mut self, event: &str) -> usize {
        let Some(entries) = self.events.get_mut(event) else {
            return 0;
        };
        let before = entries.len();
        entries.retain(|e| !e.has_fired());
        let removed = before - entries.len();
        self.live -= removed;
        if entries.is_empty() {
            self.events.remove(event);
        }
        removed
    }

    /// Aggregate live listener count.
    pub fn count(&self) -> usize {
        self.live
    }

    pub fn count_for(&self, event: &str) -> usize {
        self.events.get(event).map_or(0, Vec::len)
    }

    /// Names of events with at least one listener, sorted.
    pub fn event_names(&self) -> Vec<EventName> {
        let mut names: Vec<EventName> = self.events.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn max_listeners(&self) -> usize {
        self.leak.max_listeners()
    }

    pub fn set_max_listeners(&mut self, max: usize) {
        self.leak.set_max_listeners(max);
    }
}
