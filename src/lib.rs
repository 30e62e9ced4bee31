//! # sync-emitter
//!
//! An in-process, synchronous publish/subscribe utility. Callers register
//! listeners against string event names with [`EventEmitter::on`] or
//! [`EventEmitter::once`] and later [`emit`](EventEmitter::emit) an event
//! with an argument tuple; every matching listener runs on the caller's
//! thread before `emit` returns.
//!
//! Listeners of any arity (0..=8) and parameter types share one registry.
//! Each is stored as an [`ErasedCallback`] tagged with its argument tuple;
//! an emit whose tuple does not match is a per-listener
//! [`ListenerError::SignatureMismatch`], never a crash. Panics and returned
//! errors are isolated the same way.
//!
//! ```rust
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::sync::Arc;
//! use sync_emitter::{emit, EventEmitter};
//!
//! let emitter = EventEmitter::new();
//! let calls = Arc::new(AtomicUsize::new(0));
//!
//! let c = Arc::clone(&calls);
//! emitter.on("event1", move |a: i32, b: String| {
//!     assert_eq!((a, b.as_str()), (10, "foo"));
//!     c.fetch_add(1, Ordering::SeqCst);
//! });
//!
//! let c = Arc::clone(&calls);
//! emitter.once("event2", move || {
//!     c.fetch_add(1, Ordering::SeqCst);
//! });
//!
//! emit!(emitter, "event1", 10, "foo".to_string());
//! emit!(emitter, "event2");
//! emit!(emitter, "event2");
//!
//! assert_eq!(calls.load(Ordering::SeqCst), 2);
//! assert_eq!(emitter.listener_count(), 1);
//! ```
//!
//! # Modules
//!
//! - [`emitter`]: [`EventEmitter`], its builder and the dispatch engine.
//! - [`registry`]: [`Registry`] and [`ListenerEntry`].
//! - [`listener`]: the callback adapter ([`Callback`], [`ErasedCallback`]).
//! - [`leak`]: the [`LeakHeuristic`] threshold check.
//! - [`diagnostics`]: hooks for listener faults and leak warnings.
//! - [`config`]: [`EmitterConfig`].
//! - [`error`]: error and warning types.

pub mod config;
pub mod diagnostics;
pub mod emitter;
pub mod error;
pub mod leak;
pub mod listener;
pub mod registry;
pub mod types;

mod macros;

pub use config::{EmitterConfig, DEFAULT_MAX_LISTENERS};
pub use diagnostics::Diagnostics;
pub use emitter::{EmitterBuilder, EventEmitter};
pub use error::{BoxError, EmitterError, LeakWarning, ListenerError, ListenerPanic, Result};
pub use leak::LeakHeuristic;
pub use listener::{Callback, ErasedCallback, InvokeError, ListenerOutput};
pub use registry::{ListenerEntry, Registry};
pub use types::{EmitReport, EventName, ListenerId, ListenerKind};
