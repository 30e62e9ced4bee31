use std::fmt;
use thiserror::Error;

use crate::types::ListenerId;

/// Boxed error returned by fallible callbacks.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

// ---------------------------------------------------------------------------
// ListenerPanic
// ---------------------------------------------------------------------------

/// A panic caught while a listener was running, with its payload rendered
/// as text when the payload was a string.
#[derive(Debug, Clone)]
pub struct ListenerPanic(pub String);

impl ListenerPanic {
    pub(crate) fn from_payload(payload: Box<dyn std::any::Any + Send>) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&'static str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "non-string panic payload".to_string()
        };
        Self(message)
    }
}

impl fmt::Display for ListenerPanic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "listener panicked: {}", self.0)
    }
}

impl std::error::Error for ListenerPanic {}

// ---------------------------------------------------------------------------
// ListenerError
// ---------------------------------------------------------------------------

/// A fault scoped to a single listener during one emit.
///
/// These never escape `emit`; they are logged, handed to the diagnostics
/// hook and collected in the [`EmitReport`](crate::EmitReport).
#[derive(Debug, Error)]
pub enum ListenerError {
    #[error(
        "Emit error for event \"{event}\": Callback signature mismatch. \
         Listener {listener} expects {expected}, emitted {received}"
    )]
    SignatureMismatch {
        event: String,
        listener: ListenerId,
        expected: &'static str,
        received: &'static str,
    },

    #[error("Emit error for event \"{event}\": listener {listener} failed: {source}")]
    InvocationFailure {
        event: String,
        listener: ListenerId,
        #[source]
        source: BoxError,
    },
}

impl ListenerError {
    /// Event the failing listener was registered for.
    pub fn event(&self) -> &str {
        match self {
            Self::SignatureMismatch { event, .. } | Self::InvocationFailure { event, .. } => event,
        }
    }

    /// Id of the failing listener.
    pub fn listener(&self) -> ListenerId {
        match self {
            Self::SignatureMismatch { listener, .. } | Self::InvocationFailure { listener, .. } => {
                *listener
            }
        }
    }

    pub fn is_signature_mismatch(&self) -> bool {
        matches!(self, Self::SignatureMismatch { .. })
    }

    /// True when the listener panicked rather than returning an error.
    pub fn is_panic(&self) -> bool {
        match self {
            Self::InvocationFailure { source, .. } => source.is::<ListenerPanic>(),
            Self::SignatureMismatch { .. } => false,
        }
    }
}

// ---------------------------------------------------------------------------
// LeakWarning
// ---------------------------------------------------------------------------

/// Informational warning raised when the live listener count exceeds
/// `max_listeners`. Registration is never rejected because of it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "possible EventEmitter memory leak detected. {count} listeners added \
     (max is {max}). For event: {event}"
)]
pub struct LeakWarning {
    pub event: String,
    pub count: usize,
    pub max: usize,
}

// ---------------------------------------------------------------------------
// EmitterError (top-level rollup)
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum EmitterError {
    #[error("Invalid emitter configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Convenience alias; the default error type is `EmitterError`.
pub type Result<T, E = EmitterError> = std::result::Result<T, E>;

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
