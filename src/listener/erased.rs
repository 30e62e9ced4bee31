//! `ErasedCallback`: uniform storage for callbacks of any signature.
//!
//! The concrete argument tuple is recorded as a `TypeId` (plus its
//! `type_name` for diagnostics) and closed over by an invoker that downcasts
//! the emitted `&dyn Any` back to that tuple. Nothing is validated at
//! construction; a wrong tuple at emit time is a recoverable
//! [`InvokeError::SignatureMismatch`].

use std::any::{type_name, Any, TypeId};
use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::error::{BoxError, ListenerPanic};

use super::callback::Callback;

type Invoker = dyn Fn(&dyn Any) -> Option<Result<(), BoxError>> + Send + Sync;

/// Why an invocation attempt did not succeed.
#[derive(Debug)]
pub enum InvokeError {
    /// The emitted tuple is not the tuple the callback was built for.
    SignatureMismatch {
        expected: &'static str,
        received: &'static str,
    },
    /// The callback ran with correctly-typed arguments and returned an
    /// error or panicked.
    Failed(BoxError),
}

/// A type-erased listener body.
pub struct ErasedCallback {
    args_type: TypeId,
    signature: &'static str,
    invoke: Box<Invoker>,
}

impl std::fmt::Debug for ErasedCallback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ErasedCallback")
            .field("signature", &self.signature)
            .finish()
    }
}

impl ErasedCallback {
    /// Erase `callback`, recording `Args` as the only accepted argument tuple.
    pub fn new<Args, F>(callback: F) -> Self
    where
        Args: Clone + 'static,
        F: Callback<Args>,
    {
        Self {
            args_type: TypeId::of::<Args>(),
            signature: type_name::<Args>(),
            invoke: Box::new(move |args: &dyn Any| {
                let args = args.downcast_ref::<Args>()?;
                Some(callback.call(args.clone()))
            }),
        }
    }

    /// `type_name` of the argument tuple this callback expects.
    pub fn signature(&self) -> &'static str {
        self.signature
    }

    /// True when emitting `A` would reach the callback body.
    pub fn accepts<A: Any>(&self) -> bool {
        TypeId::of::<A>() == self.args_type
    }

    /// Invoke with the emitted tuple. Panics inside the body are caught
    /// and reported as [`InvokeError::Failed`].
    pub fn try_invoke<A: Any>(&self, args: &A) -> Result<(), InvokeError> {
        let mismatch = || InvokeError::SignatureMismatch {
            expected: self.signature,
            received: type_name::<A>(),
        };
        if !self.accepts::<A>() {
            return Err(mismatch());
        }

        match catch_unwind(AssertUnwindSafe(|| (self.invoke)(args as &dyn Any))) {
            Ok(Some(Ok(()))) => Ok(()),
            Ok(Some(Err(e))) => Err(InvokeError::Failed(e)),
            Ok(None) => Err(mismatch()),
            Err(payload) => Err(InvokeError::Failed(Box::new(ListenerPanic::from_payload(
                payload,
            )))),
        }
    }
}
