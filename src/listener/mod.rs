//! Callback adapter: turns typed closures into uniformly stored listeners.
//!
//! # Modules
//!
//! - [`callback`]: [`Callback<Args>`] implemented for `Fn` of arity 0..=8.
//! - [`output`]: [`ListenerOutput`] for `()` and `Result<T, E>` returns.
//! - [`erased`]: [`ErasedCallback`], the type-erased storage form.

pub mod callback;
pub mod erased;
pub mod output;

pub use callback::Callback;
pub use erased::{ErasedCallback, InvokeError};
pub use output::ListenerOutput;
