//! `Callback<Args>`: the typed side of the callback adapter.
//!
//! Implemented for every `Fn(A1, .., An) -> R` with `n <= 8`, where `R` is a
//! [`ListenerOutput`]. `Args` is the tuple `(A1, .., An)`; it is what an
//! emit must supply for the callback to run.

use crate::error::BoxError;

use super::output::ListenerOutput;

/// A concretely-typed listener body.
///
/// Closures need their parameter types annotated (`|a: i32, b: String|`)
/// so the argument tuple can be inferred.
pub trait Callback<Args>: Send + Sync + 'static {
    fn call(&self, args: Args) -> Result<(), BoxError>;
}

macro_rules! impl_callback {
    ($($ty:ident),*) => {
        impl<F, R, $($ty,)*> Callback<($($ty,)*)> for F
        where
            F: Fn($($ty),*) -> R + Send + Sync + 'static,
            R: ListenerOutput,
        {
            #[allow(non_snake_case, clippy::unused_unit)]
            fn call(&self, ($($ty,)*): ($($ty,)*)) -> Result<(), BoxError> {
                (self)($($ty),*).into_outcome()
            }
        }
    };
}

impl_callback!();
impl_callback!(A1);
impl_callback!(A1, A2);
impl_callback!(A1, A2, A3);
impl_callback!(A1, A2, A3, A4);
impl_callback!(A1, A2, A3, A4, A5);
impl_callback!(A1, A2, A3, A4, A5, A6);
impl_callback!(A1, A2, A3, A4, A5, A6, A7);
impl_callback!(A1, A2, A3, A4, A5, A6, A7, A8);
