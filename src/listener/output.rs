use crate::error::BoxError;

/// Return types a callback may produce.
///
/// `()` always succeeds. `Result<T, E>` turns `Err` into an invocation
/// failure; the `Ok` value is discarded.
pub trait ListenerOutput {
    fn into_outcome(self) -> Result<(), BoxError>;
}

impl ListenerOutput for () {
    fn into_outcome(self) -> Result<(), BoxError> {
        Ok(())
    }
}

impl<T, E> ListenerOutput for Result<T, E>
where
    E: Into<BoxError>,
{
    fn into_outcome(self) -> Result<(), BoxError> {
        self.map(|_| ()).map_err(Into::into)
    }
}
