/// Emit with a plain argument list instead of a tuple.
///
/// `emit!(emitter, "name", a, b)` expands to `emitter.emit("name", (a, b))`
/// and `emit!(emitter, "name")` to `emitter.emit("name", ())`.
///
/// ```rust
/// use sync_emitter::{emit, EventEmitter};
///
/// let emitter = EventEmitter::new();
/// emitter.on("greet", |name: String, times: u32| {
///     assert_eq!((name.as_str(), times), ("ada", 2));
/// });
///
/// let report = emit!(emitter, "greet", "ada".to_string(), 2_u32);
/// assert_eq!(report.invoked, 1);
/// ```
#[macro_export]
macro_rules! emit {
    ($emitter:expr, $event:expr $(,)?) => {
        $emitter.emit($event, ())
    };
    ($emitter:expr, $event:expr, $($arg:expr),+ $(,)?) => {
        $emitter.emit($event, ($($arg,)+))
    };
}
