//! Registration, emission and argument passing.

use std::sync::{Arc, Mutex};

use sync_emitter::{emit, EmitterConfig, EventEmitter};

use super::common::{make_log, Tracker};

// ============================================================================
// Defaults
// ============================================================================

#[test]
fn fresh_emitter_has_defaults() {
    let emitter = EventEmitter::new();
    assert_eq!(emitter.max_listeners(), 10);
    assert_eq!(emitter.listener_count(), 0);
    assert!(emitter.event_names().is_empty());
}

#[test]
fn with_config_applies_max_listeners() {
    let emitter = EventEmitter::with_config(EmitterConfig { max_listeners: 3 });
    assert_eq!(emitter.max_listeners(), 3);
    emitter.set_max_listeners(7);
    assert_eq!(emitter.max_listeners(), 7);
}

// ============================================================================
// on / emit
// ============================================================================

#[test]
fn on_and_emit_pass_arguments() {
    let emitter = EventEmitter::new();
    let received = Arc::new(Mutex::new(None));
    let tracker = Tracker::new();

    {
        let received = Arc::clone(&received);
        let tracker = tracker.clone();
        emitter.on("event1", move |a: i32, b: String| {
            tracker.trigger();
            *received.lock().unwrap() = Some((a, b));
        });
    }

    let report = emit!(emitter, "event1", 10, "foo".to_string());

    assert_eq!(tracker.count(), 1);
    assert_eq!(*received.lock().unwrap(), Some((10, "foo".to_string())));
    assert_eq!(report.listeners, 1);
    assert_eq!(report.invoked, 1);
    assert!(!report.has_errors());
    assert_eq!(emitter.listener_count(), 1);
}

#[test]
fn duplicate_listeners_are_independent_and_ordered() {
    let emitter = EventEmitter::new();
    let log = make_log();

    for tag in ["a", "b", "c"] {
        let log = Arc::clone(&log);
        emitter.on("event1", move |n: i32, s: String| {
            log.lock().unwrap().push(format!("{tag}:{n}:{s}"));
        });
    }
    assert_eq!(emitter.listener_count(), 3);
    assert_eq!(emitter.listener_count_for("event1"), 3);

    emitter.emit("event1", (20, "bar".to_string()));

    assert_eq!(
        *log.lock().unwrap(),
        vec!["a:20:bar", "b:20:bar", "c:20:bar"]
    );
}

#[test]
fn persistent_listener_fires_once_per_emit() {
    let emitter = EventEmitter::new();
    let tracker = Tracker::new();
    let t = tracker.clone();
    emitter.on("tick", move || t.trigger());

    for _ in 0..5 {
        emit!(emitter, "tick");
    }

    assert_eq!(tracker.count(), 5);
    assert_eq!(emitter.listener_count(), 1);
}

#[test]
fn no_argument_listener() {
    let emitter = EventEmitter::new();
    let tracker = Tracker::new();
    let t = tracker.clone();
    emitter.on("event2", move || t.trigger());

    emitter.emit("event2", ());
    assert_eq!(tracker.count(), 1);
}

#[test]
fn emit_on_missing_event_is_a_no_op() {
    let emitter = EventEmitter::new();
    let report = emit!(emitter, "missing", 123, "data");
    assert!(report.is_empty());
    assert_eq!(report.invoked, 0);
    assert!(!report.has_errors());
    assert_eq!(emitter.listener_count(), 0);
    assert!(!emitter.has_listeners("missing"));
}

#[test]
fn events_are_isolated_by_name() {
    let emitter = EventEmitter::new();
    let a = Tracker::new();
    let b = Tracker::new();
    {
        let a = a.clone();
        emitter.on("a", move || a.trigger());
    }
    {
        let b = b.clone();
        emitter.on("b", move || b.trigger());
    }

    emit!(emitter, "a");
    emit!(emitter, "a");
    emit!(emitter, "b");

    assert_eq!((a.count(), b.count()), (2, 1));
    assert_eq!(emitter.event_names(), vec!["a".to_string(), "b".to_string()]);
}

// ============================================================================
// Argument shapes
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
struct ComplexArg {
    id: i32,
    data: String,
}

#[test]
fn struct_arguments_are_received_by_value() {
    let emitter = EventEmitter::new();
    let received = Arc::new(Mutex::new(None));
    let r = Arc::clone(&received);
    emitter.on("complex_event", move |arg: ComplexArg| {
        *r.lock().unwrap() = Some(arg);
    });

    let sent = ComplexArg {
        id: 123,
        data: "test_data".to_string(),
    };
    emit!(emitter, "complex_event", sent.clone());

    assert_eq!(*received.lock().unwrap(), Some(sent));
}

#[test]
fn each_listener_gets_its_own_copy() {
    let emitter = EventEmitter::new();
    let log = make_log();

    {
        let log = Arc::clone(&log);
        emitter.on("mutate", move |mut v: Vec<i32>| {
            v.push(99);
            log.lock().unwrap().push(format!("{v:?}"));
        });
    }
    {
        let log = Arc::clone(&log);
        emitter.on("mutate", move |v: Vec<i32>| {
            log.lock().unwrap().push(format!("{v:?}"));
        });
    }

    emit!(emitter, "mutate", vec![1, 2]);

    assert_eq!(*log.lock().unwrap(), vec!["[1, 2, 99]", "[1, 2]"]);
}

fn example_free_function(tracker: &Tracker, value: i32) {
    assert_eq!(value, 50);
    tracker.trigger();
}

#[test]
fn free_function_wrapped_in_closure() {
    let emitter = EventEmitter::new();
    let tracker = Tracker::new();
    let t = tracker.clone();
    emitter.on("free_func_event", move |v: i32| example_free_function(&t, v));

    emit!(emitter, "free_func_event", 50);
    assert_eq!(tracker.count(), 1);
}

fn on_ready(flag: bool) {
    assert!(flag);
}

#[test]
fn plain_fn_item_as_listener() {
    let emitter = EventEmitter::new();
    emitter.on("ready", on_ready);
    let report = emit!(emitter, "ready", true);
    assert_eq!(report.invoked, 1);
}

#[test]
fn listener_returning_a_value_is_accepted() {
    let emitter = EventEmitter::new();
    let side_effect = Arc::new(Mutex::new(0));
    let s = Arc::clone(&side_effect);
    emitter.on("return_event", move |x: i32| -> Result<i32, String> {
        *s.lock().unwrap() = x * 10;
        Ok(x * 2)
    });

    let report = emit!(emitter, "return_event", 7);

    assert_eq!(report.invoked, 1);
    assert_eq!(*side_effect.lock().unwrap(), 70);
}
