//! Tests for the structured events emitted while invoking callables.
//!
//! Each test installs a thread-local `tracing_subscriber` writing into an
//! in-memory buffer and inspects the formatted output.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use overscore::error::OverscoreError;
use overscore::invocation::{after, memoize, once, Callable};
use overscore::value::Value;
use overscore::values;
use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn contents(&self) -> String {
        let buffer = self.0.lock().map(|bytes| bytes.clone()).unwrap_or_default();
        String::from_utf8_lossy(&buffer).into_owned()
    }
}

impl Write for Captured {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        if let Ok(mut buffer) = self.0.lock() {
            buffer.extend_from_slice(bytes);
        }
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Captured {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn capture(level: Level, body: impl FnOnce()) -> String {
    let captured = Captured::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(captured.clone())
        .with_ansi(false)
        .with_max_level(level)
        .finish();
    tracing::subscriber::with_default(subscriber, body);
    captured.contents()
}

// =============================================================================
// invocation events
// =============================================================================

#[test]
fn test_memoize_logs_miss_then_hit() {
    let output = capture(Level::TRACE, || {
        let square = memoize(Callable::unary(|value| {
            Value::from(value.as_int().unwrap_or(0).pow(2))
        }));
        square.invoke(&values![4]).unwrap();
        square.invoke(&values![4]).unwrap();
    });

    let miss = output.find("memo miss").expect("miss event");
    let hit = output.find("memo hit").expect("hit event");
    assert!(miss < hit);
    assert_eq!(output.matches("memo miss").count(), 1);
}

#[test]
fn test_invoke_events_are_trace_level() {
    let output = capture(Level::DEBUG, || {
        Callable::nullary(|| Value::Null).invoke(&[]).unwrap();
    });
    assert!(!output.contains("invoke"));

    let output = capture(Level::TRACE, || {
        Callable::nullary(|| Value::Null).named("quiet").invoke(&[]).unwrap();
    });
    assert!(output.contains("invoke"));
    assert!(output.contains("quiet"));
}

#[test]
fn test_once_and_after_log_when_firing() {
    let output = capture(Level::DEBUG, || {
        let initialize = once(Callable::nullary(|| Value::from(1)).named("initialize"));
        initialize.invoke(&[]).unwrap();
        initialize.invoke(&[]).unwrap();

        let finish = after(2, Callable::nullary(|| Value::Null).named("finish")).unwrap();
        finish.invoke(&[]).unwrap();
        finish.invoke(&[]).unwrap();
    });

    assert_eq!(output.matches("once: first invocation").count(), 1);
    assert_eq!(output.matches("after: count reached").count(), 1);
    assert!(output.contains("initialize"));
    assert!(output.contains("finish"));
}

// =============================================================================
// traversal events
// =============================================================================

#[cfg(feature = "traversal")]
#[test]
fn test_traversal_abort_is_logged() {
    use overscore::traversal::{each, Collection};

    let output = capture(Level::DEBUG, || {
        let failing = Callable::new(|_| Err(OverscoreError::raised("stop here"))).named("failing");
        let result = each(&Collection::from(values![1, 2, 3]), &failing, None);
        assert!(result.is_err());
    });

    assert_eq!(output.matches("traversal aborted").count(), 1);
    assert!(output.contains("each"));
    assert!(output.contains("stop here"));
}

#[cfg(feature = "utility")]
#[test]
fn test_beacon_logs_label_and_location() {
    use overscore::utility::beacon;

    let output = capture(Level::DEBUG, || {
        beacon("BEACON");
    });

    assert!(output.contains("^BEACON^"));
    assert!(output.contains("logging_tests.rs"));
}

#[test]
fn test_failures_are_not_logged_above_debug() {
    let output = capture(Level::INFO, || {
        let failing = Callable::new(|_| Err(OverscoreError::raised("quiet failure")));
        assert!(failing.invoke(&[]).is_err());
    });
    assert!(output.is_empty());
}
