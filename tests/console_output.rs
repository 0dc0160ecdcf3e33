//! End-to-end tests for console formatting, routing, and write ordering.
use chrono::{Duration, TimeZone, Utc};
use console_sink::{
    ConsoleCollector, ConsoleConfig, ConsoleSink, FieldValue, LogEntry, Severity,
};
use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use std::thread;
use tracing_subscriber::layer::SubscriberExt;

/// A cloneable stream handle whose contents stay inspectable after the
/// sink takes ownership of one clone.
#[derive(Clone, Default)]
struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl SharedBuf {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn test_sink(config: ConsoleConfig) -> (Arc<ConsoleSink>, SharedBuf, SharedBuf) {
    let out = SharedBuf::default();
    let err = SharedBuf::default();
    let sink = Arc::new(ConsoleSink::with_streams(
        config,
        Box::new(out.clone()),
        Box::new(err.clone()),
    ));
    (sink, out, err)
}

#[test]
fn test_error_entry_end_to_end() {
    let (sink, out, err) = test_sink(ConsoleConfig::new(false, 4));

    let mut entry = LogEntry::new(Severity::Error, "conn lost")
        .with_field("module", FieldValue::Text("db".to_string()));
    entry.timestamp =
        Utc.with_ymd_and_hms(2024, 3, 1, 10, 15, 30).unwrap() + Duration::milliseconds(123);

    sink.emit(&entry).unwrap();

    assert_eq!(err.contents(), "2024-03-01T10:15:30.123 [  db] ERRO  conn lost\n");
    assert!(out.contents().is_empty());
}

#[test]
fn test_each_severity_lands_on_exactly_one_stream() {
    let levels = [
        (Severity::Debug, false),
        (Severity::Info, false),
        (Severity::Warn, true),
        (Severity::Error, true),
        (Severity::Fatal, true),
        (Severity::Panic, true),
    ];

    for (level, expect_stderr) in levels {
        let (sink, out, err) = test_sink(ConsoleConfig::new(false, 4));
        sink.emit(&LogEntry::new(level, "x")).unwrap();

        let (hit, miss) = if expect_stderr { (err, out) } else { (out, err) };
        assert!(hit.contents().ends_with("  x\n"), "{} missed its stream", level);
        assert!(miss.contents().is_empty(), "{} wrote to both streams", level);
    }
}

#[test]
fn test_concurrent_emits_never_tear_lines() {
    const THREADS: usize = 8;
    const LINES_PER_THREAD: usize = 50;

    let (sink, out, _err) = test_sink(ConsoleConfig::new(false, 6));

    let handles: Vec<_> = (0..THREADS)
        .map(|thread_id| {
            let sink = sink.clone();
            thread::spawn(move || {
                for line_id in 0..LINES_PER_THREAD {
                    let entry = LogEntry::new(
                        Severity::Info,
                        format!("thread {} line {}", thread_id, line_id),
                    )
                    .with_field("module", FieldValue::Text("worker".to_string()));
                    sink.emit(&entry).unwrap();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let contents = out.contents();
    assert!(contents.ends_with('\n'));

    // Every line must be whole: timestamp, bracketed module, level, and
    // one of the emitted messages, with nothing interleaved.
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), THREADS * LINES_PER_THREAD);
    for line in &lines {
        assert!(
            line.contains("[worker] INFO  thread "),
            "torn line: {:?}",
            line
        );
    }

    // Each message appears exactly once.
    for thread_id in 0..THREADS {
        for line_id in 0..LINES_PER_THREAD {
            let message = format!("thread {} line {}", thread_id, line_id);
            assert_eq!(
                lines.iter().filter(|l| l.ends_with(&message)).count(),
                1,
                "missing or duplicated: {}",
                message
            );
        }
    }
}

#[test]
fn test_collector_formats_tracing_events() {
    let (sink, out, err) = test_sink(ConsoleConfig::new(false, 6));
    let subscriber = tracing_subscriber::registry().with(ConsoleCollector::new(sink));

    tracing::subscriber::with_default(subscriber, || {
        tracing::info!(module = "net", "listener up");
        tracing::error!(module = "net", "listener down");
    });

    assert!(out.contents().contains("[   net] INFO  listener up\n"));
    assert!(err.contents().contains("[   net] ERRO  listener down\n"));
}

#[test]
fn test_env_filter_gates_events_before_the_sink() {
    let (sink, out, _err) = test_sink(ConsoleConfig::new(false, 6));
    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new("info"))
        .with(ConsoleCollector::new(sink));

    tracing::subscriber::with_default(subscriber, || {
        tracing::debug!(module = "quiet", "filtered out");
        tracing::info!(module = "loud", "kept");
    });

    let contents = out.contents();
    assert!(!contents.contains("filtered out"));
    assert!(contents.contains("INFO  kept\n"));
}

#[test]
fn test_color_output_wraps_only_the_level() {
    let (sink, _out, err) = test_sink(ConsoleConfig::new(true, 4));

    sink.emit(
        &LogEntry::new(Severity::Fatal, "halting")
            .with_field("module", FieldValue::Text("core".to_string())),
    )
    .unwrap();

    let contents = err.contents();
    assert!(contents.contains("\x1b[31mFATA\x1b[0m  halting"));
    assert_eq!(contents.matches('\x1b').count(), 2);
}

#[test]
fn test_each_entry_produces_exactly_one_line() {
    // Messages containing no newline yield exactly one console line each.
    let (sink, out, _err) = test_sink(ConsoleConfig::new(false, 3));
    for i in 0..10 {
        sink.emit(&LogEntry::new(Severity::Debug, format!("tick {}", i)))
            .unwrap();
    }
    assert_eq!(out.contents().lines().count(), 10);
}
