use std::collections::HashSet;
use std::sync::Barrier;
use std::thread;
use std::time::Duration;

use faaslog_core::{FixedClock, Flags, Logger, LoggerGroup};
use time::macros::datetime;

const THREADS: usize = 100;

#[test]
fn concurrent_lines_are_never_interleaved() {
    let clock = FixedClock(datetime!(2024-03-05 12:00:00.5 UTC));
    let log = Logger::with_clock("pfx | ", Flags::STD | Flags::MICROSECONDS, clock);
    let barrier = Barrier::new(THREADS);
    let (tx, rx) = crossbeam_channel::unbounded();

    thread::scope(|s| {
        for i in 0..THREADS {
            let (log, barrier, tx) = (&log, &barrier, tx.clone());
            s.spawn(move || {
                barrier.wait();
                let msg = format!("message-{i:03}");
                for _ in 0..20 {
                    let line = log.format(&msg);
                    tx.send((msg.clone(), line)).expect("receiver alive");
                }
            });
        }
    });
    drop(tx);

    let mut seen = HashSet::new();
    for (msg, line) in rx.iter() {
        assert_eq!(line, format!("pfx | 2024-03-05 12:00:00.500000 {msg}"));
        assert_eq!(line.matches(msg.as_str()).count(), 1);
        seen.insert(msg);
    }
    assert_eq!(seen.len(), THREADS);
}

#[test]
fn group_loggers_run_in_parallel() {
    let group = LoggerGroup::with_flags("fn", Flags::NONE);
    let (tx, rx) = crossbeam_channel::unbounded();

    thread::scope(|s| {
        for logger in [group.info(), group.warning(), group.error()] {
            let tx = tx.clone();
            s.spawn(move || {
                for i in 0..200 {
                    tx.send(logger.format(&i.to_string())).expect("receiver alive");
                }
            });
        }
    });
    drop(tx);

    let lines: Vec<String> = rx.iter().collect();
    assert_eq!(lines.len(), 600);
    for tag in ["🔵INFO", "🟡WARNING", "🔴ERROR"] {
        assert_eq!(lines.iter().filter(|l| l.contains(tag)).count(), 200);
    }
}

#[test]
fn shared_logger_does_not_deadlock_with_file_flags() {
    let log = Logger::new("", Flags::STD | Flags::SHORT_FILE);
    let (tx, rx) = crossbeam_channel::bounded(THREADS);

    thread::scope(|s| {
        for i in 0..THREADS {
            let (log, tx) = (&log, tx.clone());
            s.spawn(move || {
                let _ = tx.send(log.format(&format!("n{i}")));
            });
        }
        for _ in 0..THREADS {
            let line = rx
                .recv_timeout(Duration::from_secs(10))
                .expect("every thread finishes");
            assert!(line.contains("concurrency.rs:"), "{line}");
        }
    });
}
