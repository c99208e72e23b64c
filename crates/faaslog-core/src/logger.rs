//! The line formatter.
//!
//! A [`Logger`] turns an already-composed message into one line:
//!
//! ```text
//! [prefix]YYYY-MM-DD HH:MM:SS.uuuuuu file.rs:42: [prefix]message
//! ```
//!
//! Each element is optional and selected by [`Flags`]. The logger owns a scratch
//! buffer reused across calls; callers always get an owned copy back, so a
//! returned line stays valid however many calls follow it.

use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};

use time::{OffsetDateTime, UtcOffset};

use crate::caller::Caller;
use crate::clock::{Clock, SystemClock};
use crate::flags::{FileStyle, Flags, PrefixPlacement};
use crate::itoa::itoa;

pub struct Logger {
    prefix: String,
    flags: Flags,
    clock: Box<dyn Clock>,
    // Scratch space for assembling a line. Only touched under the lock.
    buf: Mutex<Vec<u8>>,
}

impl Logger {
    /// Create a logger stamping lines with the system clock.
    pub fn new(prefix: impl Into<String>, flags: Flags) -> Self {
        Self::with_clock(prefix, flags, SystemClock)
    }

    pub fn with_clock(prefix: impl Into<String>, flags: Flags, clock: impl Clock + 'static) -> Self {
        Self {
            prefix: prefix.into(),
            flags,
            clock: Box::new(clock),
            buf: Mutex::new(Vec::new()),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn flags(&self) -> Flags {
        self.flags
    }

    /// Format `message` as one line, annotated with the caller's location when
    /// a file flag is set. No newline is appended.
    #[track_caller]
    pub fn format(&self, message: &str) -> String {
        let now = self.clock.now();
        // Not `Option::map`: closures don't inherit `#[track_caller]`.
        let caller = if self.flags.file_style().is_some() {
            Some(Caller::here())
        } else {
            None
        };
        self.render(now, caller, message)
    }

    /// Like [`format`](Self::format) with an explicit source location.
    ///
    /// `None` stands for a location that couldn't be resolved and is written
    /// as `???:0`.
    pub fn format_from(&self, message: &str, caller: Option<Caller>) -> String {
        let now = self.clock.now();
        self.render(now, caller, message)
    }

    /// Join `operands` with single spaces, terminate with `'\n'`, then format.
    ///
    /// See also the [`sprintln!`](crate::sprintln) macro.
    #[track_caller]
    pub fn sprintln(&self, operands: &[&dyn fmt::Display]) -> String {
        let mut message = String::new();
        for (i, operand) in operands.iter().enumerate() {
            if i > 0 {
                message.push(' ');
            }
            message.push_str(&operand.to_string());
        }
        message.push('\n');
        self.format(&message)
    }

    // A poisoned buffer is still usable: it's cleared before every line.
    fn lock_buf(&self) -> MutexGuard<'_, Vec<u8>> {
        self.buf.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[cfg(test)]
    pub(crate) fn hold_buffer(&self) -> MutexGuard<'_, Vec<u8>> {
        self.lock_buf()
    }

    fn render(&self, now: OffsetDateTime, caller: Option<Caller>, message: &str) -> String {
        let mut buf = self.lock_buf();
        buf.clear();
        self.write_header(&mut buf, now, caller);
        buf.extend_from_slice(message.as_bytes());
        String::from_utf8_lossy(&buf).into_owned()
    }

    /// Writes, in order: prefix (line-start placement), date, time, file:line,
    /// prefix (before-message placement).
    fn write_header(&self, buf: &mut Vec<u8>, now: OffsetDateTime, caller: Option<Caller>) {
        let placement = self.flags.prefix_placement();
        if placement == PrefixPlacement::LineStart {
            buf.extend_from_slice(self.prefix.as_bytes());
        }

        if self.flags.wants_timestamp() {
            let t = if self.flags.contains(Flags::UTC) {
                now.to_offset(UtcOffset::UTC)
            } else {
                now
            };

            if self.flags.contains(Flags::DATE) {
                let year = t.year();
                if year < 0 {
                    buf.push(b'-');
                }
                itoa(buf, u64::from(year.unsigned_abs()), 4);
                buf.push(b'-');
                itoa(buf, u64::from(u8::from(t.month())), 2);
                buf.push(b'-');
                itoa(buf, u64::from(t.day()), 2);
                buf.push(b' ');
            }

            if self.flags.wants_clock() {
                itoa(buf, u64::from(t.hour()), 2);
                buf.push(b':');
                itoa(buf, u64::from(t.minute()), 2);
                buf.push(b':');
                itoa(buf, u64::from(t.second()), 2);
                if self.flags.contains(Flags::MICROSECONDS) {
                    buf.push(b'.');
                    itoa(buf, u64::from(t.microsecond()), 6);
                }
                buf.push(b' ');
            }
        }

        if let Some(style) = self.flags.file_style() {
            let caller = caller.unwrap_or_else(Caller::unknown);
            let file = match style {
                FileStyle::Short => caller.short_file(),
                FileStyle::Long => caller.file(),
            };
            buf.extend_from_slice(file.as_bytes());
            buf.push(b':');
            itoa(buf, u64::from(caller.line()), 0);
            buf.extend_from_slice(b": ");
        }

        if placement == PrefixPlacement::BeforeMessage {
            buf.extend_from_slice(self.prefix.as_bytes());
        }
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("prefix", &self.prefix)
            .field("flags", &self.flags)
            .finish_non_exhaustive()
    }
}

/// Format a Println-style line: operands joined by spaces, newline-terminated.
///
/// The reported location is the macro's call site.
///
/// ```
/// use faaslog_core::{sprintln, Flags, Logger};
///
/// let log = Logger::new("svc: ", Flags::NONE);
/// assert_eq!(sprintln!(log, "took", 42, "ms"), "svc: took 42 ms\n");
/// ```
#[macro_export]
macro_rules! sprintln {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::Logger::sprintln(&$logger, &[$(&$arg as &dyn ::core::fmt::Display),*])
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use time::macros::datetime;

    fn fixed(prefix: &str, flags: Flags) -> Logger {
        Logger::with_clock(prefix, flags, FixedClock(datetime!(2024-03-05 07:08:09.012345 UTC)))
    }

    #[test]
    fn bare_logger_writes_prefix_and_message() {
        assert_eq!(fixed("p: ", Flags::NONE).format("hello"), "p: hello");
        assert_eq!(fixed("", Flags::NONE).format(""), "");
    }

    #[test]
    fn date_only() {
        assert_eq!(fixed("", Flags::DATE).format("hello"), "2024-03-05 hello");
    }

    #[test]
    fn date_and_time() {
        assert_eq!(fixed("", Flags::STD).format("x"), "2024-03-05 07:08:09 x");
    }

    #[test]
    fn microseconds_without_time_flag_still_write_time() {
        assert_eq!(fixed("", Flags::MICROSECONDS).format("x"), "07:08:09.012345 x");
        assert_eq!(
            fixed("", Flags::TIME | Flags::MICROSECONDS).format("x"),
            "07:08:09.012345 x"
        );
    }

    #[test]
    fn utc_alone_writes_nothing() {
        assert_eq!(fixed("", Flags::UTC).format("x"), "x");
    }

    #[test]
    fn prefix_moves_after_metadata() {
        let log = fixed("[svc] ", Flags::DATE | Flags::PREFIX_AFTER_METADATA);
        assert_eq!(log.format("up"), "2024-03-05 [svc] up");
    }

    #[test]
    fn prefix_after_metadata_follows_file_annotation() {
        let log = fixed("[svc] ", Flags::SHORT_FILE | Flags::PREFIX_AFTER_METADATA);
        let line = log.format_from("up", Some(Caller::new("src/deep/path/worker.rs", 17)));
        assert_eq!(line, "worker.rs:17: [svc] up");
    }

    #[test]
    fn long_file_keeps_path() {
        let log = fixed("", Flags::LONG_FILE);
        let line = log.format_from("m", Some(Caller::new("src/deep/worker.rs", 3)));
        assert_eq!(line, "src/deep/worker.rs:3: m");
    }

    #[test]
    fn short_and_long_behave_like_short() {
        let caller = Some(Caller::new("a/b/c.rs", 99));
        let both = fixed("", Flags::SHORT_FILE | Flags::LONG_FILE).format_from("m", caller);
        let short = fixed("", Flags::SHORT_FILE).format_from("m", caller);
        assert_eq!(both, short);
        assert_eq!(short, "c.rs:99: m");
    }

    #[test]
    fn unresolved_caller_falls_back() {
        let log = fixed("", Flags::SHORT_FILE);
        assert_eq!(log.format_from("lost", None), "???:0: lost");
        let log = fixed("", Flags::LONG_FILE);
        assert_eq!(log.format_from("lost", None), "???:0: lost");
    }

    #[test]
    fn caller_location_is_ignored_without_file_flags() {
        let log = fixed("", Flags::NONE);
        assert_eq!(log.format_from("m", Some(Caller::new("x.rs", 1))), "m");
    }

    #[test]
    fn format_reports_call_site() {
        let log = fixed("", Flags::SHORT_FILE);
        let expected = format!("logger.rs:{}: here", line!() + 1);
        let line = log.format("here");
        assert_eq!(line, expected);
    }

    #[test]
    fn sprintln_joins_with_spaces_and_newline() {
        let log = fixed("", Flags::NONE);
        assert_eq!(log.sprintln(&[&"a" as &dyn fmt::Display, &1, &2.5]), "a 1 2.5\n");
        assert_eq!(log.sprintln(&[]), "\n");
    }

    #[test]
    fn sprintln_macro_reports_macro_site() {
        let log = fixed("", Flags::SHORT_FILE);
        let expected = format!("logger.rs:{}: status 404\n", line!() + 1);
        let line = sprintln!(log, "status", 404);
        assert_eq!(line, expected);
    }

    #[test]
    fn returned_lines_survive_buffer_reuse() {
        let log = fixed("", Flags::NONE);
        let first = log.format("first message, quite long");
        let second = log.format("2nd");
        assert_eq!(first, "first message, quite long");
        assert_eq!(second, "2nd");
    }

    #[test]
    fn message_is_verbatim() {
        let log = fixed("", Flags::NONE);
        assert_eq!(log.format("100% {not} a template\n"), "100% {not} a template\n");
        assert_eq!(log.format("émoji 🔴"), "émoji 🔴");
    }

    #[test]
    fn accessors() {
        let log = Logger::new("pre", Flags::STD);
        assert_eq!(log.prefix(), "pre");
        assert_eq!(log.flags(), Flags::STD);
        assert!(format!("{log:?}").contains("pre"));
    }
}
