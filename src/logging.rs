//! faaslog's own diagnostics.
//!
//! Every line goes through the process-wide [`LoggerGroup`] so it is shaped like:
//!     <function> --- <TAG> --- <date> <time> <file>:<line>: [TAG] message
//!
//! - stderr is the canonical sink.
//! - Optional append-only file sink for audit/debug.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};
use std::time::{SystemTime, UNIX_EPOCH};

use faaslog_core::{LoggerGroup, Severity};

static GROUP: OnceLock<LoggerGroup> = OnceLock::new();
static LOG_FILE: OnceLock<Mutex<Option<File>>> = OnceLock::new();
static RUN_ID: OnceLock<String> = OnceLock::new();

/// Initialize logging. Call once at startup.
/// - `group` formats every line; later calls keep the first group.
/// - If `log_file` is Some, all lines are also appended to that path.
///
/// Returns the generated run_id.
pub fn init(group: LoggerGroup, log_file: Option<PathBuf>) -> String {
    let rid = RUN_ID
        .get_or_init(|| {
            // Short correlation id: time xor pid
            let now = SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default();
            format!("{:08x}", ((now.as_nanos() as u64) ^ (std::process::id() as u64)) as u32)
        })
        .clone();

    let _ = GROUP.set(group);
    let sink = LOG_FILE.get_or_init(|| Mutex::new(None));

    if let Some(path) = log_file {
        match OpenOptions::new().create(true).append(true).open(&path) {
            Ok(f) => {
                if let Ok(mut guard) = sink.lock() {
                    *guard = Some(f);
                }
            }
            Err(e) => {
                log_line(Severity::Warning, "LOG", &format!("failed to open log file {}: {e}", path.display()));
            }
        }
    }

    rid
}

/// Current run id (empty if init() wasn't called).
pub fn run_id() -> &'static str {
    RUN_ID.get().map(|s| s.as_str()).unwrap_or("")
}

/// The installed group, or a default one named after the binary.
pub fn group() -> &'static LoggerGroup {
    GROUP.get_or_init(|| LoggerGroup::new(env!("CARGO_PKG_NAME")))
}

/// Format one line through the group and write it to stderr + optional file sink.
///
/// Must be visible to the macros (crate scope). The reported file:line is the
/// macro call site.
#[track_caller]
pub(crate) fn log_line(severity: Severity, tag: &str, msg: &str) {
    let line = group().get(severity).format(&format!("[{tag}] {msg}"));

    eprintln!("{line}");

    if let Some(m) = LOG_FILE.get() {
        if let Ok(mut guard) = m.lock() {
            if let Some(f) = guard.as_mut() {
                let _ = writeln!(f, "{line}");
                let _ = f.flush();
            }
        }
    }
}

#[macro_export]
macro_rules! logi {
    ($tag:expr, $($arg:tt)*) => {{
        let msg = format!($($arg)*);
        $crate::logging::log_line(::faaslog_core::Severity::Info, $tag, &msg);
    }};
}

#[macro_export]
macro_rules! logw {
    ($tag:expr, $($arg:tt)*) => {{
        let msg = format!($($arg)*);
        $crate::logging::log_line(::faaslog_core::Severity::Warning, $tag, &msg);
    }};
}

#[macro_export]
macro_rules! loge {
    ($tag:expr, $($arg:tt)*) => {{
        let msg = format!($($arg)*);
        $crate::logging::log_line(::faaslog_core::Severity::Error, $tag, &msg);
    }};
}
