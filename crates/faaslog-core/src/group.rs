//! Info / warning / error loggers for one function.

use crate::clock::{Clock, SystemClock};
use crate::flags::Flags;
use crate::logger::Logger;
use crate::severity::Severity;

/// Flags every group logger gets unless told otherwise.
pub const GROUP_FLAGS: Flags = Flags::DATE.union(Flags::TIME).union(Flags::SHORT_FILE);

/// Three independent loggers sharing a label.
///
/// Each logger owns its own buffer and lock, so the three never serialize
/// against each other.
#[derive(Debug)]
pub struct LoggerGroup {
    info: Logger,
    warning: Logger,
    error: Logger,
}

impl LoggerGroup {
    pub fn new(label: &str) -> Self {
        Self::with_flags(label, GROUP_FLAGS)
    }

    pub fn with_flags(label: &str, flags: Flags) -> Self {
        Self::with_clock(label, flags, SystemClock)
    }

    pub fn with_clock<C: Clock + Clone + 'static>(label: &str, flags: Flags, clock: C) -> Self {
        let make = |s: Severity| Logger::with_clock(s.prefix_for(label), flags, clock.clone());
        Self {
            info: make(Severity::Info),
            warning: make(Severity::Warning),
            error: make(Severity::Error),
        }
    }

    pub fn info(&self) -> &Logger {
        &self.info
    }

    pub fn warning(&self) -> &Logger {
        &self.warning
    }

    pub fn error(&self) -> &Logger {
        &self.error
    }

    pub fn get(&self, severity: Severity) -> &Logger {
        match severity {
            Severity::Info => &self.info,
            Severity::Warning => &self.warning,
            Severity::Error => &self.error,
        }
    }
}
