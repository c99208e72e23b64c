//! Timestamped, mutex-serialized line formatting.
//!
//! A [`Logger`] renders an already-composed message into one line with an
//! optional prefix, date, time, microseconds, UTC conversion and caller
//! `file:line`, chosen by [`Flags`]. A [`LoggerGroup`] bundles info / warning /
//! error loggers for one function name.
//!
//! Lines are returned as owned `String`s; writing them anywhere is up to the caller.

pub mod caller;
pub mod clock;
pub mod codes;
pub mod config;
pub mod error;
pub mod flags;
pub mod group;
pub mod itoa;
pub mod logger;
pub mod severity;

pub use caller::Caller;
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{ConfigMode, GroupConfig};
pub use error::LogError;
pub use flags::{FileStyle, FlagOptions, Flags, PrefixPlacement};
pub use group::{LoggerGroup, GROUP_FLAGS};
pub use logger::Logger;
pub use severity::Severity;
