//! Formatting options for a [`Logger`](crate::Logger).
//!
//! `Flags` is the compact set used at runtime; `FlagOptions` is the same set as
//! named booleans, which is what configuration files carry.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// Set of optional elements written in front of each message.
///
/// Any combination is accepted. Contradictory combinations resolve to the most
/// specific option: short file names win over long ones (see [`Flags::file_style`]).
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Flags(u8);

impl Flags {
    /// Nothing but prefix and message.
    pub const NONE: Flags = Flags(0);
    /// The date: `2009-01-23`.
    pub const DATE: Flags = Flags(1 << 0);
    /// The wall-clock time: `01:23:23`.
    pub const TIME: Flags = Flags(1 << 1);
    /// Microsecond resolution: `01:23:23.123123`. Engages the time field.
    pub const MICROSECONDS: Flags = Flags(1 << 2);
    /// Full file name and line number: `/a/b/c/d.rs:23`.
    pub const LONG_FILE: Flags = Flags(1 << 3);
    /// Final file name element and line number: `d.rs:23`. Overrides `LONG_FILE`.
    pub const SHORT_FILE: Flags = Flags(1 << 4);
    /// Render date and time in UTC instead of the local zone.
    pub const UTC: Flags = Flags(1 << 5);
    /// Move the prefix from the start of the line to just before the message.
    pub const PREFIX_AFTER_METADATA: Flags = Flags(1 << 6);
    /// Date and time.
    pub const STD: Flags = Flags(Self::DATE.0 | Self::TIME.0);

    pub const fn from_bits(bits: u8) -> Self {
        Flags(bits)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn union(self, other: Flags) -> Flags {
        Flags(self.0 | other.0)
    }

    /// True when every bit of `other` is set.
    pub const fn contains(self, other: Flags) -> bool {
        self.0 & other.0 == other.0
    }

    /// True when any bit of `other` is set.
    pub const fn intersects(self, other: Flags) -> bool {
        self.0 & other.0 != 0
    }

    /// Whether any date or time field is written.
    pub const fn wants_timestamp(self) -> bool {
        self.intersects(Self::DATE.union(Self::TIME).union(Self::MICROSECONDS))
    }

    /// Whether the `HH:MM:SS` field is written.
    pub const fn wants_clock(self) -> bool {
        self.intersects(Self::TIME.union(Self::MICROSECONDS))
    }

    /// Which source-location annotation to write, if any.
    ///
    /// Short wins when both file flags are set.
    pub const fn file_style(self) -> Option<FileStyle> {
        if self.contains(Self::SHORT_FILE) {
            Some(FileStyle::Short)
        } else if self.contains(Self::LONG_FILE) {
            Some(FileStyle::Long)
        } else {
            None
        }
    }

    pub const fn prefix_placement(self) -> PrefixPlacement {
        if self.contains(Self::PREFIX_AFTER_METADATA) {
            PrefixPlacement::BeforeMessage
        } else {
            PrefixPlacement::LineStart
        }
    }
}

impl BitOr for Flags {
    type Output = Flags;

    fn bitor(self, rhs: Flags) -> Flags {
        self.union(rhs)
    }
}

impl BitOrAssign for Flags {
    fn bitor_assign(&mut self, rhs: Flags) {
        *self = self.union(rhs);
    }
}

impl fmt::Debug for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAMES: [(Flags, &str); 7] = [
            (Flags::DATE, "DATE"),
            (Flags::TIME, "TIME"),
            (Flags::MICROSECONDS, "MICROSECONDS"),
            (Flags::LONG_FILE, "LONG_FILE"),
            (Flags::SHORT_FILE, "SHORT_FILE"),
            (Flags::UTC, "UTC"),
            (Flags::PREFIX_AFTER_METADATA, "PREFIX_AFTER_METADATA"),
        ];

        write!(f, "Flags(")?;
        let mut first = true;
        for (flag, name) in NAMES {
            if self.contains(flag) {
                if !first {
                    write!(f, " | ")?;
                }
                write!(f, "{name}")?;
                first = false;
            }
        }
        let unknown = self.0 & !0x7f;
        if unknown != 0 {
            if !first {
                write!(f, " | ")?;
            }
            write!(f, "{unknown:#04x}")?;
            first = false;
        }
        if first {
            write!(f, "NONE")?;
        }
        write!(f, ")")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStyle {
    /// Final path element only.
    Short,
    /// The path as recorded at compile time.
    Long,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixPlacement {
    LineStart,
    BeforeMessage,
}

/// Named-boolean form of [`Flags`], as found in configuration files.
///
/// Missing keys default to `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct FlagOptions {
    pub date: bool,
    pub time: bool,
    pub microseconds: bool,
    pub long_file: bool,
    pub short_file: bool,
    pub utc: bool,
    pub prefix_after_metadata: bool,
}

impl From<FlagOptions> for Flags {
    fn from(o: FlagOptions) -> Self {
        let mut flags = Flags::NONE;
        let pairs = [
            (o.date, Flags::DATE),
            (o.time, Flags::TIME),
            (o.microseconds, Flags::MICROSECONDS),
            (o.long_file, Flags::LONG_FILE),
            (o.short_file, Flags::SHORT_FILE),
            (o.utc, Flags::UTC),
            (o.prefix_after_metadata, Flags::PREFIX_AFTER_METADATA),
        ];
        for (on, flag) in pairs {
            if on {
                flags |= flag;
            }
        }
        flags
    }
}

impl From<Flags> for FlagOptions {
    fn from(f: Flags) -> Self {
        FlagOptions {
            date: f.contains(Flags::DATE),
            time: f.contains(Flags::TIME),
            microseconds: f.contains(Flags::MICROSECONDS),
            long_file: f.contains(Flags::LONG_FILE),
            short_file: f.contains(Flags::SHORT_FILE),
            utc: f.contains(Flags::UTC),
            prefix_after_metadata: f.contains(Flags::PREFIX_AFTER_METADATA),
        }
    }
}
