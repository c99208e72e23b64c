//! Source location of the code that asked for a line.
//!
//! Locations come from `#[track_caller]`: every public entry point between the
//! user's call site and [`Caller::here`] carries the attribute, so the location
//! seen here is the user's, not the logger's. Adding a wrapper without the
//! attribute silently moves the reported location into the wrapper.

use std::panic::Location;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Caller {
    file: &'static str,
    line: u32,
}

impl Caller {
    /// File name written when no location is available.
    pub const UNKNOWN_FILE: &'static str = "???";

    pub const fn new(file: &'static str, line: u32) -> Self {
        Self { file, line }
    }

    /// Location of the nearest caller not marked `#[track_caller]`.
    #[track_caller]
    pub fn here() -> Self {
        Self::from_location(Location::caller())
    }

    pub fn from_location(loc: &'static Location<'static>) -> Self {
        Self::new(loc.file(), loc.line())
    }

    /// Placeholder used when resolution failed: `???` line 0.
    pub const fn unknown() -> Self {
        Self::new(Self::UNKNOWN_FILE, 0)
    }

    pub fn file(&self) -> &'static str {
        self.file
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    /// The final path element of [`file`](Self::file).
    pub fn short_file(&self) -> &'static str {
        match self.file.rfind(['/', '\\']) {
            Some(idx) => &self.file[idx + 1..],
            None => self.file,
        }
    }
}

impl From<&'static Location<'static>> for Caller {
    fn from(loc: &'static Location<'static>) -> Self {
        Self::from_location(loc)
    }
}
