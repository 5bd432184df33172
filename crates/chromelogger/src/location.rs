use std::fmt;
use std::panic::Location;

use chromelogger_protocol::UNKNOWN_LOCATION;

/// Source position recorded in a row's `backtrace` column.
///
/// Public entry points are `#[track_caller]` and capture this with
/// [`CallSite::caller`], so wrappers that are themselves
/// `#[track_caller]` keep reporting their own caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    position: Option<(&'static str, u32)>,
}

impl CallSite {
    /// Site of the nearest caller not marked `#[track_caller]`.
    #[track_caller]
    pub fn caller() -> Self {
        Self::from_location(Location::caller())
    }

    pub fn from_location(location: &'static Location<'static>) -> Self {
        Self::new(location.file(), location.line())
    }

    pub const fn new(file: &'static str, line: u32) -> Self {
        Self {
            position: Some((file, line)),
        }
    }

    /// A site that renders as `"??? : 0"`.
    pub const fn unknown() -> Self {
        Self { position: None }
    }

    pub fn file(&self) -> Option<&'static str> {
        self.position.map(|(file, _)| file)
    }

    pub fn line(&self) -> Option<u32> {
        self.position.map(|(_, line)| line)
    }

    /// The `"<file> : <line>"` string sent on the wire.
    pub fn backtrace(&self) -> String {
        self.to_string()
    }
}

impl Default for CallSite {
    fn default() -> Self {
        Self::unknown()
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.position {
            Some((file, line)) => write!(f, "{file} : {line}"),
            None => f.write_str(UNKNOWN_LOCATION),
        }
    }
}
