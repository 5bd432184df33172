/// Protocol version stamped into every payload.
pub const VERSION: &str = "0.1";

/// Response header the browser extension reads.
pub const HEADER_NAME: &str = "X-ChromeLogger-Data";

/// Column labels, in the positional order of every row.
pub const COLUMNS: [&str; 3] = ["log", "backtrace", "type"];

/// Backtrace recorded when the call site cannot be determined.
pub const UNKNOWN_LOCATION: &str = "??? : 0";

/// Row type tags.
///
/// The `type` column is an open string. These are the values this
/// crate emits itself; the extension falls back to `console.log` for
/// anything it does not recognise.
pub mod tag {
    /// Plain informational row.
    pub const INFO: &str = "";

    /// Warning row, rendered with `console.warn`.
    pub const WARN: &str = "warn";
}
