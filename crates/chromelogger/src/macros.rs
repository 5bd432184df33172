//! Variadic logging macros.
//!
//! Arguments are converted with [`value::to_value`](crate::value::to_value)
//! unless prefixed with a sigil, following the `tracing` field convention:
//! `%x` logs `x`'s `Display` rendering, `?x` its `Debug` rendering.

/// Builds a `Vec<Value>` from log arguments.
///
/// ```
/// use chromelogger::values;
///
/// let items = values!["id", 7, %std::net::Ipv4Addr::LOCALHOST, ?Some(1)];
/// assert_eq!(items[2], "127.0.0.1");
/// assert_eq!(items[3], "Some(1)");
/// ```
#[macro_export]
macro_rules! values {
    (@acc [$($acc:expr,)*]) => {{
        let values: ::std::vec::Vec<$crate::Value> = ::std::vec![$($acc),*];
        values
    }};
    (@acc [$($acc:expr,)*] % $e:expr $(, $($rest:tt)*)?) => {
        $crate::values!(@acc [$($acc,)* $crate::value::display(&$e),] $($($rest)*)?)
    };
    (@acc [$($acc:expr,)*] ? $e:expr $(, $($rest:tt)*)?) => {
        $crate::values!(@acc [$($acc,)* $crate::value::debug(&$e),] $($($rest)*)?)
    };
    (@acc [$($acc:expr,)*] $e:expr $(, $($rest:tt)*)?) => {
        $crate::values!(@acc [$($acc,)* $crate::value::to_value(&$e),] $($($rest)*)?)
    };
    ($($args:tt)*) => {
        $crate::values!(@acc [] $($args)*)
    };
}

/// Logs an informational row: `log!(session, value, ...)`.
#[macro_export]
macro_rules! log {
    ($session:expr $(, $($arg:tt)*)?) => {
        $crate::Session::log(&$session, $crate::values!($($($arg)*)?))
    };
}

/// Logs a warning row: `warn!(session, value, ...)`.
#[macro_export]
macro_rules! warn {
    ($session:expr $(, $($arg:tt)*)?) => {
        $crate::Session::warn(&$session, $crate::values!($($($arg)*)?))
    };
}

/// Logs one formatted string: `logf!(session, "{} users", n)`.
#[macro_export]
macro_rules! logf {
    ($session:expr, $($arg:tt)+) => {
        $crate::Session::logf(&$session, ::std::format_args!($($arg)+))
    };
}

/// Logs a row with a free-form tag: `log_tagged!(session, "error", value, ...)`.
#[macro_export]
macro_rules! log_tagged {
    ($session:expr, $tag:expr $(, $($arg:tt)*)?) => {
        $crate::Session::log_tagged(&$session, $tag, $crate::values!($($($arg)*)?))
    };
}
