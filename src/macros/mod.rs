//! Macros that build errors located at the invoking function.
//!
//! Unlike the `#[track_caller]` constructors, these also record the path of
//! the enclosing function, so the rendered location names it instead of the
//! `<unknown func>` placeholder:
//!
//! - [`macro@crate::function_name`] - path of the enclosing function
//! - [`macro@crate::site`] - a full [`Site`](crate::Site) for the current line
//! - [`macro@crate::errstr`] - a new error from a message
//! - [`macro@crate::errorf`] - a new error from a format string
//! - [`macro@crate::wrap`] - wraps a cause with a message
//! - [`macro@crate::wrapf`] - wraps a cause with a format string
//!
//! # Examples
//!
//! ```
//! use errstr::{errorf, wrapf};
//!
//! fn parse_port(raw: &str) -> Result<u16, errstr::ErrorStr> {
//!     raw.parse::<u16>().map_err(|e| wrapf!(e, "invalid port {raw:?}"))
//! }
//!
//! let err = parse_port("http").unwrap_err();
//! assert_eq!(err.message(), "invalid port \"http\"");
//! assert!(err.location().function.ends_with("parse_port"));
//!
//! let err = errorf!("code={}", 42);
//! assert_eq!(err.message(), "code=42");
//! ```

/// Expands to the path of the enclosing function as a `&'static str`.
///
/// Closures are reported as the function that defines them.
///
/// ```
/// fn handler() -> &'static str {
///     errstr::function_name!()
/// }
///
/// assert!(handler().ends_with("::handler"));
/// ```
#[macro_export]
macro_rules! function_name {
    () => {{
        fn __errstr_here() {}
        fn __errstr_type_name_of<T>(_: T) -> &'static str {
            ::core::any::type_name::<T>()
        }
        $crate::types::site::trim_function_path(__errstr_type_name_of(__errstr_here))
    }};
}

/// Captures the current function, file, line and column as a
/// [`Site`](crate::Site).
#[macro_export]
macro_rules! site {
    () => {
        $crate::Site::new($crate::function_name!(), file!(), line!(), column!())
    };
}

/// Creates an [`ErrorStr`](crate::ErrorStr) located at the current function.
///
/// ```
/// let err = errstr::errstr!("queue closed");
/// assert_eq!(err.message(), "queue closed");
/// assert_eq!(err.location().file, file!());
/// ```
#[macro_export]
macro_rules! errstr {
    ($message:expr $(,)?) => {
        $crate::ErrorStr::new_at($message, $crate::site!())
    };
}

/// Creates an [`ErrorStr`](crate::ErrorStr) from a format string, located at
/// the current function.
#[macro_export]
macro_rules! errorf {
    ($($arg:tt)+) => {
        $crate::ErrorStr::new_at($crate::__private::format!($($arg)+), $crate::site!())
    };
}

/// Wraps a cause in an [`ErrorStr`](crate::ErrorStr) located at the current
/// function.
#[macro_export]
macro_rules! wrap {
    ($cause:expr, $message:expr $(,)?) => {
        $crate::ErrorStr::wrap_at($cause, $message, $crate::site!())
    };
}

/// Wraps a cause with a formatted message, located at the current function.
#[macro_export]
macro_rules! wrapf {
    ($cause:expr, $($arg:tt)+) => {
        $crate::ErrorStr::wrap_at($cause, $crate::__private::format!($($arg)+), $crate::site!())
    };
}
