//! Extension trait for wrapping the error of a `Result` in place.
//!
//! # Examples
//!
//! ```
//! use errstr::traits::ResultExt;
//! use errstr::ErrorStr;
//!
//! fn load_config() -> Result<String, ErrorStr> {
//!     std::fs::read_to_string("config.toml").wrap("loading configuration")
//! }
//!
//! let err = load_config().unwrap_err();
//! assert_eq!(err.message(), "loading configuration");
//! assert!(err.cause().is_some());
//! ```

use core::error::Error;

use crate::types::alloc_type::String;
use crate::types::ErrorStr;

/// Wraps the error of a `Result` into an [`ErrorStr`] located at the caller.
///
/// Both methods are `#[track_caller]`: the recorded site is the line calling
/// `wrap`/`wrap_with`, not this crate.
pub trait ResultExt<T> {
    /// Wraps the error with a fixed message.
    fn wrap(self, message: impl Into<String>) -> Result<T, ErrorStr>;

    /// Wraps the error with a message built only when there is an error.
    ///
    /// ```
    /// use errstr::traits::ResultExt;
    ///
    /// let user_id = 42;
    /// let result: Result<(), std::io::Error> = Err(std::io::Error::other("not found"));
    /// let err = result.wrap_with(|| format!("loading user {user_id}")).unwrap_err();
    /// assert_eq!(err.message(), "loading user 42");
    /// ```
    fn wrap_with<F, S>(self, f: F) -> Result<T, ErrorStr>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Error + Send + Sync + 'static,
{
    #[track_caller]
    #[inline]
    fn wrap(self, message: impl Into<String>) -> Result<T, ErrorStr> {
        match self {
            Ok(value) => Ok(value),
            Err(error) => Err(ErrorStr::wrap(error, message)),
        }
    }

    #[track_caller]
    #[inline]
    fn wrap_with<F, S>(self, f: F) -> Result<T, ErrorStr>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        match self {
            Ok(value) => Ok(value),
            Err(error) => Err(ErrorStr::wrap(error, f())),
        }
    }
}
