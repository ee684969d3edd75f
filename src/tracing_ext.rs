//! Tracing integration for errstr.
//!
//! Emits an [`ErrorStr`] as one structured `tracing` event carrying the
//! message, the resolved location and the immediate cause as fields.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! errstr = { version = "0.1", features = ["tracing"] }
//! ```

use crate::types::alloc_type::{String, ToString};
use crate::types::ErrorStr;

impl ErrorStr {
    /// Records this error as an `ERROR` level event.
    ///
    /// ```rust,ignore
    /// let err = ErrorStr::new("cache miss storm");
    /// err.trace();
    /// // ERROR errstr: error=cache miss storm function=<unknown func> file=src/cache.rs line=88
    /// ```
    pub fn trace(&self) {
        let location = self.location();
        let function: &str = if location.function.is_empty() {
            crate::types::UNKNOWN_FUNCTION
        } else {
            &location.function
        };
        let cause: String = self.cause().map(ToString::to_string).unwrap_or_default();

        tracing::error!(
            error = %self.message(),
            function = %function,
            file = %location.file,
            line = location.line,
            cause = %cause,
            "errstr"
        );
    }
}

/// Extension trait for logging the error of a `Result` on its way through.
pub trait ResultTraceExt {
    /// Calls [`ErrorStr::trace`] on an `Err` and returns `self` unchanged.
    fn trace_err(self) -> Self;
}

impl<T> ResultTraceExt for Result<T, ErrorStr> {
    #[inline]
    fn trace_err(self) -> Self {
        if let Err(error) = &self {
            error.trace();
        }
        self
    }
}
