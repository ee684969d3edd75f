//! Serializable snapshot of an error and its chain.
//!
//! An [`ErrorStr`] holds trait objects and cannot be serialized directly;
//! [`ErrorReport`] captures what a structured log needs instead.
//!
//! # Examples
//!
//! ```
//! use errstr::{ErrorReport, ErrorStr, Site};
//!
//! let err = ErrorStr::wrap_at(
//!     std::io::Error::other("disk full"),
//!     "saving snapshot",
//!     Site::new("store::save", "src/store.rs", 40, 9),
//! );
//!
//! let json = serde_json::to_value(ErrorReport::new(&err)).unwrap();
//! assert_eq!(json["message"], "saving snapshot");
//! assert_eq!(json["location"]["line"], 40);
//! assert_eq!(json["causes"][0], "disk full");
//! ```
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::types::alloc_type::{String, ToString};
use crate::types::site::Location;
use crate::types::ErrorStr;

/// Message, resolved location and cause messages of an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReport {
    pub message: String,
    pub location: Location,
    /// Descriptions of the cause chain, outermost first.
    pub causes: SmallVec<[String; 2]>,
}

impl ErrorReport {
    /// Resolves the location and collects the chain of `error`.
    pub fn new(error: &ErrorStr) -> Self {
        let mut causes = SmallVec::new();
        let mut next = core::error::Error::source(error);
        while let Some(cause) = next {
            causes.push(cause.to_string());
            next = cause.source();
        }

        Self { message: error.message().to_string(), location: error.location(), causes }
    }
}

impl From<&ErrorStr> for ErrorReport {
    #[inline]
    fn from(error: &ErrorStr) -> Self {
        Self::new(error)
    }
}

impl ErrorStr {
    /// Shorthand for [`ErrorReport::new`].
    #[inline]
    pub fn report(&self) -> ErrorReport {
        ErrorReport::new(self)
    }
}
