//! Error types and the values describing where errors come from.
//!
//! # Examples
//!
//! ```
//! use errstr::{ErrorStr, Site};
//!
//! let root = ErrorStr::new_at("connection refused", Site::new("db::connect", "src/db.rs", 21, 5));
//! let err = ErrorStr::wrap(root, "loading users");
//!
//! println!("{}", err.display_string());
//! // Output: loading users [<unknown func> <file>:<line>]
//! assert_eq!(err.error_chain(), "loading users -> connection refused");
//! ```

pub mod alloc_type;
pub mod error_formatter;
pub mod error_str;
pub mod site;

/// Serializable error snapshots (requires `serde` feature)
#[cfg(feature = "serde")]
pub mod report;
/// Raw stack snapshots (requires `backtrace` feature)
#[cfg(feature = "backtrace")]
pub mod stack;

pub use error_formatter::ErrorFormatConfig;
pub use error_str::{ErrorStr, SharedError};
#[cfg(feature = "serde")]
pub use report::ErrorReport;
pub use site::{Location, Site, UNKNOWN_FUNCTION};
#[cfg(feature = "backtrace")]
pub use stack::StackSnapshot;

/// Result alias whose error is [`ErrorStr`].
pub type Result<T, E = ErrorStr> = core::result::Result<T, E>;
