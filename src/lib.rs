//! Errors annotated with a message, a shared cause and the site that built
//! them.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `errstr::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Annotating an error
//!
//! ```
//! use errstr::ErrorStr;
//!
//! let io = std::io::Error::other("connection reset");
//! let err = ErrorStr::wrap(io, "fetching manifest");
//!
//! assert_eq!(err.to_string(), "fetching manifest");
//! assert!(err.display_string().contains("src/lib.rs:"));
//! ```
//!
//! ## Naming the function
//!
//! ```
//! use errstr::errorf;
//!
//! fn sync_shard(id: u32) -> errstr::ErrorStr {
//!     errorf!("shard {} out of date", id)
//! }
//!
//! let err = sync_shard(7);
//! assert!(err.display_string().starts_with("shard 7 out of date ["));
//! assert!(err.location().function.ends_with("sync_shard"));
//! ```
//!
//! ## Matching through the chain
//!
//! ```
//! use errstr::{ErrorStr, SharedError};
//! use std::sync::Arc;
//!
//! let timeout: SharedError = Arc::new(ErrorStr::new("timeout"));
//! let err = ErrorStr::wrap(ErrorStr::wrap(timeout.clone(), "querying"), "rendering page");
//!
//! assert!(err.matches(&*timeout));
//! assert_eq!(err.error_chain(), "rendering page -> querying -> timeout");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Conversions from panic payloads and plain values into errors
pub mod convert;
/// Macros that capture the enclosing function
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Value-selection helpers
pub mod select;
/// Cause-chain traversal and `Result` extensions
pub mod traits;
/// `ErrorStr`, sites, locations and formatting
pub mod types;

/// Tracing integration (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use convert::{error_of, error_of_display, message_of, share, share_arc, SimpleError};
#[cfg(feature = "std")]
pub use convert::catch;
pub use traits::{Chain, ChainExt, ResultExt};
#[cfg(feature = "tracing")]
pub use tracing_ext::ResultTraceExt;
#[cfg(feature = "serde")]
pub use types::ErrorReport;
#[cfg(feature = "backtrace")]
pub use types::StackSnapshot;
pub use types::{ErrorFormatConfig, ErrorStr, Location, SharedError, Site, UNKNOWN_FUNCTION};

#[doc(hidden)]
pub mod __private {
    pub use alloc::format;
}
