//! Traits and free functions that work on errors and results.
//!
//! - [`ChainExt`] and the [`chain`] module: cause-chain traversal and
//!   identity matching for any error type
//! - [`ResultExt`]: `.wrap(..)` / `.wrap_with(..)` on any `Result`
//!
//! # Examples
//!
//! ```
//! use errstr::traits::{ChainExt, ResultExt};
//!
//! let result: Result<(), std::io::Error> = Err(std::io::Error::other("timeout"));
//! let err = result.wrap("syncing").unwrap_err();
//!
//! assert_eq!(err.chain().count(), 2);
//! assert_eq!(err.root_cause().to_string(), "timeout");
//! ```

pub mod chain;
pub mod result_ext;

pub use chain::{Chain, ChainExt};
pub use result_ext::ResultExt;
