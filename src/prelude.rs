//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use errstr::prelude::*;
//!
//! fn open_store(path: &str) -> Result<String> {
//!     std::fs::read_to_string(path).wrap_with(|| format!("opening store {path}"))
//! }
//!
//! let err = open_store("/definitely/missing").unwrap_err();
//! assert!(err.display_string().starts_with("opening store /definitely/missing ["));
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`errstr!`], [`errorf!`], [`wrap!`], [`wrapf!`], [`site!`]
//! - **Types**: [`ErrorStr`], [`SharedError`], [`Site`], [`Location`]
//! - **Traits**: [`ResultExt`], [`ChainExt`]

// Macros
pub use crate::{errorf, errstr, site, wrap, wrapf};

// Core types
pub use crate::types::{ErrorStr, Location, Result, SharedError, Site};

// Traits
pub use crate::traits::{ChainExt, ResultExt};
