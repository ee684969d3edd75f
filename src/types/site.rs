//! Construction sites and their resolved form.
//!
//! A [`Site`] is captured eagerly, either through `#[track_caller]` or through
//! the [`site!`](crate::site) macro, and costs nothing to keep around. A
//! [`Location`] is the resolved `(function, file, line)` triple every origin
//! kind converts into when an error is rendered.
//!
//! # Examples
//!
//! ```
//! use errstr::{site, Site};
//!
//! let here = Site::caller();
//! assert!(here.file().ends_with(".rs"));
//! assert!(here.function().is_empty());
//!
//! let named = site!();
//! assert!(!named.function().is_empty());
//! ```
use core::fmt;
use core::panic;

use crate::types::alloc_type::Cow;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Placeholder rendered when the function of a location is unknown.
pub const UNKNOWN_FUNCTION: &str = "<unknown func>";

/// A call site captured at the moment an error was built.
///
/// Empty strings mark the parts that could not be captured: plain
/// `#[track_caller]` capture knows file, line and column but not the
/// enclosing function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Site {
    function: &'static str,
    file: &'static str,
    line: u32,
    column: u32,
}

impl Site {
    /// A site with nothing known about it.
    pub const UNKNOWN: Site = Site { function: "", file: "", line: 0, column: 0 };

    /// Creates a site from explicit parts.
    #[inline]
    pub const fn new(function: &'static str, file: &'static str, line: u32, column: u32) -> Self {
        Self { function, file, line, column }
    }

    /// Captures the location of the caller.
    ///
    /// Inside a `#[track_caller]` function this reports that function's
    /// caller instead, so each annotated layer is skipped transparently.
    #[track_caller]
    #[inline]
    pub fn caller() -> Self {
        Self::from(panic::Location::caller())
    }

    /// Returns a copy of this site with the function path replaced.
    #[inline]
    pub const fn with_function(self, function: &'static str) -> Self {
        Self { function, ..self }
    }

    #[inline]
    pub fn function(&self) -> &'static str {
        self.function
    }

    #[inline]
    pub fn file(&self) -> &'static str {
        self.file
    }

    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns `true` when at least the file is known.
    #[inline]
    pub fn is_known(&self) -> bool {
        !self.file.is_empty()
    }

    /// Converts the site into its resolved triple without allocating.
    #[inline]
    pub fn location(&self) -> Location {
        Location {
            function: Cow::Borrowed(self.function),
            file: Cow::Borrowed(self.file),
            line: self.line,
        }
    }
}

impl From<&'static panic::Location<'static>> for Site {
    #[inline]
    fn from(location: &'static panic::Location<'static>) -> Self {
        Self::new("", location.file(), location.line(), location.column())
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.location(), f)
    }
}

/// A resolved construction site: function path, file path and line.
///
/// The default value (empty, empty, `0`) is what resolution yields when
/// nothing could be determined.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct Location {
    pub function: Cow<'static, str>,
    pub file: Cow<'static, str>,
    pub line: u32,
}

impl Location {
    /// Returns `true` if any part of the location is known.
    #[inline]
    pub fn is_resolved(&self) -> bool {
        !self.function.is_empty() || !self.file.is_empty()
    }

    /// Splits the location into `(function, file, line)`.
    #[inline]
    pub fn into_parts(self) -> (Cow<'static, str>, Cow<'static, str>, u32) {
        (self.function, self.file, self.line)
    }
}

impl From<Site> for Location {
    #[inline]
    fn from(site: Site) -> Self {
        site.location()
    }
}

/// Renders `<function> <file>:<line>`.
///
/// An unknown function becomes [`UNKNOWN_FUNCTION`]; an unknown file drops
/// the `<file>:<line>` part entirely.
impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.function.is_empty() {
            f.write_str(UNKNOWN_FUNCTION)?;
        } else {
            f.write_str(&self.function)?;
        }
        if !self.file.is_empty() {
            write!(f, " {}:{}", self.file, self.line)?;
        }
        Ok(())
    }
}

/// Strips the helper item and closure segments that
/// [`function_name!`](crate::function_name) leaves on a type name.
#[doc(hidden)]
pub fn trim_function_path(raw: &'static str) -> &'static str {
    let mut path = raw.strip_suffix("::__errstr_here").unwrap_or(raw);
    while let Some(outer) = path.strip_suffix("::{{closure}}") {
        path = outer;
    }
    path
}
