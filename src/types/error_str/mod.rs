//! Error annotated with a message, an optional shared cause and its origin.
//!
//! This module provides [`ErrorStr`], the crate's only error kind. Every
//! constructor records where it was called from:
//! - `#[track_caller]` constructors ([`ErrorStr::new`], [`ErrorStr::wrap`], ...)
//!   record file, line and column of their caller
//! - the `*_at` constructors take an explicit [`Site`], which is how the
//!   macros attach the enclosing function path
//! - with the `backtrace` feature, the `*_skip` constructors take a raw stack
//!   snapshot and honor an explicit skip depth

use core::error::Error;
use core::fmt;

use crate::convert::{share, share_arc};
use crate::traits::chain;
use crate::types::alloc_type::{Arc, String, ToString};
use crate::types::error_formatter::ErrorFormatConfig;
use crate::types::site::{Location, Site};
#[cfg(feature = "backtrace")]
use crate::types::stack::StackSnapshot;

mod traits;

/// Shared, thread-safe handle to any error. Used for causes.
pub type SharedError = Arc<dyn Error + Send + Sync + 'static>;

/// Where an error remembers having been built.
#[derive(Debug, Clone)]
pub(crate) enum Origin {
    Site(Site),
    #[cfg(feature = "backtrace")]
    Stack(StackSnapshot),
}

impl Origin {
    fn location(&self) -> Location {
        match self {
            Self::Site(site) => site.location(),
            #[cfg(feature = "backtrace")]
            Self::Stack(stack) => stack.location(),
        }
    }
}

/// An error carrying a message, an optional cause and its construction site.
///
/// All fields are fixed at construction. Cloning shares the cause.
///
/// # Examples
///
/// ```
/// use errstr::ErrorStr;
///
/// let io = std::io::Error::other("disk full");
/// let err = ErrorStr::wrap(io, "saving snapshot");
///
/// assert_eq!(err.to_string(), "saving snapshot");
/// assert!(err.display_string().starts_with("saving snapshot ["));
/// assert_eq!(err.cause().map(|c| c.to_string()), Some("disk full".to_string()));
/// ```
#[must_use]
#[derive(Clone)]
pub struct ErrorStr {
    message: String,
    cause: Option<SharedError>,
    origin: Origin,
}

impl ErrorStr {
    #[inline]
    fn build(message: String, cause: Option<SharedError>, origin: Origin) -> Self {
        Self { message, cause, origin }
    }

    /// Creates an error without a cause, located at the caller.
    #[track_caller]
    #[inline]
    pub fn new(message: impl Into<String>) -> Self {
        Self::new_at(message, Site::caller())
    }

    /// Creates an error whose message is formatted from `args`.
    ///
    /// ```
    /// use errstr::ErrorStr;
    ///
    /// let err = ErrorStr::format(format_args!("code={}", 42));
    /// assert_eq!(err.message(), "code=42");
    /// ```
    #[track_caller]
    #[inline]
    pub fn format(args: fmt::Arguments<'_>) -> Self {
        Self::new_at(args.to_string(), Site::caller())
    }

    /// Wraps `cause` with a message, located at the caller.
    ///
    /// Passing a [`SharedError`] (or an `Arc<ErrorStr>`) keeps the very same
    /// allocation as the cause instead of nesting it.
    #[track_caller]
    #[inline]
    pub fn wrap<E>(cause: E, message: impl Into<String>) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self::wrap_at(cause, message, Site::caller())
    }

    /// Wraps a typed shared cause, keeping the caller's allocation.
    ///
    /// [`ErrorStr::wrap`] only recognises `SharedError` and `Arc<ErrorStr>`;
    /// any other `Arc<E>` would be moved into a fresh allocation and stop
    /// being found by [`ErrorStr::matches`].
    ///
    /// ```
    /// use errstr::ErrorStr;
    /// use std::sync::Arc;
    ///
    /// let refused = Arc::new(std::io::Error::other("refused"));
    /// let err = ErrorStr::wrap_arc(refused.clone(), "dialing");
    /// assert!(err.matches(&*refused));
    /// ```
    #[track_caller]
    #[inline]
    pub fn wrap_arc<E>(cause: Arc<E>, message: impl Into<String>) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self::wrap_arc_at(cause, message, Site::caller())
    }

    /// Wraps `cause` with a message formatted from `args`.
    #[track_caller]
    #[inline]
    pub fn wrapf<E>(cause: E, args: fmt::Arguments<'_>) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self::wrap_at(cause, args.to_string(), Site::caller())
    }

    /// [`ErrorStr::wrap_arc`] located at an explicitly supplied site.
    #[inline]
    pub fn wrap_arc_at<E>(cause: Arc<E>, message: impl Into<String>, site: Site) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self::build(message.into(), Some(share_arc(cause)), Origin::Site(site))
    }

    /// Creates an error located at an explicitly supplied site.
    ///
    /// Helpers that build errors on behalf of their own callers capture the
    /// site once and pass it down.
    #[inline]
    pub fn new_at(message: impl Into<String>, site: Site) -> Self {
        Self::build(message.into(), None, Origin::Site(site))
    }

    /// Wraps `cause`, located at an explicitly supplied site.
    #[inline]
    pub fn wrap_at<E>(cause: E, message: impl Into<String>, site: Site) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self::build(message.into(), Some(share(cause)), Origin::Site(site))
    }

    /// Creates an error from a stack snapshot taken `skip` frames above the
    /// direct caller.
    ///
    /// `skip == 0` reports the caller of `new_skip`; a helper built on top of
    /// it passes `1` to report its own caller instead.
    #[cfg(feature = "backtrace")]
    #[inline(never)]
    pub fn new_skip(message: impl Into<String>, skip: usize) -> Self {
        Self::build(message.into(), None, Origin::Stack(StackSnapshot::capture(skip)))
    }

    /// [`ErrorStr::new_skip`] with a formatted message.
    #[cfg(feature = "backtrace")]
    #[inline(never)]
    pub fn format_skip(skip: usize, args: fmt::Arguments<'_>) -> Self {
        Self::build(args.to_string(), None, Origin::Stack(StackSnapshot::capture(skip)))
    }

    /// Wraps `cause`, located by a stack snapshot honoring `skip`.
    #[cfg(feature = "backtrace")]
    #[inline(never)]
    pub fn wrap_skip<E>(cause: E, message: impl Into<String>, skip: usize) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self::build(message.into(), Some(share(cause)), Origin::Stack(StackSnapshot::capture(skip)))
    }

    /// [`ErrorStr::wrap_skip`] with a formatted message.
    #[cfg(feature = "backtrace")]
    #[inline(never)]
    pub fn wrapf_skip<E>(skip: usize, cause: E, args: fmt::Arguments<'_>) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self::build(args.to_string(), Some(share(cause)), Origin::Stack(StackSnapshot::capture(skip)))
    }

    /// Returns the message verbatim.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the wrapped cause, if any.
    #[inline]
    pub fn cause(&self) -> Option<&SharedError> {
        self.cause.as_ref()
    }

    /// Returns the eagerly captured site, if this error was located that way.
    #[inline]
    pub fn site(&self) -> Option<Site> {
        match &self.origin {
            Origin::Site(site) => Some(*site),
            #[cfg(feature = "backtrace")]
            Origin::Stack(_) => None,
        }
    }

    /// Resolves the construction site.
    ///
    /// Nothing is cached: a stack snapshot is symbolised on every call.
    /// Unresolvable origins yield [`Location::default`].
    #[inline]
    pub fn location(&self) -> Location {
        self.origin.location()
    }

    /// Renders `"<message> [<function> <file>:<line>]"`.
    ///
    /// ```
    /// use errstr::{ErrorStr, Site};
    ///
    /// let err = ErrorStr::new_at("boom", Site::new("app::run", "src/app.rs", 3, 9));
    /// assert_eq!(err.display_string(), "boom [app::run src/app.rs:3]");
    ///
    /// let err = ErrorStr::new_at("boom", Site::UNKNOWN);
    /// assert_eq!(err.display_string(), "boom [<unknown func>]");
    /// ```
    #[must_use]
    pub fn display_string(&self) -> String {
        alloc::format!("{} [{}]", self.message, self.location())
    }

    /// Returns `true` if `target` is this error or any error of its cause
    /// chain, compared by identity.
    ///
    /// ```
    /// use errstr::{ErrorStr, SharedError};
    /// use std::sync::Arc;
    ///
    /// let root: SharedError = Arc::new(ErrorStr::new("root"));
    /// let mid = ErrorStr::wrap(root.clone(), "mid");
    /// let top = ErrorStr::wrap(mid, "top");
    ///
    /// assert!(top.matches(&*root));
    /// assert!(!top.matches(&ErrorStr::new("root")));
    /// ```
    #[inline]
    pub fn matches(&self, target: &(dyn Error + 'static)) -> bool {
        chain::contains(self, target)
    }

    /// Formats the whole chain with the default configuration.
    ///
    /// ```
    /// use errstr::ErrorStr;
    ///
    /// let err = ErrorStr::wrap(ErrorStr::new("refused"), "connecting");
    /// assert_eq!(err.error_chain(), "connecting -> refused");
    /// ```
    #[must_use]
    pub fn error_chain(&self) -> String {
        self.fmt_chain(&ErrorFormatConfig::default())
    }

    /// Formats the whole chain with a custom configuration.
    #[must_use]
    pub fn fmt_chain(&self, config: &ErrorFormatConfig) -> String {
        config.format(self)
    }

    /// Moves the error behind a [`SharedError`] so it can be used as a cause
    /// by several wrappers.
    #[inline]
    pub fn into_shared(self) -> SharedError {
        Arc::new(self)
    }
}
