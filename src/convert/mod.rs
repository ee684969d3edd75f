//! Conversions from arbitrary values, mostly panic payloads, into errors.
//!
//! A payload recovered from `catch_unwind` is a `Box<dyn Any + Send>`. These
//! helpers turn it into something that satisfies the error contract without
//! losing an error that was already there.
//!
//! # Examples
//!
//! ```
//! use errstr::convert::{error_of, message_of};
//! use errstr::ErrorStr;
//!
//! let payload: Box<dyn std::any::Any + Send> = Box::new("plain string");
//! assert_eq!(message_of(&*payload), "plain string");
//!
//! let err = error_of(Box::new(ErrorStr::new("typed")));
//! assert_eq!(err.to_string(), "typed");
//! ```

use core::any::Any;
use core::error::Error;
use core::fmt;

use crate::types::alloc_type::{Arc, Box, String, ToString};
use crate::types::{ErrorStr, SharedError};

/// Minimal error made of a description only.
///
/// Used when a value that is not an error has to be presented as one; it
/// records no location.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SimpleError {
    message: String,
}

impl SimpleError {
    #[inline]
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for SimpleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error for SimpleError {}

/// Moves an error behind a [`SharedError`].
///
/// A value that already is a `SharedError` or an `Arc<ErrorStr>` is reused as
/// is, so the identity of a shared cause survives being wrapped again. Any
/// other `Arc<E>` is moved into a new allocation; pass it through
/// [`share_arc`] to keep its identity.
///
/// ```
/// use errstr::convert::share;
/// use errstr::{ErrorStr, SharedError};
/// use std::sync::Arc;
///
/// let shared: SharedError = Arc::new(ErrorStr::new("once"));
/// assert!(Arc::ptr_eq(&share(shared.clone()), &shared));
/// ```
pub fn share<E>(error: E) -> SharedError
where
    E: Error + Send + Sync + 'static,
{
    let any: &dyn Any = &error;
    if let Some(shared) = any.downcast_ref::<SharedError>() {
        return Arc::clone(shared);
    }
    if let Some(shared) = any.downcast_ref::<Arc<ErrorStr>>() {
        return Arc::clone(shared) as SharedError;
    }
    Arc::new(error)
}

/// Turns a typed shared error into a [`SharedError`] without reallocating.
///
/// ```
/// use errstr::convert::share_arc;
/// use std::sync::Arc;
///
/// let io = Arc::new(std::io::Error::other("refused"));
/// let shared = share_arc(io.clone());
/// assert!(std::ptr::addr_eq(Arc::as_ptr(&shared), Arc::as_ptr(&io)));
/// ```
#[inline]
pub fn share_arc<E>(error: Arc<E>) -> SharedError
where
    E: Error + Send + Sync + 'static,
{
    error
}

/// Describes an arbitrary value.
///
/// Errors known to this crate and boxed `dyn Error` values give their
/// description, strings are returned
/// verbatim and primitive numbers, `bool` and `char` use their `Display`
/// form. Anything else is described as `Box<dyn Any>`, like the standard
/// panic hook does.
pub fn message_of(value: &dyn Any) -> String {
    if let Some(err) = value.downcast_ref::<ErrorStr>() {
        return err.message().to_string();
    }
    if let Some(err) = described_error(value) {
        return err.to_string();
    }
    if let Some(text) = value.downcast_ref::<&'static str>() {
        return (*text).to_string();
    }
    if let Some(text) = value.downcast_ref::<String>() {
        return text.clone();
    }
    primitive_message(value).unwrap_or_else(|| String::from("Box<dyn Any>"))
}

/// Turns a recovered payload into an error.
///
/// A payload that already is an error is returned unchanged (a
/// [`SharedError`] keeps its identity). Anything else becomes a
/// [`SimpleError`] holding [`message_of`] the payload.
pub fn error_of(payload: Box<dyn Any + Send>) -> SharedError {
    let payload = match payload.downcast::<SharedError>() {
        Ok(shared) => return *shared,
        Err(payload) => payload,
    };
    let payload = match payload.downcast::<ErrorStr>() {
        Ok(err) => return Arc::new(*err),
        Err(payload) => payload,
    };
    let payload = match payload.downcast::<Arc<ErrorStr>>() {
        Ok(err) => return *err,
        Err(payload) => payload,
    };
    let payload = match payload.downcast::<Box<dyn Error + Send + Sync>>() {
        Ok(err) => return Arc::from(*err),
        Err(payload) => payload,
    };
    let payload = match payload.downcast::<SimpleError>() {
        Ok(err) => return Arc::new(*err),
        Err(payload) => payload,
    };
    Arc::new(SimpleError::new(message_of(&*payload)))
}

/// Presents any displayable value as an error.
///
/// ```
/// use errstr::convert::error_of_display;
///
/// assert_eq!(error_of_display(42).to_string(), "42");
/// ```
#[inline]
pub fn error_of_display<T: fmt::Display>(value: T) -> SharedError {
    Arc::new(SimpleError::new(value.to_string()))
}

/// Runs `f`, converting a panic into an error through [`error_of`].
///
/// ```
/// use errstr::convert::catch;
///
/// let err = catch(|| -> u8 { panic!("worker died") }).unwrap_err();
/// assert_eq!(err.to_string(), "worker died");
/// assert_eq!(catch(|| 7).ok(), Some(7));
/// ```
#[cfg(feature = "std")]
pub fn catch<F, T>(f: F) -> Result<T, SharedError>
where
    F: FnOnce() -> T + std::panic::UnwindSafe,
{
    std::panic::catch_unwind(f).map_err(error_of)
}

fn described_error(value: &dyn Any) -> Option<&dyn fmt::Display> {
    if let Some(err) = value.downcast_ref::<SharedError>() {
        return Some(err as &dyn fmt::Display);
    }
    if let Some(err) = value.downcast_ref::<Arc<ErrorStr>>() {
        return Some(err as &dyn fmt::Display);
    }
    if let Some(err) = value.downcast_ref::<Box<dyn Error + Send + Sync>>() {
        return Some(err as &dyn fmt::Display);
    }
    if let Some(err) = value.downcast_ref::<Box<dyn Error + Send>>() {
        return Some(err as &dyn fmt::Display);
    }
    if let Some(err) = value.downcast_ref::<Box<dyn Error>>() {
        return Some(err as &dyn fmt::Display);
    }
    value.downcast_ref::<SimpleError>().map(|err| err as &dyn fmt::Display)
}

fn primitive_message(value: &dyn Any) -> Option<String> {
    macro_rules! display_as {
        ($($ty:ty),* $(,)?) => {
            $(
                if let Some(v) = value.downcast_ref::<$ty>() {
                    return Some(v.to_string());
                }
            )*
        };
    }

    display_as!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char);
    None
}
