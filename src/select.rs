//! Small value-selection helpers.
//!
//! Each helper returns the first argument that qualifies, or a neutral
//! default when none does.
//!
//! # Examples
//!
//! ```
//! use errstr::select::{first_non_empty, first_non_zero, if_str};
//!
//! let retries = first_non_zero(&[0, 0, 3, 5]);
//! let host = first_non_empty(&["", "localhost"]);
//!
//! assert_eq!(retries, 3);
//! assert_eq!(host, "localhost");
//! assert_eq!(if_str(retries > 1, "retrying", "giving up"), "retrying");
//! ```
use core::any::Any;

/// Returns the first value that differs from `T::default()`.
#[inline]
pub fn first_non_zero<T>(values: &[T]) -> T
where
    T: Copy + Default + PartialEq,
{
    let zero = T::default();
    values.iter().copied().find(|value| *value != zero).unwrap_or(zero)
}

/// Returns the first non-empty string, or `""`.
#[inline]
pub fn first_non_empty<'a>(values: &[&'a str]) -> &'a str {
    values.iter().copied().find(|value| !value.is_empty()).unwrap_or("")
}

/// Returns `true` if any value is `true`.
#[inline]
pub fn first_true(values: &[bool]) -> bool {
    values.iter().any(|value| *value)
}

/// Returns the supplied value, or `default` when it is absent.
///
/// Unlike [`first_non_zero`], a present zero is kept.
#[inline]
pub fn opt_or<T>(default: T, value: Option<T>) -> T {
    value.unwrap_or(default)
}

/// Picks one of two strings.
#[inline]
pub fn if_str<'a>(condition: bool, on_true: &'a str, on_false: &'a str) -> &'a str {
    if condition {
        on_true
    } else {
        on_false
    }
}

/// Returns the first item whose concrete type is `T`, or `default`.
///
/// ```
/// use errstr::select::first_of_type;
/// use std::time::Duration;
///
/// let options: [&dyn std::any::Any; 3] = [&"verbose", &Duration::from_secs(5), &8u16];
///
/// assert_eq!(first_of_type(Duration::ZERO, &options), Duration::from_secs(5));
/// assert_eq!(first_of_type(0u16, &options), 8);
/// assert_eq!(first_of_type(false, &options), false);
/// ```
pub fn first_of_type<T>(default: T, items: &[&dyn Any]) -> T
where
    T: Any + Clone,
{
    items.iter().find_map(|item| item.downcast_ref::<T>()).cloned().unwrap_or(default)
}
