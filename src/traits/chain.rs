//! Cause-chain traversal for any [`Error`].
//!
//! [`Chain`] follows `source()` links starting from (and including) a head
//! error. [`contains`] answers "is this exact error somewhere in the chain",
//! comparing addresses rather than messages. A cause shared through an
//! [`Arc`](alloc::sync::Arc) is recognised several layers down.
//!
//! # Examples
//!
//! ```
//! use errstr::traits::{ChainExt, chain};
//! use errstr::ErrorStr;
//!
//! let err = ErrorStr::wrap(std::io::Error::other("eof"), "reading header");
//! let messages: Vec<String> = err.chain().map(|e| e.to_string()).collect();
//!
//! assert_eq!(messages, ["reading header", "eof"]);
//! assert_eq!(chain::root(&err).to_string(), "eof");
//! ```
use core::error::Error;
use core::iter::FusedIterator;

/// Iterator over an error and its transitive sources.
#[derive(Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Chain<'a> {
    next: Option<&'a (dyn Error + 'static)>,
}

impl<'a> Chain<'a> {
    #[inline]
    pub fn new(head: &'a (dyn Error + 'static)) -> Self {
        Self { next: Some(head) }
    }
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a (dyn Error + 'static);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.source();
        Some(current)
    }
}

impl FusedIterator for Chain<'_> {}

/// Returns `true` if `a` and `b` are the same error value.
#[inline]
pub fn same_error(a: &(dyn Error + 'static), b: &(dyn Error + 'static)) -> bool {
    core::ptr::addr_eq(a as *const dyn Error, b as *const dyn Error)
}

/// Returns `true` if `target` is `head` or any of its transitive sources.
#[inline]
pub fn contains(head: &(dyn Error + 'static), target: &(dyn Error + 'static)) -> bool {
    Chain::new(head).any(|link| same_error(link, target))
}

/// Returns the last error of the chain.
#[inline]
pub fn root<'a>(head: &'a (dyn Error + 'static)) -> &'a (dyn Error + 'static) {
    let mut current = head;
    while let Some(next) = current.source() {
        current = next;
    }
    current
}

/// Chain helpers for every concrete error type.
///
/// For trait objects use [`Chain::new`], [`contains`] and [`root`] directly.
pub trait ChainExt {
    /// Iterates over `self` followed by every error in its cause chain.
    fn chain(&self) -> Chain<'_>;

    /// Returns `true` if `target` is `self` or one of its transitive causes.
    fn is_in_chain(&self, target: &(dyn Error + 'static)) -> bool;

    /// Returns the deepest error of the chain.
    fn root_cause(&self) -> &(dyn Error + 'static);

    /// Returns the first error of the chain whose concrete type is `T`.
    fn find_cause<T: Error + 'static>(&self) -> Option<&T>;
}

impl<E> ChainExt for E
where
    E: Error + 'static,
{
    #[inline]
    fn chain(&self) -> Chain<'_> {
        Chain::new(self)
    }

    #[inline]
    fn is_in_chain(&self, target: &(dyn Error + 'static)) -> bool {
        contains(self, target)
    }

    #[inline]
    fn root_cause(&self) -> &(dyn Error + 'static) {
        root(self)
    }

    #[inline]
    fn find_cause<T: Error + 'static>(&self) -> Option<&T> {
        Chain::new(self).find_map(|link| link.downcast_ref::<T>())
    }
}
