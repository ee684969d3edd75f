//! Raw call-stack snapshots with an explicit skip depth.
//!
//! A [`StackSnapshot`] keeps at most [`DEPTH`] return addresses and performs
//! no symbol lookup until [`StackSnapshot::location`] is called. The first
//! kept frame is always the constructor that took the snapshot; `skip`
//! frames are discarded right above it, so the second kept frame is the site
//! being reported.
use core::ffi::c_void;

use smallvec::SmallVec;

use crate::types::alloc_type::{Cow, ToString};
use crate::types::site::Location;

/// Number of frames kept per snapshot.
pub const DEPTH: usize = 3;

/// Fixed-size capture of the call stack, resolved lazily.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StackSnapshot {
    frames: SmallVec<[usize; DEPTH]>,
}

impl StackSnapshot {
    /// Captures the stack of the function calling this one.
    ///
    /// Frames belonging to the unwinder and to `capture` itself are dropped.
    /// If the own frame cannot be recognised the snapshot stays empty and
    /// resolves to an unknown location.
    #[inline(never)]
    pub fn capture(skip: usize) -> Self {
        let anchor = Self::capture as usize;
        let mut frames = SmallVec::new();
        let mut anchored = false;
        let mut pending = skip;

        backtrace::trace(|frame| {
            if !anchored {
                anchored = frame.symbol_address() as usize == anchor;
                return true;
            }
            if !frames.is_empty() && pending > 0 {
                pending -= 1;
                return true;
            }
            frames.push(frame.ip() as usize);
            frames.len() < DEPTH
        });

        Self { frames }
    }

    /// Number of frames kept.
    #[inline]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Resolves the reported site.
    ///
    /// The constructor's own frame is skipped and the next one is symbolised.
    /// With fewer than two frames, or without debug info, the result is
    /// [`Location::default`].
    pub fn location(&self) -> Location {
        let Some(&ip) = self.frames.get(1) else {
            return Location::default();
        };

        let mut resolved = None;
        backtrace::resolve(ip as *mut c_void, |symbol| {
            // inlined callees come first; only the innermost symbol is kept
            if resolved.is_some() {
                return;
            }
            resolved = Some(Location {
                function: symbol
                    .name()
                    .map(|name| Cow::Owned(alloc::format!("{name:#}")))
                    .unwrap_or_default(),
                file: symbol
                    .filename()
                    .map(|path| Cow::Owned(path.display().to_string()))
                    .unwrap_or_default(),
                line: symbol.lineno().unwrap_or(0),
            });
        });

        resolved.unwrap_or_default()
    }
}
