//! Heap types shared by the `std` and `no_std` builds.
//!
//! The crate always links `alloc`, so these resolve to the same items either
//! way; the module exists so that call sites never spell out the crate root.

pub use alloc::borrow::Cow;
pub use alloc::boxed::Box;
pub use alloc::string::{String, ToString};
pub use alloc::sync::Arc;
pub use alloc::vec::Vec;
