//! Commonly used imports
//!
//! Use `use iter_model::prelude::*;` for quick access to the wrappers and the
//! callback helpers.

// Core types
pub use crate::{IterError, SyncIter};

#[cfg(feature = "async")]
pub use crate::AsyncIter;

// Async callbacks
#[cfg(feature = "async")]
pub use crate::{AsyncMap, Condition, Nested, asyncify};

// Wrapping generator functions
pub use crate::sync_iter;

#[cfg(feature = "async")]
pub use crate::async_iter;
