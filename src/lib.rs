//! # iter_model: Chainable Operators over Lazy Sequences
//!
//! Wrap an iterator or a stream once, then chain selection, windowing,
//! zipping and reduction operators on it, in the same shape for blocking
//! and asynchronous code.
//!
//! ## Core Types
//!
//! - **[`SyncIter<I>`]**: wraps any [`Iterator`]; lazy operators return a new
//!   `SyncIter`, eager ones return values
//! - **[`AsyncIter<S>`]**: wraps any [`Stream`](futures::Stream); eager
//!   operators are `async fn`s and callbacks may return futures
//!
//! ## Key Features
//!
//! - **Lazy**: nothing is pulled from the source until a consumer asks
//! - **Single-consumer**: every lazy operator takes the wrapper by value;
//!   `by_ref()` runs an operator over part of a sequence and keeps the rest
//! - **Async callbacks**: [`Condition`] and [`AsyncMap`] accept closures that
//!   return futures, and [`asyncify`] adapts plain closures
//!
//! ## Example
//!
//! ```
//! use iter_model::*;
//!
//! let words = ["wrong_answer", "here", "wrong_answer", "also"];
//! let short = SyncIter::new(words).where_(|w| w.len() == 4).to_list();
//! assert_eq!(short, vec!["here", "also"]);
//!
//! let total = futures::executor::block_on(
//!     AsyncIter::from_sync(1..=4)
//!         .map(|x: i32| async move { x * x })
//!         .reduce(|a, b| a + b, None),
//! );
//! assert_eq!(total, Ok(30));
//! ```
//!
//! ## Common Operators
//!
//! **Lazy:**
//! - `map`, `where_`, `skip_where`, `take`, `skip`, `take_while`, `skip_while`
//! - `enumerate`, `chain`, `zip`, `zip_strict`, `zip_longest`, `islice`, `slice`
//! - `pairwise`, `batches`, `accumulate`, `append_left`, `append_right`,
//!   `append_at`, `flatten`, `mark_first`, `mark_last`, `mark_first_last`
//!
//! **Eager:**
//! - `to_list`, `to_tuple`, `to_set`, `count`, `get_len`, `first`, `last`
//! - `first_where`, `last_where`, `reduce`, `max`, `min`, `max_by_key`,
//!   `min_by_key`, `all`, `any`, `item_at`, `get`, `contains`, `is_empty`,
//!   `is_not_empty`
//!
//! ## Features
//!
//! - `async` (default): the asynchronous family, built on `futures`

#[cfg(feature = "async")]
mod condition;
mod decorate;
mod empty;
mod error;
#[cfg(feature = "async")]
mod stream;
mod sync;

pub mod prelude;

/// Adapter types of the asynchronous family, returned by [`AsyncIter`]'s
/// lazy operators.
#[cfg(feature = "async")]
pub mod async_adapters {
    pub use crate::stream::{
        Accumulate, Batches, Chain, Enumerate, Filter, Flatten, FlattenIter, FromFn, Insert, Map,
        MarkFirst, MarkFirstLast, MarkLast, Pairwise, Skip, SkipWhile, Slice, StepBy, Take,
        TakeWhile, Zip, ZipLongest, ZipStrict,
    };
}

#[cfg(feature = "async")]
pub use condition::{AsyncMap, Asyncify, Condition, asyncify};
#[cfg(feature = "async")]
pub use decorate::async_iter;
pub use decorate::sync_iter;
pub use empty::Empty;
pub use error::{IterError, Result};
#[cfg(feature = "async")]
pub use stream::{AsyncIter, Nested};
pub use sync::{
    Accumulate, Batches, Enumerate, Filter, Insert, MarkFirst, MarkFirstLast, MarkLast, Pairwise,
    Slice, SyncIter, Zip, ZipLongest, ZipStrict,
};
