//! The asynchronous family: [`AsyncIter`] and its combinators.
//!
//! Every combinator is a hand-written [`Stream`](futures::Stream) state
//! machine. Callbacks that return futures are awaited inside `poll_next`, one
//! item at a time, so nothing runs ahead of the consumer.

mod flatten;
mod fold;
mod func;
mod iter;
mod select;
mod splice;
mod window;
mod zip;

pub use flatten::{Flatten, FlattenIter, Nested};
pub use fold::Accumulate;
pub use func::FromFn;
pub use iter::{AsyncIter, Slice};
pub use select::{Enumerate, Filter, Map, Skip, SkipWhile, StepBy, Take, TakeWhile};
pub use splice::{Chain, Insert};
pub use window::{Batches, MarkFirst, MarkFirstLast, MarkLast, Pairwise};
pub use zip::{Zip, ZipLongest, ZipStrict};
