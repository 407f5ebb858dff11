//! The blocking family: [`SyncIter`] and its combinators.
//!
//! Every lazy operator consumes the wrapper and returns a new [`SyncIter`]
//! around one of the adapters below (or a `std::iter` adapter when the
//! standard one already has the right semantics).

mod fold;
pub(crate) mod iter;
mod select;
mod splice;
mod window;
pub(crate) mod zip;

pub use fold::Accumulate;
pub use iter::{Slice, SyncIter};
pub use select::{Enumerate, Filter};
pub use splice::Insert;
pub use window::{Batches, MarkFirst, MarkFirstLast, MarkLast, Pairwise};
pub use zip::{Zip, ZipLongest, ZipStrict};
