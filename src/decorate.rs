//! Wrapping generator functions so their results come back already wrapped.
//!
//! ```rust
//! use iter_model::sync_iter;
//!
//! let evens_below = sync_iter(|n: u32| (0..n).filter(|x| x % 2 == 0));
//! assert_eq!(evens_below(7).skip(1).to_list(), vec![2, 4, 6]);
//! ```

use crate::SyncIter;

/// Turn a function returning anything iterable into one returning a
/// [`SyncIter`]. Arguments pass through unchanged; use a tuple for several.
pub fn sync_iter<A, R, F>(f: F) -> impl Fn(A) -> SyncIter<R::IntoIter>
where
    F: Fn(A) -> R,
    R: IntoIterator,
{
    move |args| SyncIter::new(f(args))
}

/// Turn a function returning a stream into one returning an
/// [`AsyncIter`](crate::AsyncIter).
///
/// ```rust
/// use iter_model::async_iter;
/// use futures::{StreamExt, stream};
///
/// let repeated = async_iter(|(item, times): (char, usize)| stream::repeat(item).take(times));
/// let items = futures::executor::block_on(repeated(('x', 3)).to_list());
/// assert_eq!(items, vec!['x', 'x', 'x']);
/// ```
#[cfg(feature = "async")]
pub fn async_iter<A, S, F>(f: F) -> impl Fn(A) -> crate::AsyncIter<S>
where
    F: Fn(A) -> S,
    S: futures::Stream,
{
    move |args| crate::AsyncIter::new(f(args))
}
