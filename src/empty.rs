//! The canonical empty sequence.

use std::fmt;
use std::marker::PhantomData;

/// A sequence with no items, usable as both an `Iterator` and a `Stream`.
///
/// Every pull reports exhaustion immediately. It is what
/// [`SyncIter::empty`](crate::SyncIter::empty) and
/// `AsyncIter::empty` wrap.
///
/// ```rust
/// use iter_model::Empty;
///
/// let mut empty = Empty::<u8>::new();
/// assert_eq!(empty.next(), None);
/// ```
pub struct Empty<T>(PhantomData<fn() -> T>);

impl<T> Empty<T> {
    /// Create an empty sequence.
    pub const fn new() -> Self {
        Empty(PhantomData)
    }
}

impl<T> Default for Empty<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Empty<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T> Copy for Empty<T> {}

impl<T> fmt::Debug for Empty<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Empty")
    }
}

impl<T> Iterator for Empty<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(0))
    }
}

impl<T> std::iter::FusedIterator for Empty<T> {}

#[cfg(feature = "async")]
impl<T> futures::Stream for Empty<T> {
    type Item = T;

    fn poll_next(
        self: std::pin::Pin<&mut Self>,
        _cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Option<T>> {
        std::task::Poll::Ready(None)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(0))
    }
}

#[cfg(feature = "async")]
impl<T> futures::stream::FusedStream for Empty<T> {
    fn is_terminated(&self) -> bool {
        true
    }
}
