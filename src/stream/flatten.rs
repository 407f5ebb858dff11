//! Removing one level of nesting from a stream.
//!
//! Inner sequences of the async family can be async or sync; [`Nested`]
//! names the ones that [`AsyncIter::flatten`] accepts. Anything else is
//! rejected when the program is compiled.

use std::pin::Pin;
use std::task::{Context, Poll, ready};

use futures::Stream;
use futures::stream::{self, BoxStream, LocalBoxStream};
use pin_project_lite::pin_project;

use super::AsyncIter;
use crate::{Empty, SyncIter};

/// An item that [`AsyncIter::flatten`] can open up into a stream.
pub trait Nested {
    type Item;
    type Stream: Stream<Item = Self::Item>;

    fn into_nested(self) -> Self::Stream;
}

impl<S: Stream> Nested for AsyncIter<S> {
    type Item = S::Item;
    type Stream = S;

    fn into_nested(self) -> S {
        self.into_inner()
    }
}

impl<I: Iterator> Nested for SyncIter<I> {
    type Item = I::Item;
    type Stream = stream::Iter<I>;

    fn into_nested(self) -> Self::Stream {
        stream::iter(self.into_inner())
    }
}

impl<T> Nested for Vec<T> {
    type Item = T;
    type Stream = stream::Iter<std::vec::IntoIter<T>>;

    fn into_nested(self) -> Self::Stream {
        stream::iter(self)
    }
}

impl<T> Nested for Empty<T> {
    type Item = T;
    type Stream = Empty<T>;

    fn into_nested(self) -> Self {
        self
    }
}

impl<'a, T> Nested for BoxStream<'a, T> {
    type Item = T;
    type Stream = Self;

    fn into_nested(self) -> Self {
        self
    }
}

impl<'a, T> Nested for LocalBoxStream<'a, T> {
    type Item = T;
    type Stream = Self;

    fn into_nested(self) -> Self {
        self
    }
}

/// Either side of a branch, as long as both sides nest the same items.
impl<L, R> Nested for either::Either<L, R>
where
    L: Nested,
    R: Nested<Item = L::Item>,
{
    type Item = L::Item;
    type Stream = futures::future::Either<L::Stream, R::Stream>;

    fn into_nested(self) -> Self::Stream {
        match self {
            either::Either::Left(left) => futures::future::Either::Left(left.into_nested()),
            either::Either::Right(right) => futures::future::Either::Right(right.into_nested()),
        }
    }
}

pin_project! {
    /// The items of every nested stream, in order.
    #[must_use = "streams do nothing unless polled"]
    pub struct Flatten<S, N> {
        #[pin]
        stream: S,
        #[pin]
        inner: Option<N>,
    }
}

impl<S, N> Flatten<S, N> {
    pub(crate) fn new(stream: S) -> Self {
        Flatten {
            stream,
            inner: None,
        }
    }
}

impl<S> Stream for Flatten<S, <S::Item as Nested>::Stream>
where
    S: Stream,
    S::Item: Nested,
{
    type Item = <S::Item as Nested>::Item;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();
        loop {
            if let Some(inner) = this.inner.as_mut().as_pin_mut() {
                match ready!(inner.poll_next(cx)) {
                    Some(item) => return Poll::Ready(Some(item)),
                    None => this.inner.set(None),
                }
            } else if let Some(nested) = ready!(this.stream.as_mut().poll_next(cx)) {
                this.inner.set(Some(nested.into_nested()));
            } else {
                return Poll::Ready(None);
            }
        }
    }
}

pin_project! {
    /// The items of every nested synchronous iterable, in order.
    #[must_use = "streams do nothing unless polled"]
    pub struct FlattenIter<S, J> {
        #[pin]
        stream: S,
        inner: Option<J>,
    }
}

impl<S, J> FlattenIter<S, J> {
    pub(crate) fn new(stream: S) -> Self {
        FlattenIter {
            stream,
            inner: None,
        }
    }
}

impl<S> Stream for FlattenIter<S, <S::Item as IntoIterator>::IntoIter>
where
    S: Stream,
    S::Item: IntoIterator,
{
    type Item = <S::Item as IntoIterator>::Item;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();
        loop {
            if let Some(item) = this.inner.as_mut().and_then(Iterator::next) {
                return Poll::Ready(Some(item));
            }
            match ready!(this.stream.as_mut().poll_next(cx)) {
                Some(nested) => *this.inner = Some(nested.into_iter()),
                None => {
                    *this.inner = None;
                    return Poll::Ready(None);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use either::Either;
    use futures::executor::block_on;
    use futures::stream::StreamExt;

    fn run<S: Stream>(stream: S) -> Vec<S::Item> {
        block_on(stream.collect())
    }

    #[test]
    fn test_flatten_async_inner() {
        let nested = stream::iter(vec![AsyncIter::from_sync(0..2), AsyncIter::from_sync(2..4)]);
        assert_eq!(run(Flatten::new(nested)), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_flatten_mixed_inner() {
        let nested = stream::iter(vec![
            Either::Left(SyncIter::new(0..3)),
            Either::Right(AsyncIter::from_sync(3..7)),
        ]);
        assert_eq!(run(Flatten::new(nested)), vec![0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_flatten_skips_empty_inner() {
        let nested = stream::iter(vec![vec![], vec![1], vec![], vec![2, 3]]);
        assert_eq!(run(Flatten::new(nested)), vec![1, 2, 3]);
    }

    #[test]
    fn test_flatten_iter() {
        let nested = stream::iter(vec![0..2, 0..0, 5..7]);
        assert_eq!(run(FlattenIter::new(nested)), vec![0, 1, 5, 6]);
    }
}
