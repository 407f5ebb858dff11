//! Operators that look at more than one item at a time.

use std::pin::Pin;
use std::task::{Context, Poll, ready};

use futures::Stream;
use pin_project_lite::pin_project;

pin_project! {
    /// Overlapping pairs of neighbouring items.
    #[must_use = "streams do nothing unless polled"]
    pub struct Pairwise<S>
    where
        S: Stream,
    {
        #[pin]
        stream: S,
        prev: Option<S::Item>,
    }
}

impl<S: Stream> Pairwise<S> {
    pub(crate) fn new(stream: S) -> Self {
        Pairwise { stream, prev: None }
    }
}

impl<S> Stream for Pairwise<S>
where
    S: Stream,
    S::Item: Clone,
{
    type Item = (S::Item, S::Item);

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();
        loop {
            let Some(next) = ready!(this.stream.as_mut().poll_next(cx)) else {
                return Poll::Ready(None);
            };
            if let Some(prev) = this.prev.replace(next.clone()) {
                return Poll::Ready(Some((prev, next)));
            }
        }
    }
}

pin_project! {
    /// Chunks of `size` items; the last one may be shorter.
    #[must_use = "streams do nothing unless polled"]
    pub struct Batches<S>
    where
        S: Stream,
    {
        #[pin]
        stream: S,
        size: usize,
        batch: Vec<S::Item>,
        done: bool,
    }
}

impl<S: Stream> Batches<S> {
    pub(crate) fn new(stream: S, size: usize) -> Self {
        assert!(size > 0, "batch size must be greater than zero");
        Batches {
            stream,
            size,
            batch: Vec::with_capacity(size),
            done: false,
        }
    }
}

impl<S: Stream> Stream for Batches<S> {
    type Item = Vec<S::Item>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();
        if *this.done {
            return Poll::Ready(None);
        }
        while this.batch.len() < *this.size {
            match ready!(this.stream.as_mut().poll_next(cx)) {
                Some(item) => this.batch.push(item),
                None => {
                    *this.done = true;
                    break;
                }
            }
        }
        if this.batch.is_empty() {
            return Poll::Ready(None);
        }
        let fresh = Vec::with_capacity(*this.size);
        Poll::Ready(Some(std::mem::replace(this.batch, fresh)))
    }
}

pin_project! {
    /// Tags each item with whether it is the first one.
    #[must_use = "streams do nothing unless polled"]
    pub struct MarkFirst<S> {
        #[pin]
        stream: S,
        first: bool,
    }
}

impl<S> MarkFirst<S> {
    pub(crate) fn new(stream: S) -> Self {
        MarkFirst {
            stream,
            first: true,
        }
    }
}

impl<S: Stream> Stream for MarkFirst<S> {
    type Item = (S::Item, bool);

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.project();
        let item = ready!(this.stream.poll_next(cx));
        Poll::Ready(item.map(|item| (item, std::mem::replace(this.first, false))))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.stream.size_hint()
    }
}

pin_project! {
    /// Tags each item with whether it is the last one.
    ///
    /// Holds one item back until the next one (or the end) shows up.
    #[must_use = "streams do nothing unless polled"]
    pub struct MarkLast<S>
    where
        S: Stream,
    {
        #[pin]
        stream: S,
        prev: Option<S::Item>,
        done: bool,
    }
}

impl<S: Stream> MarkLast<S> {
    pub(crate) fn new(stream: S) -> Self {
        MarkLast {
            stream,
            prev: None,
            done: false,
        }
    }
}

impl<S: Stream> Stream for MarkLast<S> {
    type Item = (S::Item, bool);

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.project();
        poll_lookahead(this.stream, this.prev, this.done, cx)
    }
}

pin_project! {
    /// Tags each item with `(is_first, is_last)`.
    #[must_use = "streams do nothing unless polled"]
    pub struct MarkFirstLast<S>
    where
        S: Stream,
    {
        #[pin]
        stream: S,
        prev: Option<S::Item>,
        first: bool,
        done: bool,
    }
}

impl<S: Stream> MarkFirstLast<S> {
    pub(crate) fn new(stream: S) -> Self {
        MarkFirstLast {
            stream,
            prev: None,
            first: true,
            done: false,
        }
    }
}

impl<S: Stream> Stream for MarkFirstLast<S> {
    type Item = (S::Item, bool, bool);

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.project();
        let marked = ready!(poll_lookahead(this.stream, this.prev, this.done, cx));
        Poll::Ready(marked.map(|(item, last)| (item, std::mem::replace(this.first, false), last)))
    }
}

/// Yield the held-back item once its successor (or the end) is known.
fn poll_lookahead<S: Stream>(
    mut stream: Pin<&mut S>,
    prev: &mut Option<S::Item>,
    done: &mut bool,
    cx: &mut Context<'_>,
) -> Poll<Option<(S::Item, bool)>> {
    if *done {
        return Poll::Ready(None);
    }
    loop {
        match ready!(stream.as_mut().poll_next(cx)) {
            Some(next) => {
                if let Some(current) = prev.replace(next) {
                    return Poll::Ready(Some((current, false)));
                }
            }
            None => {
                *done = true;
                return Poll::Ready(prev.take().map(|current| (current, true)));
            }
        }
    }
}
