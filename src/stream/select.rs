//! One-in, at-most-one-out operators.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll, ready};

use futures::Stream;
use pin_project_lite::pin_project;

use crate::condition::{AsyncMap, Condition};

pin_project! {
    /// Applies an async mapper to every item.
    #[must_use = "streams do nothing unless polled"]
    pub struct Map<S, F, Fut> {
        #[pin]
        stream: S,
        f: F,
        #[pin]
        pending: Option<Fut>,
    }
}

impl<S, F, Fut> Map<S, F, Fut> {
    pub(crate) fn new(stream: S, f: F) -> Self {
        Map {
            stream,
            f,
            pending: None,
        }
    }
}

impl<S, F> Stream for Map<S, F, F::Future>
where
    S: Stream,
    F: AsyncMap<S::Item>,
{
    type Item = F::Output;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();
        Poll::Ready(loop {
            if let Some(fut) = this.pending.as_mut().as_pin_mut() {
                let output = ready!(fut.poll(cx));
                this.pending.set(None);
                break Some(output);
            } else if let Some(item) = ready!(this.stream.as_mut().poll_next(cx)) {
                this.pending.set(Some(this.f.call(item)));
            } else {
                break None;
            }
        })
    }
}

pin_project! {
    /// Keeps (or drops) the items an async condition accepts.
    ///
    /// Backs both `where_` and `skip_where`.
    #[must_use = "streams do nothing unless polled"]
    pub struct Filter<S, F, Fut>
    where
        S: Stream,
    {
        #[pin]
        stream: S,
        condition: F,
        keep: bool,
        #[pin]
        pending: Option<Fut>,
        pending_item: Option<S::Item>,
    }
}

impl<S: Stream, F, Fut> Filter<S, F, Fut> {
    pub(crate) fn new(stream: S, condition: F, keep: bool) -> Self {
        Filter {
            stream,
            condition,
            keep,
            pending: None,
            pending_item: None,
        }
    }
}

impl<S, F> Stream for Filter<S, F, F::Future>
where
    S: Stream,
    F: Condition<S::Item>,
{
    type Item = S::Item;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();
        Poll::Ready(loop {
            if let Some(fut) = this.pending.as_mut().as_pin_mut() {
                let verdict = ready!(fut.poll(cx));
                this.pending.set(None);
                let item = this.pending_item.take();
                if verdict == *this.keep {
                    break item;
                }
            } else if let Some(item) = ready!(this.stream.as_mut().poll_next(cx)) {
                this.pending.set(Some(this.condition.test(&item)));
                *this.pending_item = Some(item);
            } else {
                break None;
            }
        })
    }
}

pin_project! {
    /// Items up to the first one failing the condition; never resumes.
    #[must_use = "streams do nothing unless polled"]
    pub struct TakeWhile<S, F, Fut>
    where
        S: Stream,
    {
        #[pin]
        stream: S,
        condition: F,
        #[pin]
        pending: Option<Fut>,
        pending_item: Option<S::Item>,
        done: bool,
    }
}

impl<S: Stream, F, Fut> TakeWhile<S, F, Fut> {
    pub(crate) fn new(stream: S, condition: F) -> Self {
        TakeWhile {
            stream,
            condition,
            pending: None,
            pending_item: None,
            done: false,
        }
    }
}

impl<S, F> Stream for TakeWhile<S, F, F::Future>
where
    S: Stream,
    F: Condition<S::Item>,
{
    type Item = S::Item;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();
        if *this.done {
            return Poll::Ready(None);
        }
        Poll::Ready(loop {
            if let Some(fut) = this.pending.as_mut().as_pin_mut() {
                let verdict = ready!(fut.poll(cx));
                this.pending.set(None);
                let item = this.pending_item.take();
                if !verdict {
                    *this.done = true;
                    break None;
                }
                break item;
            } else if let Some(item) = ready!(this.stream.as_mut().poll_next(cx)) {
                this.pending.set(Some(this.condition.test(&item)));
                *this.pending_item = Some(item);
            } else {
                *this.done = true;
                break None;
            }
        })
    }
}

pin_project! {
    /// Drops leading items while the condition holds, then passes
    /// everything through.
    #[must_use = "streams do nothing unless polled"]
    pub struct SkipWhile<S, F, Fut>
    where
        S: Stream,
    {
        #[pin]
        stream: S,
        condition: F,
        #[pin]
        pending: Option<Fut>,
        pending_item: Option<S::Item>,
        skipping: bool,
    }
}

impl<S: Stream, F, Fut> SkipWhile<S, F, Fut> {
    pub(crate) fn new(stream: S, condition: F) -> Self {
        SkipWhile {
            stream,
            condition,
            pending: None,
            pending_item: None,
            skipping: true,
        }
    }
}

impl<S, F> Stream for SkipWhile<S, F, F::Future>
where
    S: Stream,
    F: Condition<S::Item>,
{
    type Item = S::Item;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();
        if !*this.skipping {
            return this.stream.poll_next(cx);
        }
        Poll::Ready(loop {
            if let Some(fut) = this.pending.as_mut().as_pin_mut() {
                let verdict = ready!(fut.poll(cx));
                this.pending.set(None);
                let item = this.pending_item.take();
                if !verdict {
                    *this.skipping = false;
                    break item;
                }
            } else if let Some(item) = ready!(this.stream.as_mut().poll_next(cx)) {
                this.pending.set(Some(this.condition.test(&item)));
                *this.pending_item = Some(item);
            } else {
                break None;
            }
        })
    }
}

pin_project! {
    /// At most `remaining` items; stops polling upstream once they are out.
    #[must_use = "streams do nothing unless polled"]
    pub struct Take<S> {
        #[pin]
        stream: S,
        remaining: usize,
    }
}

impl<S> Take<S> {
    pub(crate) fn new(stream: S, remaining: usize) -> Self {
        Take { stream, remaining }
    }
}

impl<S: Stream> Stream for Take<S> {
    type Item = S::Item;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.project();
        if *this.remaining == 0 {
            return Poll::Ready(None);
        }
        let item = ready!(this.stream.poll_next(cx));
        *this.remaining = match item {
            Some(_) => *this.remaining - 1,
            None => 0,
        };
        Poll::Ready(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.remaining == 0 {
            return (0, Some(0));
        }
        let (lower, upper) = self.stream.size_hint();
        (
            lower.min(self.remaining),
            Some(upper.map_or(self.remaining, |upper| upper.min(self.remaining))),
        )
    }
}

pin_project! {
    /// Drops the first `remaining` items.
    #[must_use = "streams do nothing unless polled"]
    pub struct Skip<S> {
        #[pin]
        stream: S,
        remaining: usize,
    }
}

impl<S> Skip<S> {
    pub(crate) fn new(stream: S, remaining: usize) -> Self {
        Skip { stream, remaining }
    }
}

impl<S: Stream> Stream for Skip<S> {
    type Item = S::Item;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();
        while *this.remaining > 0 {
            match ready!(this.stream.as_mut().poll_next(cx)) {
                Some(_) => *this.remaining -= 1,
                None => return Poll::Ready(None),
            }
        }
        this.stream.poll_next(cx)
    }
}

pin_project! {
    /// Pairs every item with a running index.
    #[must_use = "streams do nothing unless polled"]
    pub struct Enumerate<S> {
        #[pin]
        stream: S,
        index: usize,
    }
}

impl<S> Enumerate<S> {
    pub(crate) fn new(stream: S, start: usize) -> Self {
        Enumerate {
            stream,
            index: start,
        }
    }
}

impl<S: Stream> Stream for Enumerate<S> {
    type Item = (usize, S::Item);

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.project();
        match ready!(this.stream.poll_next(cx)) {
            Some(item) => {
                let index = *this.index;
                *this.index += 1;
                Poll::Ready(Some((index, item)))
            }
            None => Poll::Ready(None),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.stream.size_hint()
    }
}

pin_project! {
    /// The first item, then every `step`-th one after it.
    #[must_use = "streams do nothing unless polled"]
    pub struct StepBy<S> {
        #[pin]
        stream: S,
        step: usize,
        gap: usize,
    }
}

impl<S> StepBy<S> {
    pub(crate) fn new(stream: S, step: usize) -> Self {
        assert!(step > 0, "slice step must be greater than zero");
        StepBy {
            stream,
            step,
            gap: 0,
        }
    }
}

impl<S: Stream> Stream for StepBy<S> {
    type Item = S::Item;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();
        loop {
            match ready!(this.stream.as_mut().poll_next(cx)) {
                Some(item) if *this.gap == 0 => {
                    *this.gap = *this.step - 1;
                    return Poll::Ready(Some(item));
                }
                Some(_) => *this.gap -= 1,
                None => return Poll::Ready(None),
            }
        }
    }
}
