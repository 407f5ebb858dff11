//! Zipping a stream with other streams of the same item type.
//!
//! A round polls the sources in order and remembers how far it got, so a
//! source that is not ready yet does not cost the items already pulled from
//! the ones before it.

use std::pin::Pin;
use std::task::{Context, Poll, ready};

use futures::Stream;
use pin_project_lite::pin_project;

use crate::Result;
use crate::sync::zip::{longest_round, strict_round};

pin_project! {
    #[doc(hidden)]
    pub struct Sources<S, O> {
        #[pin]
        head: S,
        rest: Vec<Pin<Box<O>>>,
    }
}

impl<S, O> Sources<S, O>
where
    S: Stream,
    O: Stream<Item = S::Item>,
{
    fn new(head: S, rest: impl IntoIterator<Item = O>) -> Self {
        Sources {
            head,
            rest: rest.into_iter().map(Box::pin).collect(),
        }
    }

    fn len(&self) -> usize {
        self.rest.len() + 1
    }

    fn poll_source(
        self: Pin<&mut Self>,
        index: usize,
        cx: &mut Context<'_>,
    ) -> Poll<Option<S::Item>> {
        let this = self.project();
        match index {
            0 => this.head.poll_next(cx),
            _ => this.rest[index - 1].as_mut().poll_next(cx),
        }
    }
}

pin_project! {
    /// Rounds of items; ends as soon as one source runs out.
    #[must_use = "streams do nothing unless polled"]
    pub struct Zip<S, O>
    where
        S: Stream,
    {
        #[pin]
        sources: Sources<S, O>,
        round: Vec<S::Item>,
        done: bool,
    }
}

impl<S, O> Zip<S, O>
where
    S: Stream,
    O: Stream<Item = S::Item>,
{
    pub(crate) fn new(head: S, rest: impl IntoIterator<Item = O>) -> Self {
        Zip {
            sources: Sources::new(head, rest),
            round: Vec::new(),
            done: false,
        }
    }
}

impl<S, O> Stream for Zip<S, O>
where
    S: Stream,
    O: Stream<Item = S::Item>,
{
    type Item = Vec<S::Item>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();
        if *this.done {
            return Poll::Ready(None);
        }
        while this.round.len() < this.sources.len() {
            let index = this.round.len();
            match ready!(this.sources.as_mut().poll_source(index, cx)) {
                Some(item) => this.round.push(item),
                None => {
                    *this.done = true;
                    this.round.clear();
                    return Poll::Ready(None);
                }
            }
        }
        Poll::Ready(Some(std::mem::take(this.round)))
    }
}

pin_project! {
    /// Rounds of items from sources that must all end together.
    ///
    /// The round on which some sources end and others do not yields a
    /// single `Err(IterError::LengthMismatch)` and the stream ends.
    #[must_use = "streams do nothing unless polled"]
    pub struct ZipStrict<S, O>
    where
        S: Stream,
    {
        #[pin]
        sources: Sources<S, O>,
        round: Vec<Option<S::Item>>,
        done: bool,
    }
}

impl<S, O> ZipStrict<S, O>
where
    S: Stream,
    O: Stream<Item = S::Item>,
{
    pub(crate) fn new(head: S, rest: impl IntoIterator<Item = O>) -> Self {
        ZipStrict {
            sources: Sources::new(head, rest),
            round: Vec::new(),
            done: false,
        }
    }
}

impl<S, O> Stream for ZipStrict<S, O>
where
    S: Stream,
    O: Stream<Item = S::Item>,
{
    type Item = Result<Vec<S::Item>>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();
        if *this.done {
            return Poll::Ready(None);
        }
        while this.round.len() < this.sources.len() {
            let index = this.round.len();
            let slot = ready!(this.sources.as_mut().poll_source(index, cx));
            this.round.push(slot);
        }
        let round = strict_round(std::mem::take(this.round));
        *this.done = !matches!(round, Some(Ok(_)));
        Poll::Ready(round)
    }
}

pin_project! {
    /// Rounds of items until every source is exhausted; exhausted sources
    /// contribute clones of `fill` and are not polled again.
    #[must_use = "streams do nothing unless polled"]
    pub struct ZipLongest<S, O>
    where
        S: Stream,
    {
        #[pin]
        sources: Sources<S, O>,
        round: Vec<Option<S::Item>>,
        exhausted: Vec<bool>,
        fill: S::Item,
    }
}

impl<S, O> ZipLongest<S, O>
where
    S: Stream,
    O: Stream<Item = S::Item>,
{
    pub(crate) fn new(head: S, rest: impl IntoIterator<Item = O>, fill: S::Item) -> Self {
        let sources = Sources::new(head, rest);
        let exhausted = vec![false; sources.len()];
        ZipLongest {
            sources,
            round: Vec::new(),
            exhausted,
            fill,
        }
    }
}

impl<S, O> Stream for ZipLongest<S, O>
where
    S: Stream,
    S::Item: Clone,
    O: Stream<Item = S::Item>,
{
    type Item = Vec<S::Item>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();
        while this.round.len() < this.sources.len() {
            let index = this.round.len();
            if this.exhausted[index] {
                this.round.push(None);
                continue;
            }
            let slot = ready!(this.sources.as_mut().poll_source(index, cx));
            this.exhausted[index] = slot.is_none();
            this.round.push(slot);
        }
        Poll::Ready(longest_round(std::mem::take(this.round), this.fill))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::IterError;
    use futures::executor::block_on;
    use futures::stream::{self, StreamExt};
    use std::ops::Range;

    fn sources(lens: &[i32]) -> Vec<stream::Iter<Range<i32>>> {
        lens.iter().map(|&len| stream::iter(0..len)).collect()
    }

    fn run<S: Stream>(stream: S) -> Vec<S::Item> {
        block_on(stream.collect())
    }

    #[test]
    fn test_zip_stops_at_shortest() {
        let rounds = run(Zip::new(stream::iter(0..3), sources(&[5, 2])));
        assert_eq!(rounds, vec![vec![0, 0, 0], vec![1, 1, 1]]);
    }

    #[test]
    fn test_zip_strict_mismatch() {
        let rounds = run(ZipStrict::new(stream::iter(0..2), sources(&[3])));
        assert_eq!(
            rounds,
            vec![
                Ok(vec![0, 0]),
                Ok(vec![1, 1]),
                Err(IterError::LengthMismatch { argument: 2 })
            ]
        );
    }

    #[test]
    fn test_zip_strict_equal() {
        let rounds = run(ZipStrict::new(stream::iter(0..2), sources(&[2, 2])));
        assert_eq!(rounds, vec![Ok(vec![0, 0, 0]), Ok(vec![1, 1, 1])]);
    }

    #[test]
    fn test_zip_longest() {
        let rounds = run(ZipLongest::new(stream::iter(0..1), sources(&[2]), 0));
        assert_eq!(rounds, vec![vec![0, 0], vec![0, 1]]);
    }

    #[test]
    fn test_zip_survives_pending_sources() {
        use futures::stream::poll_fn;

        let mut items = vec![2, 1];
        let mut awake = false;
        let flaky = poll_fn(move |cx| {
            awake = !awake;
            if awake {
                Poll::Ready(items.pop())
            } else {
                cx.waker().wake_by_ref();
                Poll::Pending
            }
        });
        let rounds = run(Zip::new(stream::iter(10..13), [flaky]));
        assert_eq!(rounds, vec![vec![10, 1], vec![11, 2]]);
    }
}
