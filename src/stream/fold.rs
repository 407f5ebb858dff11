use std::pin::Pin;
use std::task::{Context, Poll, ready};

use futures::Stream;
use pin_project_lite::pin_project;

pin_project! {
    /// Running fold: yields every intermediate accumulator value, starting
    /// with the initial value when there is one.
    #[must_use = "streams do nothing unless polled"]
    pub struct Accumulate<S, F>
    where
        S: Stream,
    {
        #[pin]
        stream: S,
        f: F,
        acc: Option<S::Item>,
        seed: Option<S::Item>,
    }
}

impl<S: Stream, F> Accumulate<S, F> {
    pub(crate) fn new(stream: S, f: F, initial: Option<S::Item>) -> Self {
        Accumulate {
            stream,
            f,
            acc: None,
            seed: initial,
        }
    }
}

impl<S, F> Stream for Accumulate<S, F>
where
    S: Stream,
    S::Item: Clone,
    F: FnMut(S::Item, S::Item) -> S::Item,
{
    type Item = S::Item;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.project();
        if let Some(seed) = this.seed.take() {
            *this.acc = Some(seed.clone());
            return Poll::Ready(Some(seed));
        }
        let Some(item) = ready!(this.stream.poll_next(cx)) else {
            return Poll::Ready(None);
        };
        let value = match this.acc.take() {
            Some(acc) => (this.f)(acc, item),
            None => item,
        };
        *this.acc = Some(value.clone());
        Poll::Ready(Some(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use futures::stream::{self, StreamExt};

    #[test]
    fn test_accumulate() {
        let sums = Accumulate::new(stream::iter(1..5), |a: i32, b: i32| a + b, None);
        assert_eq!(block_on(sums.collect::<Vec<_>>()), vec![1, 3, 6, 10]);

        let seeded = Accumulate::new(stream::iter(0..3), |a: i32, b: i32| a - b, Some(-10));
        assert_eq!(block_on(seeded.collect::<Vec<_>>()), vec![-10, -10, -11, -13]);
    }
}
