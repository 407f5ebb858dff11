use std::pin::Pin;
use std::task::{Context, Poll, ready};

use futures::Stream;
use pin_project_lite::pin_project;

pin_project! {
    /// Emits one extra item before position `index`, or after the last item
    /// if the stream ends first.
    #[must_use = "streams do nothing unless polled"]
    pub struct Insert<S>
    where
        S: Stream,
    {
        #[pin]
        stream: S,
        item: Option<S::Item>,
        index: usize,
        position: usize,
        done: bool,
    }
}

impl<S: Stream> Insert<S> {
    pub(crate) fn new(stream: S, index: usize, item: S::Item) -> Self {
        Insert {
            stream,
            item: Some(item),
            index,
            position: 0,
            done: false,
        }
    }
}

impl<S: Stream> Stream for Insert<S> {
    type Item = S::Item;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.project();
        if *this.position == *this.index && this.item.is_some() {
            return Poll::Ready(this.item.take());
        }
        if !*this.done {
            match ready!(this.stream.poll_next(cx)) {
                Some(next) => {
                    *this.position += 1;
                    return Poll::Ready(Some(next));
                }
                None => *this.done = true,
            }
        }
        Poll::Ready(this.item.take())
    }
}

pin_project! {
    /// The wrapped stream, then every stream `rest` yields, in order.
    #[must_use = "streams do nothing unless polled"]
    pub struct Chain<S, I>
    where
        I: Iterator,
    {
        #[pin]
        head: Option<S>,
        #[pin]
        current: Option<I::Item>,
        rest: I,
    }
}

impl<S, I: Iterator> Chain<S, I> {
    pub(crate) fn new(head: S, rest: I) -> Self {
        Chain {
            head: Some(head),
            current: None,
            rest,
        }
    }
}

impl<S, I> Stream for Chain<S, I>
where
    S: Stream,
    I: Iterator,
    I::Item: Stream<Item = S::Item>,
{
    type Item = S::Item;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();
        loop {
            if let Some(head) = this.head.as_mut().as_pin_mut() {
                match ready!(head.poll_next(cx)) {
                    Some(item) => return Poll::Ready(Some(item)),
                    None => this.head.set(None),
                }
            } else if let Some(current) = this.current.as_mut().as_pin_mut() {
                match ready!(current.poll_next(cx)) {
                    Some(item) => return Poll::Ready(Some(item)),
                    None => this.current.set(None),
                }
            } else if let Some(next) = this.rest.next() {
                this.current.set(Some(next));
            } else {
                return Poll::Ready(None);
            }
        }
    }
}
