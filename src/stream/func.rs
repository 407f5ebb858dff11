use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll, ready};

use futures::Stream;
use futures::stream::FusedStream;
use pin_project_lite::pin_project;

pin_project! {
    /// A stream driven by a closure that returns one future per item.
    ///
    /// Ends the first time a future resolves to `None`; the closure is not
    /// called again after that.
    #[must_use = "streams do nothing unless polled"]
    pub struct FromFn<F, Fut> {
        f: F,
        #[pin]
        pending: Option<Fut>,
        done: bool,
    }
}

impl<F, Fut> FromFn<F, Fut> {
    pub(crate) fn new(f: F) -> Self {
        FromFn {
            f,
            pending: None,
            done: false,
        }
    }
}

impl<T, F, Fut> Stream for FromFn<F, Fut>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Option<T>>,
{
    type Item = T;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<T>> {
        let mut this = self.project();
        if *this.done {
            return Poll::Ready(None);
        }
        if this.pending.is_none() {
            this.pending.set(Some((this.f)()));
        }
        let Some(fut) = this.pending.as_mut().as_pin_mut() else {
            return Poll::Ready(None);
        };
        let item = ready!(fut.poll(cx));
        this.pending.set(None);
        *this.done = item.is_none();
        Poll::Ready(item)
    }
}

impl<T, F, Fut> FusedStream for FromFn<F, Fut>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Option<T>>,
{
    fn is_terminated(&self) -> bool {
        self.done
    }
}
