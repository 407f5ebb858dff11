//! The asynchronous sequence wrapper.
//!
//! [`AsyncIter`] wraps one [`Stream`] and offers the same operators as
//! [`SyncIter`](crate::SyncIter). Lazy operators return a new `AsyncIter`;
//! eager ones are `async fn`s that drive the stream to the point they need.
//!
//! User callbacks for selection and mapping go through
//! [`Condition`] and [`AsyncMap`], so they may return futures. Callbacks of
//! folds and comparisons (`reduce`, `accumulate`, `max_by_key` and friends)
//! are plain closures.
//!
//! # Examples
//!
//! ```rust
//! use iter_model::{AsyncIter, asyncify};
//!
//! futures::executor::block_on(async {
//!     let squares = AsyncIter::from_sync(0..6)
//!         .where_(asyncify(|x: &i32| x % 2 == 0))
//!         .map(|x: i32| async move { x * x })
//!         .to_list()
//!         .await;
//!     assert_eq!(squares, vec![0, 4, 16]);
//! });
//! ```

use std::collections::HashSet;
use std::future::Future;
use std::hash::Hash;
use std::ops::RangeBounds;
use std::pin::{Pin, pin};
use std::task::{Context, Poll};

use futures::future::Either;
use futures::stream::{self, Stream, StreamExt};
use pin_project_lite::pin_project;

use super::{
    Accumulate, Batches, Chain, Enumerate, Filter, Flatten, FlattenIter, FromFn, Insert, Map,
    MarkFirst, MarkFirstLast, MarkLast, Nested, Pairwise, Skip, SkipWhile, StepBy, Take,
    TakeWhile, Zip, ZipLongest, ZipStrict,
};
use crate::condition::{AsyncMap, Condition};
use crate::sync::iter::slice_bounds;
use crate::{Empty, IterError, Result};

/// Adapter stack behind [`AsyncIter::islice`] and [`AsyncIter::slice`].
pub type Slice<S> = StepBy<Either<Take<Skip<S>>, Skip<S>>>;

pin_project! {
    /// An asynchronous, single-consumer sequence with chainable operators.
    ///
    /// ```rust
    /// use iter_model::AsyncIter;
    ///
    /// futures::executor::block_on(async {
    ///     let mut numbers = AsyncIter::from_sync(0..10);
    ///     assert_eq!(numbers.by_ref().take(3).to_list().await, vec![0, 1, 2]);
    ///     assert_eq!(numbers.next_item().await, Ok(3));
    ///     assert_eq!(numbers.count().await, 6);
    /// });
    /// ```
    #[derive(Debug, Clone)]
    #[must_use = "streams do nothing unless polled"]
    pub struct AsyncIter<S> {
        #[pin]
        stream: S,
    }
}

impl<T> AsyncIter<Empty<T>> {
    /// A stream with no items.
    pub fn empty() -> Self {
        AsyncIter {
            stream: Empty::new(),
        }
    }
}

impl<T, F, Fut> AsyncIter<FromFn<F, Fut>>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Option<T>>,
{
    /// A hand-written async generator: `f` is called for every item and the
    /// stream ends at the first future resolving to `None`.
    ///
    /// ```rust
    /// use iter_model::AsyncIter;
    ///
    /// let mut n = 0;
    /// let countdown = AsyncIter::from_fn(move || {
    ///     n += 1;
    ///     let left = 4 - n;
    ///     async move { (left > 0).then_some(left) }
    /// });
    /// let items = futures::executor::block_on(countdown.to_list());
    /// assert_eq!(items, vec![3, 2, 1]);
    /// ```
    pub fn from_fn(f: F) -> Self {
        AsyncIter {
            stream: FromFn::new(f),
        }
    }
}

impl<I: Iterator> AsyncIter<stream::Iter<I>> {
    /// Lift anything iterable into the async family; every item is ready
    /// immediately.
    pub fn from_sync<T>(source: T) -> Self
    where
        T: IntoIterator<IntoIter = I>,
    {
        AsyncIter {
            stream: stream::iter(source),
        }
    }
}

impl<S: Stream + Unpin> AsyncIter<S> {
    /// Borrow this sequence as a new one; whatever the borrow does not
    /// consume stays available here.
    ///
    /// Needs an `Unpin` stream. Wrap others with `Box::pin` first.
    pub fn by_ref(&mut self) -> AsyncIter<&mut S> {
        AsyncIter {
            stream: &mut self.stream,
        }
    }

    /// Pull one item, reporting exhaustion as [`IterError::Exhausted`].
    pub async fn next_item(&mut self) -> Result<S::Item> {
        self.stream.next().await.ok_or(IterError::Exhausted)
    }
}

impl<S: Stream> AsyncIter<S> {
    /// Wrap a stream.
    pub fn new(stream: S) -> Self {
        AsyncIter { stream }
    }

    /// Give back the wrapped stream.
    pub fn into_inner(self) -> S {
        self.stream
    }

    pub async fn to_list(self) -> Vec<S::Item> {
        self.stream.collect().await
    }

    /// Collect into an immutable, fixed-length sequence.
    pub async fn to_tuple(self) -> Box<[S::Item]> {
        self.to_list().await.into_boxed_slice()
    }

    pub async fn to_set(self) -> HashSet<S::Item>
    where
        S::Item: Eq + Hash,
    {
        self.stream.collect().await
    }

    /// Apply `f` to every item; `f` may return a future.
    pub fn map<F>(self, f: F) -> AsyncIter<Map<S, F, F::Future>>
    where
        F: AsyncMap<S::Item>,
    {
        AsyncIter {
            stream: Map::new(self.stream, f),
        }
    }

    /// Keep the items for which `condition` holds.
    pub fn where_<F>(self, condition: F) -> AsyncIter<Filter<S, F, F::Future>>
    where
        F: Condition<S::Item>,
    {
        AsyncIter {
            stream: Filter::new(self.stream, condition, true),
        }
    }

    /// Drop the items for which `condition` holds.
    pub fn skip_where<F>(self, condition: F) -> AsyncIter<Filter<S, F, F::Future>>
    where
        F: Condition<S::Item>,
    {
        AsyncIter {
            stream: Filter::new(self.stream, condition, false),
        }
    }

    /// At most `count` items. Nothing is polled upstream after the last one.
    pub fn take(self, count: usize) -> AsyncIter<Take<S>> {
        AsyncIter {
            stream: Take::new(self.stream, count),
        }
    }

    pub fn skip(self, count: usize) -> AsyncIter<Skip<S>> {
        AsyncIter {
            stream: Skip::new(self.stream, count),
        }
    }

    /// Items up to (excluding) the first one failing `condition`.
    pub fn take_while<F>(self, condition: F) -> AsyncIter<TakeWhile<S, F, F::Future>>
    where
        F: Condition<S::Item>,
    {
        AsyncIter {
            stream: TakeWhile::new(self.stream, condition),
        }
    }

    /// Everything from the first item failing `condition` on.
    pub fn skip_while<F>(self, condition: F) -> AsyncIter<SkipWhile<S, F, F::Future>>
    where
        F: Condition<S::Item>,
    {
        AsyncIter {
            stream: SkipWhile::new(self.stream, condition),
        }
    }

    /// Pair every item with an index counting up from `start`.
    pub fn enumerate(self, start: usize) -> AsyncIter<Enumerate<S>> {
        AsyncIter {
            stream: Enumerate::new(self.stream, start),
        }
    }

    /// This stream, then each of `others` in order.
    pub fn chain<O>(self, others: O) -> AsyncIter<Chain<S, O::IntoIter>>
    where
        O: IntoIterator,
        O::Item: Stream<Item = S::Item>,
    {
        AsyncIter {
            stream: Chain::new(self.stream, others.into_iter()),
        }
    }

    /// Rounds of one item per source, ending with the shortest source.
    pub fn zip<O>(self, others: O) -> AsyncIter<Zip<S, O::Item>>
    where
        O: IntoIterator,
        O::Item: Stream<Item = S::Item>,
    {
        AsyncIter {
            stream: Zip::new(self.stream, others),
        }
    }

    /// Like [`zip`](AsyncIter::zip), but sources of different lengths
    /// produce an `Err(IterError::LengthMismatch)` item.
    pub fn zip_strict<O>(self, others: O) -> AsyncIter<ZipStrict<S, O::Item>>
    where
        O: IntoIterator,
        O::Item: Stream<Item = S::Item>,
    {
        AsyncIter {
            stream: ZipStrict::new(self.stream, others),
        }
    }

    /// Rounds of one item per source until all are exhausted; exhausted
    /// sources contribute `fill`.
    pub fn zip_longest<O>(self, others: O, fill: S::Item) -> AsyncIter<ZipLongest<S, O::Item>>
    where
        O: IntoIterator,
        O::Item: Stream<Item = S::Item>,
        S::Item: Clone,
    {
        AsyncIter {
            stream: ZipLongest::new(self.stream, others, fill),
        }
    }

    /// Items `start, start + step, ...` below `stop` (unbounded if `None`).
    ///
    /// # Panics
    ///
    /// Panics if `step` is zero.
    pub fn islice(self, start: usize, stop: Option<usize>, step: usize) -> AsyncIter<Slice<S>> {
        let skipped = Skip::new(self.stream, start);
        let bounded = match stop {
            Some(stop) => Either::Left(Take::new(skipped, stop.saturating_sub(start))),
            None => Either::Right(skipped),
        };
        AsyncIter {
            stream: StepBy::new(bounded, step),
        }
    }

    /// The items whose positions fall in `range`.
    pub fn slice<R: RangeBounds<usize>>(self, range: R) -> AsyncIter<Slice<S>> {
        let (start, stop) = slice_bounds(&range);
        self.islice(start, stop, 1)
    }

    /// Overlapping pairs of neighbouring items.
    pub fn pairwise(self) -> AsyncIter<Pairwise<S>>
    where
        S::Item: Clone,
    {
        AsyncIter {
            stream: Pairwise::new(self.stream),
        }
    }

    /// Chunks of `size` items; the last chunk may be shorter.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    pub fn batches(self, size: usize) -> AsyncIter<Batches<S>> {
        AsyncIter {
            stream: Batches::new(self.stream, size),
        }
    }

    /// Running fold of the items with `f`.
    pub fn accumulate<F>(self, f: F, initial: Option<S::Item>) -> AsyncIter<Accumulate<S, F>>
    where
        F: FnMut(S::Item, S::Item) -> S::Item,
        S::Item: Clone,
    {
        AsyncIter {
            stream: Accumulate::new(self.stream, f, initial),
        }
    }

    pub fn append_left(self, item: S::Item) -> AsyncIter<Insert<S>> {
        self.append_at(0, item)
    }

    pub fn append_right(self, item: S::Item) -> AsyncIter<Insert<S>> {
        self.append_at(usize::MAX, item)
    }

    /// Insert `item` before the item at `index`, or at the end if the
    /// stream is shorter than that.
    pub fn append_at(self, index: usize, item: S::Item) -> AsyncIter<Insert<S>> {
        AsyncIter {
            stream: Insert::new(self.stream, index, item),
        }
    }

    /// Remove one level of nesting. Inner sequences may be sync or async;
    /// see [`Nested`].
    ///
    /// ```rust
    /// use iter_model::{AsyncIter, SyncIter};
    /// use either::Either;
    ///
    /// let nested = AsyncIter::from_sync([
    ///     Either::Left(SyncIter::new(0..2)),
    ///     Either::Right(AsyncIter::from_sync(2..4)),
    /// ]);
    /// let flat = futures::executor::block_on(nested.flatten().to_list());
    /// assert_eq!(flat, vec![0, 1, 2, 3]);
    /// ```
    pub fn flatten(self) -> AsyncIter<Flatten<S, <S::Item as Nested>::Stream>>
    where
        S::Item: Nested,
    {
        AsyncIter {
            stream: Flatten::new(self.stream),
        }
    }

    /// Remove one level of nesting from a stream of synchronous iterables.
    pub fn flatten_iter(self) -> AsyncIter<FlattenIter<S, <S::Item as IntoIterator>::IntoIter>>
    where
        S::Item: IntoIterator,
    {
        AsyncIter {
            stream: FlattenIter::new(self.stream),
        }
    }

    pub fn mark_first(self) -> AsyncIter<MarkFirst<S>> {
        AsyncIter {
            stream: MarkFirst::new(self.stream),
        }
    }

    pub fn mark_last(self) -> AsyncIter<MarkLast<S>> {
        AsyncIter {
            stream: MarkLast::new(self.stream),
        }
    }

    pub fn mark_first_last(self) -> AsyncIter<MarkFirstLast<S>> {
        AsyncIter {
            stream: MarkFirstLast::new(self.stream),
        }
    }

    pub async fn count(self) -> usize {
        let mut stream = pin!(self.stream);
        let mut count = 0;
        while stream.next().await.is_some() {
            count += 1;
        }
        count
    }

    /// Same as [`count`](AsyncIter::count).
    pub async fn get_len(self) -> usize {
        self.count().await
    }

    pub async fn first(self) -> Result<S::Item> {
        let mut stream = pin!(self.stream);
        stream.next().await.ok_or(IterError::Exhausted)
    }

    pub async fn last(self) -> Result<S::Item> {
        let mut stream = pin!(self.stream);
        let mut last = None;
        while let Some(item) = stream.next().await {
            last = Some(item);
        }
        last.ok_or(IterError::Exhausted)
    }

    /// The first item matching `condition`, else `default`.
    pub async fn first_where<F>(self, mut condition: F, default: Option<S::Item>) -> Result<S::Item>
    where
        F: Condition<S::Item>,
    {
        let mut stream = pin!(self.stream);
        while let Some(item) = stream.next().await {
            if condition.test(&item).await {
                return Ok(item);
            }
        }
        default.ok_or(IterError::NotFound)
    }

    /// The last item matching `condition`, else `default`.
    pub async fn last_where<F>(self, mut condition: F, default: Option<S::Item>) -> Result<S::Item>
    where
        F: Condition<S::Item>,
    {
        let mut stream = pin!(self.stream);
        let mut found = None;
        while let Some(item) = stream.next().await {
            if condition.test(&item).await {
                found = Some(item);
            }
        }
        found.or(default).ok_or(IterError::NotFound)
    }

    /// Left fold. Without `initial`, the first item is the seed.
    pub async fn reduce<F>(self, mut f: F, initial: Option<S::Item>) -> Result<S::Item>
    where
        F: FnMut(S::Item, S::Item) -> S::Item,
    {
        let mut stream = pin!(self.stream);
        let mut acc = match initial {
            Some(seed) => seed,
            None => stream
                .next()
                .await
                .ok_or_else(|| IterError::EmptyInput.logged("reduce"))?,
        };
        while let Some(item) = stream.next().await {
            acc = f(acc, item);
        }
        Ok(acc)
    }

    /// The largest item; the first one wins ties.
    pub async fn max(self, default: Option<S::Item>) -> Result<S::Item>
    where
        S::Item: PartialOrd,
    {
        extreme(self.stream, |item, best| item > best)
            .await
            .or(default)
            .ok_or_else(|| IterError::EmptyInput.logged("max"))
    }

    /// The smallest item; the first one wins ties.
    pub async fn min(self, default: Option<S::Item>) -> Result<S::Item>
    where
        S::Item: PartialOrd,
    {
        extreme(self.stream, |item, best| item < best)
            .await
            .or(default)
            .ok_or_else(|| IterError::EmptyInput.logged("min"))
    }

    /// The item with the largest `key`.
    pub async fn max_by_key<K, F>(self, key: F, default: Option<S::Item>) -> Result<S::Item>
    where
        K: PartialOrd,
        F: FnMut(&S::Item) -> K,
    {
        extreme_by_key(self.stream, key, |k, best| k > best)
            .await
            .or(default)
            .ok_or_else(|| IterError::EmptyInput.logged("max_by_key"))
    }

    /// The item with the smallest `key`.
    pub async fn min_by_key<K, F>(self, key: F, default: Option<S::Item>) -> Result<S::Item>
    where
        K: PartialOrd,
        F: FnMut(&S::Item) -> K,
    {
        extreme_by_key(self.stream, key, |k, best| k < best)
            .await
            .or(default)
            .ok_or_else(|| IterError::EmptyInput.logged("min_by_key"))
    }

    /// `true` unless some item fails `condition`. Stops at the first failure.
    pub async fn all<F>(self, mut condition: F) -> bool
    where
        F: Condition<S::Item>,
    {
        let mut stream = pin!(self.stream);
        while let Some(item) = stream.next().await {
            if !condition.test(&item).await {
                return false;
            }
        }
        true
    }

    /// `true` if some item passes `condition`. Stops at the first success.
    pub async fn any<F>(self, mut condition: F) -> bool
    where
        F: Condition<S::Item>,
    {
        let mut stream = pin!(self.stream);
        while let Some(item) = stream.next().await {
            if condition.test(&item).await {
                return true;
            }
        }
        false
    }

    /// The item at position `index`.
    pub async fn item_at(self, index: usize) -> Result<S::Item> {
        let mut stream = pin!(self.stream);
        let mut position = 0;
        while let Some(item) = stream.next().await {
            if position == index {
                return Ok(item);
            }
            position += 1;
        }
        Err(IterError::IndexOutOfRange { index }.logged("item_at"))
    }

    /// Same as [`item_at`](AsyncIter::item_at).
    pub async fn get(self, index: usize) -> Result<S::Item> {
        self.item_at(index).await
    }

    pub async fn contains(self, needle: &S::Item) -> bool
    where
        S::Item: PartialEq,
    {
        let mut stream = pin!(self.stream);
        while let Some(item) = stream.next().await {
            if item == *needle {
                return true;
            }
        }
        false
    }

    /// Pulls one item to find out; that item is lost.
    pub async fn is_empty(self) -> bool {
        self.first().await.is_err()
    }

    pub async fn is_not_empty(self) -> bool {
        !self.is_empty().await
    }
}

impl<S: Stream> Stream for AsyncIter<S> {
    type Item = S::Item;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.project().stream.poll_next(cx)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.stream.size_hint()
    }
}

impl<S: Stream> From<S> for AsyncIter<S> {
    fn from(stream: S) -> Self {
        AsyncIter { stream }
    }
}

/// The item `better` prefers over every earlier one.
async fn extreme<S: Stream>(
    stream: S,
    mut better: impl FnMut(&S::Item, &S::Item) -> bool,
) -> Option<S::Item> {
    let mut stream = pin!(stream);
    let mut best: Option<S::Item> = None;
    while let Some(item) = stream.next().await {
        if best.as_ref().is_none_or(|best| better(&item, best)) {
            best = Some(item);
        }
    }
    best
}

/// Like [`extreme`], comparing keys computed once per item.
async fn extreme_by_key<S: Stream, K>(
    stream: S,
    mut key: impl FnMut(&S::Item) -> K,
    mut better: impl FnMut(&K, &K) -> bool,
) -> Option<S::Item> {
    let mut stream = pin!(stream);
    let mut best: Option<(K, S::Item)> = None;
    while let Some(item) = stream.next().await {
        let k = key(&item);
        if best.as_ref().is_none_or(|(best_key, _)| better(&k, best_key)) {
            best = Some((k, item));
        }
    }
    best.map(|(_, item)| item)
}
