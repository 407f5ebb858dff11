//! The blocking sequence wrapper.
//!
//! [`SyncIter`] owns one iterator and layers the operator set on top of it.
//!
//! # Examples
//!
//! ```rust
//! use iter_model::SyncIter;
//!
//! let labels = SyncIter::new(0..10)
//!     .where_(|x| x % 2 == 0)
//!     .map(|x| x.to_string())
//!     .enumerate(0)
//!     .to_list();
//! assert_eq!(labels[2], (2, "4".to_string()));
//!
//! let batches = SyncIter::new(0..10).batches(3).to_list();
//! assert_eq!(batches, vec![vec![0, 1, 2], vec![3, 4, 5], vec![6, 7, 8], vec![9]]);
//! ```

use std::collections::HashSet;
use std::hash::Hash;
use std::iter::{Chain, Flatten, FromFn, Map, Skip, SkipWhile, StepBy, Take, TakeWhile};
use std::ops::{Bound, RangeBounds};

use either::Either;

use super::{
    Accumulate, Batches, Enumerate, Filter, Insert, MarkFirst, MarkFirstLast, MarkLast, Pairwise,
    Zip, ZipLongest, ZipStrict,
};
use crate::{Empty, IterError, Result};

/// Adapter stack behind [`SyncIter::islice`] and [`SyncIter::slice`].
pub type Slice<I> = StepBy<Either<Take<Skip<I>>, Skip<I>>>;

/// A blocking, single-consumer sequence with chainable operators.
///
/// Lazy operators take `self` and return a new `SyncIter`, so a sequence can
/// only feed one downstream. Use [`by_ref`](SyncIter::by_ref) to run a
/// bounded operator over part of a sequence and keep the rest.
///
/// ```rust
/// use iter_model::SyncIter;
///
/// let mut numbers = SyncIter::new(0..10);
/// assert_eq!(numbers.by_ref().take(3).to_list(), vec![0, 1, 2]);
/// assert_eq!(numbers.by_ref().take(2).to_list(), vec![3, 4]);
/// assert_eq!(numbers.count(), 5);
/// ```
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct SyncIter<I> {
    iter: I,
}

impl<T> SyncIter<Empty<T>> {
    /// A sequence with no items.
    pub fn empty() -> Self {
        SyncIter { iter: Empty::new() }
    }
}

impl<T, F> SyncIter<FromFn<F>>
where
    F: FnMut() -> Option<T>,
{
    /// A hand-written generator: `f` is called for every item until it
    /// returns `None`.
    ///
    /// ```rust
    /// use iter_model::SyncIter;
    ///
    /// let mut n = 0;
    /// let squares = SyncIter::from_fn(move || {
    ///     n += 1;
    ///     (n <= 3).then_some(n * n)
    /// });
    /// assert_eq!(squares.to_list(), vec![1, 4, 9]);
    /// ```
    pub fn from_fn(f: F) -> Self {
        SyncIter {
            iter: std::iter::from_fn(f),
        }
    }
}

impl<I: Iterator> SyncIter<I> {
    /// Wrap anything iterable.
    pub fn new<S>(source: S) -> Self
    where
        S: IntoIterator<IntoIter = I>,
    {
        SyncIter {
            iter: source.into_iter(),
        }
    }

    /// Give back the wrapped iterator.
    pub fn into_inner(self) -> I {
        self.iter
    }

    /// Borrow this sequence as a new one; whatever the borrow does not
    /// consume stays available here.
    pub fn by_ref(&mut self) -> SyncIter<&mut I> {
        SyncIter {
            iter: &mut self.iter,
        }
    }

    /// Pull one item, reporting exhaustion as [`IterError::Exhausted`].
    pub fn next_item(&mut self) -> Result<I::Item> {
        self.iter.next().ok_or(IterError::Exhausted)
    }

    /// Continue this sequence in the async family.
    #[cfg(feature = "async")]
    pub fn into_async(self) -> crate::AsyncIter<futures::stream::Iter<I>> {
        crate::AsyncIter::from_sync(self.iter)
    }

    pub fn to_list(self) -> Vec<I::Item> {
        self.iter.collect()
    }

    /// Collect into an immutable, fixed-length sequence.
    pub fn to_tuple(self) -> Box<[I::Item]> {
        self.iter.collect()
    }

    pub fn to_set(self) -> HashSet<I::Item>
    where
        I::Item: Eq + Hash,
    {
        self.iter.collect()
    }

    pub fn map<R, F>(self, f: F) -> SyncIter<Map<I, F>>
    where
        F: FnMut(I::Item) -> R,
    {
        SyncIter {
            iter: self.iter.map(f),
        }
    }

    /// Keep the items for which `predicate` holds.
    pub fn where_<F>(self, predicate: F) -> SyncIter<Filter<I, F>>
    where
        F: FnMut(&I::Item) -> bool,
    {
        SyncIter {
            iter: Filter::new(self.iter, predicate, true),
        }
    }

    /// Drop the items for which `predicate` holds.
    pub fn skip_where<F>(self, predicate: F) -> SyncIter<Filter<I, F>>
    where
        F: FnMut(&I::Item) -> bool,
    {
        SyncIter {
            iter: Filter::new(self.iter, predicate, false),
        }
    }

    /// At most `count` items. Nothing is pulled upstream after the last one.
    pub fn take(self, count: usize) -> SyncIter<Take<I>> {
        SyncIter {
            iter: self.iter.take(count),
        }
    }

    pub fn skip(self, count: usize) -> SyncIter<Skip<I>> {
        SyncIter {
            iter: self.iter.skip(count),
        }
    }

    /// Items up to (excluding) the first one failing `predicate`.
    ///
    /// The failing item is consumed and the sequence never resumes.
    pub fn take_while<F>(self, predicate: F) -> SyncIter<TakeWhile<I, F>>
    where
        F: FnMut(&I::Item) -> bool,
    {
        SyncIter {
            iter: self.iter.take_while(predicate),
        }
    }

    /// Everything from the first item failing `predicate` on.
    pub fn skip_while<F>(self, predicate: F) -> SyncIter<SkipWhile<I, F>>
    where
        F: FnMut(&I::Item) -> bool,
    {
        SyncIter {
            iter: self.iter.skip_while(predicate),
        }
    }

    /// Pair every item with an index counting up from `start`.
    pub fn enumerate(self, start: usize) -> SyncIter<Enumerate<I>> {
        SyncIter {
            iter: Enumerate::new(self.iter, start),
        }
    }

    /// This sequence, then each of `others` in order.
    pub fn chain<O>(self, others: O) -> SyncIter<Chain<I, Flatten<O::IntoIter>>>
    where
        O: IntoIterator,
        O::Item: IntoIterator<Item = I::Item>,
    {
        SyncIter {
            iter: self.iter.chain(others.into_iter().flatten()),
        }
    }

    /// Rounds of one item per source, ending with the shortest source.
    pub fn zip<O>(self, others: O) -> SyncIter<Zip<I, <O::Item as IntoIterator>::IntoIter>>
    where
        O: IntoIterator,
        O::Item: IntoIterator<Item = I::Item>,
    {
        let rest = others.into_iter().map(IntoIterator::into_iter).collect();
        SyncIter {
            iter: Zip::new(self.iter, rest),
        }
    }

    /// Like [`zip`](SyncIter::zip), but sources of different lengths
    /// produce an `Err(IterError::LengthMismatch)` item.
    ///
    /// ```rust
    /// use iter_model::{IterError, SyncIter};
    ///
    /// let rounds = SyncIter::new(0..3).zip_strict([0..4]).to_list();
    /// assert_eq!(rounds.len(), 4);
    /// assert_eq!(rounds[3], Err(IterError::LengthMismatch { argument: 2 }));
    /// ```
    pub fn zip_strict<O>(
        self,
        others: O,
    ) -> SyncIter<ZipStrict<I, <O::Item as IntoIterator>::IntoIter>>
    where
        O: IntoIterator,
        O::Item: IntoIterator<Item = I::Item>,
    {
        let rest = others.into_iter().map(IntoIterator::into_iter).collect();
        SyncIter {
            iter: ZipStrict::new(self.iter, rest),
        }
    }

    /// Rounds of one item per source until all are exhausted; exhausted
    /// sources contribute `fill`.
    pub fn zip_longest<O>(
        self,
        others: O,
        fill: I::Item,
    ) -> SyncIter<ZipLongest<I, <O::Item as IntoIterator>::IntoIter>>
    where
        O: IntoIterator,
        O::Item: IntoIterator<Item = I::Item>,
        I::Item: Clone,
    {
        let rest = others.into_iter().map(IntoIterator::into_iter).collect();
        SyncIter {
            iter: ZipLongest::new(self.iter, rest, fill),
        }
    }

    /// Items `start, start + step, ...` below `stop` (unbounded if `None`).
    ///
    /// # Panics
    ///
    /// Panics if `step` is zero.
    pub fn islice(self, start: usize, stop: Option<usize>, step: usize) -> SyncIter<Slice<I>> {
        assert!(step > 0, "slice step must be greater than zero");
        let skipped = self.iter.skip(start);
        let bounded = match stop {
            Some(stop) => Either::Left(skipped.take(stop.saturating_sub(start))),
            None => Either::Right(skipped),
        };
        SyncIter {
            iter: bounded.step_by(step),
        }
    }

    /// The items whose positions fall in `range`.
    ///
    /// ```rust
    /// use iter_model::SyncIter;
    ///
    /// assert_eq!(SyncIter::new(0..10).slice(4..7).to_list(), vec![4, 5, 6]);
    /// assert_eq!(SyncIter::new(0..10).slice(..=1).to_list(), vec![0, 1]);
    /// ```
    pub fn slice<R: RangeBounds<usize>>(self, range: R) -> SyncIter<Slice<I>> {
        let (start, stop) = slice_bounds(&range);
        self.islice(start, stop, 1)
    }

    /// Overlapping pairs of neighbouring items.
    pub fn pairwise(self) -> SyncIter<Pairwise<I>>
    where
        I::Item: Clone,
    {
        SyncIter {
            iter: Pairwise::new(self.iter),
        }
    }

    /// Chunks of `size` items; the last chunk may be shorter.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    pub fn batches(self, size: usize) -> SyncIter<Batches<I>> {
        SyncIter {
            iter: Batches::new(self.iter, size),
        }
    }

    /// Running fold of the items with `f`.
    pub fn accumulate<F>(self, f: F, initial: Option<I::Item>) -> SyncIter<Accumulate<I, F>>
    where
        F: FnMut(I::Item, I::Item) -> I::Item,
        I::Item: Clone,
    {
        SyncIter {
            iter: Accumulate::new(self.iter, f, initial),
        }
    }

    pub fn append_left(self, item: I::Item) -> SyncIter<Insert<I>> {
        self.append_at(0, item)
    }

    pub fn append_right(self, item: I::Item) -> SyncIter<Insert<I>> {
        self.append_at(usize::MAX, item)
    }

    /// Insert `item` before the item at `index`, or at the end if the
    /// sequence is shorter than that.
    pub fn append_at(self, index: usize, item: I::Item) -> SyncIter<Insert<I>> {
        SyncIter {
            iter: Insert::new(self.iter, index, item),
        }
    }

    /// Remove one level of nesting.
    pub fn flatten(self) -> SyncIter<Flatten<I>>
    where
        I::Item: IntoIterator,
    {
        SyncIter {
            iter: self.iter.flatten(),
        }
    }

    pub fn mark_first(self) -> SyncIter<MarkFirst<I>> {
        SyncIter {
            iter: MarkFirst::new(self.iter),
        }
    }

    pub fn mark_last(self) -> SyncIter<MarkLast<I>> {
        SyncIter {
            iter: MarkLast::new(self.iter),
        }
    }

    pub fn mark_first_last(self) -> SyncIter<MarkFirstLast<I>> {
        SyncIter {
            iter: MarkFirstLast::new(self.iter),
        }
    }

    pub fn count(self) -> usize {
        self.iter.count()
    }

    /// Same as [`count`](SyncIter::count).
    pub fn get_len(self) -> usize {
        self.count()
    }

    pub fn first(mut self) -> Result<I::Item> {
        self.next_item()
    }

    pub fn last(self) -> Result<I::Item> {
        self.iter.last().ok_or(IterError::Exhausted)
    }

    /// The first item matching `predicate`, else `default`.
    pub fn first_where<F>(self, mut predicate: F, default: Option<I::Item>) -> Result<I::Item>
    where
        F: FnMut(&I::Item) -> bool,
    {
        for item in self.iter {
            if predicate(&item) {
                return Ok(item);
            }
        }
        default.ok_or(IterError::NotFound)
    }

    /// The last item matching `predicate`, else `default`.
    pub fn last_where<F>(self, mut predicate: F, default: Option<I::Item>) -> Result<I::Item>
    where
        F: FnMut(&I::Item) -> bool,
    {
        let mut found = None;
        for item in self.iter {
            if predicate(&item) {
                found = Some(item);
            }
        }
        found.or(default).ok_or(IterError::NotFound)
    }

    /// Left fold. Without `initial`, the first item is the seed.
    pub fn reduce<F>(self, f: F, initial: Option<I::Item>) -> Result<I::Item>
    where
        F: FnMut(I::Item, I::Item) -> I::Item,
    {
        let mut iter = self.iter;
        let seed = match initial {
            Some(seed) => seed,
            None => iter
                .next()
                .ok_or_else(|| IterError::EmptyInput.logged("reduce"))?,
        };
        Ok(iter.fold(seed, f))
    }

    /// The largest item; the first one wins ties.
    pub fn max(self, default: Option<I::Item>) -> Result<I::Item>
    where
        I::Item: PartialOrd,
    {
        extreme(self.iter, |item, best| item > best)
            .or(default)
            .ok_or_else(|| IterError::EmptyInput.logged("max"))
    }

    /// The smallest item; the first one wins ties.
    pub fn min(self, default: Option<I::Item>) -> Result<I::Item>
    where
        I::Item: PartialOrd,
    {
        extreme(self.iter, |item, best| item < best)
            .or(default)
            .ok_or_else(|| IterError::EmptyInput.logged("min"))
    }

    /// The item with the largest `key`.
    pub fn max_by_key<K, F>(self, key: F, default: Option<I::Item>) -> Result<I::Item>
    where
        K: PartialOrd,
        F: FnMut(&I::Item) -> K,
    {
        extreme_by_key(self.iter, key, |k, best| k > best)
            .or(default)
            .ok_or_else(|| IterError::EmptyInput.logged("max_by_key"))
    }

    /// The item with the smallest `key`.
    pub fn min_by_key<K, F>(self, key: F, default: Option<I::Item>) -> Result<I::Item>
    where
        K: PartialOrd,
        F: FnMut(&I::Item) -> K,
    {
        extreme_by_key(self.iter, key, |k, best| k < best)
            .or(default)
            .ok_or_else(|| IterError::EmptyInput.logged("min_by_key"))
    }

    /// `true` unless some item fails `predicate`. Stops at the first failure.
    pub fn all<F>(mut self, predicate: F) -> bool
    where
        F: FnMut(I::Item) -> bool,
    {
        self.iter.all(predicate)
    }

    /// `true` if some item passes `predicate`. Stops at the first success.
    pub fn any<F>(mut self, predicate: F) -> bool
    where
        F: FnMut(I::Item) -> bool,
    {
        self.iter.any(predicate)
    }

    /// The item at position `index`.
    pub fn item_at(self, index: usize) -> Result<I::Item> {
        for (position, item) in self.enumerate(0) {
            if position == index {
                return Ok(item);
            }
        }
        Err(IterError::IndexOutOfRange { index }.logged("item_at"))
    }

    /// Same as [`item_at`](SyncIter::item_at).
    pub fn get(self, index: usize) -> Result<I::Item> {
        self.item_at(index)
    }

    pub fn contains(self, needle: &I::Item) -> bool
    where
        I::Item: PartialEq,
    {
        self.first_where(|item| item == needle, None).is_ok()
    }

    /// Pulls one item to find out; that item is lost.
    pub fn is_empty(mut self) -> bool {
        self.next_item().is_err()
    }

    pub fn is_not_empty(self) -> bool {
        !self.is_empty()
    }
}

impl<I: Iterator> Iterator for SyncIter<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<I: Iterator> From<I> for SyncIter<I> {
    fn from(iter: I) -> Self {
        SyncIter { iter }
    }
}

/// `(start, stop)` positions covered by `range`, as `islice` takes them.
pub(crate) fn slice_bounds<R: RangeBounds<usize>>(range: &R) -> (usize, Option<usize>) {
    let start = match range.start_bound() {
        Bound::Included(&start) => start,
        Bound::Excluded(&start) => start.saturating_add(1),
        Bound::Unbounded => 0,
    };
    let stop = match range.end_bound() {
        Bound::Included(&end) => Some(end.saturating_add(1)),
        Bound::Excluded(&end) => Some(end),
        Bound::Unbounded => None,
    };
    (start, stop)
}

/// The item `better` prefers over every earlier one.
pub(crate) fn extreme<T>(
    iter: impl Iterator<Item = T>,
    mut better: impl FnMut(&T, &T) -> bool,
) -> Option<T> {
    let mut best: Option<T> = None;
    for item in iter {
        if best.as_ref().is_none_or(|best| better(&item, best)) {
            best = Some(item);
        }
    }
    best
}

/// Like [`extreme`], comparing keys computed once per item.
pub(crate) fn extreme_by_key<T, K>(
    iter: impl Iterator<Item = T>,
    mut key: impl FnMut(&T) -> K,
    mut better: impl FnMut(&K, &K) -> bool,
) -> Option<T> {
    let mut best: Option<(K, T)> = None;
    for item in iter {
        let k = key(&item);
        if best.as_ref().is_none_or(|(best_key, _)| better(&k, best_key)) {
            best = Some((k, item));
        }
    }
    best.map(|(_, item)| item)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_materialize() {
        assert_eq!(SyncIter::new(0..5).to_list(), vec![0, 1, 2, 3, 4]);
        assert_eq!(&*SyncIter::new(0..3).to_tuple(), &[0, 1, 2]);
        assert_eq!(SyncIter::new([1, 1, 2]).to_set(), HashSet::from([1, 2]));
    }

    #[test]
    fn test_empty() {
        assert!(SyncIter::<Empty<i32>>::empty().is_empty());
        assert_eq!(SyncIter::<Empty<i32>>::empty().first(), Err(IterError::Exhausted));
        assert_eq!(SyncIter::<Empty<i32>>::empty().last(), Err(IterError::Exhausted));
        assert!(SyncIter::new(0..1).is_not_empty());
    }

    #[test]
    fn test_next_item_then_rest() {
        let mut it = SyncIter::new(0..3);
        assert_eq!(it.next_item(), Ok(0));
        assert_eq!(it.to_list(), vec![1, 2]);
    }

    #[test]
    fn test_repeated_take_partitions() {
        let mut it = SyncIter::new(0..10);
        assert_eq!(it.by_ref().take(0).to_list(), Vec::<i32>::new());
        assert_eq!(it.by_ref().take(4).to_list(), vec![0, 1, 2, 3]);
        assert_eq!(it.by_ref().take(3).to_list(), vec![4, 5, 6]);
        assert_eq!(it.by_ref().take(100).to_list(), vec![7, 8, 9]);
        assert_eq!(it.by_ref().to_list(), Vec::<i32>::new());
    }

    #[test]
    fn test_take_does_not_over_pull() {
        let mut pulled = 0;
        let source = SyncIter::from_fn(|| {
            pulled += 1;
            Some(pulled)
        });
        assert_eq!(source.take(3).to_list(), vec![1, 2, 3]);
        assert_eq!(pulled, 3);
    }

    #[test]
    fn test_skip_and_skip_while() {
        assert_eq!(SyncIter::new(0..10).skip(7).to_list(), vec![7, 8, 9]);
        assert_eq!(SyncIter::new(0..10).skip(100).count(), 0);
        assert_eq!(
            SyncIter::new([1, 2, 5, 1]).skip_while(|x| *x < 3).to_list(),
            vec![5, 1]
        );
    }

    #[test]
    fn test_take_while_does_not_resume() {
        let taken = SyncIter::new([1, 2, 5, 1]).take_while(|x| *x < 3).to_list();
        assert_eq!(taken, vec![1, 2]);
    }

    #[test]
    fn test_where_and_skip_where() {
        assert_eq!(SyncIter::new(0..6).where_(|x| x % 2 == 1).to_list(), vec![1, 3, 5]);
        assert_eq!(SyncIter::new(0..6).skip_where(|x| x % 2 == 1).to_list(), vec![0, 2, 4]);
    }

    #[test]
    fn test_chain_many() {
        let chained = SyncIter::new(vec![3, 5]).chain([vec![1], vec![], vec![2, 3]]).to_list();
        assert_eq!(chained, vec![3, 5, 1, 2, 3]);
    }

    #[test]
    fn test_islice() {
        let cases: [(usize, Option<usize>, usize, Vec<i32>); 5] = [
            (0, None, 1, (0..10).collect()),
            (2, Some(7), 2, vec![2, 4, 6]),
            (4, Some(7), 1, vec![4, 5, 6]),
            (4, Some(8), 3, vec![4, 7]),
            (5, None, 3, vec![5, 8]),
        ];
        for (start, stop, step, expected) in cases {
            assert_eq!(SyncIter::new(0..10).islice(start, stop, step).to_list(), expected);
        }
        assert_eq!(SyncIter::new(0..10).slice(100..).count(), 0);
        assert_eq!(SyncIter::new(0..10).slice(..4).to_list(), vec![0, 1, 2, 3]);
    }

    #[test]
    #[should_panic(expected = "slice step must be greater than zero")]
    fn test_islice_rejects_zero_step() {
        let _ = SyncIter::new(0..10).islice(0, None, 0);
    }

    #[test]
    fn test_append() {
        assert_eq!(SyncIter::new(0..3).append_left(-1).to_list(), vec![-1, 0, 1, 2]);
        assert_eq!(SyncIter::new(0..3).append_right(-1).to_list(), vec![0, 1, 2, -1]);
        assert_eq!(SyncIter::new(0..3).append_at(1, -1).to_list(), vec![0, -1, 1, 2]);
        assert_eq!(SyncIter::new(0..3).append_at(9, -1).to_list(), vec![0, 1, 2, -1]);
    }

    #[test]
    fn test_flatten() {
        let flat = SyncIter::new(vec![0..3, 3..7]).flatten().to_list();
        assert_eq!(flat, vec![0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_first_and_last_where() {
        let words = || SyncIter::new(["wrong_answer", "here", "wrong_answer", "also"]);
        assert_eq!(words().first_where(|w| w.len() == 4, None), Ok("here"));
        assert_eq!(words().last_where(|w| w.len() == 4, None), Ok("also"));
        assert_eq!(words().first_where(|w| w.len() == 2, None), Err(IterError::NotFound));
        assert_eq!(words().last_where(|w| w.len() == 2, Some("dflt")), Ok("dflt"));
    }

    #[test]
    fn test_reduce() {
        assert_eq!(SyncIter::new(0..5).reduce(|a, b| a + b, Some(1)), Ok(11));
        assert_eq!(SyncIter::new(0..5).reduce(|a, b| a - b, Some(-10)), Ok(-20));
        assert_eq!(SyncIter::new(1..5).reduce(|a, b| a * b, None), Ok(24));
        assert_eq!(SyncIter::new(0..0).reduce(|a, b| a + b, Some(3)), Ok(3));
        assert_eq!(
            SyncIter::new(0..0).reduce(|a, b| a + b, None),
            Err(IterError::EmptyInput)
        );
    }

    #[test]
    fn test_max_and_min() {
        assert_eq!(SyncIter::new([-10, 10]).max(None), Ok(10));
        assert_eq!(SyncIter::new([10, -10]).min(None), Ok(-10));
        assert_eq!(SyncIter::new(Vec::<i32>::new()).max(Some(7)), Ok(7));
        assert_eq!(SyncIter::new(Vec::<i32>::new()).min(None), Err(IterError::EmptyInput));
    }

    #[test]
    fn test_key_ties_keep_first() {
        // 1, 2 and 4 all have a single bit set.
        let max = SyncIter::new([1u32, 2, 4]).max_by_key(|x| x.count_ones(), None);
        let min = SyncIter::new([3u32, 1, 2]).min_by_key(|x| x.count_ones(), None);
        assert_eq!(max, Ok(1));
        assert_eq!(min, Ok(1));
    }

    #[test]
    fn test_all_any() {
        assert!(SyncIter::new([1, 1, 1]).all(|x| x != 0));
        assert!(!SyncIter::new([1, 0, 1]).all(|x| x != 0));
        assert!(SyncIter::new([0, 1, 0]).any(|x| x != 0));
        assert!(!SyncIter::new([0, 0, 0]).any(|x| x != 0));
    }

    #[test]
    fn test_item_at_and_contains() {
        assert_eq!(SyncIter::new(["wrong", "here", "wrong"]).item_at(1), Ok("here"));
        assert_eq!(
            SyncIter::new(0..5).get(100),
            Err(IterError::IndexOutOfRange { index: 100 })
        );
        assert!(SyncIter::new([1, 2, 3]).contains(&3));
        assert!(!SyncIter::new([1, 2, 3]).contains(&-1));
    }

    #[test]
    fn test_count_and_get_len() {
        assert_eq!(SyncIter::new(0..100).count(), 100);
        assert_eq!(SyncIter::new(0..0).get_len(), 0);
    }

    #[test]
    fn test_from_iterator_value() {
        let it: SyncIter<_> = vec![1, 2].into_iter().into();
        assert_eq!(it.to_list(), vec![1, 2]);
    }
}
