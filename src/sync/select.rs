use std::iter::FusedIterator;

/// Keeps (or drops) the items a predicate accepts.
///
/// Backs both [`where_`](crate::SyncIter::where_) and
/// [`skip_where`](crate::SyncIter::skip_where).
pub struct Filter<I, F> {
    iter: I,
    predicate: F,
    keep: bool,
}

impl<I, F> Filter<I, F> {
    pub(crate) fn new(iter: I, predicate: F, keep: bool) -> Self {
        Filter {
            iter,
            predicate,
            keep,
        }
    }
}

impl<I, F> Iterator for Filter<I, F>
where
    I: Iterator,
    F: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let keep = self.keep;
        let predicate = &mut self.predicate;
        self.iter.find(|item| predicate(item) == keep)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iter.size_hint().1)
    }
}

impl<I: FusedIterator, F> FusedIterator for Filter<I, F> where F: FnMut(&I::Item) -> bool {}

/// Pairs every item with a running index that starts at an arbitrary value.
pub struct Enumerate<I> {
    iter: I,
    index: usize,
}

impl<I> Enumerate<I> {
    pub(crate) fn new(iter: I, start: usize) -> Self {
        Enumerate { iter, index: start }
    }
}

impl<I: Iterator> Iterator for Enumerate<I> {
    type Item = (usize, I::Item);

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.iter.next()?;
        let index = self.index;
        self.index += 1;
        Some((index, item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}
