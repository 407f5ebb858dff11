//! Operators that look at more than one item at a time.

use crate::SyncIter;

/// Overlapping pairs: `(a, b), (b, c), ...`.
pub struct Pairwise<I: Iterator> {
    iter: I,
    prev: Option<I::Item>,
}

impl<I: Iterator> Pairwise<I> {
    pub(crate) fn new(iter: I) -> Self {
        Pairwise { iter, prev: None }
    }
}

impl<I> Iterator for Pairwise<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = (I::Item, I::Item);

    fn next(&mut self) -> Option<Self::Item> {
        if self.prev.is_none() {
            self.prev = Some(self.iter.next()?);
        }
        let next = self.iter.next()?;
        let prev = self.prev.replace(next.clone())?;
        Some((prev, next))
    }
}

/// Fixed-size chunks; the last one may be shorter.
pub struct Batches<I> {
    iter: I,
    size: usize,
}

impl<I> Batches<I> {
    pub(crate) fn new(iter: I, size: usize) -> Self {
        assert!(size > 0, "batch size must be greater than zero");
        Batches { iter, size }
    }
}

impl<I: Iterator> Iterator for Batches<I> {
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        // An empty input yields no batch at all.
        let first = self.iter.next()?;
        Some(
            SyncIter::new(&mut self.iter)
                .append_left(first)
                .take(self.size)
                .to_list(),
        )
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.iter.size_hint();
        (
            lower.div_ceil(self.size),
            upper.map(|upper| upper.div_ceil(self.size)),
        )
    }
}

/// Tags every item with whether it is the first one.
pub struct MarkFirst<I> {
    iter: I,
    first: bool,
}

impl<I> MarkFirst<I> {
    pub(crate) fn new(iter: I) -> Self {
        MarkFirst { iter, first: true }
    }
}

impl<I: Iterator> Iterator for MarkFirst<I> {
    type Item = (I::Item, bool);

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.iter.next()?;
        Some((item, std::mem::replace(&mut self.first, false)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

/// Tags every item with whether it is the last one.
///
/// Holds one item of lookahead.
pub struct MarkLast<I: Iterator> {
    iter: I,
    prev: Option<I::Item>,
    done: bool,
}

impl<I: Iterator> MarkLast<I> {
    pub(crate) fn new(iter: I) -> Self {
        MarkLast {
            iter,
            prev: None,
            done: false,
        }
    }
}

impl<I: Iterator> Iterator for MarkLast<I> {
    type Item = (I::Item, bool);

    fn next(&mut self) -> Option<Self::Item> {
        lookahead(&mut self.iter, &mut self.prev, &mut self.done)
    }
}

/// Tags every item with whether it is the first and whether it is the last.
pub struct MarkFirstLast<I: Iterator> {
    iter: I,
    prev: Option<I::Item>,
    first: bool,
    done: bool,
}

impl<I: Iterator> MarkFirstLast<I> {
    pub(crate) fn new(iter: I) -> Self {
        MarkFirstLast {
            iter,
            prev: None,
            first: true,
            done: false,
        }
    }
}

impl<I: Iterator> Iterator for MarkFirstLast<I> {
    type Item = (I::Item, bool, bool);

    fn next(&mut self) -> Option<Self::Item> {
        let (item, is_last) = lookahead(&mut self.iter, &mut self.prev, &mut self.done)?;
        let is_first = std::mem::replace(&mut self.first, false);
        Some((item, is_first, is_last))
    }
}

/// Pull the next item and report whether it was the final one.
fn lookahead<I: Iterator>(
    iter: &mut I,
    prev: &mut Option<I::Item>,
    done: &mut bool,
) -> Option<(I::Item, bool)> {
    if *done {
        return None;
    }
    let current = match prev.take() {
        Some(item) => item,
        None => match iter.next() {
            Some(item) => item,
            None => {
                *done = true;
                return None;
            }
        },
    };
    match iter.next() {
        Some(next) => {
            *prev = Some(next);
            Some((current, false))
        }
        None => {
            *done = true;
            Some((current, true))
        }
    }
}
