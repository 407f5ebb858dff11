//! Zipping a sequence with any number of other sources of the same item type.
//!
//! Each round pulls one item from every source, in order, and yields them as
//! a `Vec` with one slot per source (the wrapped sequence first).

use crate::{IterError, Result};

/// Rounds of items; ends as soon as one source runs out.
pub struct Zip<I, J> {
    head: I,
    rest: Vec<J>,
}

impl<I, J> Zip<I, J> {
    pub(crate) fn new(head: I, rest: Vec<J>) -> Self {
        Zip { head, rest }
    }
}

impl<I, J> Iterator for Zip<I, J>
where
    I: Iterator,
    J: Iterator<Item = I::Item>,
{
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut round = Vec::with_capacity(self.rest.len() + 1);
        round.push(self.head.next()?);
        for source in &mut self.rest {
            round.push(source.next()?);
        }
        Some(round)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.rest
            .iter()
            .map(Iterator::size_hint)
            .fold(self.head.size_hint(), |(lower, upper), (l, u)| {
                let upper = match (upper, u) {
                    (Some(a), Some(b)) => Some(a.min(b)),
                    (a, b) => a.or(b),
                };
                (lower.min(l), upper)
            })
    }
}

/// Rounds of items that must all end together.
///
/// Yields `Ok(round)` while every source produces an item. On the round where
/// some sources are exhausted and others are not, yields a single
/// `Err(IterError::LengthMismatch)` and ends.
pub struct ZipStrict<I, J> {
    head: I,
    rest: Vec<J>,
    done: bool,
}

impl<I, J> ZipStrict<I, J> {
    pub(crate) fn new(head: I, rest: Vec<J>) -> Self {
        ZipStrict {
            head,
            rest,
            done: false,
        }
    }
}

impl<I, J> Iterator for ZipStrict<I, J>
where
    I: Iterator,
    J: Iterator<Item = I::Item>,
{
    type Item = Result<Vec<I::Item>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let mut slots = Vec::with_capacity(self.rest.len() + 1);
        slots.push(self.head.next());
        slots.extend(self.rest.iter_mut().map(Iterator::next));

        let round = strict_round(slots);
        self.done = !matches!(round, Some(Ok(_)));
        round
    }
}

/// Rounds of items that continue until every source is exhausted.
///
/// Exhausted sources are not pulled again; their slots hold clones of the
/// fill value.
pub struct ZipLongest<I: Iterator, J> {
    head: I,
    rest: Vec<J>,
    exhausted: Vec<bool>,
    fill: I::Item,
}

impl<I: Iterator, J> ZipLongest<I, J> {
    pub(crate) fn new(head: I, rest: Vec<J>, fill: I::Item) -> Self {
        let exhausted = vec![false; rest.len() + 1];
        ZipLongest {
            head,
            rest,
            exhausted,
            fill,
        }
    }
}

impl<I, J> Iterator for ZipLongest<I, J>
where
    I: Iterator,
    I::Item: Clone,
    J: Iterator<Item = I::Item>,
{
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let (head_exhausted, rest_exhausted) = self.exhausted.split_at_mut(1);
        let mut slots = Vec::with_capacity(self.rest.len() + 1);
        slots.push(pull(&mut self.head, &mut head_exhausted[0]));
        for (source, exhausted) in self.rest.iter_mut().zip(rest_exhausted) {
            slots.push(pull(source, exhausted));
        }
        longest_round(slots, &self.fill)
    }
}

fn pull<I: Iterator>(source: &mut I, exhausted: &mut bool) -> Option<I::Item> {
    if *exhausted {
        return None;
    }
    let item = source.next();
    *exhausted = item.is_none();
    item
}

/// Settle one strict round: every slot filled, every slot empty, or a mismatch.
pub(crate) fn strict_round<T>(slots: Vec<Option<T>>) -> Option<Result<Vec<T>>> {
    let head_present = slots.first().is_some_and(Option::is_some);
    match slots.iter().position(|slot| slot.is_some() != head_present) {
        Some(index) => {
            let err = IterError::LengthMismatch { argument: index + 1 };
            log::debug!("zip_strict: {err}");
            Some(Err(err))
        }
        None if head_present => Some(Ok(slots.into_iter().flatten().collect())),
        None => None,
    }
}

/// Settle one longest round: `None` once no slot produced an item.
pub(crate) fn longest_round<T: Clone>(slots: Vec<Option<T>>, fill: &T) -> Option<Vec<T>> {
    if slots.iter().all(Option::is_none) {
        return None;
    }
    Some(
        slots
            .into_iter()
            .map(|slot| slot.unwrap_or_else(|| fill.clone()))
            .collect(),
    )
}
