/// Running fold: yields every intermediate accumulator value.
///
/// With an initial value, that value is yielded first. Without one, the
/// first upstream item seeds the accumulator and is yielded unchanged.
pub struct Accumulate<I: Iterator, F> {
    iter: I,
    f: F,
    acc: Option<I::Item>,
    seed: Option<I::Item>,
}

impl<I: Iterator, F> Accumulate<I, F> {
    pub(crate) fn new(iter: I, f: F, initial: Option<I::Item>) -> Self {
        Accumulate {
            iter,
            f,
            acc: None,
            seed: initial,
        }
    }
}

impl<I, F> Iterator for Accumulate<I, F>
where
    I: Iterator,
    I::Item: Clone,
    F: FnMut(I::Item, I::Item) -> I::Item,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(seed) = self.seed.take() {
            self.acc = Some(seed.clone());
            return Some(seed);
        }
        let item = self.iter.next()?;
        let value = match self.acc.take() {
            Some(acc) => (self.f)(acc, item),
            None => item,
        };
        self.acc = Some(value.clone());
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let extra = usize::from(self.seed.is_some());
        let (lower, upper) = self.iter.size_hint();
        (
            lower.saturating_add(extra),
            upper.and_then(|upper| upper.checked_add(extra)),
        )
    }
}
