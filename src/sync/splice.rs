/// Splices a single extra item into a sequence.
///
/// The item is emitted right before the upstream item at `index`. When the
/// upstream runs out before reaching `index`, the item goes at the end.
/// `append_left` uses index 0 and `append_right` uses `usize::MAX`.
pub struct Insert<I: Iterator> {
    iter: I,
    item: Option<I::Item>,
    index: usize,
    position: usize,
    done: bool,
}

impl<I: Iterator> Insert<I> {
    pub(crate) fn new(iter: I, index: usize, item: I::Item) -> Self {
        Insert {
            iter,
            item: Some(item),
            index,
            position: 0,
            done: false,
        }
    }
}

impl<I: Iterator> Iterator for Insert<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.position == self.index {
            if let Some(item) = self.item.take() {
                return Some(item);
            }
        }
        if !self.done {
            match self.iter.next() {
                Some(item) => {
                    self.position += 1;
                    return Some(item);
                }
                None => self.done = true,
            }
        }
        self.item.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let extra = usize::from(self.item.is_some());
        let (lower, upper) = if self.done {
            (0, Some(0))
        } else {
            self.iter.size_hint()
        };
        (
            lower.saturating_add(extra),
            upper.and_then(|upper| upper.checked_add(extra)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn insert(len: i32, index: usize) -> Vec<i32> {
        Insert::new(0..len, index, -10).collect()
    }

    #[test]
    fn test_insert_in_range() {
        assert_eq!(insert(5, 0), vec![-10, 0, 1, 2, 3, 4]);
        assert_eq!(insert(5, 3), vec![0, 1, 2, -10, 3, 4]);
    }

    #[test]
    fn test_insert_past_the_end_appends() {
        assert_eq!(insert(5, 5), vec![0, 1, 2, 3, 4, -10]);
        assert_eq!(insert(5, 100), vec![0, 1, 2, 3, 4, -10]);
        assert_eq!(insert(0, 0), vec![-10]);
        assert_eq!(insert(0, 3), vec![-10]);
    }

    #[test]
    fn test_insert_is_emitted_once() {
        let mut it = Insert::new(0..1, 0, 9);
        assert_eq!(it.next(), Some(9));
        assert_eq!(it.next(), Some(0));
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
    }
}
