//! Calling convention for the callbacks of the async family.
//!
//! Async operators invoke every user callback through [`AsyncMap`] (for
//! mappers) or [`Condition`] (for predicates), which always hand back a
//! future. Closures that already return a future implement these traits
//! directly; plain closures are adapted with [`asyncify`].
//!
//! ```rust
//! use iter_model::{AsyncIter, asyncify};
//!
//! let doubled = AsyncIter::from_sync(0..4).map(asyncify(|x: i32| x * 2));
//! let odd = AsyncIter::from_sync(0..4).where_(|x: &i32| {
//!     let odd = x % 2 == 1;
//!     async move { odd }
//! });
//!
//! futures::executor::block_on(async {
//!     assert_eq!(doubled.to_list().await, vec![0, 2, 4, 6]);
//!     assert_eq!(odd.to_list().await, vec![1, 3]);
//! });
//! ```
//!
//! A predicate only borrows the item while it is called: the future it
//! returns must not hold on to the reference.

use std::future::{Future, Ready, ready};

/// A mapping callback that produces its result as a future.
pub trait AsyncMap<T> {
    /// Value the future resolves to.
    type Output;
    /// Future returned by [`call`](AsyncMap::call).
    type Future: Future<Output = Self::Output>;

    fn call(&mut self, item: T) -> Self::Future;
}

impl<T, F, Fut> AsyncMap<T> for F
where
    F: FnMut(T) -> Fut,
    Fut: Future,
{
    type Output = Fut::Output;
    type Future = Fut;

    fn call(&mut self, item: T) -> Fut {
        self(item)
    }
}

/// A predicate that produces its verdict as a future.
pub trait Condition<T> {
    /// Future returned by [`test`](Condition::test).
    type Future: Future<Output = bool>;

    fn test(&mut self, item: &T) -> Self::Future;
}

impl<T, F, Fut> Condition<T> for F
where
    F: FnMut(&T) -> Fut,
    Fut: Future<Output = bool>,
{
    type Future = Fut;

    fn test(&mut self, item: &T) -> Fut {
        self(item)
    }
}

/// A plain closure adapted to [`AsyncMap`] and [`Condition`].
///
/// Created by [`asyncify`]. The returned futures are always ready.
#[derive(Debug, Clone, Copy)]
pub struct Asyncify<F>(F);

/// Adapt a synchronous closure to the async calling convention.
///
/// `FnMut(T) -> R` becomes an [`AsyncMap<T, Output = R>`](AsyncMap) and
/// `FnMut(&T) -> bool` becomes a [`Condition<T>`](Condition).
pub fn asyncify<F>(f: F) -> Asyncify<F> {
    Asyncify(f)
}

impl<T, R, F> AsyncMap<T> for Asyncify<F>
where
    F: FnMut(T) -> R,
{
    type Output = R;
    type Future = Ready<R>;

    fn call(&mut self, item: T) -> Ready<R> {
        ready((self.0)(item))
    }
}

impl<T, F> Condition<T> for Asyncify<F>
where
    F: FnMut(&T) -> bool,
{
    type Future = Ready<bool>;

    fn test(&mut self, item: &T) -> Ready<bool> {
        ready((self.0)(item))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    fn run_map<M: AsyncMap<i32>>(mut m: M, item: i32) -> M::Output {
        block_on(m.call(item))
    }

    fn run_condition<C: Condition<i32>>(mut c: C, item: i32) -> bool {
        block_on(c.test(&item))
    }

    #[test]
    fn test_plain_and_future_mappers_agree() {
        assert_eq!(run_map(asyncify(|x: i32| x + 1), 1), 2);
        assert_eq!(run_map(|x: i32| async move { x + 1 }, 1), 2);
    }

    #[test]
    fn test_plain_and_future_conditions_agree() {
        assert!(run_condition(asyncify(|x: &i32| *x > 0), 1));
        assert!(!run_condition(
            |x: &i32| {
                let positive = *x > 0;
                async move { positive }
            },
            -1
        ));
    }

    #[test]
    fn test_stateful_closure_keeps_state_between_calls() {
        let mut seen = 0;
        let mut counter = asyncify(move |x: i32| {
            seen += 1;
            x * seen
        });
        assert_eq!(block_on(counter.call(10)), 10);
        assert_eq!(block_on(counter.call(10)), 20);
    }
}
