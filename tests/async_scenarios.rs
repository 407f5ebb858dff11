#![cfg(feature = "async")]

use futures::executor::block_on;
use futures::stream::{self, BoxStream, StreamExt};

use iter_model::{AsyncIter, IterError, SyncIter, async_iter, asyncify};

/// A stream that suspends before every item.
fn yielding(items: Vec<i32>) -> BoxStream<'static, i32> {
    stream::iter(items)
        .then(|item| async move {
            yield_now().await;
            item
        })
        .boxed()
}

/// Return `Pending` once, waking the task straight away.
async fn yield_now() {
    let mut yielded = false;
    futures::future::poll_fn(|cx| {
        if yielded {
            std::task::Poll::Ready(())
        } else {
            yielded = true;
            cx.waker().wake_by_ref();
            std::task::Poll::Pending
        }
    })
    .await
}

#[test]
fn pipeline_over_suspending_source() {
    block_on(async {
        let labels = AsyncIter::new(yielding((0..10).collect()))
            .where_(|x: &i32| {
                let even = x % 2 == 0;
                async move { even }
            })
            .map(asyncify(|x: i32| x.to_string()))
            .enumerate(0)
            .to_list()
            .await;
        assert_eq!(
            labels,
            vec![
                (0, "0".to_string()),
                (1, "2".to_string()),
                (2, "4".to_string()),
                (3, "6".to_string()),
                (4, "8".to_string()),
            ]
        );
    });
}

#[test]
fn repeated_takes_on_boxed_source() {
    block_on(async {
        let mut it = AsyncIter::new(yielding((0..10).collect()));
        assert_eq!(it.by_ref().take(0).to_list().await, Vec::<i32>::new());
        assert_eq!(it.by_ref().take(4).to_list().await, vec![0, 1, 2, 3]);
        assert_eq!(it.by_ref().take(3).to_list().await, vec![4, 5, 6]);
        assert_eq!(it.next_item().await, Ok(7));
        assert_eq!(it.to_list().await, vec![8, 9]);
    });
}

#[test]
fn predicates_with_and_without_futures_agree() {
    block_on(async {
        let plain = AsyncIter::from_sync(0..10)
            .skip_while(asyncify(|x: &i32| *x < 5))
            .to_list()
            .await;
        let awaited = AsyncIter::from_sync(0..10)
            .skip_while(|x: &i32| {
                let small = *x < 5;
                async move {
                    yield_now().await;
                    small
                }
            })
            .to_list()
            .await;
        assert_eq!(plain, vec![5, 6, 7, 8, 9]);
        assert_eq!(plain, awaited);

        let taken = AsyncIter::from_sync([1, 2, 8, 1])
            .take_while(asyncify(|x: &i32| *x < 5))
            .to_list()
            .await;
        assert_eq!(taken, vec![1, 2]);
    });
}

#[test]
fn find_operators() {
    block_on(async {
        let words = || AsyncIter::from_sync(["wrong_answer", "wrong_answer", "here"]);
        let four = || asyncify(|w: &&str| w.len() == 4);
        assert_eq!(words().first_where(four(), None).await, Ok("here"));
        assert_eq!(words().last_where(four(), None).await, Ok("here"));
        assert_eq!(
            AsyncIter::from_sync(["to_long"])
                .first_where(four(), None)
                .await,
            Err(IterError::NotFound)
        );
        assert_eq!(
            AsyncIter::from_sync(["to_long"])
                .last_where(four(), Some("dflt"))
                .await,
            Ok("dflt")
        );
    });
}

#[test]
fn zip_family_over_suspending_sources() {
    block_on(async {
        let zipped = AsyncIter::new(yielding(vec![0, 1, 2]))
            .zip([yielding(vec![0, 1, 2, 3, 4])])
            .to_list()
            .await;
        assert_eq!(zipped, vec![vec![0, 0], vec![1, 1], vec![2, 2]]);

        let strict = AsyncIter::new(yielding(vec![0, 1, 2]))
            .zip_strict([yielding(vec![0, 1, 2, 3])])
            .to_list()
            .await;
        assert_eq!(strict.len(), 4);
        assert_eq!(strict[3], Err(IterError::LengthMismatch { argument: 2 }));

        let longest = AsyncIter::new(yielding(vec![0, 1, 2]))
            .zip_longest([yielding(vec![7])], -1)
            .to_list()
            .await;
        assert_eq!(longest, vec![vec![0, 7], vec![1, -1], vec![2, -1]]);
    });
}

#[test]
fn windowing() {
    block_on(async {
        assert_eq!(
            AsyncIter::from_sync(0..10).batches(3).to_list().await,
            vec![vec![0, 1, 2], vec![3, 4, 5], vec![6, 7, 8], vec![9]]
        );
        assert_eq!(
            AsyncIter::from_sync(["a", "b", "c"]).mark_first_last().to_list().await,
            vec![("a", true, false), ("b", false, false), ("c", false, true)]
        );
        assert_eq!(
            AsyncIter::new(yielding(vec![1, 2, 3])).pairwise().to_list().await,
            vec![(1, 2), (2, 3)]
        );
        assert_eq!(
            AsyncIter::from_sync(0..5)
                .accumulate(|a, b| a + b, None)
                .to_list()
                .await,
            vec![0, 1, 3, 6, 10]
        );
    });
}

#[test]
fn slicing_and_splicing() {
    block_on(async {
        assert_eq!(
            AsyncIter::from_sync(0..10).islice(3, None, 2).to_list().await,
            vec![3, 5, 7, 9]
        );
        assert_eq!(
            AsyncIter::from_sync(0..10).slice(4..7).to_list().await,
            vec![4, 5, 6]
        );
        for position in [0, 3, 100] {
            let mut expected: Vec<i32> = (0..5).collect();
            expected.insert(position.min(expected.len()), -10);
            let spliced = AsyncIter::from_sync(0..5).append_at(position, -10);
            assert_eq!(spliced.to_list().await, expected);
        }
        let chained = AsyncIter::from_sync(0..2)
            .chain([AsyncIter::from_sync(2..3), AsyncIter::from_sync(3..5)])
            .to_list()
            .await;
        assert_eq!(chained, vec![0, 1, 2, 3, 4]);
    });
}

#[test]
fn flatten_mixed_nesting() {
    use either::Either;

    block_on(async {
        let nested = AsyncIter::from_sync(vec![
            Either::Left(SyncIter::new(vec![0, 1, 2])),
            Either::Right(AsyncIter::new(yielding(vec![3, 4]))),
            Either::Left(SyncIter::new(vec![])),
        ]);
        assert_eq!(nested.flatten().to_list().await, vec![0, 1, 2, 3, 4]);

        let vectors = AsyncIter::from_sync([vec![1, 2], vec![3]]);
        assert_eq!(vectors.flatten_iter().to_list().await, vec![1, 2, 3]);
    });
}

#[test]
fn eager_reductions() {
    block_on(async {
        assert_eq!(AsyncIter::from_sync(0..5).reduce(|a, b| a * b, Some(1)).await, Ok(0));
        assert_eq!(
            AsyncIter::from_sync(Vec::<i32>::new()).max(None).await,
            Err(IterError::EmptyInput)
        );
        assert_eq!(
            AsyncIter::from_sync(["x", "yyy", "zz"]).max_by_key(|s| s.len(), None).await,
            Ok("yyy")
        );
        assert!(
            AsyncIter::from_sync([1, 1, 1])
                .all(asyncify(|x: &i32| *x != 0))
                .await
        );
        assert!(
            !AsyncIter::from_sync([0, 0, 0])
                .any(asyncify(|x: &i32| *x != 0))
                .await
        );
        assert_eq!(AsyncIter::from_sync(0..5).item_at(4).await, Ok(4));
        assert_eq!(
            AsyncIter::from_sync(0..5).get(5).await,
            Err(IterError::IndexOutOfRange { index: 5 })
        );
        assert!(AsyncIter::from_sync(0..5).contains(&3).await);
        assert!(AsyncIter::<iter_model::Empty<i32>>::empty().is_empty().await);
    });
}

#[test]
fn sync_pipeline_continues_async() {
    let doubled = SyncIter::new(0..4)
        .where_(|x| x % 2 == 1)
        .into_async()
        .map(|x: i32| async move { x * 2 });
    assert_eq!(block_on(doubled.to_list()), vec![2, 6]);
}

#[test]
fn decorated_async_generator() {
    let countdown = async_iter(|from: i32| {
        stream::unfold(from, |n| async move { (n > 0).then(|| (n, n - 1)) })
    });
    assert_eq!(block_on(countdown(3).to_list()), vec![3, 2, 1]);
    assert_eq!(block_on(countdown(0).count()), 0);
}
