use std::{
    any::Any,
    future::Future,
    panic::AssertUnwindSafe,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
};

use futures_util::FutureExt;
use log::{debug, error};
use tokio::sync::{oneshot, Mutex};

use super::{errors::slot_error::SlotError, slot::Slot};

type Bucket<T> = Mutex<Option<oneshot::Sender<Result<T, SlotError>>>>;

/**
 * Interleave operations by completion order
 *
 * Returns one slot per operation, immediately. Slot `k` resolves with the
 * outcome of whichever operation settles `k`-th, so awaiting slots in index
 * order always waits on "the next operation to finish".
 *
 * Each operation is awaited by its own watcher task, which makes this
 * callable only from within a Tokio runtime when `operations` is not empty.
 * Operations that are already running elsewhere can be passed as their
 * `JoinHandle`s.
 */
pub fn interleave<I, F>(operations: I) -> Vec<Slot<F::Output>>
where
    I: IntoIterator<Item = F>,
    F: Future + Send + 'static,
    F::Output: Send + 'static,
{
    let operations: Vec<F> = operations.into_iter().collect();

    debug!("Interleaving {} operations...", operations.len());

    let mut buckets: Vec<Bucket<F::Output>> = Vec::with_capacity(operations.len());
    let mut slots = Vec::with_capacity(operations.len());

    for index in 0..operations.len() {
        let (tx, rx) = oneshot::channel();

        buckets.push(Mutex::new(Some(tx)));
        slots.push(Slot::new(index, rx));
    }

    let buckets = Arc::new(buckets);
    let next_index = Arc::new(AtomicUsize::new(0));

    for operation in operations {
        let buckets = Arc::clone(&buckets);
        let next_index = Arc::clone(&next_index);

        tokio::spawn(async move {
            let settlement = AssertUnwindSafe(operation).catch_unwind().await;

            // Exactly one claim per settled operation
            let index = next_index.fetch_add(1, Ordering::AcqRel);

            let outcome = settlement.map_err(|payload| SlotError::Panicked {
                index,
                message: panic_message(payload.as_ref()),
            });

            resolve(&buckets, index, outcome).await;
        });
    }

    debug!("Done interleaving {} operations !", slots.len());

    slots
}

/**
 * Hand outcome over to claimed slot
 */
async fn resolve<T>(buckets: &[Bucket<T>], index: usize, outcome: Result<T, SlotError>) {
    let sender = match buckets.get(index) {
        Some(bucket) => bucket.lock().await.take(),
        None => None,
    };

    let Some(sender) = sender else {
        error!("Slot {} could not be claimed, outcome is lost", index);

        return;
    };

    if sender.send(outcome).is_err() {
        debug!("Slot {} was dropped before being resolved, discarding outcome", index);
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        return message.to_string();
    }

    match payload.downcast_ref::<String>() {
        Some(message) => message.clone(),
        None => String::from("unknown panic payload"),
    }
}

#[cfg(test)]
mod tests {
    use std::{collections::HashSet, time::Duration};

    use futures_util::future::{self, BoxFuture};
    use rand::Rng;
    use tokio::time::{sleep, timeout};

    use super::*;

    async fn settle_after<T>(delay_ms: u64, value: T) -> T {
        sleep(Duration::from_millis(delay_ms)).await;

        value
    }

    async fn explode(message: &'static str) -> u32 {
        panic!("{}", message)
    }

    /**
     * It should return no slots when given no operations
     */
    #[test]
    fn test_interleave_without_operations() {
        let slots = interleave(Vec::<future::Ready<u32>>::new());

        assert_eq!(slots.is_empty(), true);
    }

    /**
     * It should return one slot per operation, in index order
     */
    #[tokio::test]
    async fn test_interleave_returns_one_slot_per_operation() {
        let operations: Vec<_> = (0..5u32).map(future::ready).collect();

        let slots = interleave(operations);

        let indexes: Vec<usize> = slots.iter().map(|slot| slot.index()).collect();

        assert_eq!(indexes, vec![0, 1, 2, 3, 4]);
    }

    /**
     * It should hand slots back before any operation settles
     */
    #[tokio::test(start_paused = true)]
    async fn test_interleave_returns_before_settlement() {
        let (release_tx, release_rx) = oneshot::channel::<()>();

        let mut slots = interleave(vec![async move {
            let _ = release_rx.await;

            "released"
        }]);

        let mut slot = slots.remove(0);

        let still_pending = timeout(Duration::from_millis(10), &mut slot).await;

        assert_eq!(still_pending.is_err(), true);

        release_tx.send(()).unwrap();

        assert_eq!(slot.await, Ok("released"));
    }

    /**
     * It should yield outcomes in settlement order, not submission order
     */
    #[tokio::test(start_paused = true)]
    async fn test_interleave_yields_settlement_order() {
        let operations = vec![
            settle_after(5, "x"),
            settle_after(1, "y"),
            settle_after(3, "z"),
        ];

        let slots = interleave(operations);

        let mut values = Vec::new();
        for slot in slots {
            values.push(slot.await.unwrap());
        }

        assert_eq!(values, vec!["y", "z", "x"]);
    }

    /**
     * It should not block first slot on a straggling first operation
     */
    #[tokio::test]
    async fn test_interleave_not_blocked_by_submission_order() {
        let (release_tx, release_rx) = oneshot::channel::<()>();

        let straggler: BoxFuture<'static, &str> = async move {
            let _ = release_rx.await;

            "straggler"
        }
        .boxed();
        let quick: BoxFuture<'static, &str> = async { "quick" }.boxed();

        let mut slots = interleave(vec![straggler, quick]).into_iter();

        assert_eq!(slots.next().unwrap().await, Ok("quick"));

        release_tx.send(()).unwrap();

        assert_eq!(slots.next().unwrap().await, Ok("straggler"));
    }

    /**
     * It should route a failure to exactly one slot and leave others untouched
     */
    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_interleave_routes_failure_to_single_slot() {
        let operations = vec![
            future::ready(Ok("first")),
            future::ready(Err("boom")),
            future::ready(Ok("third")),
        ];

        let slots = interleave(operations);

        let mut failures = Vec::new();
        let mut values = HashSet::new();

        for slot in slots {
            match slot.await.unwrap() {
                Ok(value) => {
                    values.insert(value);
                }
                Err(err) => failures.push(err),
            }
        }

        assert_eq!(failures, vec!["boom"]);
        assert_eq!(values, HashSet::from(["first", "third"]));
    }

    /**
     * It should route a panicking operation to its own slot
     */
    #[tokio::test]
    async fn test_interleave_routes_panic_to_single_slot() {
        let operations: Vec<BoxFuture<'static, u32>> =
            vec![explode("operation exploded").boxed(), future::ready(7).boxed()];

        let slots = interleave(operations);

        let mut panics = Vec::new();
        let mut values = Vec::new();

        for slot in slots {
            match slot.await {
                Ok(value) => values.push(value),
                Err(SlotError::Panicked { message, .. }) => panics.push(message),
                Err(err) => panic!("Unexpected slot error {}", err),
            }
        }

        assert_eq!(values, vec![7]);
        assert_eq!(panics, vec![String::from("operation exploded")]);
    }

    /**
     * It should keep resolving remaining slots when one slot is dropped
     */
    #[tokio::test(start_paused = true)]
    async fn test_interleave_dropped_slot_does_not_disturb_others() {
        let mut slots = interleave(vec![settle_after(1, 1u32), settle_after(2, 2u32)]).into_iter();

        drop(slots.next());

        assert_eq!(slots.next().unwrap().await, Ok(2));
    }

    /**
     * It should observe already spawned tasks, cancellation included
     */
    #[tokio::test]
    async fn test_interleave_observes_spawned_tasks() {
        let finished = tokio::spawn(async { 42u32 });
        let aborted = tokio::spawn(async {
            sleep(Duration::from_secs(60)).await;

            0u32
        });

        aborted.abort();

        let slots = interleave(vec![aborted, finished]);

        let mut values = Vec::new();
        let mut cancelled = 0;

        for slot in slots {
            match slot.await.unwrap() {
                Ok(value) => values.push(value),
                Err(err) => {
                    assert_eq!(err.is_cancelled(), true);

                    cancelled += 1;
                }
            }
        }

        assert_eq!(values, vec![42]);
        assert_eq!(cancelled, 1);
    }

    /**
     * It should recover every value exactly once under concurrent settlement
     */
    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn test_interleave_stress_recovers_every_value_once() {
        const OPERATIONS: usize = 10_000;

        let operations: Vec<_> = {
            let mut rng = rand::thread_rng();

            (0..OPERATIONS)
                .map(|value| settle_after(rng.gen_range(0..=50), value))
                .collect()
        };

        let slots = interleave(operations);

        assert_eq!(slots.len(), OPERATIONS);

        let mut recovered = HashSet::with_capacity(OPERATIONS);

        for slot in slots {
            let value = slot.await.unwrap();

            assert_eq!(recovered.insert(value), true);
        }

        assert_eq!(recovered.len(), OPERATIONS);
    }
}
