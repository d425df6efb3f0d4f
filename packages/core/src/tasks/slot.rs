use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};

use futures_util::ready;
use tokio::sync::oneshot;

use super::errors::slot_error::SlotError;

/**
 * Single assignment output position of an interleaved batch
 *
 * Awaiting slot `k` yields the outcome of the `k`-th operation to settle.
 */
#[derive(Debug)]
pub struct Slot<T> {
    index: usize,
    receiver: oneshot::Receiver<Result<T, SlotError>>,
}

impl<T> Slot<T> {
    pub(crate) fn new(index: usize, receiver: oneshot::Receiver<Result<T, SlotError>>) -> Self {
        Self { index, receiver }
    }

    /**
     * Get slot position in batch
     */
    pub fn index(&self) -> usize {
        self.index
    }
}

impl<T> Future for Slot<T> {
    type Output = Result<T, SlotError>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();

        let received = ready!(Pin::new(&mut this.receiver).poll(cx));

        // Sender gone without a value means its watcher never ran to completion
        let outcome = match received {
            Ok(outcome) => outcome,
            Err(_) => Err(SlotError::Abandoned(this.index)),
        };

        Poll::Ready(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /**
     * It should resolve with the value sent to it
     */
    #[tokio::test]
    async fn test_slot_resolves_with_sent_outcome() {
        let (tx, rx) = oneshot::channel();
        let slot = Slot::new(3, rx);

        tx.send(Ok("foo")).unwrap();

        assert_eq!(slot.index(), 3);
        assert_eq!(slot.await, Ok("foo"));
    }

    /**
     * It should report abandonment when sender is dropped
     */
    #[tokio::test]
    async fn test_slot_abandoned_when_sender_dropped() {
        let (tx, rx) = oneshot::channel::<Result<u32, SlotError>>();
        let slot = Slot::new(1, rx);

        drop(tx);

        assert_eq!(slot.await, Err(SlotError::Abandoned(1)));
    }
}
