//! Change-feed publishing/subscription abstraction (mechanics only).
//!
//! The feed is intentionally lightweight and transport-agnostic: it works
//! with in-memory channels today and could be backed by a hosted realtime
//! channel without changing consumers. Delivery is at-least-once; consumers
//! reconcile by re-fetching rows, which makes duplicate delivery harmless.

use std::sync::Arc;
use std::sync::mpsc::Receiver;
use std::time::Duration;

/// A subscription to a change stream.
///
/// Each subscription gets a copy of every event published to the feed
/// (broadcast semantics). Subscriptions are designed for single-threaded
/// consumption; dropping the subscription is the teardown contract, and the
/// feed prunes the dead sender on its next publish.
#[derive(Debug)]
pub struct Subscription<M> {
    receiver: Receiver<M>,
}

impl<M> Subscription<M> {
    pub fn new(receiver: Receiver<M>) -> Self {
        Self { receiver }
    }

    /// Block until the next message is available.
    pub fn recv(&self) -> Result<M, std::sync::mpsc::RecvError> {
        self.receiver.recv()
    }

    /// Try to receive a message without blocking.
    pub fn try_recv(&self) -> Result<M, std::sync::mpsc::TryRecvError> {
        self.receiver.try_recv()
    }

    /// Block for up to `timeout` waiting for a message.
    pub fn recv_timeout(&self, timeout: Duration) -> Result<M, std::sync::mpsc::RecvTimeoutError> {
        self.receiver.recv_timeout(timeout)
    }
}

/// Transport-agnostic change feed (pub/sub).
///
/// Publication happens **after** the store has committed the mutation, so a
/// lost notification never loses data: a later authoritative refetch
/// converges the cache.
pub trait ChangeFeed<M>: Send + Sync {
    type Error: core::fmt::Debug + Send + Sync + 'static;

    fn publish(&self, message: M) -> Result<(), Self::Error>;

    fn subscribe(&self) -> Subscription<M>;
}

impl<M, B> ChangeFeed<M> for Arc<B>
where
    B: ChangeFeed<M> + ?Sized,
{
    type Error = B::Error;

    fn publish(&self, message: M) -> Result<(), Self::Error> {
        (**self).publish(message)
    }

    fn subscribe(&self) -> Subscription<M> {
        (**self).subscribe()
    }
}
