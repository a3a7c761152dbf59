//! The receiving side of the watch hub.

use std::pin::Pin;
use std::task::{Context, Poll};

use thiserror::Error;
use tokio::sync::broadcast;
use tokio_stream::Stream;
use tracing::debug;

use crate::events::ResourceEvent;

/// Errors from non-blocking receives.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WatchError {
    /// The hub was dropped.
    #[error("watch hub closed")]
    Closed,
}

/// A live subscription to the hub's event feed.
///
/// A subscriber that falls more than the channel capacity behind loses
/// the oldest events; `recv` skips the gap and keeps going. The periodic
/// resync sweep makes up for whatever was lost.
pub struct WatchSubscription {
    receiver: broadcast::Receiver<ResourceEvent>,
}

impl WatchSubscription {
    pub(crate) fn new(receiver: broadcast::Receiver<ResourceEvent>) -> Self {
        Self { receiver }
    }

    /// Receive the next event.
    ///
    /// Returns `None` once the hub is dropped and the backlog is drained.
    pub async fn recv(&mut self) -> Option<ResourceEvent> {
        loop {
            match self.receiver.recv().await {
                Ok(event) => return Some(event),
                Err(broadcast::error::RecvError::Closed) => return None,
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    debug!(skipped, "Subscriber lagged, events skipped");
                }
            }
        }
    }

    /// Receive the next event without blocking.
    ///
    /// `Ok(None)` means no event is currently buffered.
    pub fn try_recv(&mut self) -> Result<Option<ResourceEvent>, WatchError> {
        loop {
            match self.receiver.try_recv() {
                Ok(event) => return Ok(Some(event)),
                Err(broadcast::error::TryRecvError::Empty) => return Ok(None),
                Err(broadcast::error::TryRecvError::Closed) => return Err(WatchError::Closed),
                Err(broadcast::error::TryRecvError::Lagged(skipped)) => {
                    debug!(skipped, "Subscriber lagged, events skipped");
                }
            }
        }
    }
}

/// Stream adapter over a subscription, for combinator-style consumers.
pub struct WatchStream {
    subscription: WatchSubscription,
}

impl WatchStream {
    #[must_use]
    pub fn new(subscription: WatchSubscription) -> Self {
        Self { subscription }
    }
}

impl Stream for WatchStream {
    type Item = ResourceEvent;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        match self.subscription.try_recv() {
            Ok(Some(event)) => Poll::Ready(Some(event)),
            Ok(None) => {
                cx.waker().wake_by_ref();
                Poll::Pending
            }
            Err(WatchError::Closed) => Poll::Ready(None),
        }
    }
}
