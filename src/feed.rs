//! Log feed - Connector Layer
//!
//! Abstracts how reasoning-trace entries arrive at the console. The only
//! implementation replays the static fixture over a channel with a fixed
//! cadence, which is what gives the console its staggered reveal.

use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::mpsc;
use tokio::time;
use tokio_stream::wrappers::ReceiverStream;

use crate::error::Result;
use crate::fixtures::trace::{LogEntry, LOGS};

/// Delay between revealed entries.
pub const REVEAL_INTERVAL: Duration = Duration::from_millis(120);

/// Event emitted by a feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedEvent {
    Log(&'static LogEntry),
}

/// Bridge trait for trace delivery.
#[async_trait]
pub trait FeedBridge: Send + Sync {
    /// Begin delivery; entries arrive on the returned channel. The channel
    /// closes when the feed is exhausted.
    async fn start(&mut self) -> Result<mpsc::Receiver<FeedEvent>>;
}

/// Feed that replays the hardcoded trace fixture.
pub struct MockFeed {
    interval: Duration,
}

impl MockFeed {
    pub fn new() -> Self {
        Self {
            interval: REVEAL_INTERVAL,
        }
    }

    /// Override the reveal cadence (tests use `Duration::ZERO`).
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    async fn replay(tx: mpsc::Sender<FeedEvent>, interval: Duration) {
        for entry in LOGS {
            if tx.send(FeedEvent::Log(entry)).await.is_err() {
                // Receiver dropped: the dashboard quit mid-replay.
                return;
            }
            if !interval.is_zero() {
                time::sleep(interval).await;
            }
        }
    }
}

impl Default for MockFeed {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FeedBridge for MockFeed {
    async fn start(&mut self) -> Result<mpsc::Receiver<FeedEvent>> {
        let (tx, rx) = mpsc::channel(32);
        let interval = self.interval;
        tokio::spawn(async move {
            Self::replay(tx, interval).await;
        });
        Ok(rx)
    }
}

/// Adapt a feed channel into a `Stream` for consumers that prefer one.
pub fn into_stream(rx: mpsc::Receiver<FeedEvent>) -> ReceiverStream<FeedEvent> {
    ReceiverStream::new(rx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_stream::StreamExt;

    #[tokio::test]
    async fn test_mock_feed_replays_full_trace_in_order() {
        let mut feed = MockFeed::new().with_interval(Duration::ZERO);
        let rx = feed.start().await.unwrap();
        let events: Vec<FeedEvent> = into_stream(rx).collect().await;

        assert_eq!(events.len(), LOGS.len());
        for (event, entry) in events.iter().zip(LOGS) {
            assert_eq!(*event, FeedEvent::Log(entry));
        }
    }

    #[tokio::test]
    async fn test_dropped_receiver_stops_replay() {
        let mut feed = MockFeed::new().with_interval(Duration::ZERO);
        let rx = feed.start().await.unwrap();
        drop(rx);
        // Nothing to assert beyond "does not hang": the replay task exits on
        // the first failed send.
    }
}
