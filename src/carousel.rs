// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Timer-driven rotation of background and biography photos

use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::debug;

/// Longest rotation period accepted; longer periods are clamped
pub const MAX_PERIOD: Duration = Duration::from_secs(24 * 60 * 60);

/// Shortest rotation period accepted
pub const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Next index in a sequence of `len` items, wrapping around.
///
/// `None` for an empty sequence.
pub fn next_index(current: usize, len: usize) -> Option<usize> {
    if len == 0 {
        None
    } else {
        Some((current % len + 1) % len)
    }
}

/// Current position in a rotating sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    index: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { len, index: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current index, `None` when there is nothing to show
    pub fn current(&self) -> Option<usize> {
        (self.len > 0).then_some(self.index)
    }

    /// Step forward; a no-op on an empty carousel
    pub fn advance(&mut self) -> Option<usize> {
        let next = next_index(self.index, self.len)?;
        self.index = next;
        Some(next)
    }

    /// Pick the current item out of `items`
    pub fn pick<'a, T>(&self, items: &'a [T]) -> Option<&'a T> {
        self.current().and_then(|i| items.get(i))
    }
}

/// Background task advancing a carousel on a fixed interval
pub struct Rotation {
    index: watch::Receiver<usize>,
    shutdown: watch::Sender<bool>,
    handle: Option<JoinHandle<()>>,
}

impl Rotation {
    /// Start rotating over `len` items.
    ///
    /// With fewer than two items nothing ever changes, so no task is spawned
    /// and the index stays at 0. Must be called inside a tokio runtime when
    /// `len > 1`. The period is clamped to `MIN_PERIOD..=MAX_PERIOD`.
    pub fn spawn(len: usize, period: Duration) -> Self {
        let period = period.clamp(MIN_PERIOD, MAX_PERIOD);
        let (index_tx, index_rx) = watch::channel(0usize);
        let (shutdown_tx, mut shutdown_rx) = watch::channel(false);

        if len < 2 {
            return Self { index: index_rx, shutdown: shutdown_tx, handle: None };
        }

        let handle = tokio::spawn(async move {
            let mut carousel = Carousel::new(len);
            let now = Instant::now();
            let mut ticker = interval_at(now.checked_add(period).unwrap_or(now), period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        if let Some(next) = carousel.advance() {
                            debug!("Carousel advanced to {}", next);
                            if index_tx.send(next).is_err() {
                                break;
                            }
                        }
                    }
                    _ = shutdown_rx.changed() => break,
                }
            }
        });

        Self { index: index_rx, shutdown: shutdown_tx, handle: Some(handle) }
    }

    /// Latest published index
    pub fn current(&self) -> usize {
        *self.index.borrow()
    }

    /// A receiver that observes every index change
    pub fn subscribe(&self) -> watch::Receiver<usize> {
        self.index.clone()
    }

    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Stop the task and wait for it to exit
    pub async fn stop(mut self) {
        let _ = self.shutdown.send(true);
        if let Some(handle) = self.handle.take() {
            let _ = handle.await;
        }
    }
}

impl Drop for Rotation {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_next_index_wraps() {
        assert_eq!(next_index(0, 3), Some(1));
        assert_eq!(next_index(2, 3), Some(0));
        assert_eq!(next_index(0, 1), Some(0));
        assert_eq!(next_index(5, 0), None);
    }

    #[test]
    fn test_empty_carousel_is_noop() {
        let mut carousel = Carousel::new(0);
        assert_eq!(carousel.current(), None);
        assert_eq!(carousel.advance(), None);
        assert_eq!(carousel.pick::<u8>(&[]), None);
    }

    #[test]
    fn test_pick_follows_index() {
        let photos = ["a.jpg", "b.jpg"];
        let mut carousel = Carousel::new(photos.len());
        assert_eq!(carousel.pick(&photos), Some(&"a.jpg"));
        carousel.advance();
        assert_eq!(carousel.pick(&photos), Some(&"b.jpg"));
        carousel.advance();
        assert_eq!(carousel.pick(&photos), Some(&"a.jpg"));
    }

    #[tokio::test]
    async fn test_rotation_publishes_indices() {
        let rotation = Rotation::spawn(3, Duration::from_millis(10));
        let mut rx = rotation.subscribe();

        let mut seen = Vec::new();
        for _ in 0..4 {
            rx.changed().await.unwrap();
            seen.push(*rx.borrow_and_update());
        }

        assert!(seen.iter().all(|&i| i < 3));
        assert!(rotation.is_running());
        rotation.stop().await;
    }

    #[test]
    fn test_single_item_never_spawns() {
        tokio_test::block_on(async {
            let rotation = Rotation::spawn(1, Duration::from_millis(1));
            assert!(!rotation.is_running());
            assert_eq!(rotation.current(), 0);
            rotation.stop().await;
        });
    }

    #[tokio::test]
    async fn test_huge_period_is_clamped() {
        let rotation = Rotation::spawn(2, Duration::from_secs(u64::MAX));
        assert!(rotation.is_running());
        assert_eq!(rotation.current(), 0);
        rotation.stop().await;
    }

    #[tokio::test]
    async fn test_zero_period_is_clamped() {
        let rotation = Rotation::spawn(2, Duration::ZERO);
        let mut rx = rotation.subscribe();
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), 1);
        rotation.stop().await;
    }

    proptest! {
        #[test]
        fn prop_next_index_in_range(current in 0usize..1000, len in 1usize..100) {
            let next = next_index(current, len).unwrap();
            prop_assert!(next <= len - 1);
        }
    }
}
