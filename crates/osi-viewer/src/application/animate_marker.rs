//! Marker animation: the tick use case and the repeating timer task.
//!
//! Two pieces cooperate here:
//!
//! - [`MarkerAnimator`] owns the [`PacketMarker`] and applies the tick
//!   transition.  It is only ever called from the dispatch loop, so it needs
//!   no locking.
//! - [`AnimationDriver`] is the timer: a spawned task that sends
//!   [`ViewerEvent::Tick`] into the dispatch channel on a fixed interval,
//!   forever.  The cycle has no terminal state of its own; the driver holds
//!   an explicit stop handle so the view can be torn down without leaking a
//!   running timer task.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use std::time::Duration;

use osi_core::{DiagramLayout, MarkerFrame, PacketMarker};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, trace};

use super::ViewerEvent;

/// Owns the packet marker and advances it one region per tick.
pub struct MarkerAnimator {
    layout: Arc<DiagramLayout>,
    marker: PacketMarker,
    ticks: u64,
}

impl MarkerAnimator {
    /// Creates the animator with the marker in its initial state (region 0).
    pub fn new(layout: Arc<DiagramLayout>) -> Self {
        let marker = PacketMarker::new(&layout);
        Self {
            layout,
            marker,
            ticks: 0,
        }
    }

    /// Applies one tick: the marker advances `(i + 1) mod N` and moves to
    /// the new region's center.  Returns the new frame.
    pub fn tick(&mut self) -> MarkerFrame {
        let frame = self.marker.advance(&self.layout);
        self.ticks += 1;
        trace!(index = frame.index, ticks = self.ticks, "marker advanced");
        frame
    }

    /// The marker's current frame without advancing it.
    pub fn frame(&self) -> MarkerFrame {
        self.marker.frame()
    }

    /// Total ticks applied since construction.
    pub fn tick_count(&self) -> u64 {
        self.ticks
    }
}

/// The repeating animation timer.
///
/// Emits [`ViewerEvent::Tick`] into the dispatch channel once per interval.
/// The first tick fires one full interval after [`start`](Self::start), so
/// the marker holds its initial region for one period before moving.
///
/// The task runs until [`stop`](Self::stop) is called or the receiving end
/// of the channel is dropped; dropping the driver also stops it.
pub struct AnimationDriver {
    running: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl AnimationDriver {
    /// Spawns the timer task.
    ///
    /// `interval` is the fixed tick period (reference behavior: 1000 ms).
    pub fn start(interval: Duration, tx: mpsc::Sender<ViewerEvent>) -> Self {
        let running = Arc::new(AtomicBool::new(true));
        let flag = Arc::clone(&running);

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
            // `interval` yields immediately on its first tick; consume it so
            // the first emitted tick lands one full period after start.
            ticker.tick().await;

            while flag.load(Ordering::Relaxed) {
                ticker.tick().await;
                if tx.send(ViewerEvent::Tick).await.is_err() {
                    debug!("tick channel closed; animation driver exiting");
                    break;
                }
            }
        });

        Self {
            running,
            handle: Some(handle),
        }
    }

    /// Stops the timer task.  Idempotent; safe to call during teardown.
    pub fn stop(&mut self) {
        self.running.store(false, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    /// `true` until [`stop`](Self::stop) has been called.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Relaxed)
    }
}

impl Drop for AnimationDriver {
    fn drop(&mut self) {
        self.stop();
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use osi_core::{DiagramConfig, LayerRegistry};

    fn layout() -> Arc<DiagramLayout> {
        let registry = LayerRegistry::new();
        Arc::new(DiagramLayout::build(registry.entries(), DiagramConfig::default()).expect("build"))
    }

    // ── MarkerAnimator ────────────────────────────────────────────────────────

    #[test]
    fn test_animator_starts_at_region_zero_with_zero_ticks() {
        // Arrange / Act
        let animator = MarkerAnimator::new(layout());

        // Assert
        assert_eq!(animator.frame().index, 0);
        assert_eq!(animator.tick_count(), 0);
    }

    #[test]
    fn test_animator_returns_to_start_after_seven_ticks() {
        // Arrange
        let layout = layout();
        let mut animator = MarkerAnimator::new(Arc::clone(&layout));

        // Act
        for _ in 0..layout.region_count() {
            animator.tick();
        }

        // Assert – cycle closure.
        assert_eq!(animator.frame().index, 0);
        assert_eq!(animator.tick_count(), 7);
    }

    #[test]
    fn test_animator_tick_positions_marker_at_region_center() {
        // Arrange
        let layout = layout();
        let mut animator = MarkerAnimator::new(Arc::clone(&layout));

        // Act
        let frame = animator.tick();

        // Assert
        assert_eq!(frame.position, layout.marker_anchor(1));
    }

    // ── AnimationDriver ───────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_driver_emits_ticks_on_the_interval() {
        // Arrange
        let (tx, mut rx) = mpsc::channel(8);

        // Act – a short interval keeps the test fast.
        let mut driver = AnimationDriver::start(Duration::from_millis(5), tx);
        for _ in 0..3 {
            let event = rx.recv().await.expect("driver must keep ticking");
            assert!(matches!(event, ViewerEvent::Tick));
        }

        driver.stop();
    }

    #[tokio::test]
    async fn test_driver_stop_ends_the_stream_of_ticks() {
        // Arrange
        let (tx, mut rx) = mpsc::channel(8);
        let mut driver = AnimationDriver::start(Duration::from_millis(5), tx);
        rx.recv().await.expect("first tick");

        // Act
        driver.stop();

        // Assert – the task is gone, so the channel drains to None.
        let rest = tokio::time::timeout(Duration::from_millis(200), async {
            while rx.recv().await.is_some() {}
        })
        .await;
        assert!(rest.is_ok(), "channel must close after stop");
        assert!(!driver.is_running());
    }

    #[tokio::test]
    async fn test_driver_stop_is_idempotent() {
        // Arrange
        let (tx, _rx) = mpsc::channel(8);
        let mut driver = AnimationDriver::start(Duration::from_millis(5), tx);

        // Act / Assert – no panic on repeated stops.
        driver.stop();
        driver.stop();
        assert!(!driver.is_running());
    }

    #[tokio::test]
    async fn test_driver_exits_when_receiver_is_dropped() {
        // Arrange
        let (tx, rx) = mpsc::channel(8);
        let driver = AnimationDriver::start(Duration::from_millis(5), tx);

        // Act
        drop(rx);

        // Assert – the send fails and the task winds down on its own; all we
        // require is that the driver can still be dropped cleanly afterwards.
        tokio::time::sleep(Duration::from_millis(25)).await;
        drop(driver);
    }
}
