//! Fixed-capacity ring of published frames for realtime mode.
//!
//! The stepping thread hands each finished grid to [`SnapshotRing::publish`]
//! as an `Arc<Frame>`; readers clone the `Arc` out under the slot lock, so
//! they hold either a complete grid or nothing.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use eddy_core::{GridRead, TickId};
use eddy_grid::Grid;

/// An immutable grid published after a completed step.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    /// The step that produced this grid (0 for the initial condition).
    pub tick_id: TickId,
    /// The grid itself.
    pub grid: Grid,
}

impl GridRead for Frame {
    fn rows(&self) -> usize {
        self.grid.rows()
    }

    fn cols(&self) -> usize {
        self.grid.cols()
    }

    fn get_value(&self, row: usize, col: usize) -> f32 {
        self.grid.get(row, col)
    }

    fn as_slice(&self) -> &[f32] {
        self.grid.as_slice()
    }
}

/// A slot holds the sequence number it was published under, so a reader can
/// tell a recycled slot from the frame it asked for.
type Slot = Option<(u64, Arc<Frame>)>;

/// The last `capacity` frames published by the stepping thread.
///
/// Exactly one thread publishes; any number of threads read. Frames are
/// numbered by a sequence that starts at 0 and never wraps, and frame `n`
/// lives in slot `n % capacity` until frame `n + capacity` replaces it.
pub struct SnapshotRing {
    frames: Box<[Mutex<Slot>]>,
    published: AtomicU64,
}

const _: fn() = || {
    fn shareable<T: Send + Sync>() {}
    shareable::<SnapshotRing>();
};

impl SnapshotRing {
    /// A ring retaining the last `capacity` frames.
    ///
    /// # Panics
    ///
    /// Panics if `capacity < 2`. [`RealtimeConfig::validate`](crate::RealtimeConfig::validate)
    /// rejects such capacities first.
    pub fn new(capacity: usize) -> Self {
        assert!(
            capacity >= 2,
            "snapshot ring needs room for at least 2 frames, got {capacity}"
        );
        Self {
            frames: (0..capacity).map(|_| Mutex::new(None)).collect(),
            published: AtomicU64::new(0),
        }
    }

    fn lock(&self, seq: u64) -> MutexGuard<'_, Slot> {
        // A slot is replaced by one assignment, so a poisoned lock still
        // guards a whole frame.
        self.frames[(seq % self.frames.len() as u64) as usize]
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Publish `frame` as the newest entry. Call from one thread only.
    ///
    /// Returns the frame it displaced, once the ring has wrapped.
    pub fn publish(&self, frame: Frame) -> Option<Arc<Frame>> {
        let seq = self.published.load(Ordering::Relaxed);
        let displaced = self
            .lock(seq)
            .replace((seq, Arc::new(frame)))
            .map(|(_, old)| old);
        // Release pairs with the Acquire loads in readers: a reader that
        // sees `seq + 1` also sees the slot contents.
        self.published.store(seq + 1, Ordering::Release);
        displaced
    }

    /// The newest frame, or `None` if nothing has been published.
    pub fn latest(&self) -> Option<Arc<Frame>> {
        match self.published() {
            0 => None,
            n => self.read(n - 1),
        }
    }

    /// Frame number `seq`, if it is still retained.
    pub fn frame_at(&self, seq: u64) -> Option<Arc<Frame>> {
        let published = self.published();
        let oldest = published.saturating_sub(self.frames.len() as u64);
        if seq < oldest || seq >= published {
            return None;
        }
        self.read(seq)
    }

    fn read(&self, seq: u64) -> Option<Arc<Frame>> {
        match &*self.lock(seq) {
            Some((tag, frame)) if *tag == seq => Some(Arc::clone(frame)),
            // Recycled after the sequence check.
            _ => None,
        }
    }

    /// Frames currently retained.
    pub fn len(&self) -> usize {
        self.published().min(self.frames.len() as u64) as usize
    }

    /// `true` until the first [`publish`](Self::publish).
    pub fn is_empty(&self) -> bool {
        self.published() == 0
    }

    /// Maximum number of retained frames.
    pub fn capacity(&self) -> usize {
        self.frames.len()
    }

    /// Total frames published so far.
    pub fn published(&self) -> u64 {
        self.published.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(tick: u64) -> Frame {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.fill(tick as f32);
        Frame {
            tick_id: TickId(tick),
            grid,
        }
    }

    #[test]
    fn nothing_published_yet() {
        let ring = SnapshotRing::new(3);
        assert!(ring.is_empty());
        assert_eq!(ring.len(), 0);
        assert!(ring.latest().is_none());
        assert!(ring.frame_at(0).is_none());
    }

    #[test]
    fn latest_tracks_newest_publish() {
        let ring = SnapshotRing::new(4);
        ring.publish(frame(1));
        ring.publish(frame(2));
        let newest = ring.latest().unwrap();
        assert_eq!(newest.tick_id, TickId(2));
        assert_eq!(newest.get_value(1, 1), 2.0);
        assert_eq!(ring.len(), 2);
        assert_eq!(ring.published(), 2);
    }

    #[test]
    fn wrapping_displaces_the_oldest_frame() {
        let ring = SnapshotRing::new(2);
        assert!(ring.publish(frame(10)).is_none());
        assert!(ring.publish(frame(11)).is_none());
        let displaced = ring.publish(frame(12)).unwrap();
        assert_eq!(displaced.tick_id, TickId(10));
        assert_eq!(ring.len(), ring.capacity());
    }

    #[test]
    fn frame_at_only_returns_retained_frames() {
        let ring = SnapshotRing::new(3);
        for t in 0..5 {
            ring.publish(frame(t * 10));
        }
        // Sequences 2, 3 and 4 are retained.
        assert!(ring.frame_at(1).is_none());
        assert_eq!(ring.frame_at(2).unwrap().tick_id, TickId(20));
        assert_eq!(ring.frame_at(4).unwrap().tick_id, TickId(40));
        assert!(ring.frame_at(5).is_none());
    }

    #[test]
    #[should_panic(expected = "at least 2 frames")]
    fn single_slot_ring_is_rejected() {
        let _ = SnapshotRing::new(1);
    }

    #[test]
    fn concurrent_reader_never_sees_a_torn_grid() {
        let ring = Arc::new(SnapshotRing::new(4));
        let writer = {
            let ring = Arc::clone(&ring);
            std::thread::spawn(move || {
                for t in 0..500 {
                    ring.publish(frame(t));
                }
            })
        };
        for _ in 0..500 {
            if let Some(f) = ring.latest() {
                let tick = f.tick_id.0 as f32;
                assert!(f.grid.as_slice().iter().all(|&v| v == tick));
            }
        }
        writer.join().unwrap();
        assert_eq!(ring.latest().unwrap().tick_id, TickId(499));
    }
}
