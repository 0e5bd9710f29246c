//! The packet marker state machine.
//!
//! The marker is the moving disc that represents a packet traversing the
//! layer stack.  Its entire behavior is one closed, total cycle: on every
//! tick it advances to the next region, wrapping from the last back to the
//! first.  There are no error states and no terminal state.
//!
//! The marker is owned exclusively by the animation use case and mutated
//! only by the tick; everything else sees read-only [`MarkerFrame`]
//! snapshots.

use super::diagram::{DiagramLayout, Point};

/// A read-only snapshot of the marker after a tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerFrame {
    /// Index of the region the marker is currently at.
    pub index: usize,
    /// The marker's center point: the current region's vertical center on
    /// the stack's horizontal center line.
    pub position: Point,
}

/// The single mutable marker value.
///
/// Invariants: `current_index` always indexes a valid region of the layout
/// it is advanced against, and `position` is always that region's anchor
/// point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PacketMarker {
    current_index: usize,
    position: Point,
}

impl PacketMarker {
    /// Creates the marker in its initial state: at region 0.
    pub fn new(layout: &DiagramLayout) -> Self {
        Self {
            current_index: 0,
            position: layout.marker_anchor(0),
        }
    }

    /// The index of the region the marker is currently at.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// The marker's current center point.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Current state as a [`MarkerFrame`] snapshot.
    pub fn frame(&self) -> MarkerFrame {
        MarkerFrame {
            index: self.current_index,
            position: self.position,
        }
    }

    /// The tick transition: advance to `(current + 1) mod N` and move to
    /// the new region's anchor.  Wrap-around, not bounce — after the last
    /// region the marker returns to region 0.
    ///
    /// Returns the new frame.
    pub fn advance(&mut self, layout: &DiagramLayout) -> MarkerFrame {
        self.current_index = (self.current_index + 1) % layout.region_count();
        self.position = layout.marker_anchor(self.current_index);
        self.frame()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
