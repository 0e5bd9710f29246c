//! Application layer use cases for the viewer.
//!
//! # What use cases does the viewer have?
//!
//! - **`animate_marker`** – Owns the packet marker and advances it one region
//!   per tick.  The repeating tick itself comes from an `AnimationDriver`
//!   task that can be stopped explicitly, so tearing down the view never
//!   leaks a running timer.
//!
//! - **`interact`** – Turns pointer events into view behavior: hovering a
//!   region shows its tooltip next to the pointer, leaving hides it, and
//!   clicking a region asks the tab host to reveal that layer's text page.
//!   The actual tab switching is done by a `TabHost` implementation that is
//!   injected at construction time.
//!
//! # The event channel
//!
//! Every input to the view flows through one `mpsc` channel of
//! [`ViewerEvent`]s consumed by a single dispatch loop in `main`.  The
//! animation driver sends `Tick`; the UI bridge forwards pointer events; the
//! Ctrl-C handler sends `Shutdown`.  Because only the dispatch loop mutates
//! view state, no locking or cross-thread coordination is needed around the
//! marker or the tooltip.

use osi_core::Point;

pub mod animate_marker;
pub mod interact;

/// One input to the view, delivered through the dispatch channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewerEvent {
    /// The animation interval elapsed; advance the marker.
    Tick,
    /// The pointer moved to this canvas position.
    PointerMoved(Point),
    /// The pointer left the canvas entirely.
    PointerLeft,
    /// The pointer was clicked at this canvas position.
    Clicked(Point),
    /// Shut the viewer down.
    Shutdown,
}
