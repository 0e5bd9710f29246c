//! # osi-core
//!
//! Shared library for the OSI Model Reference application containing the
//! layer content registry, the diagram geometry model, and the packet-marker
//! state machine.
//!
//! This crate is consumed by the viewer application.
//! It has zero dependencies on OS APIs, UI frameworks, or file I/O.
//!
//! # Architecture overview (for beginners)
//!
//! The OSI Model Reference is a single-window desktop app that teaches the
//! seven OSI networking layers.  It shows one text page per layer plus a
//! "Visualization" page: the seven layers drawn as a vertical stack of
//! labelled boxes with a marker that hops from layer to layer once a second,
//! tracing the path a packet takes through the stack.
//!
//! This crate (`osi-core`) is the pure foundation.  It defines:
//!
//! - **`domain::registry`** – The seven layer records (name, description,
//!   tooltip) compiled into the binary in canonical OSI order.
//!
//! - **`domain::diagram`** – Geometry only: where each layer's box sits,
//!   where the connectors between boxes go, and which box contains a given
//!   point.  No drawing happens here; the viewer's frontend renders the
//!   scene this module describes.
//!
//! - **`domain::marker`** – The state machine of the moving marker: a single
//!   index that advances `(i + 1) mod N` on every tick, forever.

// Declare the top-level module.  Rust will look for it in a subdirectory
// with the same name (src/domain/mod.rs).
pub mod domain;

// Re-export the most-used types at the crate root so callers can write
// `osi_core::LayerRegistry` instead of `osi_core::domain::registry::LayerRegistry`.
pub use domain::diagram::{
    Connector, DiagramConfig, DiagramError, DiagramLayout, LayerRegion, Point, Rect,
};
pub use domain::marker::{MarkerFrame, PacketMarker};
pub use domain::registry::{LayerEntry, LayerRegistry, OsiLayer};
