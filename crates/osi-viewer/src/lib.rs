//! osi-viewer library entry point.
//!
//! Re-exports all public modules so that integration tests in `tests/`
//! and the binary entry point in `main.rs` share the same module tree.
//!
//! # What does osi-viewer do? (for beginners)
//!
//! The viewer is the application half of the OSI Model Reference.  The pure
//! content and geometry live in `osi-core`; this crate turns them into a
//! running program:
//!
//! 1. Loads the TOML configuration (window title, diagram geometry, asset
//!    directory, tick interval).
//! 2. Builds the tab notebook: one text page per OSI layer — each with an
//!    optional illustration found by the asset loader — plus the
//!    "Visualization" page.
//! 3. Builds the diagram layout and starts the marker animation: a repeating
//!    timer task that emits one tick per second into the event channel.
//! 4. Runs the dispatch loop: every tick, pointer move, pointer leave, and
//!    click is handled one at a time on a single task, so the view state
//!    (marker, tooltip, selected tab) never needs cross-thread coordination.
//!
//! The desktop frontend renders the scene snapshots exposed by the
//! `ui_bridge` module and feeds pointer events back through its commands.

/// The owning application object and its dispatch loop.
pub mod app;

/// Application layer: use cases for the viewer.
pub mod application;

/// Infrastructure layer: asset loading, the tab notebook, configuration
/// storage, and the UI command bridge.
pub mod infrastructure;
