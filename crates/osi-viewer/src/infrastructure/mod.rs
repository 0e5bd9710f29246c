//! Infrastructure layer for the viewer application.
//!
//! Contains the adapters that touch the outside world: the filesystem asset
//! loader, the tab notebook, TOML configuration storage, and the UI command
//! bridge.
//!
//! **Dependency rule**: this layer may depend on `application` and
//! `osi_core`, but MUST NOT be imported by the `application` or domain
//! layers.
//!
//! # Sub-modules
//!
//! - **`assets`** – Finds and measures each layer's optional PNG
//!   illustration.  A missing or unreadable file is the normal "no
//!   illustration" case, never an error that stops the page from building.
//!
//! - **`notebook`** – The tabbed content host: seven text pages plus the
//!   "Visualization" page, addressed by opaque handles.  Implements the
//!   application layer's `TabHost` port.
//!
//! - **`storage`** – Reads `ViewerConfig` from the platform config
//!   directory; every field has a default so first run needs no file.
//!
//! - **`ui_bridge`** – Command handlers that expose viewer state (scene
//!   snapshots, selected tab) to the desktop frontend and forward its
//!   pointer events into the dispatch loop.

pub mod assets;
pub mod notebook;
pub mod storage;
pub mod ui_bridge;
