//! Domain entities for the OSI Model Reference.
//!
//! This module contains pure business logic with no infrastructure dependencies.
//!
//! # What is "domain" in Clean Architecture? (for beginners)
//!
//! Clean Architecture organises code into concentric layers.  The innermost
//! layer is called the **domain** (or "entities" layer).  Domain code:
//!
//! - Contains the core rules of the application.
//! - Has **no** imports from OS APIs, file systems, async runtimes, or UI
//!   frameworks.
//! - Can be compiled and tested on any platform without any external setup.
//! - Defines the data types and operations that make the system uniquely what
//!   it is: here, the seven-layer content registry, the stacked-diagram
//!   geometry, and the cycling packet marker.
//!
//! Code in outer layers (infrastructure, application, UI) depends on the
//! domain, but the domain never depends on them.  This makes the domain easy
//! to unit-test in isolation.

/// Diagram geometry — regions, connectors, hit testing.
///
/// See [`diagram::DiagramLayout`] for the main type.
pub mod diagram;

/// The packet marker state machine.
pub mod marker;

/// The seven-layer content registry.
///
/// See [`registry::LayerRegistry`] for the main type.
pub mod registry;
