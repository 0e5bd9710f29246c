//! Configuration storage for the viewer application.
//!
//! See [`config`] for the TOML schema and loading rules.

pub mod config;
