//! `PaneGrid` Core Library
//!
//! Layout engine for multi-pane displays: a grid of areas, each showing
//! one plugin window, managed as a binary tree of splits.
//!
//! # Crate Structure
//!
//! - [`layout`] - The area tree and the `DisplayLayout` model
//! - [`config`] - Layout settings and TOML persistence
//! - [`tracing`] - Structured logging setup and span helpers

#![warn(missing_docs)]

pub mod config;
pub mod layout;
pub mod tracing;

pub use config::{ConfigError, LayoutSettings, LoggingSettings};
pub use layout::{DisplayLayout, GridPos, LayoutError, Size};
