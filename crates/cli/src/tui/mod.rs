//! TUI (Terminal User Interface) module for the chess CLI.
//!
//! This module provides a full-featured terminal interface using ratatui,
//! supporting keyboard navigation and mouse input.

mod app;
mod event;
mod render;
mod widgets;

pub use app::App;
