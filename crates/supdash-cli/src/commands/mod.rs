//! Command implementations.
//!
//! Each module exposes an `execute` function taking parsed arguments, the
//! loaded configuration and the resolved output format.

pub mod completions;
pub mod menu;
pub mod open;
pub mod render;
pub mod search;
pub mod sheet;
pub mod show;
