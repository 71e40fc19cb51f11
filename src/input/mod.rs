//! Input adapters that turn user actions into session calls.

#[cfg(feature = "gui")]
pub mod gui;
