//! Core, DOM-free primitives and helpers for the Web UI.
pub mod breakpoints;
pub mod health;
pub mod poll;
pub mod probe;
pub mod prompt;
pub mod providers;
pub mod settings;
pub mod store;
pub mod theme;
pub mod ui;
