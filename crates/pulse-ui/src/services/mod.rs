//! Network services for the UI.
pub(crate) mod api;
