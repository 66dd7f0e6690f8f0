//! Home page slice.
//!
//! # Design
//! - Showcases the shared button and card wrappers.
//! - The counter is local view state and is not persisted.

mod view;

pub(crate) use view::HomePage;
