//! Presentational wrappers shared by the pages.
//!
//! # Design
//! - Components are stateless apart from purely visual toggles.
//! - Behaviour that needs testing lives in `core` and is only rendered here.

pub(crate) mod alert;
pub(crate) mod button;
pub(crate) mod card;
pub(crate) mod chip;
pub(crate) mod foundations;
pub(crate) mod icons;
pub(crate) mod shell;
pub(crate) mod theme_provider;
