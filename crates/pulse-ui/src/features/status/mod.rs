//! Status page slice.
//!
//! # Design
//! - The page owns the poller lifecycle: timers start on mount and stop on unmount.
//! - Views read the `StatusStore` through selectors and never call the API directly,
//!   except for the manual refresh which goes through the same poller entry point.

mod view;

pub(crate) use view::StatusPage;
