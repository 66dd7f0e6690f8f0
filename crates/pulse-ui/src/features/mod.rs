//! Feature slices (pages) of the app.
pub(crate) mod home;
pub(crate) mod not_found;
pub(crate) mod status;
