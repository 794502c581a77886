//! Terminal output formatting
//!
//! Menus, hints, banners and the result listing.

pub mod display;
pub mod formatters;
