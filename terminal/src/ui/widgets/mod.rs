//! # Reusable UI Widgets
//!
//! Line builders shared across screens.

pub mod branding;
pub mod help;
pub mod picker;
pub mod status_bar;
