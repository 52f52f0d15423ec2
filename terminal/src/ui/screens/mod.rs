//! # Screen Modules
//!
//! One rendering module per [`crate::app::Screen`]. Every screen exposes the
//! same entry point:
//!
//! ```rust,ignore
//! pub fn render(state: &AppState, theme: &Theme, area: Rect, buf: &mut Buffer)
//! ```
//!
//! Screens only read the state; all mutation happens in [`crate::app::App`].

pub mod coin_detail;
pub mod menu;
pub mod results;
pub mod search;
pub mod trending;
