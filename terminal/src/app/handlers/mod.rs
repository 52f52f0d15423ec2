//! # Event Handlers
//!
//! Key-driven state transitions organized by concern. Each handler takes the
//! state by `&mut` and never performs I/O; fetches are issued by
//! [`crate::app::App`] through [`crate::app::tasks`].

pub mod navigation;
pub mod search;
pub mod settings;
