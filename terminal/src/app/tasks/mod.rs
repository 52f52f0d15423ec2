//! # Async Tasks
//!
//! Background fetches spawned on the Tokio runtime. Each task reports back
//! through the event channel exactly once.

pub mod market;
