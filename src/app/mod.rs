//! Application orchestration: state, event plumbing and input handling.

pub mod event;
pub mod handler;
pub mod state;
pub mod velocity;
