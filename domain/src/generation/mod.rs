//! Generation value objects: session identity, state machine, channel events
//! and the outbound request shape.

pub mod event;
pub mod request;
pub mod session_id;
pub mod state;
