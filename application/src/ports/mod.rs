//! Ports (interfaces) between the application layer and the outside world.

pub mod directory;
pub mod notifier;
pub mod renderer;
pub mod transport;
