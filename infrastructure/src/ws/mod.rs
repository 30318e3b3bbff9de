//! WebSocket chat transport

mod transport;

pub use transport::WsChatTransport;
