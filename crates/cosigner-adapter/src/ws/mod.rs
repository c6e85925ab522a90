/*
[INPUT]:  Streaming endpoint configuration and inbound deliveries
[OUTPUT]: Frame decoding, stream callbacks and the live monitor session
[POS]:    WebSocket layer - balance/transaction monitoring
[UPDATE]: When the stream protocol or session lifecycle changes
*/

pub mod frame;
pub mod handler;
pub mod monitor;

pub use frame::FrameDecoder;
pub use handler::StreamHandler;
pub use monitor::{MonitorSession, MonitorState, SessionStatus};
