/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public cosigner adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod config;
pub mod connector;
pub mod http;
mod tls;
pub mod types;
pub mod ws;

// Re-export configuration
pub use config::{ClientConfig, TlsBundle};

// Re-export the orchestrator
pub use connector::CurrencyConnector;

// Re-export commonly used types from http
pub use http::{CosignerClient, CosignerError, Result};

// Re-export all types
pub use types::*;

// Re-export commonly used types from ws
pub use ws::{FrameDecoder, MonitorSession, MonitorState, SessionStatus, StreamHandler};
