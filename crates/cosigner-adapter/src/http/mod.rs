/*
[INPUT]:  HTTP client configuration and request/response plumbing
[OUTPUT]: Envelope-unwrapped results from the cosigner server
[POS]:    HTTP layer - REST communication
[UPDATE]: When client behavior or the envelope contract changes
*/

pub mod client;
pub mod error;

pub use client::CosignerClient;
pub use error::{CosignerError, Result};
