/*
[INPUT]:  Raw stream deliveries from the websocket transport
[OUTPUT]: Monitor state updates driven by decoded messages
[POS]:    WebSocket layer - stream callback interface and monitor handler
[UPDATE]: When adding stream event kinds or changing message handling
*/

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::http::error::Result;
use crate::types::CurrencyParameters;
use crate::ws::frame::FrameDecoder;
use crate::ws::monitor::MonitorState;

/// Callbacks invoked by the streaming transport.
///
/// `on_message` returning an error is fatal: the transport closes the
/// session. Everything recoverable is handled inside the implementation.
pub trait StreamHandler: Send {
    fn on_open(&mut self);
    fn on_message(&mut self, data: &[u8]) -> Result<()>;
    fn on_close(&mut self, reason: &str);
}

/// Stream handler for the balance monitor: reassembles frames and applies
/// each decoded message to the shared state.
pub(crate) struct MonitorHandler {
    decoder: FrameDecoder,
    state: Arc<MonitorState>,
}

impl MonitorHandler {
    pub(crate) fn new(state: Arc<MonitorState>) -> Self {
        Self {
            decoder: FrameDecoder::new(),
            state,
        }
    }
}

impl StreamHandler for MonitorHandler {
    fn on_open(&mut self) {
        debug!("monitor stream open");
    }

    fn on_message(&mut self, data: &[u8]) -> Result<()> {
        for payload in self.decoder.feed(data)? {
            match serde_json::from_slice::<CurrencyParameters>(&payload) {
                Ok(params) => self.state.apply(params),
                // A single bad message does not end the session.
                Err(err) => warn!(
                    error = %err,
                    bytes = payload.len(),
                    "skipping malformed monitor message"
                ),
            }
        }
        Ok(())
    }

    fn on_close(&mut self, reason: &str) {
        info!(reason, "monitor stream closed");
    }
}
