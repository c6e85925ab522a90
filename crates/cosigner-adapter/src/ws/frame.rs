/*
[INPUT]:  Raw inbound bytes from the streaming transport, in arbitrary chunks
[OUTPUT]: Complete length-prefixed message payloads
[POS]:    WebSocket layer - stateful frame decoding
[UPDATE]: When the streaming frame format changes
*/

use crate::http::error::{CosignerError, Result};

/// Decoder for the monitor stream's length-prefixed framing:
/// `<optional whitespace><decimal length>|<payload of exactly length bytes>`.
///
/// The buffer persists across `feed` calls, so frames may be concatenated
/// within one delivery or split at any byte boundary across deliveries.
/// Incomplete input is left in place until more data arrives; only a length
/// token that fails to parse is an error, and that one is fatal to the
/// owning session.
#[derive(Debug, Default)]
pub struct FrameDecoder {
    buffer: Vec<u8>,
}

impl FrameDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one delivery and drain every complete frame payload.
    pub fn feed(&mut self, chunk: &[u8]) -> Result<Vec<Vec<u8>>> {
        self.buffer.extend_from_slice(chunk);

        let mut frames = Vec::new();
        loop {
            let skip = self
                .buffer
                .iter()
                .take_while(|byte| byte.is_ascii_whitespace())
                .count();
            if skip > 0 {
                self.buffer.drain(..skip);
            }
            if self.buffer.is_empty() {
                break;
            }

            // Wait for the rest of the length token.
            let Some(delimiter) = self.buffer.iter().position(|&byte| byte == b'|') else {
                break;
            };

            let size = parse_length(&self.buffer[..delimiter])?;

            // Wait for the rest of the payload; consume nothing yet.
            let payload_start = delimiter + 1;
            if self.buffer.len() - payload_start < size {
                break;
            }

            frames.push(self.buffer[payload_start..payload_start + size].to_vec());
            self.buffer.drain(..payload_start + size);
        }

        Ok(frames)
    }

    /// Bytes currently held back waiting for more data.
    pub fn pending(&self) -> usize {
        self.buffer.len()
    }
}

fn parse_length(token: &[u8]) -> Result<usize> {
    std::str::from_utf8(token)
        .ok()
        .and_then(|text| text.parse::<usize>().ok())
        .ok_or_else(|| {
            CosignerError::Protocol(format!(
                "unparseable frame length {:?}",
                String::from_utf8_lossy(token)
            ))
        })
}
