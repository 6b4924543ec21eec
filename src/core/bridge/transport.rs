//! JSON-lines transport: one request object per line in, one response
//! object per line out.

use std::io::{BufRead, Write};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Bridge, Envelope};
use crate::core::clock::Clock;
use crate::core::system_info::MetricsSource;
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BridgeRequest {
    /// Opaque correlation id, echoed back
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    pub call: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BridgeResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(flatten)]
    pub envelope: Envelope,
}

impl<S: MetricsSource, C: Clock> Bridge<S, C> {
    /// Answer one request line. The `id` of any JSON object is echoed,
    /// even when the rest of the request is invalid.
    pub fn handle_line(&self, line: &str) -> BridgeResponse {
        let value = match serde_json::from_str::<Value>(line) {
            Ok(value) => value,
            Err(e) => return malformed(None, e),
        };

        let id = value.get("id").filter(|id| !id.is_null()).cloned();

        match serde_json::from_value::<BridgeRequest>(value) {
            Ok(request) => BridgeResponse {
                envelope: self.call_named(&request.call),
                id,
            },
            Err(e) => malformed(id, e),
        }
    }

    /// Serve requests until `reader` is exhausted. Blank lines are skipped
    /// and undecodable lines are answered with `INVALID_INPUT`; only I/O
    /// errors end the session. Returns the number of requests answered.
    pub fn serve<R: BufRead, W: Write>(&self, mut reader: R, mut writer: W) -> Result<usize> {
        let mut answered = 0;
        let mut buf = Vec::new();

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }

            let response = match std::str::from_utf8(&buf) {
                Ok(line) if line.trim().is_empty() => continue,
                Ok(line) => self.handle_line(line),
                Err(e) => {
                    log::debug!("Rejected request line that is not UTF-8: {}", e);
                    malformed(None, e)
                }
            };

            serde_json::to_writer(&mut writer, &response)?;
            writer.write_all(b"\n")?;
            writer.flush()?;
            answered += 1;
        }

        Ok(answered)
    }
}

fn malformed<E: std::fmt::Display>(id: Option<Value>, error: E) -> BridgeResponse {
    BridgeResponse {
        id,
        envelope: Envelope::invalid_input(format!("Malformed request: {}", error)),
    }
}
