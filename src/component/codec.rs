//! JSON conversion at the host boundary.
//!
//! Inbound payloads carry `current_path` and `selected_directory`; anything else
//! the host echoes back (the previous listing, the status tag) is ignored.
//! Outbound states carry `current_path`, `available_directories` and `status`.

use crate::core::{ExplorerError, NavRequest, NavState};

use serde::Serialize;
use std::borrow::Cow;

/// Status tag attached to every outbound state.
pub const STATUS: &str = "download";
/// Status tag attached to error frames.
pub const ERROR_STATUS: &str = "error";

#[derive(Serialize)]
struct StateFrame<'a> {
    current_path: Cow<'a, str>,
    available_directories: &'a [String],
    status: &'static str,
}

/// Parses one inbound payload.
pub fn decode(payload: &str) -> Result<NavRequest, ExplorerError> {
    serde_json::from_str(payload).map_err(ExplorerError::Parse)
}

/// Parses one inbound payload from raw bytes. Invalid UTF-8 is a parse error.
pub fn decode_bytes(payload: &[u8]) -> Result<NavRequest, ExplorerError> {
    serde_json::from_slice(payload).map_err(ExplorerError::Parse)
}

/// Serializes a state for the host.
pub fn encode(state: &NavState) -> Result<String, ExplorerError> {
    let frame = StateFrame {
        current_path: state.current_path().to_string_lossy(),
        available_directories: state.available_directories(),
        status: STATUS,
    };
    serde_json::to_string(&frame).map_err(ExplorerError::Encode)
}

/// Host-side decode hook. An absent payload stays absent.
pub fn preprocess(payload: Option<&str>) -> Result<Option<NavRequest>, ExplorerError> {
    payload.map(decode).transpose()
}

/// Host-side encode hook. An absent value stays absent.
pub fn postprocess(value: Option<&NavState>) -> Result<Option<String>, ExplorerError> {
    value.map(encode).transpose()
}

/// One-line JSON report of a failed event.
pub fn error_frame(err: &ExplorerError) -> String {
    serde_json::json!({
        "status": ERROR_STATUS,
        "error": err.to_string(),
    })
    .to_string()
}
