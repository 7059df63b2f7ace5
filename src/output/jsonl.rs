#![forbid(unsafe_code)]

//! JSONL responder for machine-readable output
//!
//! Writes one JSON object per dispatch outcome:
//! - `{"type":"result","data":...}` for a handler value
//! - `{"type":"error","message":"...","not_found":bool}` for a failure
//!
//! The command listing printed after an unknown command does not go through
//! the responder. It follows the error record on stdout as plain text, so
//! only the first line of such a run is JSON.

use super::Responder;
use crate::error::CommandNotFound;
use serde::Serialize;
use serde_json::Value;
use std::io::{self, Write};

/// JSONL responder
pub struct JsonlResponder<W> {
    out: W,
}

impl<W: Write> JsonlResponder<W> {
    pub fn new(out: W) -> Self {
        JsonlResponder { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Successful outcome record
#[derive(Debug, Serialize)]
struct ResultRecord<'a> {
    #[serde(rename = "type")]
    record_type: &'static str,
    data: &'a Value,
}

/// Failed outcome record
#[derive(Debug, Serialize)]
struct ErrorRecord {
    #[serde(rename = "type")]
    record_type: &'static str,
    message: String,
    not_found: bool,
}

impl<W: Write> Responder for JsonlResponder<W> {
    fn respond(&mut self, outcome: anyhow::Result<Value>) -> io::Result<()> {
        let line = match &outcome {
            Ok(data) => serde_json::to_string(&ResultRecord {
                record_type: "result",
                data,
            }),
            Err(e) => serde_json::to_string(&ErrorRecord {
                record_type: "error",
                message: e.to_string(),
                not_found: e.downcast_ref::<CommandNotFound>().is_some(),
            }),
        }
        .map_err(io::Error::other)?;

        writeln!(self.out, "{}", line)?;
        self.out.flush()
    }
}
