use chrono::Utc;
use serde::Serialize;

use crate::{
    error::{DocgenError, Result},
    model::DocSet,
};

/// Pretty-printed JSON representation of the documentation set including metadata.
pub fn render_json(docs: &DocSet) -> Result<String> {
    serde_json::to_string_pretty(&payload(docs)).map_err(|error| DocgenError::Other {
        message: error.to_string(),
    })
}

/// Single-line JSON representation, same shape as [`render_json`].
pub fn render_json_compact(docs: &DocSet) -> Result<String> {
    serde_json::to_string(&payload(docs)).map_err(|error| DocgenError::Other {
        message: error.to_string(),
    })
}

fn payload(docs: &DocSet) -> JsonPayload<'_> {
    JsonPayload {
        version: env!("CARGO_PKG_VERSION"),
        generated_at: Utc::now().to_rfc3339(),
        documentation: docs,
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonPayload<'a> {
    version: &'static str,
    generated_at: String,
    documentation: &'a DocSet,
}
