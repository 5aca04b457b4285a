//! The request/response boundary for serving a text export as a download.

use crate::{
    filename::{sanitize_filename, DEFAULT_BASE},
    options::RenderOptions,
    renderer::{MinimalRenderer, Renderer},
    PDFError,
};
use log::{info, warn};
use serde::{de, Deserialize, Deserializer, Serialize};

/// `Content-Type` of every successful export
pub const CONTENT_TYPE: &str = "application/pdf";

/// What a client asks to export: `{ "title": "...", "text": "..." }`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRequest {
    /// Used for the download filename; defaults to `export`
    #[serde(default, deserialize_with = "scalar_as_string")]
    pub title: Option<String>,
    /// The text to render. Missing or `null` is treated as empty.
    #[serde(default, deserialize_with = "scalar_as_text")]
    pub text: String,
}

/// Strings pass through, numbers and booleans are written out as text, `null` is absent.
/// Arrays and objects are rejected.
fn scalar_as_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::String(s) => Ok(Some(s)),
        serde_json::Value::Number(n) => Ok(Some(n.to_string())),
        serde_json::Value::Bool(b) => Ok(Some(b.to_string())),
        other => Err(de::Error::invalid_type(
            de::Unexpected::Other(if other.is_array() { "array" } else { "object" }),
            &"a string, number, or boolean",
        )),
    }
}

fn scalar_as_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(scalar_as_string(deserializer)?.unwrap_or_default())
}

impl ExportRequest {
    pub fn new<S: ToString>(title: Option<S>, text: S) -> ExportRequest {
        ExportRequest {
            title: title.map(|t| t.to_string()),
            text: text.to_string(),
        }
    }

    /// Parse a request body. The body may be a JSON object, or a JSON string whose
    /// contents are the object; an empty body is an empty request.
    pub fn from_body(body: &[u8]) -> Result<ExportRequest, PDFError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(ExportRequest::default());
        }
        match serde_json::from_slice::<serde_json::Value>(body)? {
            serde_json::Value::String(inner) if inner.trim().is_empty() => Ok(ExportRequest::default()),
            serde_json::Value::String(inner) => Ok(serde_json::from_str(&inner)?),
            value => Ok(serde_json::from_value(value)?),
        }
    }

    /// The sanitized download filename for this request
    pub fn filename(&self) -> String {
        sanitize_filename(self.title.as_deref().unwrap_or(DEFAULT_BASE))
    }
}

/// A rendered export, ready to be sent as a download
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportResponse {
    pub filename: String,
    pub body: Vec<u8>,
}

impl ExportResponse {
    pub fn content_type(&self) -> &'static str {
        CONTENT_TYPE
    }

    /// `Content-Disposition` header value that makes clients save the body as a file
    pub fn content_disposition(&self) -> String {
        format!("attachment; filename=\"{}\"", self.filename)
    }
}

/// Render a request with the dependency-free renderer and default options
pub fn export(request: &ExportRequest) -> Result<ExportResponse, PDFError> {
    export_with(&MinimalRenderer, request, &RenderOptions::default())
}

/// Render a request with any renderer
pub fn export_with<R: Renderer + ?Sized>(
    renderer: &R,
    request: &ExportRequest,
    options: &RenderOptions,
) -> Result<ExportResponse, PDFError> {
    let filename = request.filename();
    let body = renderer.render(&request.text, options).inspect_err(|err| {
        warn!("{} export of {filename:?} rejected: {err}", renderer.name());
    })?;

    info!("{} export {filename:?}: {} bytes", renderer.name(), body.len());
    Ok(ExportResponse { filename, body })
}
