//! # Page Transport
//!
//! Request/response channel between a driving UI (a popup, an editor panel)
//! and the page being inspected. Requests are JSON objects tagged by their
//! `action`:
//!
//! | Action             | Response                                   |
//! |--------------------|--------------------------------------------|
//! | `scanPage`         | `{"success": true, "issues": [...], "summary": {...}}` |
//! | `highlightIssues`  | `{"success": true, "highlights": [...]}`   |
//! | `removeHighlights` | `{"success": true}`                        |
//!
//! Undecodable requests produce `{"success": false, "error": "..."}` and the
//! session keeps serving.

mod stdio;

pub use stdio::{serve, serve_io};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::dom::Document;
use crate::error::TransportError;
use crate::highlight::{Highlight, HighlightLayer};
use crate::rules::{DocumentAnalyzer, Finding, Summary};

/// Message shown to the user when a scan request cannot be served
pub const SCAN_FAILED_MESSAGE: &str = "Failed to scan page. Please refresh and try again.";

/// A request from the driving UI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum Request {
    /// Analyze the page and return findings plus summary
    ScanPage,
    /// Draw overlays for the findings of the last scan
    HighlightIssues,
    /// Remove all overlays
    RemoveHighlights,
}

/// Reply to a [`Request`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    pub success: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issues: Option<Vec<Finding>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<Summary>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlights: Option<Vec<Highlight>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Response {
    /// Bare success acknowledgement
    pub fn ok() -> Self {
        Self {
            success: true,
            ..Self::default()
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(message.into()),
            ..Self::default()
        }
    }
}

/// One inspected page: the document, its analyzer and its overlays.
///
/// The session owns the document for its whole lifetime, so every
/// [`NodeId`](crate::dom::NodeId) in a response stays valid for follow-up
/// requests.
pub struct PageSession<D: Document> {
    document: D,
    analyzer: DocumentAnalyzer,
    layer: HighlightLayer,
}

impl<D: Document> PageSession<D> {
    pub fn new(document: D, analyzer: DocumentAnalyzer) -> Self {
        Self {
            document,
            analyzer,
            layer: HighlightLayer::new(),
        }
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn layer(&self) -> &HighlightLayer {
        &self.layer
    }

    /// Serve one decoded request
    pub fn handle(&mut self, request: Request) -> Response {
        debug!(?request, "Handling request");

        match request {
            Request::ScanPage => {
                let issues = self.analyzer.analyze(&self.document).to_vec();
                Response {
                    success: true,
                    issues: Some(issues),
                    summary: Some(self.analyzer.summarize()),
                    ..Response::default()
                }
            }
            Request::HighlightIssues => {
                let highlights = self.layer.highlight(self.analyzer.findings()).to_vec();
                Response {
                    success: true,
                    highlights: Some(highlights),
                    ..Response::default()
                }
            }
            Request::RemoveHighlights => {
                let removed = self.layer.remove();
                debug!(removed, "Highlights removed");
                Response::ok()
            }
        }
    }

    /// Decode and serve one raw JSON request
    pub fn handle_line(&mut self, line: &str) -> Response {
        match decode_request(line) {
            Ok(request) => self.handle(request),
            Err(e) => {
                warn!("{}", e);
                Response::failure(SCAN_FAILED_MESSAGE)
            }
        }
    }
}

/// Decode a JSON request
pub fn decode_request(line: &str) -> Result<Request, TransportError> {
    serde_json::from_str(line.trim()).map_err(TransportError::InvalidRequest)
}

/// Encode a response as a single JSON line (no trailing newline)
pub fn encode_response(response: &Response) -> Result<String, TransportError> {
    serde_json::to_string(response).map_err(TransportError::Encode)
}
