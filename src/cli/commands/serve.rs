//! Serve command - Page session over stdin/stdout

use std::path::Path;

use super::{load_config, load_document, ServeArgs, STDIN_SOURCE};
use crate::cli::exit_codes;
use crate::error::A11yLensError;
use crate::rules::DocumentAnalyzer;
use crate::transport::{self, PageSession};

/// Serve transport requests until stdin closes.
///
/// The document cannot come from stdin, since stdin carries the requests.
pub async fn execute(args: ServeArgs, config_path: Option<&Path>) -> Result<i32, A11yLensError> {
    if args.source == STDIN_SOURCE {
        eprintln!("Error: serve reads requests from stdin; pass the document as a file");
        return Ok(exit_codes::INVALID_ARGS);
    }

    let config = load_config(config_path)?;
    let document = load_document(&args.source)?;

    let mut session = PageSession::new(document, DocumentAnalyzer::from_config(&config));
    let served = transport::serve(&mut session).await?;
    tracing::info!(served, source = %args.source, "Session ended");

    Ok(exit_codes::SUCCESS)
}
