//! Rendering the knowledge base document.
//!
//! YAML is the default and matches what provisioning playbooks read; JSON is
//! offered for tooling that prefers it.

use crate::error::{KbError, Result};
use crate::models::KnowledgeBase;
use clap::ValueEnum;
use std::io::Write;
use std::path::Path;

/// Serialization format of the document.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Yaml,
    Json,
}

/// Serialize the document.
pub fn render(kb: &KnowledgeBase, format: Format) -> Result<String> {
    match format {
        Format::Yaml => serde_yaml::to_string(kb).map_err(|e| KbError::Render(e.to_string())),
        Format::Json => serde_json::to_string_pretty(kb)
            .map(|json| json + "\n")
            .map_err(|e| KbError::Render(e.to_string())),
    }
}

/// Render the document and write it to `path`, or stdout when `None`.
pub fn write_document(kb: &KnowledgeBase, format: Format, path: Option<&Path>) -> Result<()> {
    let text = render(kb, format)?;
    match path {
        Some(path) => {
            std::fs::write(path, &text)?;
            log::info!("Wrote {} bytes to {}", text.len(), path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}
