//! Writer for taxonomy files.

use std::fs;
use std::path::Path;

use clap::ValueEnum;

use crate::error::Result;
use crate::types::Axis;

/// Serialization format for the axis tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON (two-space indent).
    #[default]
    Json,

    /// YAML.
    Yaml,
}

impl OutputFormat {
    /// Conventional file extension.
    #[must_use]
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }

    /// Guess the format from a file extension, defaulting to JSON.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml" | "yml") => Self::Yaml,
            _ => Self::Json,
        }
    }
}

/// Render the axis tree as a string.
///
/// The top level is a plain sequence of axes.
pub fn render(axes: &[Axis], format: OutputFormat) -> Result<String> {
    let mut rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(axes)?,
        OutputFormat::Yaml => serde_yaml_ng::to_string(axes)?,
    };
    if !rendered.ends_with('\n') {
        rendered.push('\n');
    }
    Ok(rendered)
}

/// Render and write the axis tree, creating parent directories as needed.
pub fn save_output(axes: &[Axis], format: OutputFormat, path: &Path) -> Result<()> {
    let rendered = render(axes, format)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, rendered)?;
    tracing::info!(path = %path.display(), format = format.extension(), "Saved taxonomy");
    Ok(())
}
