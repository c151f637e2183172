//! Pattern serialization to SVG or JSON files

use clap::ValueEnum;
use std::path::{Path, PathBuf};

use crate::geometry::pattern::RenderedPattern;
use crate::geometry::svg::{SvgOptions, to_svg};
use crate::io::configuration::OUTPUT_PREFIX;
use crate::io::error::{Result, file_system_error};

/// Output file format
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Standalone SVG document
    Svg,
    /// Pretty-printed JSON of the rendered pattern
    Json,
}

impl ExportFormat {
    /// File extension without the leading dot
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Json => "json",
        }
    }
}

/// Serialize a pattern as pretty-printed JSON
///
/// # Errors
///
/// Returns a serialization error if the pattern contains values JSON cannot represent
pub fn to_json(pattern: &RenderedPattern) -> Result<String> {
    Ok(serde_json::to_string_pretty(pattern)?)
}

/// Render a pattern in the requested format
///
/// # Errors
///
/// Returns a serialization error if JSON output fails
pub fn render(
    pattern: &RenderedPattern,
    format: ExportFormat,
    options: &SvgOptions,
) -> Result<String> {
    match format {
        ExportFormat::Svg => Ok(to_svg(pattern, options)),
        ExportFormat::Json => to_json(pattern),
    }
}

/// Output file for a generated pattern: `{dir}/kolam_{size}_{seed}.{ext}`
pub fn output_path(dir: &Path, size: usize, seed: u64, format: ExportFormat) -> PathBuf {
    dir.join(format!(
        "{OUTPUT_PREFIX}_{size}_{seed}.{}",
        format.extension()
    ))
}

/// Write a rendered pattern to disk, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if:
/// - The pattern cannot be serialized
/// - The parent directory cannot be created
/// - The file cannot be written
pub fn write_pattern(
    pattern: &RenderedPattern,
    format: ExportFormat,
    options: &SvgOptions,
    path: &Path,
) -> Result<()> {
    let content = render(pattern, format, options)?;

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(file_system_error(parent, "create directory"))?;
    }

    std::fs::write(path, content).map_err(file_system_error(path, "write pattern"))?;
    Ok(())
}
