//! Report assembly and rendering

use crate::audit::AuditResult;
use crate::error::{Error, Result};
use crate::schema::{Report, Summary};
use clap::ValueEnum;
use std::path::Path;

/// Default report file name, written inside the docs root
pub const DEFAULT_REPORT_NAME: &str = "link_validation_report.json";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON
    #[default]
    Json,
    Yaml,
}

pub fn build_report(result: AuditResult) -> Report {
    let summary = Summary {
        total_files_scanned: result.files_scanned,
        total_links_found: result.links.len(),
        internal_links: result.internal,
        external_links: result.external.len(),
        broken_internal_links: result.broken.len(),
        fixes_applied: 0,
    };

    Report {
        summary,
        broken_links: result.broken,
        external_links: result.external,
        fixes_applied: Vec::new(),
        all_links: result.links,
    }
}

pub fn render(report: &Report, format: OutputFormat) -> Result<String> {
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(report)?,
        OutputFormat::Yaml => serde_yaml::to_string(report)?,
    };
    Ok(rendered)
}

/// Write the rendered report to `path`
pub fn write_report(report: &Report, format: OutputFormat, path: &Path) -> Result<()> {
    let rendered = render(report, format)?;
    std::fs::write(path, rendered).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Human-readable completion lines
pub fn console_summary(report: &Report) -> [String; 4] {
    [
        "Link validation complete!".to_string(),
        format!("Total links found: {}", report.summary.total_links_found),
        format!("Broken internal links: {}", report.summary.broken_internal_links),
        format!("External links: {}", report.summary.external_links),
    ]
}
