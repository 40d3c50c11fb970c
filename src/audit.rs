//! Audit pipeline: index → extract → classify/validate
//!
//! Each stage returns a fresh value; nothing is accumulated on shared state.

use crate::classify::{classify, LinkKind};
use crate::error::Result;
use crate::extract::extract_links_from_file;
use crate::index::FileIndex;
use crate::report::build_report;
use crate::schema::{BrokenLink, Confidence, Link, Report};
use crate::validate::{RelativeMode, Validator};
use std::path::Path;
use tracing::info;

/// Options for a single audit run
#[derive(Debug, Clone, Copy, Default)]
pub struct AuditConfig {
    pub relative_mode: RelativeMode,
}

/// Classified and validated links from one pass over the index
#[derive(Debug, Clone, Default)]
pub struct AuditResult {
    pub files_scanned: usize,
    /// Every extracted link, in document then extraction order
    pub links: Vec<Link>,
    pub internal: usize,
    pub external: Vec<Link>,
    pub broken: Vec<BrokenLink>,
}

/// Audit the docs tree under `root` and build the report
pub fn audit(root: &Path, config: &AuditConfig) -> Result<Report> {
    let index = FileIndex::build(root)?;
    let result = audit_index(&index, config);
    Ok(build_report(result))
}

/// Extract, classify and validate the links of every indexed document
pub fn audit_index(index: &FileIndex, config: &AuditConfig) -> AuditResult {
    let links: Vec<Link> = index
        .documents()
        .iter()
        .flat_map(extract_links_from_file)
        .collect();

    let mut result = classify_and_validate(index, links, config);
    result.files_scanned = index.documents().len();

    info!(
        files = result.files_scanned,
        links = result.links.len(),
        broken = result.broken.len(),
        "audit complete"
    );
    result
}

/// Classify already-extracted links and validate the internal ones
pub fn classify_and_validate(index: &FileIndex, links: Vec<Link>, config: &AuditConfig) -> AuditResult {
    let validator = Validator::new(index, config.relative_mode);
    let mut internal = 0;
    let mut external = Vec::new();
    let mut broken = Vec::new();

    for link in &links {
        match classify(&link.url) {
            LinkKind::External => external.push(link.clone()),
            LinkKind::Internal => {
                internal += 1;
                let validation = validator.validate(link);
                if !validation.valid {
                    let confidence = Confidence::for_suggestion(validation.suggestion.as_deref());
                    broken.push(BrokenLink {
                        link: link.clone(),
                        validation,
                        confidence,
                    });
                }
            }
        }
    }

    AuditResult {
        files_scanned: 0,
        links,
        internal,
        external,
        broken,
    }
}
