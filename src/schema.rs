//! Link report schema
//!
//! Serialized shape of `link_validation_report.json`.

use serde::Serialize;

/// Kind of reference a link was extracted from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkType {
    /// `[text](url)`
    Markdown,
    /// `href="url"`
    Href,
    /// `src="url"`
    Src,
}

impl std::fmt::Display for LinkType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LinkType::Markdown => write!(f, "markdown"),
            LinkType::Href => write!(f, "href"),
            LinkType::Src => write!(f, "src"),
        }
    }
}

/// A single link found in a documentation file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    /// Path relative to the docs root
    pub file: String,
    /// 1-based line of the match start
    pub line: usize,
    #[serde(rename = "type")]
    pub link_type: LinkType,
    /// Display text (empty for attributes)
    pub text: String,
    pub url: String,
    pub raw_match: String,
}

/// Outcome of checking one internal link against the file index
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Validation {
    pub valid: bool,
    /// Matched index entry when valid, normalized path otherwise
    pub target: String,
    pub suggestion: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    /// A close match was found
    High,
    Low,
}

impl Confidence {
    pub fn for_suggestion(suggestion: Option<&str>) -> Self {
        if suggestion.is_some() {
            Confidence::High
        } else {
            Confidence::Low
        }
    }
}

/// An internal link that did not resolve
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrokenLink {
    #[serde(flatten)]
    pub link: Link,
    pub validation: Validation,
    pub confidence: Confidence,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total_files_scanned: usize,
    pub total_links_found: usize,
    pub internal_links: usize,
    pub external_links: usize,
    pub broken_internal_links: usize,
    pub fixes_applied: usize,
}

/// Root structure of the report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub summary: Summary,
    pub broken_links: Vec<BrokenLink>,
    pub external_links: Vec<Link>,
    /// Links rewritten in place. The audit never edits files, so this stays empty.
    pub fixes_applied: Vec<Link>,
    pub all_links: Vec<Link>,
}
