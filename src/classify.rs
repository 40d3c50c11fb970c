//! Internal/external link classification

/// URL prefixes that mark a link as external
pub const EXTERNAL_PREFIXES: [&str; 5] = ["http://", "https://", "mailto:", "tel:", "ftp:"];

/// Where a link points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Internal,
    External,
}

pub fn classify(url: &str) -> LinkKind {
    if EXTERNAL_PREFIXES.iter().any(|p| url.starts_with(p)) {
        LinkKind::External
    } else {
        LinkKind::Internal
    }
}

pub fn is_internal(url: &str) -> bool {
    classify(url) == LinkKind::Internal
}
