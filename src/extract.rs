//! Link extraction from markdown and MDX content

use crate::index::Document;
use crate::schema::{Link, LinkType};
use regex::Regex;
use std::sync::LazyLock;
use tracing::warn;

/// Patterns in extraction order: markdown links, then `href`, then `src`
static PATTERNS: LazyLock<[(LinkType, Regex); 3]> = LazyLock::new(|| {
    [
        (
            LinkType::Markdown,
            Regex::new(r"(?i)\[([^\]]*)\]\(([^)]+)\)").unwrap(),
        ),
        (
            LinkType::Href,
            Regex::new(r#"(?i)href=["']([^"']+)["']"#).unwrap(),
        ),
        (
            LinkType::Src,
            Regex::new(r#"(?i)src=["']([^"']+)["']"#).unwrap(),
        ),
    ]
});

/// Extract every link from text content.
///
/// Results are grouped by pattern, then ordered by position within the text.
pub fn extract_links(content: &str, file: &str) -> Vec<Link> {
    let mut links = Vec::new();

    for (link_type, re) in PATTERNS.iter() {
        for cap in re.captures_iter(content) {
            let whole = &cap[0];
            let start = cap.get(0).map_or(0, |m| m.start());
            let (text, url) = match link_type {
                LinkType::Markdown => (cap[1].to_string(), cap[2].to_string()),
                LinkType::Href | LinkType::Src => (String::new(), cap[1].to_string()),
            };

            links.push(Link {
                file: file.to_string(),
                line: line_number(content, start),
                link_type: *link_type,
                text,
                url,
                raw_match: whole.to_string(),
            });
        }
    }

    links
}

/// Read a document and extract its links.
///
/// Unreadable or non-UTF-8 files contribute no links.
pub fn extract_links_from_file(doc: &Document) -> Vec<Link> {
    match std::fs::read_to_string(&doc.path) {
        Ok(content) => extract_links(&content, &doc.relative),
        Err(e) => {
            warn!(file = %doc.relative, error = %e, "skipping unreadable file");
            Vec::new()
        }
    }
}

/// 1-based line containing byte `offset`
fn line_number(content: &str, offset: usize) -> usize {
    content[..offset].bytes().filter(|&b| b == b'\n').count() + 1
}
