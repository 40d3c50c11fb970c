//! Internal link validation against the file index
//!
//! Normalization:
//! 1. cut the `#fragment`, then the `?query`
//! 2. drop a leading `./`
//! 3. leave `../` paths untouched (unless resolving against the source file)
//! 4. append `.mdx` when the path has no known extension
//!
//! A normalized path is looked up under five spellings. When none is
//! indexed, the closest indexed path (if any) is offered as a suggestion.

use crate::index::FileIndex;
use crate::schema::{Link, Validation};
use clap::ValueEnum;
use tracing::debug;

/// Extensions that stop the default `.mdx` from being appended
pub const KNOWN_EXTENSIONS: [&str; 7] = [".mdx", ".md", ".json", ".png", ".jpg", ".gif", ".svg"];

pub const DEFAULT_EXTENSION: &str = ".mdx";

/// Maximum close matches considered for a suggestion
pub const SUGGESTION_LIMIT: usize = 3;

/// Minimum similarity ratio (0.0..=1.0) for a suggestion
pub const SUGGESTION_CUTOFF: f32 = 0.6;

/// How `./` and `../` links are interpreted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum RelativeMode {
    /// Relative to the docs root; `../` links pass through unresolved
    #[default]
    Root,
    /// Relative to the directory of the file containing the link
    File,
}

pub struct Validator<'a> {
    index: &'a FileIndex,
    mode: RelativeMode,
    /// (lowercased, original) pairs in index order
    folded: Vec<(String, &'a str)>,
}

impl<'a> Validator<'a> {
    pub fn new(index: &'a FileIndex, mode: RelativeMode) -> Self {
        let folded = index.paths().map(|p| (p.to_lowercase(), p)).collect();
        Self {
            index,
            mode,
            folded,
        }
    }

    /// Validate one internal link
    pub fn validate(&self, link: &Link) -> Validation {
        let normalized = self.normalize(&link.url, &link.file);

        if let Some(target) = self.lookup(&normalized) {
            return Validation {
                valid: true,
                target,
                suggestion: None,
            };
        }

        let suggestion = self.suggest(&normalized);
        debug!(
            file = %link.file,
            line = link.line,
            target = %normalized,
            suggestion = suggestion.as_deref().unwrap_or("-"),
            "broken internal link"
        );

        Validation {
            valid: false,
            target: normalized,
            suggestion,
        }
    }

    /// Normalize `url` as found in `source_file` (root-relative, `/`-separated)
    pub fn normalize(&self, url: &str, source_file: &str) -> String {
        let path = strip_fragment_and_query(url);

        if self.mode == RelativeMode::File && (path.starts_with("./") || path.starts_with("../")) {
            if let Some(resolved) = resolve_against(source_file, path) {
                return with_default_extension(resolved);
            }
        }

        normalize_internal_path(path)
    }

    /// First indexed spelling of `normalized`
    fn lookup(&self, normalized: &str) -> Option<String> {
        let trimmed = normalized.trim_start_matches('/');
        [
            normalized.to_string(),
            trimmed.to_string(),
            format!("/{}", trimmed),
            format!("{}.mdx", normalized),
            format!("{}.md", normalized),
        ]
        .into_iter()
        .find(|candidate| self.index.contains(candidate))
    }

    /// Closest indexed path to `target`, compared case-insensitively
    pub fn suggest(&self, target: &str) -> Option<String> {
        let target = target.to_lowercase();
        let possibilities: Vec<&str> = self.folded.iter().map(|(lower, _)| lower.as_str()).collect();

        let matches = similar::get_close_matches(
            target.as_str(),
            &possibilities,
            SUGGESTION_LIMIT,
            SUGGESTION_CUTOFF,
        );
        let best = matches.first()?;

        self.folded
            .iter()
            .find(|(lower, _)| lower.as_str() == *best)
            .map(|(_, original)| original.to_string())
    }
}

/// Root-relative normalization of an internal URL
pub fn normalize_internal_path(url: &str) -> String {
    let path = strip_fragment_and_query(url);
    let path = path.strip_prefix("./").unwrap_or(path);

    if path.starts_with("../") {
        return path.to_string();
    }

    with_default_extension(path.to_string())
}

fn strip_fragment_and_query(url: &str) -> &str {
    let url = url.split_once('#').map_or(url, |(path, _)| path);
    url.split_once('?').map_or(url, |(path, _)| path)
}

fn with_default_extension(mut path: String) -> String {
    if !KNOWN_EXTENSIONS.iter().any(|ext| path.ends_with(ext)) {
        path.push_str(DEFAULT_EXTENSION);
    }
    path
}

/// Resolve a `./` or `../` path against the directory of `source_file`.
///
/// Returns `None` when the path climbs above the docs root.
fn resolve_against(source_file: &str, path: &str) -> Option<String> {
    let mut segments: Vec<&str> = match source_file.rfind('/') {
        Some(i) => source_file[..i].split('/').filter(|s| !s.is_empty()).collect(),
        None => Vec::new(),
    };

    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop()?;
            }
            other => segments.push(other),
        }
    }

    Some(segments.join("/"))
}
