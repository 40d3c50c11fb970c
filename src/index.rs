//! File index: every markdown/MDX document under the docs root
//!
//! Each document is stored under four spellings so that links written with
//! or without a leading slash, and with or without the extension, resolve by
//! plain set membership.

use crate::error::Result;
use std::collections::BTreeSet;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, warn};

/// Document extensions, in walk order
pub const DOC_EXTENSIONS: [&str; 2] = ["mdx", "md"];

/// A documentation file found during the walk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Path on disk
    pub path: PathBuf,
    /// Root-relative path with `/` separators
    pub relative: String,
}

/// Snapshot of the docs tree taken once at startup
#[derive(Debug, Clone, Default)]
pub struct FileIndex {
    paths: BTreeSet<String>,
    documents: Vec<Document>,
}

impl FileIndex {
    /// Walk `root` for `**/*.mdx` then `**/*.md` and index every regular file.
    ///
    /// A missing or empty root is not an error; it yields an empty index.
    pub fn build(root: &Path) -> Result<Self> {
        let mut index = FileIndex::default();

        if !root.is_dir() {
            warn!(root = %root.display(), "docs root is not a directory, index is empty");
            return Ok(index);
        }

        let escaped_root = glob::Pattern::escape(&root.to_string_lossy());
        for ext in DOC_EXTENSIONS {
            let pattern = format!("{}/**/*.{}", escaped_root, ext);
            for entry in glob::glob(&pattern)? {
                let path = match entry {
                    Ok(path) => path,
                    Err(e) => {
                        warn!(error = %e, "skipping unreadable entry");
                        continue;
                    }
                };
                if !path.is_file() {
                    continue;
                }

                let relative = path.strip_prefix(root).unwrap_or(path.as_path());
                let relative = to_slash(relative);
                index.insert_variants(&relative);
                index.documents.push(Document { path, relative });
            }
        }

        debug!(
            documents = index.documents.len(),
            entries = index.paths.len(),
            "built file index"
        );
        Ok(index)
    }

    /// Build an index from root-relative paths without touching the disk
    pub fn from_relative_paths<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index = FileIndex::default();
        for relative in paths {
            let relative = relative.as_ref().trim_start_matches('/').to_string();
            index.insert_variants(&relative);
            index.documents.push(Document {
                path: PathBuf::from(&relative),
                relative,
            });
        }
        index
    }

    fn insert_variants(&mut self, relative: &str) {
        let stem = strip_extension(relative);
        self.paths.insert(relative.to_string());
        self.paths.insert(stem.to_string());
        self.paths.insert(format!("/{}", relative));
        self.paths.insert(format!("/{}", stem));
    }

    pub fn contains(&self, path: &str) -> bool {
        self.paths.contains(path)
    }

    /// All indexed spellings, in sorted order
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.paths.iter().map(String::as_str)
    }

    /// Documents in walk order
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

/// Join the normal components of a path with `/`
fn to_slash(path: &Path) -> String {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Drop the final extension of the last path segment, if any
fn strip_extension(relative: &str) -> &str {
    let name_start = relative.rfind('/').map_or(0, |i| i + 1);
    match relative[name_start..].rfind('.') {
        Some(dot) if dot > 0 => &relative[..name_start + dot],
        _ => relative,
    }
}
