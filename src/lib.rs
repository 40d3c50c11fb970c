//! doclinks: audit internal links in markdown/MDX documentation
//!
//! Pipeline:
//! - index: walk the docs root and index every `.mdx`/`.md` file
//! - extract: pull markdown links and `href`/`src` attributes from each file
//! - classify: split internal from external links
//! - validate: resolve internal links against the index, suggest fixes
//! - report: assemble and render the JSON/YAML report

pub mod audit;
pub mod classify;
pub mod error;
pub mod extract;
pub mod index;
pub mod report;
pub mod schema;
pub mod validate;

pub use audit::{audit, audit_index, AuditConfig, AuditResult};
pub use error::{Error, Result};
pub use index::FileIndex;
pub use report::{build_report, render, write_report, OutputFormat};
pub use schema::{BrokenLink, Confidence, Link, LinkType, Report, Summary, Validation};
pub use validate::{RelativeMode, Validator};
