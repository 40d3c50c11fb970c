//! doclinks CLI
//!
//! Audits internal links in a markdown/MDX documentation tree and writes
//! a JSON report of broken links with suggested fixes.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use doclinks::report::{console_summary, DEFAULT_REPORT_NAME};
use doclinks::{audit, render, write_report, AuditConfig, OutputFormat, RelativeMode};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "doclinks")]
#[command(version)]
#[command(about = "Find broken internal links in markdown/MDX documentation")]
#[command(long_about = "Scans .mdx/.md files for markdown links and href/src attributes,\nvalidates internal links against the files on disk, and writes a report\nof broken links with suggested fixes.")]
struct Cli {
    /// Documentation root directory
    #[arg(value_name = "ROOT", env = "DOCLINKS_ROOT", default_value = ".")]
    root: PathBuf,

    /// Report path (default: <ROOT>/link_validation_report.json, "-" for stdout)
    #[arg(short, long, env = "DOCLINKS_OUTPUT")]
    output: Option<PathBuf>,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Resolve ./ and ../ links against the docs root or the linking file
    #[arg(long, value_enum, default_value_t = RelativeMode::Root)]
    relative_to: RelativeMode,

    /// Exit with status 1 when broken internal links are found
    #[arg(long)]
    fail_on_broken: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = AuditConfig {
        relative_mode: cli.relative_to,
    };
    let report = audit(&cli.root, &config)
        .with_context(|| format!("Failed to audit {}", cli.root.display()))?;

    let output = cli
        .output
        .unwrap_or_else(|| cli.root.join(DEFAULT_REPORT_NAME));
    let to_stdout = output.as_os_str() == "-";

    if to_stdout {
        println!("{}", render(&report, cli.format)?);
        for line in console_summary(&report) {
            eprintln!("{}", line);
        }
    } else {
        write_report(&report, cli.format, &output)
            .with_context(|| format!("Failed to write {}", output.display()))?;
        for line in console_summary(&report) {
            println!("{}", line);
        }
    }

    if cli.fail_on_broken && report.summary.broken_internal_links > 0 {
        std::process::exit(1);
    }

    Ok(())
}
