//! # CLI Module
//!
//! @title Command Line Interface
//! @author Ramprasad
//!
//! This module defines the command-line interface for Path-Sentinel using
//! the `clap` derive macros for declarative argument parsing.
//!
//! ## Commands
//!
//! - `scan` - Scan a source file and optionally patch what is found
//! - `env` - Show the host OS and installed toolchain versions
//! - `list` - Display available detectors
//! - `version` - Show version information

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Path-Sentinel command-line interface.
///
/// Finds path-traversal and arbitrary-file-read patterns in a source file
/// and offers to replace them with safer code.
#[derive(Parser, Debug)]
#[command(name = "path-sentinel")]
#[command(author = "RamprasadGoud")]
#[command(version)]
#[command(about = "Scanner that finds and patches unsafe file-access patterns")]
#[command(long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for scan results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colorized console output.
    Terminal,
    /// Machine-readable JSON.
    Json,
    /// Markdown report.
    Markdown,
}

/// Available subcommands for the Path-Sentinel CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan a source file for unsafe file-access patterns.
    ///
    /// Each detected pattern can be replaced with a safer snippet after
    /// confirmation, and the result is written back to disk.
    Scan {
        /// Path to the file to scan.
        ///
        /// If omitted, the path is read from standard input.
        #[arg(value_name = "PATH")]
        path: Option<PathBuf>,

        /// Output format for the scan report.
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Terminal)]
        format: OutputFormat,

        /// Accept every replacement without prompting.
        #[arg(short, long, conflicts_with = "no_fix")]
        yes: bool,

        /// Only report findings; never prompt or write.
        #[arg(short, long)]
        no_fix: bool,

        /// Write the patched file as `<name>_fixed.<ext>` instead of overwriting.
        #[arg(long, conflicts_with = "dry_run")]
        fixed_copy: bool,

        /// Go through the replacements but do not write anything.
        #[arg(long)]
        dry_run: bool,

        /// Minimum severity level to include in results.
        ///
        /// Valid values: critical, high, medium, low, info
        #[arg(short, long)]
        severity: Option<String>,

        /// Exclude specific detectors from the scan.
        ///
        /// Example: --exclude P002
        #[arg(short = 'x', long, value_delimiter = ',')]
        exclude: Vec<String>,

        /// Include only specific detectors in the scan.
        ///
        /// Example: --only P001
        #[arg(long, value_delimiter = ',')]
        only: Vec<String>,

        /// Print the host OS and toolchain versions before scanning.
        #[arg(long)]
        probe_env: bool,
    },

    /// Show the operating system and installed language versions.
    Env,

    /// List all available detectors.
    List,

    /// Print version information.
    Version,
}
