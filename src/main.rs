//! # Path-Sentinel CLI Entry Point
//!
//! @title Path-Sentinel CLI
//! @author Ramprasad
//!
//! This module provides the main entry point for the Path-Sentinel
//! command-line scanner.

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use path_sentinel::cli::{Commands, OutputFormat};
use path_sentinel::environment::{detect_language_versions, detect_os};
use path_sentinel::remediation::{AutoApprove, Confirm, TerminalPrompt};
use path_sentinel::writer::{write_result, WriteMode};
use path_sentinel::{Cli, DetectorRegistry, Remediator, Report, ScanContext, SentinelError, Severity};
use std::collections::HashSet;
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// ASCII art banner displayed at startup.
const BANNER: &str = r#"
 ____       _   _       ____             _   _            _
|  _ \ __ _| |_| |__   / ___|  ___ _ __ | |_(_)_ __   ___| |
| |_) / _` | __| '_ \  \___ \ / _ \ '_ \| __| | '_ \ / _ \ |
|  __/ (_| | |_| | | |  ___) |  __/ | | | |_| | | | |  __/ |
|_|   \__,_|\__|_| |_| |____/ \___|_| |_|\__|_|_| |_|\___|_|

          Path Traversal & Arbitrary File Read Scanner
"#;

/// Options of the `scan` subcommand.
struct ScanOptions {
    path: Option<PathBuf>,
    format: OutputFormat,
    yes: bool,
    no_fix: bool,
    write_mode: WriteMode,
    min_severity: Option<String>,
    exclude: Vec<String>,
    only: Vec<String>,
    probe_env: bool,
}

/// Application entry point.
///
/// Initializes logging, parses command-line arguments, and dispatches to the
/// matching command handler.
fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let machine_output = matches!(
        cli.command,
        Commands::Scan { format, .. } if format != OutputFormat::Terminal
    );
    if !machine_output {
        println!("{}", BANNER.cyan().bold());
    }

    match cli.command {
        Commands::Scan {
            path,
            format,
            yes,
            no_fix,
            fixed_copy,
            dry_run,
            severity,
            exclude,
            only,
            probe_env,
        } => {
            let write_mode = if dry_run {
                WriteMode::DryRun
            } else if fixed_copy {
                WriteMode::FixedCopy
            } else {
                WriteMode::InPlace
            };

            run_scan(ScanOptions {
                path,
                format,
                yes,
                no_fix,
                write_mode,
                min_severity: severity,
                exclude,
                only,
                probe_env,
            })?;
        }
        Commands::Env => {
            print_environment();
        }
        Commands::List => {
            list_detectors();
        }
        Commands::Version => {
            println!(
                "{} {}",
                "Path-Sentinel version:".green(),
                env!("CARGO_PKG_VERSION").yellow()
            );
        }
    }

    Ok(())
}

/// Executes the scan pipeline: read, detect, replace, write.
fn run_scan(opts: ScanOptions) -> Result<()> {
    let terminal = opts.format == OutputFormat::Terminal;

    if opts.probe_env && terminal {
        print_environment();
    }

    let path = match opts.path {
        Some(path) => path,
        None => prompt_for_path(terminal)?,
    };

    if terminal {
        println!(
            "{} {}",
            "[*] Reading file:".green().bold(),
            path.display().to_string().yellow()
        );
    }

    let context = ScanContext::from_file(&path)?;

    let registry = DetectorRegistry::filtered(&opts.only, &opts.exclude);
    let mut findings = registry.run_all(&context);

    if let Some(ref min_sev) = opts.min_severity {
        let min = Severity::from_str(min_sev);
        findings.retain(|f| f.severity >= min);
    }

    let report = Report::new(findings, &path);

    if terminal {
        println!("\n{}", "[*] Scanning for vulnerabilities...".blue());
        report.print_terminal();
    }

    // Prompts would interleave with JSON/Markdown, so those only fix with --yes.
    let fix = !opts.no_fix && (terminal || opts.yes);

    let report = if fix {
        let flagged: HashSet<&str> = report.findings.iter().map(|f| f.detector_id.as_str()).collect();
        let rules = registry
            .replacement_rules()
            .into_iter()
            .filter(|r| flagged.contains(r.detector_id))
            .collect();

        let mut confirm: Box<dyn Confirm> = if opts.yes {
            Box::new(AutoApprove)
        } else {
            Box::new(TerminalPrompt::stdio())
        };

        if terminal {
            println!("\n{}", "[*] Replacing vulnerabilities...".blue());
        }

        let remediation = Remediator::new(rules).apply(&context, confirm.as_mut())?;

        if terminal {
            remediation.report.print_terminal();
        }

        let written = write_result(&path, &remediation.original, &remediation.modified, opts.write_mode)
            .with_context(|| format!("while saving fixes for {}", path.display()))?;

        if terminal {
            match (&written, opts.write_mode) {
                (Some(target), WriteMode::InPlace) => println!(
                    "\n {} {}",
                    "File has been updated at:".green(),
                    target.display()
                ),
                (Some(target), _) => println!(
                    "\n {} {}",
                    "Updated file saved as:".green(),
                    target.display()
                ),
                (None, WriteMode::DryRun) if remediation.changed() => {
                    println!("\n {}", "Dry run: no file written.".yellow())
                }
                (None, _) => {}
            }
        }

        report.with_replacements(remediation.report.details, written.as_deref())
    } else {
        report
    };

    match opts.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Markdown => {
            println!("{}", report.to_markdown());
        }
        OutputFormat::Terminal => {
            println!("\n{}", "=".repeat(60).cyan());
            report.print_summary();
        }
    }

    Ok(())
}

/// Asks for the file to scan on standard input.
///
/// The question goes to stderr unless the report itself is terminal output,
/// so JSON and Markdown on stdout stay clean.
fn prompt_for_path(terminal: bool) -> Result<PathBuf> {
    let question = format!("\n {} ", "Enter the path of the file to scan:".blue());
    if terminal {
        print!("{}", question);
        std::io::stdout().flush()?;
    } else {
        eprint!("{}", question);
        std::io::stderr().flush()?;
    }

    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;

    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Err(SentinelError::EmptyPath.into());
    }

    Ok(PathBuf::from(trimmed))
}

/// Prints the host OS and the detected toolchain versions.
fn print_environment() {
    println!("{}", "[*] Detecting OS...".blue());
    println!("{} {}", "Operating System:".blue(), detect_os());

    println!("\n{}", "[*] Detecting Installed Programming Language Versions...".blue());
    for (lang, version) in detect_language_versions() {
        println!("{}: {}", lang.blue(), version);
    }
    println!();
}

/// Displays all available detectors.
fn list_detectors() {
    let registry = DetectorRegistry::new();

    println!("{}", "[*] Available Detectors:".green().bold());
    println!("{}", "-".repeat(60).cyan());

    for detector in registry.detectors() {
        println!(
            "  {} {} [{}]",
            detector.id().cyan().bold(),
            detector.name().white(),
            format!("{:?}", detector.severity()).yellow()
        );
        println!("     {}", detector.description().dimmed());
        for rule in detector.fixes() {
            println!("     {} `{}`", "fixes".dimmed(), rule.pattern);
        }
        println!();
    }
}
