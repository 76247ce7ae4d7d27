//! # Finding and Severity Definitions
//!
//! @title Security Finding Data Structures
//! @author Ramprasad
//!
//! Defines the core data structures for representing detected patterns
//! and their severity classification.

use colored::*;
use serde::{Deserialize, Serialize};

/// Severity level classification for security findings.
///
/// Ordered from lowest to highest severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational finding, no direct security impact.
    Info = 0,

    /// Low severity, minimal security impact.
    Low = 1,

    /// Medium severity, moderate security impact.
    Medium = 2,

    /// High severity, significant security impact.
    High = 3,

    /// Critical severity, severe security impact.
    Critical = 4,
}

impl Severity {
    /// Parses a severity level from a string.
    ///
    /// Unknown values map to `Info`, so they filter nothing out.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "critical" => Severity::Critical,
            "high" => Severity::High,
            "medium" => Severity::Medium,
            "low" => Severity::Low,
            _ => Severity::Info,
        }
    }

    /// Returns a colored label for terminal output.
    pub fn colored_label(&self) -> ColoredString {
        match self {
            Severity::Critical => "CRITICAL".white().on_red().bold(),
            Severity::High => "HIGH".black().on_yellow().bold(),
            Severity::Medium => "MEDIUM".white().on_bright_blue().bold(),
            Severity::Low => "LOW".black().on_white().bold(),
            Severity::Info => "INFO".black().on_bright_white(),
        }
    }

    /// Returns the uppercase label used in Markdown tables.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Critical => "CRITICAL",
            Severity::High => "HIGH",
            Severity::Medium => "MEDIUM",
            Severity::Low => "LOW",
            Severity::Info => "INFO",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Critical => write!(f, "Critical"),
            Severity::High => write!(f, "High"),
            Severity::Medium => write!(f, "Medium"),
            Severity::Low => write!(f, "Low"),
            Severity::Info => write!(f, "Info"),
        }
    }
}

/// A vulnerable pattern found in the scanned file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Finding {
    /// Identifier for this finding instance, `<detector>-<line>`.
    pub id: String,

    /// ID of the detector that produced this finding (e.g., "P001").
    pub detector_id: String,

    /// Short, descriptive title of the finding.
    pub title: String,

    /// Warning text shown to the user.
    pub description: String,

    /// Severity classification.
    pub severity: Severity,

    /// Path to the file containing the pattern.
    pub file_path: String,

    /// Line of the first occurrence.
    pub line: usize,

    /// `file:line` location string.
    pub location: String,

    /// The trimmed source line of the first occurrence.
    pub code_snippet: Option<String>,

    /// Remediation guidance.
    pub remediation: String,

    /// CWE identifier if applicable.
    pub cwe: Option<String>,
}

impl Finding {
    /// Prints the finding to terminal with color formatting.
    pub fn print_terminal(&self, index: usize) {
        println!();
        println!(
            "{} {} [{}] {}",
            format!("#{}", index).cyan().bold(),
            self.severity.colored_label(),
            self.detector_id.yellow(),
            self.title.white().bold()
        );

        println!(
            "   {} {}:{}",
            "Location:".dimmed(),
            self.file_path.blue(),
            self.line.to_string().cyan()
        );

        println!("   {} {}", "[WARNING]".yellow(), self.description);

        if let Some(ref snippet) = self.code_snippet {
            println!("\n   {}", "Code:".yellow());
            println!("   {}", snippet.red());
        }

        if let Some(ref cwe) = self.cwe {
            println!("   {} {}", "Reference:".dimmed(), cwe.blue());
        }

        println!("\n   {}", "Remediation:".green());
        for line in self.remediation.lines() {
            println!("   {}", line.green().dimmed());
        }

        println!("{}", "-".repeat(60).dimmed());
    }
}
