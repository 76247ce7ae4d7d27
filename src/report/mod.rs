//! # Report Generation Module
//!
//! @title Scan Report Generator
//! @author Ramprasad
//!
//! Generates scan reports as colored terminal output, Markdown documents,
//! or JSON.
//!
//! ## Key Types
//!
//! - [`Report`] - Complete scan report
//! - [`Finding`] - Individual detected pattern
//! - [`Severity`] - Severity classification for findings

mod finding;
mod formatter;

pub use finding::{Finding, Severity};
pub use formatter::to_markdown;

use crate::remediation::ReplacementDetail;
use colored::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Complete scan report.
///
/// Contains metadata about the scan, all findings, applied replacements,
/// and summary statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Metadata about the scan operation.
    pub metadata: ReportMetadata,

    /// All findings from the analysis.
    pub findings: Vec<Finding>,

    /// Replacements applied to the file, if any.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub replacements: Vec<ReplacementDetail>,

    /// Where the patched file was written, if it was.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_path: Option<String>,

    /// Summary statistics by severity.
    pub summary: ReportSummary,
}

/// Metadata about the scan operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Tool version used for the scan.
    pub version: String,

    /// Seconds since the Unix epoch when the scan was performed.
    pub timestamp: String,

    /// Path that was scanned.
    pub scanned_path: String,

    /// Number of files analyzed.
    pub files_analyzed: usize,
}

/// Summary of findings by severity level.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportSummary {
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub info: usize,

    /// Total count of all findings.
    pub total: usize,
}

impl Report {
    /// Creates a new report from a collection of findings.
    ///
    /// Summary statistics are computed from the findings.
    pub fn new(findings: Vec<Finding>, scanned_path: &Path) -> Self {
        let summary = ReportSummary::from_findings(&findings);

        let metadata = ReportMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: chrono_lite_timestamp(),
            scanned_path: scanned_path.display().to_string(),
            files_analyzed: 1,
        };

        Self {
            metadata,
            findings,
            replacements: Vec::new(),
            output_path: None,
            summary,
        }
    }

    /// Attaches the replacements applied to the file and where it was saved.
    pub fn with_replacements(
        mut self,
        replacements: Vec<ReplacementDetail>,
        output_path: Option<&Path>,
    ) -> Self {
        self.replacements = replacements;
        self.output_path = output_path.map(|p| p.display().to_string());
        self
    }

    /// Prints colorized findings to the terminal.
    pub fn print_terminal(&self) {
        if self.findings.is_empty() {
            println!("\n{}", "[+] No vulnerabilities found.".green().bold());
            return;
        }

        println!("\n{}", "[!] Security Findings:".red().bold());
        println!("{}", "=".repeat(60).cyan());

        for (i, finding) in self.findings.iter().enumerate() {
            finding.print_terminal(i + 1);
        }
    }

    /// Prints summary statistics to the terminal.
    pub fn print_summary(&self) {
        println!(
            "{}",
            format!(
                "[*] Summary: {} Critical | {} High | {} Medium | {} Low | {} Info",
                self.summary.critical,
                self.summary.high,
                self.summary.medium,
                self.summary.low,
                self.summary.info
            )
            .bold()
        );

        if self.summary.total == 0 {
            println!("{}", "[+] No issues found.".green().bold());
            return;
        }

        let message = format!("[!] Total: {} issue(s) found", self.summary.total);
        if self.summary.critical > 0 {
            println!("{}", message.red().bold());
        } else if self.summary.high > 0 {
            println!("{}", message.yellow().bold());
        } else {
            println!("{}", message.blue().bold());
        }
    }

    /// Converts the report to Markdown format.
    pub fn to_markdown(&self) -> String {
        formatter::to_markdown(self)
    }
}

impl ReportSummary {
    fn from_findings(findings: &[Finding]) -> Self {
        let mut summary = ReportSummary {
            total: findings.len(),
            ..Default::default()
        };

        for finding in findings {
            match finding.severity {
                Severity::Critical => summary.critical += 1,
                Severity::High => summary.high += 1,
                Severity::Medium => summary.medium += 1,
                Severity::Low => summary.low += 1,
                Severity::Info => summary.info += 1,
            }
        }

        summary
    }
}

/// Generates a simple timestamp without external dependencies.
fn chrono_lite_timestamp() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};

    let duration = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();

    format!("{}", duration.as_secs())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn sample_finding() -> Finding {
        Finding {
            id: "P002-7".to_string(),
            detector_id: "P002".to_string(),
            title: "Path Traversal".to_string(),
            description: "Possible path traversal attack detected: '../' or '..\\'.".to_string(),
            severity: Severity::High,
            file_path: "server.go".to_string(),
            line: 7,
            location: "server.go:7".to_string(),
            code_snippet: Some("base := \"../data\"".to_string()),
            remediation: "Reject paths containing '..'".to_string(),
            cwe: Some("CWE-22".to_string()),
        }
    }

    #[test]
    fn test_report_creation() {
        let report = Report::new(vec![sample_finding()], &PathBuf::from("./server.go"));

        assert_eq!(report.summary.high, 1);
        assert_eq!(report.summary.total, 1);
        assert_eq!(report.metadata.files_analyzed, 1);
        assert!(report.replacements.is_empty());
    }

    #[test]
    fn test_json_omits_empty_replacements() {
        let report = Report::new(vec![sample_finding()], &PathBuf::from("server.go"));
        let json = serde_json::to_value(&report).unwrap();

        assert!(json.get("replacements").is_none());
        assert!(json.get("output_path").is_none());
        assert_eq!(json["findings"][0]["severity"], "high");
    }

    #[test]
    fn test_with_replacements() {
        let detail = ReplacementDetail {
            detector_id: "P002".to_string(),
            line: 7,
            before: "../".to_string(),
            after: "safe_path/".to_string(),
        };
        let report = Report::new(vec![sample_finding()], &PathBuf::from("server.go"))
            .with_replacements(vec![detail], Some(Path::new("server.go")));

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["replacements"][0]["after"], "safe_path/");
        assert_eq!(json["output_path"], "server.go");
    }
}
