//! # P001 - Arbitrary File Read Detector
//!
//! Detects files opened with `os.ReadFile(` on a path that has not been
//! cleaned or checked for traversal.
//!
//! ## Vulnerability Pattern
//!
//! ```go
//! filePath := r.URL.Query().Get("file")
//! data, err := os.ReadFile(filePath) // BUG: caller controls the path
//! ```
//!
//! ## CWE Reference
//!
//! - CWE-73: External Control of File Name or Path

use crate::detectors::{create_finding, VulnerabilityDetector};
use crate::remediation::ReplacementRule;
use crate::report::{Finding, Severity};
use crate::source::ScanContext;

/// Substring that triggers the warning.
const TRIGGER: &str = "os.ReadFile(";

/// Exact call rewritten by the fix.
const VULNERABLE_CALL: &str = "os.ReadFile(filePath)";

const SAFE_READ: &str = r#"safePath := filepath.Clean(filePath)
if strings.Contains(safePath, "..") {
	http.Error(w, "Access denied", http.StatusForbidden)
	return
}
data, err := os.ReadFile(safePath)"#;

pub struct ArbitraryFileReadDetector;

impl VulnerabilityDetector for ArbitraryFileReadDetector {
    fn id(&self) -> &'static str { "P001" }

    fn name(&self) -> &'static str { "Arbitrary File Read" }

    fn description(&self) -> &'static str {
        "Detects os.ReadFile calls whose path may come straight from user input."
    }

    fn severity(&self) -> Severity { Severity::High }

    fn cwe(&self) -> Option<&'static str> { Some("CWE-73") }

    fn remediation(&self) -> &'static str {
        "Clean the path and reject anything containing '..' before reading:\n\
         safePath := filepath.Clean(filePath)"
    }

    fn fixes(&self) -> Vec<ReplacementRule> {
        vec![ReplacementRule::new(self.id(), VULNERABLE_CALL, SAFE_READ)]
    }

    fn detect(&self, context: &ScanContext) -> Vec<Finding> {
        match context.first_line_of(TRIGGER) {
            Some(line) => vec![create_finding(
                self,
                context,
                "Possible arbitrary file read vulnerability: `os.ReadFile(filePath)` detected."
                    .to_string(),
                line,
            )],
            None => Vec::new(),
        }
    }
}
