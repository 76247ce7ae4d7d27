//! # P002 - Path Traversal Detector
//!
//! Detects literal parent-directory segments (`../` or `..\`) in the source.

use crate::detectors::{create_finding, VulnerabilityDetector};
use crate::remediation::ReplacementRule;
use crate::report::{Finding, Severity};
use crate::source::ScanContext;

const UNIX_PARENT: &str = "../";
const WINDOWS_PARENT: &str = "..\\";

pub struct PathTraversalDetector;

impl VulnerabilityDetector for PathTraversalDetector {
    fn id(&self) -> &'static str { "P002" }

    fn name(&self) -> &'static str { "Path Traversal" }

    fn description(&self) -> &'static str {
        "Detects '../' and '..\\' segments that can escape the intended directory."
    }

    fn severity(&self) -> Severity { Severity::High }

    fn cwe(&self) -> Option<&'static str> { Some("CWE-22") }

    fn remediation(&self) -> &'static str {
        "Resolve paths against a fixed base directory and reject any '..' segment."
    }

    fn fixes(&self) -> Vec<ReplacementRule> {
        vec![
            ReplacementRule::new(self.id(), UNIX_PARENT, "safe_path/"),
            ReplacementRule::new(self.id(), WINDOWS_PARENT, "safe_path\\"),
        ]
    }

    fn detect(&self, context: &ScanContext) -> Vec<Finding> {
        let first = [UNIX_PARENT, WINDOWS_PARENT]
            .iter()
            .filter_map(|p| context.first_line_of(p))
            .min();

        match first {
            Some(line) => vec![create_finding(
                self,
                context,
                "Possible path traversal attack detected: '../' or '..\\'.".to_string(),
                line,
            )],
            None => Vec::new(),
        }
    }
}
