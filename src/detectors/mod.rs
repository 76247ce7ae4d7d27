//! # Vulnerability Detector Module
//!
//! @title Pattern Detection Framework
//! @author Ramprasad
//!
//! This module provides the framework for vulnerable pattern detection and
//! contains the built-in detectors.
//!
//! ## Architecture
//!
//! All detectors implement the [`VulnerabilityDetector`] trait, which provides
//! a consistent interface for detection, severity classification, remediation
//! guidance, and the literal replacements used to patch a file.
//!
//! ## Available Detectors
//!
//! | ID | Name | Severity |
//! |----|------|----------|
//! | P001 | Arbitrary File Read | High |
//! | P002 | Path Traversal | High |

mod arbitrary_file_read;
mod path_traversal;

pub use arbitrary_file_read::ArbitraryFileReadDetector;
pub use path_traversal::PathTraversalDetector;

use crate::remediation::ReplacementRule;
use crate::report::{Finding, Severity};
use crate::source::ScanContext;

/// Trait for implementing vulnerability detectors.
///
/// # Example Implementation
///
/// ```rust,ignore
/// pub struct MyDetector;
///
/// impl VulnerabilityDetector for MyDetector {
///     fn id(&self) -> &'static str { "P999" }
///     fn name(&self) -> &'static str { "My Pattern" }
///     fn description(&self) -> &'static str { "Detects my pattern" }
///     fn severity(&self) -> Severity { Severity::High }
///     fn remediation(&self) -> &'static str { "Fix the issue" }
///     fn fixes(&self) -> Vec<ReplacementRule> { Vec::new() }
///
///     fn detect(&self, context: &ScanContext) -> Vec<Finding> {
///         Vec::new()
///     }
/// }
/// ```
pub trait VulnerabilityDetector: Send + Sync {
    /// Returns the unique identifier for this detector.
    ///
    /// Format: "Pnnn" where nnn is a zero-padded number (e.g., "P001").
    fn id(&self) -> &'static str;

    /// Returns the human-readable name of the vulnerability.
    fn name(&self) -> &'static str;

    /// Returns a description of what this detector looks for.
    fn description(&self) -> &'static str;

    /// Returns the default severity level for findings from this detector.
    fn severity(&self) -> Severity;

    /// Runs the detector against the given scan context.
    fn detect(&self, context: &ScanContext) -> Vec<Finding>;

    /// Returns the CWE identifier if applicable (e.g., "CWE-22").
    fn cwe(&self) -> Option<&'static str> {
        None
    }

    /// Returns remediation advice for addressing this vulnerability.
    fn remediation(&self) -> &'static str;

    /// Returns the literal find/replace rules that patch this pattern.
    fn fixes(&self) -> Vec<ReplacementRule>;
}

/// Registry containing all available vulnerability detectors.
///
/// # Example
///
/// ```rust,ignore
/// let registry = DetectorRegistry::new();
/// let findings = registry.run_all(&context);
/// ```
pub struct DetectorRegistry {
    detectors: Vec<Box<dyn VulnerabilityDetector>>,
}

impl DetectorRegistry {
    /// Creates a new registry with all built-in detectors.
    pub fn new() -> Self {
        let detectors: Vec<Box<dyn VulnerabilityDetector>> = vec![
            Box::new(ArbitraryFileReadDetector),
            Box::new(PathTraversalDetector),
        ];

        Self { detectors }
    }

    /// Creates a registry restricted by `--only` / `--exclude` style filters.
    ///
    /// IDs are matched case-insensitively. An empty `only` list keeps all.
    pub fn filtered(only: &[String], exclude: &[String]) -> Self {
        let only: Vec<String> = only.iter().map(|s| s.to_uppercase()).collect();
        let exclude: Vec<String> = exclude.iter().map(|s| s.to_uppercase()).collect();

        let detectors = Self::new()
            .detectors
            .into_iter()
            .filter(|d| only.is_empty() || only.iter().any(|id| id == d.id()))
            .filter(|d| !exclude.iter().any(|id| id == d.id()))
            .collect();

        Self { detectors }
    }

    /// Returns a reference to all registered detectors.
    pub fn detectors(&self) -> &[Box<dyn VulnerabilityDetector>] {
        &self.detectors
    }

    /// Runs all detectors against the given context.
    ///
    /// Findings are sorted by severity (Critical first), then by line.
    pub fn run_all(&self, context: &ScanContext) -> Vec<Finding> {
        let mut all_findings = Vec::new();

        for detector in &self.detectors {
            let findings = detector.detect(context);
            log::debug!("{} produced {} finding(s)", detector.id(), findings.len());
            all_findings.extend(findings);
        }

        all_findings.sort_by(|a, b| b.severity.cmp(&a.severity).then(a.line.cmp(&b.line)));

        all_findings
    }

    /// Runs a specific detector by its ID, or returns nothing if unknown.
    pub fn run_by_id(&self, id: &str, context: &ScanContext) -> Vec<Finding> {
        self.get_detector(id)
            .map(|d| d.detect(context))
            .unwrap_or_default()
    }

    /// Retrieves a detector by its ID.
    pub fn get_detector(&self, id: &str) -> Option<&dyn VulnerabilityDetector> {
        self.detectors
            .iter()
            .find(|d| d.id() == id)
            .map(|d| d.as_ref())
    }

    /// Returns every replacement rule of the registered detectors, in
    /// registration order.
    pub fn replacement_rules(&self) -> Vec<ReplacementRule> {
        self.detectors.iter().flat_map(|d| d.fixes()).collect()
    }
}

impl Default for DetectorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds a finding for a detector at the given line of the context.
pub fn create_finding(
    detector: &dyn VulnerabilityDetector,
    context: &ScanContext,
    description: String,
    line: usize,
) -> Finding {
    Finding {
        id: format!("{}-{}", detector.id(), line),
        detector_id: detector.id().to_string(),
        title: detector.name().to_string(),
        description,
        severity: detector.severity(),
        file_path: context.file_path.clone(),
        line,
        location: format!("{}:{}", context.file_path, line),
        code_snippet: context.line_text(line).map(str::to_string),
        remediation: detector.remediation().to_string(),
        cwe: detector.cwe().map(|s| s.to_string()),
    }
}
