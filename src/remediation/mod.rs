//! # Remediation Module
//!
//! @title Interactive Pattern Replacement
//! @author Ramprasad
//!
//! Replaces detected patterns with literal safe snippets. Each replacement
//! is confirmed through a [`Confirm`] implementation, which is a terminal
//! `y/n` prompt in the interactive flow.
//!
//! ## Key Types
//!
//! - [`ReplacementRule`] - A fixed pattern and its safe replacement
//! - [`Remediator`] - Applies rules to a [`ScanContext`]
//! - [`Remediation`] - The patched text plus a [`ReplacementReport`]

mod prompt;

pub use prompt::{AutoApprove, AutoDecline, Confirm, TerminalPrompt};

use crate::error::Result;
use crate::source::{first_line_of, ScanContext};
use colored::*;
use serde::{Deserialize, Serialize};

/// A literal find/replace rule owned by a detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplacementRule {
    /// Detector the rule belongs to.
    pub detector_id: &'static str,

    /// Substring to look for.
    pub pattern: &'static str,

    /// Text substituted for every occurrence of `pattern`.
    pub replacement: &'static str,
}

impl ReplacementRule {
    pub const fn new(
        detector_id: &'static str,
        pattern: &'static str,
        replacement: &'static str,
    ) -> Self {
        Self {
            detector_id,
            pattern,
            replacement,
        }
    }
}

/// One replacement that was applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplacementDetail {
    /// Detector whose rule was applied.
    pub detector_id: String,

    /// First line of the pattern in the original file.
    pub line: usize,

    /// The pattern that was replaced.
    pub before: String,

    /// The text it was replaced with.
    pub after: String,
}

/// Applied replacements, in the order they were accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplacementReport {
    pub details: Vec<ReplacementDetail>,
}

impl ReplacementReport {
    pub fn is_empty(&self) -> bool {
        self.details.is_empty()
    }

    /// Prints the "Replacement Report" block.
    pub fn print_terminal(&self) {
        println!("\n{}", " Replacement Report:".blue());

        if self.details.is_empty() {
            println!("{}", "No replacements made.".green());
            return;
        }

        for (i, detail) in self.details.iter().enumerate() {
            println!(" {} {}:", "Replacement".blue(), i + 1);
            println!(
                "   {} {} (Line {})",
                "Before Replacement:".red(),
                format!("`{}`", detail.before).red(),
                detail.line
            );
            println!(
                "   {} {}",
                "After Replacement:".green(),
                format!("`{}`", detail.after).green()
            );
        }
    }
}

/// Outcome of running the remediator over one file.
#[derive(Debug, Clone)]
pub struct Remediation {
    /// Text as read from disk.
    pub original: String,

    /// Text after every accepted replacement.
    pub modified: String,

    pub report: ReplacementReport,
}

impl Remediation {
    /// Returns true if any replacement changed the text.
    pub fn changed(&self) -> bool {
        self.original != self.modified
    }
}

/// Applies replacement rules to a scanned file.
pub struct Remediator {
    rules: Vec<ReplacementRule>,
}

impl Remediator {
    pub fn new(rules: Vec<ReplacementRule>) -> Self {
        Self { rules }
    }

    /// Walks the rules in order, asking `confirm` about each pattern present.
    ///
    /// Presence and line numbers are always taken from the original text, so
    /// a replacement snippet never triggers a later rule. Accepted rules
    /// replace every occurrence in the working copy.
    ///
    /// # Errors
    ///
    /// Propagates any error from `confirm`.
    pub fn apply(&self, context: &ScanContext, confirm: &mut dyn Confirm) -> Result<Remediation> {
        let original = &context.source_code;
        let mut modified = original.clone();
        let mut report = ReplacementReport::default();

        for rule in &self.rules {
            let Some(line) = first_line_of(original, rule.pattern) else {
                continue;
            };

            if !confirm.confirm(rule, line)? {
                log::info!("Declined replacement of `{}`", rule.pattern);
                continue;
            }

            modified = modified.replace(rule.pattern, rule.replacement);
            log::info!("Replaced `{}` (first seen on line {})", rule.pattern, line);

            report.details.push(ReplacementDetail {
                detector_id: rule.detector_id.to_string(),
                line,
                before: rule.pattern.to_string(),
                after: rule.replacement.to_string(),
            });
        }

        Ok(Remediation {
            original: original.clone(),
            modified,
            report,
        })
    }
}
