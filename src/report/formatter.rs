//! Markdown rendering for [`Report`].

use super::Report;
use std::fmt::Write;

/// Renders the report as a Markdown document.
pub fn to_markdown(report: &Report) -> String {
    let mut md = String::new();

    let _ = writeln!(md, "# Path-Sentinel Security Report\n");
    let _ = writeln!(md, "- **Scanned path:** `{}`", report.metadata.scanned_path);
    let _ = writeln!(md, "- **Tool version:** {}", report.metadata.version);
    let _ = writeln!(md, "- **Timestamp:** {}\n", report.metadata.timestamp);

    let _ = writeln!(md, "## Summary\n");
    let _ = writeln!(md, "| Critical | High | Medium | Low | Info | Total |");
    let _ = writeln!(md, "|----------|------|--------|-----|------|-------|");
    let _ = writeln!(
        md,
        "| {} | {} | {} | {} | {} | {} |\n",
        report.summary.critical,
        report.summary.high,
        report.summary.medium,
        report.summary.low,
        report.summary.info,
        report.summary.total
    );

    let _ = writeln!(md, "## Findings\n");
    if report.findings.is_empty() {
        let _ = writeln!(md, "No vulnerabilities found.\n");
    }

    for (i, finding) in report.findings.iter().enumerate() {
        let _ = writeln!(
            md,
            "### {}. [{}] {} ({})\n",
            i + 1,
            finding.detector_id,
            finding.title,
            finding.severity.label()
        );
        let _ = writeln!(md, "**Location:** `{}`\n", finding.location);
        let _ = writeln!(md, "{}\n", finding.description);

        if let Some(ref snippet) = finding.code_snippet {
            let _ = writeln!(md, "```\n{}\n```\n", snippet);
        }
        if let Some(ref cwe) = finding.cwe {
            let _ = writeln!(md, "**Reference:** {}\n", cwe);
        }
        let _ = writeln!(md, "**Remediation:**\n\n```\n{}\n```\n", finding.remediation);
    }

    if !report.replacements.is_empty() {
        let _ = writeln!(md, "## Replacements\n");
        for (i, detail) in report.replacements.iter().enumerate() {
            let _ = writeln!(
                md,
                "{}. `{}` (line {}) replaced with:\n\n```\n{}\n```\n",
                i + 1,
                detail.before,
                detail.line,
                detail.after
            );
        }
    }

    md
}
