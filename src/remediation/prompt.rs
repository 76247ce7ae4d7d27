//! Confirmation sources for the remediator.

use super::ReplacementRule;
use crate::error::Result;
use colored::*;
use std::io::{BufRead, Write};

/// Decides whether a detected pattern should be replaced.
pub trait Confirm {
    /// Asks about `rule`, whose pattern first appears on `line`.
    fn confirm(&mut self, rule: &ReplacementRule, line: usize) -> Result<bool>;
}

/// Accepts every replacement (`--yes`).
pub struct AutoApprove;

impl Confirm for AutoApprove {
    fn confirm(&mut self, _rule: &ReplacementRule, _line: usize) -> Result<bool> {
        Ok(true)
    }
}

/// Declines every replacement.
pub struct AutoDecline;

impl Confirm for AutoDecline {
    fn confirm(&mut self, _rule: &ReplacementRule, _line: usize) -> Result<bool> {
        Ok(false)
    }
}

/// Asks on a terminal-like reader/writer pair.
///
/// Only an answer of exactly `y` or `Y` accepts; the line ending is stripped
/// but no other whitespace.
/// End of input declines.
pub struct TerminalPrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalPrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl TerminalPrompt<std::io::StdinLock<'static>, std::io::Stdout> {
    /// Prompt bound to the process stdin/stdout.
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> Confirm for TerminalPrompt<R, W> {
    fn confirm(&mut self, rule: &ReplacementRule, line: usize) -> Result<bool> {
        writeln!(
            self.output,
            "\n {} Vulnerable pattern found: {}",
            "[DETECTED]".red(),
            format!("`{}`", rule.pattern).red()
        )?;
        writeln!(self.output, "{} Line {}", "Location:".blue(), line)?;
        writeln!(self.output, "{} Replace with a safer version", "Suggested Fix:".blue())?;
        write!(self.output, "\n {} ", "Do you want to replace it? (y/n):".blue())?;
        self.output.flush()?;

        let mut answer = String::new();
        if self.input.read_line(&mut answer)? == 0 {
            log::debug!("End of input while prompting, treating as 'n'");
            return Ok(false);
        }

        Ok(answer
            .trim_end_matches(&['\r', '\n'][..])
            .eq_ignore_ascii_case("y"))
    }
}
