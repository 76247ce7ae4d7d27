//! # Environment Probe
//!
//! @title Host Environment Detection
//! @author Ramprasad
//!
//! Reports the operating system and the versions of common language
//! toolchains installed on the host, as context for a scan.

use indicatif::{ProgressBar, ProgressStyle};
use std::collections::BTreeMap;
use std::process::Command;

/// Shown for toolchains whose version command fails.
pub const NOT_INSTALLED: &str = "Not Installed";

/// Toolchains probed by default, with the shell command printing their version.
pub const LANGUAGE_PROBES: &[(&str, &str)] = &[
    ("Go", "go version"),
    ("Python", "python --version"),
    ("Python3", "python3 --version"),
    ("Node.js", "node -v"),
    ("Ruby", "ruby -v"),
    ("Java", "java --version"),
];

/// Returns the operating system name (e.g. "linux", "macos", "windows").
pub fn detect_os() -> &'static str {
    std::env::consts::OS
}

/// Probes the default toolchains.
pub fn detect_language_versions() -> BTreeMap<String, String> {
    probe_versions(LANGUAGE_PROBES)
}

/// Runs each `(name, command)` through `sh -c` and collects its trimmed stdout.
///
/// A command that cannot be spawned or exits unsuccessfully maps to
/// [`NOT_INSTALLED`].
pub fn probe_versions(probes: &[(&str, &str)]) -> BTreeMap<String, String> {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        spinner.set_style(style);
    }

    let mut versions = BTreeMap::new();

    for (name, cmd) in probes {
        spinner.set_message(format!("Checking {}", name));
        spinner.tick();

        let version = match Command::new("sh").arg("-c").arg(cmd).output() {
            Ok(output) if output.status.success() => {
                String::from_utf8_lossy(&output.stdout).trim().to_string()
            }
            Ok(output) => {
                log::debug!("`{}` exited with {}", cmd, output.status);
                NOT_INSTALLED.to_string()
            }
            Err(e) => {
                log::warn!("Failed to run `{}`: {}", cmd, e);
                NOT_INSTALLED.to_string()
            }
        };

        versions.insert(name.to_string(), version);
    }

    spinner.finish_and_clear();
    versions
}
