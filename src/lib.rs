//! # Path-Sentinel Library
//!
//! @title Path-Sentinel - Unsafe File Access Scanner
//! @author Ramprasad
//!
//! Finds path-traversal and arbitrary-file-read patterns in a source file and
//! optionally rewrites them with safer snippets.
//!
//! ## Modules
//!
//! - [`cli`] - Command-line interface definitions and argument parsing
//! - [`source`] - Scanned file context and line lookup
//! - [`detectors`] - Vulnerable pattern detectors
//! - [`remediation`] - Interactive find/replace of detected patterns
//! - [`writer`] - Persisting the patched source
//! - [`environment`] - Host OS and toolchain probe
//! - [`report`] - Report generation in multiple formats
//!
//! ## Example
//!
//! ```rust,ignore
//! use path_sentinel::{DetectorRegistry, Remediator, ScanContext};
//! use path_sentinel::remediation::AutoApprove;
//!
//! let context = ScanContext::from_file(Path::new("./handler.go"))?;
//! let registry = DetectorRegistry::new();
//! let findings = registry.run_all(&context);
//! let remediation = Remediator::new(registry.replacement_rules()).apply(&context, &mut AutoApprove)?;
//! ```

pub mod cli;
pub mod detectors;
pub mod environment;
pub mod error;
pub mod remediation;
pub mod report;
pub mod source;
pub mod writer;

pub use cli::Cli;
pub use detectors::DetectorRegistry;
pub use error::{Result, SentinelError};
pub use remediation::{Remediation, Remediator};
pub use report::{Finding, Report, Severity};
pub use source::ScanContext;
