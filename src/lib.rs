//! nbcheck - Environment auditor for the Jupyter widgets tutorial.
//!
//! nbcheck checks that a learner's machine has everything a tutorial needs
//! (importable Python packages, companion tools, acceptable package versions,
//! a custom kernel and JupyterLab extensions) and tells them exactly how to
//! fix whatever is missing.
//!
//! # Modules
//!
//! - [`audit`] - The individual checks and the audit orchestrator
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Audit manifest loading, parsing, and validation
//! - [`error`] - Error types and result aliases
//! - [`probe`] - Python, process and registry probes
//! - [`report`] - Human-readable and JSON report output
//! - [`ui`] - Terminal output and the test double
//!
//! # Example
//!
//! ```
//! use nbcheck::audit::good_version;
//!
//! let prefixes = vec!["0.6.0-alpha.6".to_string()];
//! assert!(good_version("0.6.0-alpha.6", &prefixes));
//! assert!(!good_version("0.5.2", &prefixes));
//! ```
//!
//! For end-to-end runs against a real interpreter, see the integration tests.

pub mod audit;
pub mod cli;
pub mod config;
pub mod error;
pub mod probe;
pub mod report;
pub mod ui;

pub use error::{AuditError, Result};
