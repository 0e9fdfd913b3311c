//! Probes against the local environment.
//!
//! Every external collaborator the audit consumes sits behind a trait so the
//! checkers in [`crate::audit`] never touch processes directly:
//!
//! - [`PackageImporter`] - attempt to import a package by name
//! - [`ToolRunner`] - run an executable's version flag
//! - [`KernelRegistry`] - list registered kernel specs
//! - [`ExtensionRegistry`] - look up installed lab extensions
//!
//! [`PythonEnvironment`] implements the three Python-backed traits by running
//! small embedded scripts through an interpreter; [`ProcessToolRunner`]
//! spawns tools directly.

pub mod path;
pub mod process;
pub mod python;

pub use path::{is_executable, parse_system_path, resolve_program, resolve_tool_path};
pub use process::{extract_version, ProcessToolRunner};
pub use python::PythonEnvironment;

use serde::Serialize;

use crate::error::Result;

/// Outcome of trying to import one package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportOutcome {
    /// The package imported. `version` is its `__version__` when that is a string.
    Imported { version: Option<String> },
    /// The import raised `ImportError`.
    NotFound { reason: String },
}

/// Why a tool counts as absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum ToolAbsence {
    /// No executable with that name on PATH.
    NotOnPath,
    /// The executable exists but could not be started.
    LaunchFailed(String),
    /// The version command exited with a non-zero status.
    ExitCode(i32),
    /// The version command was killed by a signal.
    Terminated,
}

impl std::fmt::Display for ToolAbsence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotOnPath => write!(f, "not found on PATH"),
            Self::LaunchFailed(err) => write!(f, "could not be started: {}", err),
            Self::ExitCode(code) => write!(f, "exited with code {}", code),
            Self::Terminated => write!(f, "terminated by a signal"),
        }
    }
}

/// Result of running a tool's version flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ToolStatus {
    /// The command exited with status zero.
    Present { version: Option<String> },
    /// Anything else.
    Absent { reason: ToolAbsence },
}

impl ToolStatus {
    /// Whether the tool is usable.
    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present { .. })
    }
}

/// Result of querying the extension registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtensionLookup {
    /// The registry itself is not installed.
    Unavailable { reason: String },
    /// The registry answered; `present` holds the identifiers it knows.
    Available { present: Vec<String> },
}

/// Loads packages by name.
pub trait PackageImporter {
    /// Attempt to import `name`.
    ///
    /// Absence is an `Ok` outcome. `Err` means the environment is broken in
    /// some other way and the run should stop.
    fn import(&self, name: &str) -> Result<ImportOutcome>;
}

/// Runs external executables.
pub trait ToolRunner {
    /// Run `program arg` once and classify the outcome.
    fn run_version(&self, program: &str, arg: &str) -> ToolStatus;
}

/// Knows which kernel specs are registered.
pub trait KernelRegistry {
    /// Names of all registered kernel specs.
    fn kernel_names(&self) -> Result<Vec<String>>;
}

/// Knows which lab extensions are installed.
pub trait ExtensionRegistry {
    /// Look up the given identifiers in one pass.
    fn lookup(&self, ids: &[String]) -> Result<ExtensionLookup>;
}

/// Everything an audit needs from the environment.
pub trait Environment: PackageImporter + ToolRunner + KernelRegistry + ExtensionRegistry {}

impl<T> Environment for T where
    T: PackageImporter + ToolRunner + KernelRegistry + ExtensionRegistry
{
}

/// The real environment: a Python interpreter plus direct process spawning.
#[derive(Debug, Clone)]
pub struct SystemEnvironment {
    python: PythonEnvironment,
    tools: ProcessToolRunner,
}

impl SystemEnvironment {
    /// Combine a Python environment with a process runner.
    pub fn new(python: PythonEnvironment, tools: ProcessToolRunner) -> Self {
        Self { python, tools }
    }
}

impl PackageImporter for SystemEnvironment {
    fn import(&self, name: &str) -> Result<ImportOutcome> {
        self.python.import(name)
    }
}

impl ToolRunner for SystemEnvironment {
    fn run_version(&self, program: &str, arg: &str) -> ToolStatus {
        self.tools.run_version(program, arg)
    }
}

impl KernelRegistry for SystemEnvironment {
    fn kernel_names(&self) -> Result<Vec<String>> {
        self.python.kernel_names()
    }
}

impl ExtensionRegistry for SystemEnvironment {
    fn lookup(&self, ids: &[String]) -> Result<ExtensionLookup> {
        self.python.lookup(ids)
    }
}
