//! The environment audit.
//!
//! Four independent checks run top to bottom, and each one's section of the
//! report is rendered as soon as it finishes, so everything checked before a
//! fatal fault has already been printed when the fault surfaces.
//!
//! # Modules
//!
//! - [`status`] - Presence results and the per-requirement report
//! - [`presence`] - Requirement import checks
//! - [`tool`] - Companion tool checks
//! - [`version`] - Version prefix rules
//! - [`kernel`] - Custom kernel lookup
//! - [`extensions`] - Lab extension lookup
//!
//! # Example
//!
//! ```
//! use nbcheck::audit::{evaluate_version, VersionVerdict};
//! use nbcheck::config::VersionRule;
//!
//! let rule = VersionRule::new("ipywidgets", &["7.5"]);
//! assert_eq!(evaluate_version(&rule, "7.5.2"), VersionVerdict::Good);
//! assert_eq!(
//!     evaluate_version(&rule, "6.0.0"),
//!     VersionVerdict::Upgrade { recommended: "7.5".to_string() }
//! );
//! ```

pub mod extensions;
pub mod kernel;
pub mod presence;
pub mod status;
pub mod tool;
pub mod version;

pub use extensions::{check_extensions, ExtensionReport};
pub use kernel::{check_kernel, KernelCheck};
pub use presence::check_presence;
pub use status::{ImportReport, PackageCheck, Presence};
pub use tool::{check_tool, ToolCheck};
pub use version::{
    check_versions, evaluate_version, good_version, VersionCheck, VersionOutcome, VersionVerdict,
};

use serde::Serialize;

use crate::config::AuditConfig;
use crate::error::Result;
use crate::probe::Environment;
use crate::report::human;
use crate::ui::UserInterface;

/// Everything one audit found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditReport {
    /// Tutorial the audit ran for.
    pub tutorial: String,
    /// Requirement presence, in requirement order.
    pub packages: ImportReport,
    /// Companion tools, in manifest order.
    pub tools: Vec<ToolCheck>,
    /// Version checks for imported packages, in rule order.
    pub versions: Vec<VersionCheck>,
    /// Custom kernel lookup.
    pub kernel: KernelCheck,
    /// Lab extension lookup; `None` when the manifest lists no extensions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extensions: Option<ExtensionReport>,
}

impl AuditReport {
    /// Whether every check passed.
    pub fn is_healthy(&self) -> bool {
        self.findings() == 0
    }

    /// Number of actionable problems.
    pub fn findings(&self) -> usize {
        let missing_packages = self.packages.missing().len();
        let absent_tools = self.tools.iter().filter(|t| !t.is_present()).count();
        let upgrades = self.versions.iter().filter(|v| v.needs_upgrade()).count();
        let kernel = usize::from(!self.kernel.present);
        let extensions = match &self.extensions {
            None => 0,
            Some(ExtensionReport::RegistryUnavailable { .. }) => 1,
            Some(ExtensionReport::Checked { missing }) => missing.len(),
        };
        missing_packages + absent_tools + upgrades + kernel + extensions
    }
}

/// Runs an audit against an environment.
pub struct Auditor<'a, E: Environment> {
    config: &'a AuditConfig,
    env: &'a E,
}

impl<'a, E: Environment> Auditor<'a, E> {
    /// Create an auditor for `config` over `env`.
    pub fn new(config: &'a AuditConfig, env: &'a E) -> Self {
        Self { config, env }
    }

    /// Run every check in order, rendering each section as it completes.
    ///
    /// # Errors
    ///
    /// Returns the first unexpected probe fault. Sections already rendered
    /// stay rendered.
    pub fn run(&self, ui: &mut dyn UserInterface) -> Result<AuditReport> {
        let config = self.config;

        ui.start_progress(&format!("Checking requirements for {}", config.tutorial_name));
        let packages = check_presence(&config.requirements, self.env, |_| ui.progress_tick());
        ui.finish_progress();
        let packages = packages?;
        human::show_packages(ui, &config.tutorial_name, &packages);

        let mut tools = Vec::with_capacity(config.tools.len());
        for tool_config in &config.tools {
            ui.show_header(&format!("Checking {} version:", tool_config.name));
            let check = check_tool(tool_config, self.env);
            human::show_tool(ui, tool_config, &check);
            tools.push(check);
        }

        let versions = if config.version_rules.is_empty() {
            Vec::new()
        } else {
            let names: Vec<&str> = config
                .version_rules
                .iter()
                .map(|r| r.package.as_str())
                .collect();
            ui.show_header(&format!(
                "Checking version numbers of these packages: {}",
                names.join(", ")
            ));
            let versions = check_versions(&config.version_rules, &packages);
            human::show_versions(ui, &versions);
            versions
        };

        ui.show_header(&format!("Checking whether kernel {} exists", config.kernel.name));
        let kernel = check_kernel(&config.kernel, self.env)?;
        human::show_kernel(ui, &config.kernel, &kernel);

        let extensions = if config.lab_extensions.is_empty() {
            None
        } else {
            ui.show_header("Checking whether all Jupyter lab extensions are installed");
            let report = check_extensions(&config.lab_extensions, self.env)?;
            human::show_extensions(ui, &report);
            Some(report)
        };

        let report = AuditReport {
            tutorial: config.tutorial_name.clone(),
            packages,
            tools,
            versions,
            kernel,
            extensions,
        };
        human::show_summary(ui, &report);

        tracing::debug!("Audit finished with {} finding(s)", report.findings());
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{KernelConfig, ToolConfig, VersionRule};
    use crate::error::AuditError;
    use crate::probe::{
        ExtensionLookup, ExtensionRegistry, ImportOutcome, KernelRegistry, PackageImporter,
        ToolAbsence, ToolRunner, ToolStatus,
    };
    use crate::ui::MockUI;
    use std::collections::HashMap;

    #[derive(Default)]
    struct FakeEnv {
        packages: HashMap<String, Option<String>>,
        tools: HashMap<String, Option<String>>,
        kernels: Vec<String>,
        kernel_fault: bool,
        extensions: Option<Vec<String>>,
    }

    impl FakeEnv {
        fn healthy() -> Self {
            let mut env = Self::default();
            env.packages.insert("foo".into(), Some("7.5.2".into()));
            env.packages.insert("bar".into(), None);
            env.tools.insert("voila".into(), Some("0.2.10".into()));
            env.kernels = vec!["python3".into(), "demo".into()];
            env.extensions = Some(vec!["a".into(), "b".into()]);
            env
        }
    }

    impl PackageImporter for FakeEnv {
        fn import(&self, name: &str) -> Result<ImportOutcome> {
            Ok(match self.packages.get(name) {
                Some(version) => ImportOutcome::Imported {
                    version: version.clone(),
                },
                None => ImportOutcome::NotFound {
                    reason: format!("No module named '{}'", name),
                },
            })
        }
    }

    impl ToolRunner for FakeEnv {
        fn run_version(&self, program: &str, _arg: &str) -> ToolStatus {
            match self.tools.get(program) {
                Some(version) => ToolStatus::Present {
                    version: version.clone(),
                },
                None => ToolStatus::Absent {
                    reason: ToolAbsence::NotOnPath,
                },
            }
        }
    }

    impl KernelRegistry for FakeEnv {
        fn kernel_names(&self) -> Result<Vec<String>> {
            if self.kernel_fault {
                return Err(AuditError::ProbeFailed {
                    probe: "kernel registry".into(),
                    message: "ModuleNotFoundError: No module named 'jupyter_client'".into(),
                });
            }
            Ok(self.kernels.clone())
        }
    }

    impl ExtensionRegistry for FakeEnv {
        fn lookup(&self, _ids: &[String]) -> Result<ExtensionLookup> {
            Ok(match &self.extensions {
                Some(present) => ExtensionLookup::Available {
                    present: present.clone(),
                },
                None => ExtensionLookup::Unavailable {
                    reason: "No module named 'jupyterlab'".into(),
                },
            })
        }
    }

    fn config() -> AuditConfig {
        AuditConfig {
            tutorial_name: "Demo".into(),
            python: "python3".into(),
            requirements: vec!["foo".into(), "bar".into()],
            version_rules: vec![VersionRule::new("foo", &["7.5"])],
            tools: vec![ToolConfig {
                name: "voila".into(),
                version_arg: "--version".into(),
                install_commands: vec!["pip install voila".into()],
            }],
            kernel: KernelConfig {
                name: "demo".into(),
                install_command: Some("ipython kernel install --name demo".into()),
            },
            lab_extensions: vec!["a".into(), "b".into()],
        }
    }

    #[test]
    fn healthy_environment() {
        let env = FakeEnv::healthy();
        let config = config();
        let mut ui = MockUI::new();

        let report = Auditor::new(&config, &env).run(&mut ui).unwrap();

        assert!(report.is_healthy());
        assert_eq!(report.findings(), 0);
        assert!(ui.remediations().is_empty());
        assert!(ui.has_success("All required packages installed"));
    }

    #[test]
    fn missing_package_scenario() {
        let mut env = FakeEnv::healthy();
        env.packages.remove("bar");
        let config = config();
        let mut ui = MockUI::new();

        let report = Auditor::new(&config, &env).run(&mut ui).unwrap();

        assert!(report.packages.is_imported("foo"));
        assert!(!report.packages.is_imported("bar"));
        assert!(!report.packages.all_satisfied());
        assert_eq!(report.packages.missing(), vec!["bar"]);
        assert!(!report.is_healthy());
        assert_eq!(report.findings(), 1);
    }

    #[test]
    fn progress_marker_per_requirement() {
        let env = FakeEnv::healthy();
        let config = config();
        let mut ui = MockUI::new();

        Auditor::new(&config, &env).run(&mut ui).unwrap();

        assert_eq!(ui.progress_lines(), &["Checking requirements for Demo.."]);
    }

    #[test]
    fn version_skipped_for_missing_package() {
        let mut env = FakeEnv::healthy();
        env.packages.remove("foo");
        let config = config();
        let mut ui = MockUI::new();

        let report = Auditor::new(&config, &env).run(&mut ui).unwrap();

        assert!(report.versions.is_empty());
    }

    #[test]
    fn outdated_package_counts_as_finding() {
        let mut env = FakeEnv::healthy();
        env.packages.insert("foo".into(), Some("6.0.0".into()));
        let config = config();
        let mut ui = MockUI::new();

        let report = Auditor::new(&config, &env).run(&mut ui).unwrap();

        assert_eq!(report.findings(), 1);
        assert!(report.versions[0].needs_upgrade());
    }

    #[test]
    fn absent_tool_kernel_and_extension_are_findings() {
        let mut env = FakeEnv::healthy();
        env.tools.clear();
        env.kernels = vec!["python3".into()];
        env.extensions = Some(vec!["a".into()]);
        let config = config();
        let mut ui = MockUI::new();

        let report = Auditor::new(&config, &env).run(&mut ui).unwrap();

        assert_eq!(report.findings(), 3);
        assert_eq!(
            report.extensions,
            Some(ExtensionReport::Checked {
                missing: vec!["b".into()]
            })
        );
    }

    #[test]
    fn unavailable_registry_counts_once() {
        let mut env = FakeEnv::healthy();
        env.extensions = None;
        let config = config();
        let mut ui = MockUI::new();

        let report = Auditor::new(&config, &env).run(&mut ui).unwrap();

        assert_eq!(report.findings(), 1);
    }

    #[test]
    fn no_extensions_configured_skips_lookup() {
        let mut env = FakeEnv::healthy();
        env.extensions = None;
        let mut config = config();
        config.lab_extensions.clear();
        let mut ui = MockUI::new();

        let report = Auditor::new(&config, &env).run(&mut ui).unwrap();

        assert!(report.extensions.is_none());
        assert!(report.is_healthy());
    }

    #[test]
    fn kernel_fault_keeps_earlier_sections() {
        let mut env = FakeEnv::healthy();
        env.kernel_fault = true;
        let config = config();
        let mut ui = MockUI::new();

        let result = Auditor::new(&config, &env).run(&mut ui);

        assert!(matches!(result, Err(AuditError::ProbeFailed { .. })));
        assert!(ui.has_success("All required packages installed"));
        assert!(ui.has_success("voila is correctly installed"));
        assert!(!ui.has_success("Custom kernel"));
    }

    #[test]
    fn sections_render_in_order() {
        let env = FakeEnv::healthy();
        let config = config();
        let mut ui = MockUI::new();

        Auditor::new(&config, &env).run(&mut ui).unwrap();

        assert_eq!(
            ui.headers(),
            &[
                "Checking voila version:",
                "Checking version numbers of these packages: foo",
                "Checking whether kernel demo exists",
                "Checking whether all Jupyter lab extensions are installed",
            ]
        );
    }

    #[test]
    fn report_serializes() {
        let env = FakeEnv::healthy();
        let config = config();
        let mut ui = MockUI::new();

        let report = Auditor::new(&config, &env).run(&mut ui).unwrap();
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["tutorial"], "Demo");
        assert_eq!(json["packages"]["foo"]["status"], "present");
        assert_eq!(json["kernel"]["present"], true);
        assert_eq!(json["extensions"]["status"], "checked");
    }
}
