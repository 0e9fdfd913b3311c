//! Human-readable report sections.
//!
//! Lines the user must act on go through
//! [`UserInterface::remediation`], so every one of them carries the fix
//! marker; commands that resolve them follow as suggested commands.

use crate::audit::{
    AuditReport, ExtensionReport, ImportReport, KernelCheck, Presence, ToolCheck, VersionCheck,
    VersionOutcome, VersionVerdict,
};
use crate::config::{KernelConfig, ToolConfig};
use crate::probe::ToolStatus;
use crate::ui::UserInterface;

/// Render the requirement presence section.
pub fn show_packages(ui: &mut dyn UserInterface, tutorial: &str, packages: &ImportReport) {
    if packages.all_satisfied() {
        ui.success("All required packages installed");
        return;
    }

    ui.remediation(&format!(
        "Please install these missing packages for the tutorial \"{}\":",
        tutorial
    ));
    let verbose = ui.output_mode().shows_details();
    for (name, check) in packages.iter() {
        if let Presence::Absent { reason } = &check.presence {
            if verbose {
                ui.suggest_command(&format!("{}  ({})", name, reason));
            } else {
                ui.suggest_command(name);
            }
        }
    }
}

/// Render one companion tool section.
pub fn show_tool(ui: &mut dyn UserInterface, tool: &ToolConfig, check: &ToolCheck) {
    match &check.status {
        ToolStatus::Present { version } => {
            ui.success(&format!("{} is correctly installed", check.name));
            if let Some(version) = version {
                if ui.output_mode().shows_details() {
                    ui.message(&format!("  {} {}", check.name, version));
                }
            }
        }
        ToolStatus::Absent { reason } => {
            if ui.output_mode().shows_details() {
                ui.message(&format!("  {} {}", check.name, reason));
            }
            if tool.install_commands.is_empty() {
                ui.remediation(&format!("{} is not installed!", check.name));
                return;
            }
            ui.remediation(&format!(
                "{} is not installed! Please install it by running one of the following:",
                check.name
            ));
            for command in &tool.install_commands {
                ui.suggest_command(command);
            }
        }
    }
}

/// Render the version rule section.
pub fn show_versions(ui: &mut dyn UserInterface, checks: &[VersionCheck]) {
    for check in checks {
        let package = &check.package;
        match &check.outcome {
            VersionOutcome::Checked {
                verdict: VersionVerdict::Good,
                installed,
            } => {
                ui.success(&format!("{} version is good!", package));
                if ui.output_mode().shows_details() {
                    ui.message(&format!("  installed: {}", installed));
                }
            }
            VersionOutcome::Checked {
                verdict: VersionVerdict::Upgrade { recommended },
                installed,
            } => {
                ui.remediation(&format!(
                    "Please upgrade {} (installed {}) to version {} by running:",
                    package, installed, recommended
                ));
                ui.suggest_command(&format!(
                    "conda install {}={} # if you use conda",
                    package, recommended
                ));
                ui.suggest_command(&format!("pip install {}=={}", package, recommended));
            }
            VersionOutcome::Skipped => {
                ui.message(&format!(
                    "{} does not report a version; skipping version check",
                    package
                ));
            }
        }
    }
}

/// Render the custom kernel section.
pub fn show_kernel(ui: &mut dyn UserInterface, kernel: &KernelConfig, check: &KernelCheck) {
    if check.present {
        ui.success("Custom kernel is correctly installed");
        return;
    }

    match &kernel.install_command {
        Some(command) => ui.remediation(&format!(
            "Please create custom kernel with: {}",
            command
        )),
        None => ui.remediation(&format!("Please create custom kernel {}", check.name)),
    }
}

/// Render the lab extension section.
pub fn show_extensions(ui: &mut dyn UserInterface, report: &ExtensionReport) {
    if report.is_complete() {
        ui.success("All extensions are installed!");
        return;
    }

    match report {
        ExtensionReport::RegistryUnavailable { reason } => {
            ui.remediation("Please install jupyterlab before checking extensions.");
            if ui.output_mode().shows_details() {
                ui.message(&format!("  {}", reason));
            }
        }
        ExtensionReport::Checked { missing } => {
            ui.remediation(&format!(
                "These lab extensions are missing: {}",
                missing.join(", ")
            ));
            ui.remediation(&format!(
                "Run this to install them: jupyter labextension install {}",
                missing.join(" ")
            ));
        }
    }
}

/// Render the closing summary line.
pub fn show_summary(ui: &mut dyn UserInterface, report: &AuditReport) {
    let findings = report.findings();
    if findings == 0 {
        ui.success(&format!(
            "Your environment is ready for the tutorial \"{}\"",
            report.tutorial
        ));
    } else {
        let noun = if findings == 1 { "problem" } else { "problems" };
        ui.warning(&format!(
            "Found {} {} to fix before the tutorial \"{}\"",
            findings, noun, report.tutorial
        ));
    }
}
