//! Output verbosity.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Everything, including why each absent item is absent.
    Verbose,
    /// Progress, informational lines and remediation.
    #[default]
    Normal,
    /// Remediation lines and errors only.
    Quiet,
    /// Nothing except errors.
    Silent,
}

impl OutputMode {
    /// Check if this mode shows failure details (import errors, exit codes).
    pub fn shows_details(&self) -> bool {
        matches!(self, Self::Verbose)
    }

    /// Check if this mode shows progress markers and informational lines.
    pub fn shows_info(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal)
    }

    /// Check if this mode shows remediation and warnings.
    pub fn shows_status(&self) -> bool {
        !matches!(self, Self::Silent)
    }
}
