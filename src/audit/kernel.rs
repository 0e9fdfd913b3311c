//! Custom kernel checking.

use serde::Serialize;

use crate::config::KernelConfig;
use crate::error::Result;
use crate::probe::KernelRegistry;

/// Whether the tutorial kernel is registered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KernelCheck {
    /// Kernel spec name that was looked for.
    pub name: String,
    /// Whether the registry lists it.
    pub present: bool,
}

/// Look the configured kernel up in the registry.
///
/// A registry that cannot be queried is a fatal fault.
pub fn check_kernel(kernel: &KernelConfig, registry: &dyn KernelRegistry) -> Result<KernelCheck> {
    let known = registry.kernel_names()?;
    tracing::debug!("Registered kernels: {:?}", known);
    Ok(KernelCheck {
        name: kernel.name.clone(),
        present: known.iter().any(|k| k == &kernel.name),
    })
}
