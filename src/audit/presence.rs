//! Requirement presence checking.

use crate::error::Result;
use crate::probe::{ImportOutcome, PackageImporter};

use super::status::{ImportReport, PackageCheck};

/// Try to import every requirement, in order.
///
/// `on_progress` runs once per requirement, after its import attempt, with
/// the requirement's name. A requirement that fails to import is recorded as
/// absent; only importer faults return `Err`.
pub fn check_presence<F>(
    requirements: &[String],
    importer: &dyn PackageImporter,
    mut on_progress: F,
) -> Result<ImportReport>
where
    F: FnMut(&str),
{
    let mut report = ImportReport::new();

    for name in requirements {
        let check = match importer.import(name)? {
            ImportOutcome::Imported { version } => {
                tracing::debug!("{} imported (version {:?})", name, version);
                PackageCheck::present(version)
            }
            ImportOutcome::NotFound { reason } => {
                tracing::debug!("{} not importable: {}", name, reason);
                PackageCheck::absent(reason)
            }
        };
        report.record(name, check);
        on_progress(name);
    }

    Ok(report)
}
