//! `statpack`:
//! Assemble the Essential and Bonus packages from a Unity workspace.
//!
//! - `cli`     : command-line overrides of the compiled-in plan
//! - `logging` : stderr logger setup

pub mod cli;
pub mod logging;

use std::io::Write;

use statpack_io_fs::{PackageError, ReportPackage, SpecPackageOptions, copy_with_structure_to};
use statpack_manifest::SpecPackagingPlan;

pub use cli::Cli;

/// Run every manifest of `spec_plan` in order, then write the completion line.
///
/// Missing source files are written to `out` and do not stop the run. The
/// first filesystem error aborts it, and the completion line is not written.
pub fn run_packaging<W: Write>(
    spec_plan: &SpecPackagingPlan,
    spec_pkg_options: &SpecPackageOptions,
    out: &mut W,
) -> Result<Vec<ReportPackage>, PackageError> {
    let mut l_reports = Vec::with_capacity(spec_plan.manifests.len());
    for spec_manifest in &spec_plan.manifests {
        log::info!(
            "packaging `{}` ({} entries) into {}",
            spec_manifest.name(),
            spec_manifest.entries().len(),
            spec_manifest.destination().display()
        );
        let report = copy_with_structure_to(
            spec_manifest.entries(),
            &spec_plan.path_dir_src,
            spec_manifest.destination(),
            spec_pkg_options,
            out,
        )?;
        log::info!(
            "{}",
            report.format(&format!("[{}]", spec_manifest.name().to_uppercase()))
        );
        l_reports.push(report);
    }

    writeln!(out, "{}", spec_plan.completion_message()).map_err(PackageError::Output)?;
    Ok(l_reports)
}
