//! Manifest-driven file copy that keeps relative folder structure.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::report::{ReportPackage, ReportPackageBuilder};
use crate::spec::{PackageError, SpecPackageOptions};
use crate::util::{
    copy_file_with_metadata, derive_entry_paths, io_error, source_exists, validate_relative_entry,
};

/// Copy every entry of `paths` from `source_root` into `destination_root`.
///
/// Same as [`copy_with_structure_to`] with default options, printing
/// missing-file lines to standard output.
pub fn copy_with_structure<I, S, P, Q>(
    paths: I,
    source_root: P,
    destination_root: Q,
) -> Result<ReportPackage, PackageError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let stdout = io::stdout();
    let mut out = stdout.lock();
    copy_with_structure_to(
        paths,
        source_root,
        destination_root,
        &SpecPackageOptions::default(),
        &mut out,
    )
}

/// Copy every entry of `paths` from `source_root` into `destination_root`,
/// writing diagnostics to `out`.
///
/// For each entry, in order:
/// 1. Validate the entry and join it under both roots.
/// 2. If the source does not exist, write `File not found: {src}` and move on.
/// 3. Otherwise create the destination parent directories and copy the file
///    with its permissions and timestamps, overwriting any existing file.
///
/// The first filesystem failure aborts the run with [`PackageError`]; entries
/// after it are not visited.
pub fn copy_with_structure_to<I, S, P, Q, W>(
    paths: I,
    source_root: P,
    destination_root: Q,
    spec_pkg_options: &SpecPackageOptions,
    out: &mut W,
) -> Result<ReportPackage, PackageError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    P: AsRef<Path>,
    Q: AsRef<Path>,
    W: Write,
{
    let path_dir_src = source_root.as_ref();
    let path_dir_dst = destination_root.as_ref();
    let mut builder_pkg_report = ReportPackageBuilder::default();

    for entry in paths {
        let entry = entry.as_ref();
        builder_pkg_report.add_scanned();

        let path_entry = validate_relative_entry(entry)?;
        let (path_file_src, path_file_dst) =
            derive_entry_paths(path_entry, path_dir_src, path_dir_dst);

        if !source_exists(&path_file_src) {
            writeln!(out, "File not found: {}", path_file_src.display())
                .map_err(PackageError::Output)?;
            log::info!("missing source {}", path_file_src.display());
            builder_pkg_report.add_missing(path_file_src);
            continue;
        }

        if spec_pkg_options.if_dry_run {
            log::debug!(
                "dry-run: would copy {} -> {}",
                path_file_src.display(),
                path_file_dst.display()
            );
            builder_pkg_report.add_skipped();
            continue;
        }

        if let Some(path_parent_dst) = path_file_dst.parent() {
            fs::create_dir_all(path_parent_dst).map_err(|e| io_error(path_parent_dst, e))?;
        }
        copy_file_with_metadata(&path_file_src, &path_file_dst)
            .map_err(|e| io_error(&path_file_dst, e))?;
        log::debug!(
            "copied {} -> {}",
            path_file_src.display(),
            path_file_dst.display()
        );
        builder_pkg_report.add_copied();
    }

    Ok(builder_pkg_report.build())
}
