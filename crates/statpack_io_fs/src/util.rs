use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use crate::spec::PackageError;

////////////////////////////////////////////////////////////////////////////////
// #region PathUtilities

/// Check that a manifest entry stays below whatever root it is joined to.
///
/// Rejects empty entries, absolute paths (root or drive prefix) and any
/// `..` component. `.` components are allowed.
pub(crate) fn validate_relative_entry(entry: &str) -> Result<&Path, PackageError> {
    let reject = |reason: &str| PackageError::UnsafeEntry {
        entry: entry.to_string(),
        reason: reason.to_string(),
    };

    if entry.trim().is_empty() {
        return Err(reject("entry is empty"));
    }

    let path_entry = Path::new(entry);
    for part in path_entry.components() {
        match part {
            Component::Prefix(_) | Component::RootDir => {
                return Err(reject("entry must be relative to the source root"));
            }
            Component::ParentDir => {
                return Err(reject("entry must not contain `..`"));
            }
            Component::CurDir | Component::Normal(_) => {}
        }
    }
    Ok(path_entry)
}

/// Join one validated entry under both roots.
///
/// The entry is appended verbatim, so separators written in the manifest are
/// kept as-is in the displayed path.
pub(crate) fn derive_entry_paths(
    path_entry: &Path,
    path_dir_src: &Path,
    path_dir_dst: &Path,
) -> (PathBuf, PathBuf) {
    (path_dir_src.join(path_entry), path_dir_dst.join(path_entry))
}

/// Any metadata failure counts as "not found", not only `NotFound`.
pub(crate) fn source_exists(path_file_src: &Path) -> bool {
    match fs::metadata(path_file_src) {
        Ok(_) => true,
        Err(e) => {
            if e.kind() != io::ErrorKind::NotFound {
                log::debug!("cannot stat {}: {e}", path_file_src.display());
            }
            false
        }
    }
}

pub(crate) fn io_error(path: &Path, source: io::Error) -> PackageError {
    PackageError::Io {
        path: path.to_path_buf(),
        source,
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Metadata

/// Copy bytes, permissions and timestamps; overwrite any existing file.
pub(crate) fn copy_file_with_metadata(
    path_file_src: &Path,
    path_file_dst: &Path,
) -> Result<(), io::Error> {
    fs::copy(path_file_src, path_file_dst)?;
    apply_metadata(path_file_src, path_file_dst)?;
    #[cfg(target_os = "linux")]
    {
        copy_xattrs_linux(path_file_src, path_file_dst);
    }
    Ok(())
}

fn apply_metadata(path_file_src: &Path, path_file_dst: &Path) -> Result<(), io::Error> {
    use filetime::{FileTime, set_file_times};

    let stat_src = fs::metadata(path_file_src)?;
    // Times first: a read-only permission set would block it on some platforms.
    let file_time_access = FileTime::from_last_access_time(&stat_src);
    let file_time_modify = FileTime::from_last_modification_time(&stat_src);
    set_file_times(path_file_dst, file_time_access, file_time_modify)?;

    fs::set_permissions(path_file_dst, stat_src.permissions())?;
    Ok(())
}

#[cfg(target_os = "linux")]
fn copy_xattrs_linux(path_file_src: &Path, path_file_dst: &Path) {
    let iter_xattr_names = match xattr::list(path_file_src) {
        Ok(v) => v,
        Err(e) => {
            log::debug!("xattr list failed for {}: {e}", path_file_src.display());
            return;
        }
    };

    for name in iter_xattr_names {
        let Some(raw_value) = xattr::get(path_file_src, &name).ok().flatten() else {
            continue;
        };
        if let Err(e) = xattr::set(path_file_dst, &name, &raw_value) {
            log::debug!(
                "xattr {} not copied to {}: {e}",
                name.to_string_lossy(),
                path_file_dst.display()
            );
        }
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
