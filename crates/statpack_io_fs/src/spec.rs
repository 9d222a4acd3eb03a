//! Packaging options and top-level error types.

use std::fmt;
use std::io;
use std::path::PathBuf;

////////////////////////////////////////////////////////////////////////////////
// #region Options

/// Input options for `copy_with_structure_to`.
#[derive(Debug, Clone, Default)]
pub struct SpecPackageOptions {
    /// Check sources and print missing entries, but do not mutate filesystem.
    pub if_dry_run: bool,
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Errors

/// Fatal packaging errors. Any of these aborts the remaining run.
///
/// Missing source files are not errors; they are printed and counted in
/// [`crate::ReportPackage`].
#[derive(Debug)]
pub enum PackageError {
    /// Filesystem operation failed while creating directories or copying.
    Io {
        /// Path the failing operation was applied to.
        path: PathBuf,
        /// Underlying IO error.
        source: io::Error,
    },
    /// Manifest entry cannot be safely joined under a root.
    UnsafeEntry {
        /// Entry as written in the manifest.
        entry: String,
        /// Why the entry was rejected.
        reason: String,
    },
    /// Writing a diagnostic line to the output sink failed.
    Output(io::Error),
}

impl fmt::Display for PackageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Filesystem operation failed on {}: {source}", path.display())
            }
            Self::UnsafeEntry { entry, reason } => {
                write!(f, "Unsafe manifest entry `{entry}`: {reason}")
            }
            Self::Output(e) => write!(f, "Failed to write output: {e}"),
        }
    }
}

impl std::error::Error for PackageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Output(e) => Some(e),
            Self::UnsafeEntry { .. } => None,
        }
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
