//! Manifest models and validation errors.

use std::fmt;
use std::path::{Path, PathBuf};

/// Named, ordered list of files bound to one destination package root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecManifest {
    pub(crate) name: String,
    pub(crate) path_dir_dst: PathBuf,
    pub(crate) entries: Vec<String>,
}

impl SpecManifest {
    /// Build a manifest from runtime input, rejecting empty names/entries.
    pub fn new<P, I, S>(name: &str, dir_destination: P, entries: I) -> Result<Self, ManifestError>
    where
        P: Into<PathBuf>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let spec_manifest = Self {
            name: name.to_string(),
            path_dir_dst: dir_destination.into(),
            entries: entries.into_iter().map(Into::into).collect(),
        };
        spec_manifest.validate()?;
        Ok(spec_manifest)
    }

    /// Check name and entries. Does not touch the filesystem.
    pub fn validate(&self) -> Result<(), ManifestError> {
        if self.name.trim().is_empty() {
            return Err(ManifestError::EmptyName);
        }
        if let Some(n_idx) = self.entries.iter().position(|e| e.trim().is_empty()) {
            return Err(ManifestError::EmptyEntry {
                manifest: self.name.clone(),
                index: n_idx,
            });
        }
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn destination(&self) -> &Path {
        &self.path_dir_dst
    }

    /// Relative paths, in copy order.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Same manifest, copied into another root.
    pub fn with_destination<P: Into<PathBuf>>(mut self, dir_destination: P) -> Self {
        self.path_dir_dst = dir_destination.into();
        self
    }
}

/// Manifest construction errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestError {
    /// Manifest name is blank.
    EmptyName,
    /// One entry is blank.
    EmptyEntry {
        /// Owning manifest name.
        manifest: String,
        /// Zero-based entry position.
        index: usize,
    },
}

impl fmt::Display for ManifestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Manifest name must not be empty."),
            Self::EmptyEntry { manifest, index } => {
                write!(f, "Manifest `{manifest}` has an empty entry at index {index}.")
            }
        }
    }
}

impl std::error::Error for ManifestError {}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::{ManifestError, SpecManifest};

    #[test]
    fn manifest_keeps_entry_order() {
        let spec_manifest =
            SpecManifest::new("demo", "/pkg/demo", ["b.txt", "a.txt"]).expect("manifest");
        assert_eq!(spec_manifest.name(), "demo");
        assert_eq!(spec_manifest.destination(), Path::new("/pkg/demo"));
        assert_eq!(spec_manifest.entries(), ["b.txt", "a.txt"]);
    }

    #[test]
    fn empty_name_rejected() {
        let err = SpecManifest::new(" ", "/pkg", ["a.txt"]).expect_err("must fail");
        assert_eq!(err, ManifestError::EmptyName);
    }

    #[test]
    fn empty_entry_rejected_with_position() {
        let err = SpecManifest::new("demo", "/pkg", ["a.txt", ""]).expect_err("must fail");
        assert_eq!(
            err,
            ManifestError::EmptyEntry {
                manifest: "demo".to_string(),
                index: 1
            }
        );
        assert_eq!(err.to_string(), "Manifest `demo` has an empty entry at index 1.");
    }

    #[test]
    fn with_destination_replaces_root_only() {
        let spec_manifest = SpecManifest::new("demo", "/old", ["a.txt"])
            .expect("manifest")
            .with_destination("/new");
        assert_eq!(spec_manifest.destination(), Path::new("/new"));
        assert_eq!(spec_manifest.entries(), ["a.txt"]);
    }
}
