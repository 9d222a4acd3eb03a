//! Package report model and mutable report builder.

use std::fmt;
use std::path::PathBuf;

/// Aggregate counters for one `copy_with_structure` run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReportPackage {
    /// Number of manifest entries visited.
    pub cnt_scanned: u64,
    /// Number of files copied into the destination root.
    pub cnt_copied: u64,
    /// Number of present files left alone by dry-run.
    pub cnt_skipped: u64,
    /// Number of entries whose source file does not exist.
    pub cnt_missing: u64,
    /// Source paths reported as missing, in manifest order.
    pub missing: Vec<PathBuf>,
}

impl ReportPackage {
    /// Human-readable one-line summary.
    pub fn format(&self, prefix: &str) -> String {
        format!(
            "{prefix} scanned={} copied={} skipped={} missing={}",
            self.cnt_scanned, self.cnt_copied, self.cnt_skipped, self.cnt_missing
        )
    }

    /// True when every scanned entry had a source file.
    pub fn is_complete(&self) -> bool {
        self.cnt_missing == 0
    }
}

impl fmt::Display for ReportPackage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format("[PACKAGE]"))
    }
}

/// Mutable accumulator for package statistics.
#[derive(Debug, Default, Clone)]
pub struct ReportPackageBuilder {
    cnt_scanned: u64,
    cnt_copied: u64,
    cnt_skipped: u64,
    missing: Vec<PathBuf>,
}

impl ReportPackageBuilder {
    pub fn add_scanned(&mut self) {
        self.cnt_scanned += 1;
    }

    pub fn add_copied(&mut self) {
        self.cnt_copied += 1;
    }

    pub fn add_skipped(&mut self) {
        self.cnt_skipped += 1;
    }

    /// Record one missing source path.
    pub fn add_missing(&mut self, path: PathBuf) {
        self.missing.push(path);
    }

    /// Finalize builder into immutable report.
    pub fn build(self) -> ReportPackage {
        ReportPackage {
            cnt_scanned: self.cnt_scanned,
            cnt_copied: self.cnt_copied,
            cnt_skipped: self.cnt_skipped,
            cnt_missing: self.missing.len() as u64,
            missing: self.missing,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::{ReportPackage, ReportPackageBuilder};

    #[test]
    fn report_package_format_and_display() {
        let report = ReportPackage {
            cnt_scanned: 11,
            cnt_copied: 9,
            cnt_skipped: 0,
            cnt_missing: 2,
            missing: vec![PathBuf::from("a"), PathBuf::from("b")],
        };

        let txt = report.format("[ESSENTIAL]");
        assert_eq!(txt, "[ESSENTIAL] scanned=11 copied=9 skipped=0 missing=2");
        assert_eq!(
            report.to_string(),
            "[PACKAGE] scanned=11 copied=9 skipped=0 missing=2"
        );
        assert!(!report.is_complete());
    }

    #[test]
    fn builder_derives_missing_count_from_paths() {
        let mut builder = ReportPackageBuilder::default();
        builder.add_scanned();
        builder.add_scanned();
        builder.add_copied();
        builder.add_missing(PathBuf::from("src/gone.cs"));

        let report = builder.build();
        assert_eq!(report.cnt_scanned, 2);
        assert_eq!(report.cnt_copied, 1);
        assert_eq!(report.cnt_missing, 1);
        assert_eq!(report.missing, vec![PathBuf::from("src/gone.cs")]);
    }
}
