//! `statpack_io_fs`:
//! Manifest-driven copy engine for package assembly.
//!
//! - `copy`   : per-entry copy orchestration
//! - `spec`   : options/errors
//! - `report` : run-time report model
//! - `util`   : path and metadata helpers

pub mod copy;
pub mod report;
pub mod spec;
mod util;

pub use copy::{copy_with_structure, copy_with_structure_to};
pub use report::{ReportPackage, ReportPackageBuilder};
pub use spec::{PackageError, SpecPackageOptions};
