//! `statpack_manifest`:
//! Package manifests and the compiled-in packaging plan.
//!
//! - `spec` : manifest model/errors
//! - `conf` : built-in manifests, roots and default plan

pub mod conf;
pub mod spec;

pub use conf::{SpecPackagingPlan, manifest_bonus, manifest_essential};
pub use spec::{ManifestError, SpecManifest};
