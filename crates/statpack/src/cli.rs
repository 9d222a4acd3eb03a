use std::path::PathBuf;

use clap::{ArgAction, Parser};
use statpack_io_fs::SpecPackageOptions;
use statpack_manifest::SpecPackagingPlan;
use statpack_manifest::conf::{NAME_BONUS, NAME_ESSENTIAL};

/// Copy the ARPG Stats System Essential and Bonus packages.
///
/// With no arguments the compiled-in workspace and package roots are used.
#[derive(Parser, Debug)]
#[command(name = "statpack", version)]
pub struct Cli {
    /// Override the Unity workspace root files are read from
    #[arg(long, value_name = "DIR")]
    pub source_root: Option<PathBuf>,

    /// Override the Essential package root
    #[arg(long, value_name = "DIR")]
    pub essential_root: Option<PathBuf>,

    /// Override the Bonus package root
    #[arg(long, value_name = "DIR")]
    pub bonus_root: Option<PathBuf>,

    /// Override the root named in the completion message
    #[arg(long, value_name = "DIR")]
    pub package_root: Option<PathBuf>,

    /// Report missing files without creating or copying anything
    #[arg(long)]
    pub dry_run: bool,

    /// Increase log verbosity on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Default plan with any root overrides applied.
    pub fn packaging_plan(&self) -> SpecPackagingPlan {
        let mut spec_plan = SpecPackagingPlan::default();
        if let Some(path) = &self.source_root {
            spec_plan.path_dir_src = path.clone();
        }
        if let Some(path) = &self.package_root {
            spec_plan.path_dir_packages = path.clone();
        }

        spec_plan.manifests = spec_plan
            .manifests
            .into_iter()
            .map(|spec_manifest| {
                let path_override = match spec_manifest.name() {
                    NAME_ESSENTIAL => self.essential_root.as_ref(),
                    NAME_BONUS => self.bonus_root.as_ref(),
                    _ => None,
                };
                match path_override {
                    Some(path) => spec_manifest.with_destination(path.clone()),
                    None => spec_manifest,
                }
            })
            .collect();
        spec_plan
    }

    pub fn package_options(&self) -> SpecPackageOptions {
        SpecPackageOptions {
            if_dry_run: self.dry_run,
        }
    }
}
