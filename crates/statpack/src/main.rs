use std::io;

use clap::Parser;
use statpack::{Cli, logging, run_packaging};
use statpack_io_fs::PackageError;

fn main() -> Result<(), PackageError> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let spec_plan = cli.packaging_plan();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_packaging(&spec_plan, &cli.package_options(), &mut out)?;
    Ok(())
}
