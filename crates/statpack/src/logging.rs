use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Map `-v` repetitions to a level filter.
pub fn level_from_verbosity(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    }
}

/// Install the stderr logger. Stdout stays reserved for packaging output.
pub fn init_logging(verbose: u8) {
    let log_level = level_from_verbosity(verbose);
    if let Err(e) = SimpleLogger::new().with_level(log_level).init() {
        eprintln!("Logger already initialized: {e}");
    }
}

#[cfg(test)]
mod tests {
    use log::LevelFilter;

    use super::{init_logging, level_from_verbosity};

    #[test]
    fn verbosity_levels() {
        assert_eq!(level_from_verbosity(0), LevelFilter::Warn);
        assert_eq!(level_from_verbosity(1), LevelFilter::Info);
        assert_eq!(level_from_verbosity(2), LevelFilter::Debug);
        assert_eq!(level_from_verbosity(9), LevelFilter::Debug);
    }

    #[test]
    fn init_logging_sets_global_max_level() {
        init_logging(2);
        assert_eq!(log::max_level(), LevelFilter::Debug);
    }
}
