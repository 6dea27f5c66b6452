use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Change the log level after initialization
pub fn set_log_level(level: LevelFilter) {
    log::set_max_level(level);
}

/// Initialize logging with the specified level
pub fn init_logging(debug: bool) -> LevelFilter {
    let log_level = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    // The logger accepts everything; the global max level does the filtering
    // so commands can raise or lower it later.
    if let Err(e) = SimpleLogger::new().with_level(LevelFilter::Trace).init() {
        eprintln!("Failed to initialize logging: {}", e);
    }
    log::set_max_level(log_level);

    log_level
}

/// Pick the level for a command's `--verbose`/`--quiet` flags
pub fn command_log_level(debug: bool, verbose: bool, quiet: bool) -> Option<LevelFilter> {
    if verbose || debug {
        Some(LevelFilter::Debug)
    } else if quiet {
        Some(LevelFilter::Error)
    } else {
        None
    }
}

/// Configure backtrace if trace is enabled
pub fn configure_backtrace(trace: bool) {
    if trace {
        std::env::set_var("RUST_BACKTRACE", "1");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Level;

    #[test]
    fn test_verbose_enables_debug_after_init() {
        assert_eq!(init_logging(false), LevelFilter::Info);
        assert_eq!(log::max_level(), LevelFilter::Info);
        assert!(!log::log_enabled!(Level::Debug));

        set_log_level(LevelFilter::Debug);
        assert!(log::log_enabled!(Level::Debug));
        let metadata = log::Metadata::builder().level(Level::Debug).build();
        assert!(log::logger().enabled(&metadata));

        set_log_level(LevelFilter::Error);
        assert!(!log::log_enabled!(Level::Warn));
    }

    #[test]
    fn test_command_log_level() {
        assert_eq!(command_log_level(false, true, true), Some(LevelFilter::Debug));
        assert_eq!(command_log_level(false, false, true), Some(LevelFilter::Error));
        assert_eq!(command_log_level(true, false, false), Some(LevelFilter::Debug));
        assert_eq!(command_log_level(false, false, false), None);
    }
}
