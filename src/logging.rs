use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Pick the log level from the `--debug` and `--splits` flags
pub fn level_for(debug: bool, splits: bool) -> Level {
    if splits {
        Level::TRACE
    } else if debug {
        Level::DEBUG
    } else {
        Level::WARN
    }
}

pub fn init(level: Level) {
    let filter = EnvFilter::from_default_env().add_directive(level.into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(level >= Level::DEBUG)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_mapping() {
        assert_eq!(level_for(false, false), Level::WARN);
        assert_eq!(level_for(true, false), Level::DEBUG);
        assert_eq!(level_for(false, true), Level::TRACE);
        assert_eq!(level_for(true, true), Level::TRACE);
    }
}
