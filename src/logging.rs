use std::path::Path;

use log::{warn, LevelFilter};
use log4rs::{
    append::console::{ConsoleAppender, Target},
    config::{runtime::ConfigErrors, Appender, Config, Root},
    encode::pattern::PatternEncoder,
};
use thiserror::Error;

const FALLBACK_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {h({l})} {t} - {m}{n}";

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Invalid fallback logging config: {0}")]
    Config(#[from] ConfigErrors),
    #[error("Logger already initialised: {0}")]
    AlreadyInitialised(#[from] log::SetLoggerError),
}

/// Initialise logging from the log4rs file at `path`.
/// If the file cannot be loaded, log `Info` and above to stderr instead.
pub fn init(path: &Path) -> Result<(), LoggingError> {
    match log4rs::init_file(path, Default::default()) {
        Ok(()) => Ok(()),
        Err(e) => {
            log4rs::init_config(fallback_config()?)?;
            warn!(
                "Could not load logging config from {}, logging to stderr: {e}",
                path.display()
            );
            Ok(())
        }
    }
}

/// Console logging to stderr, keeping stdout free for results.
fn fallback_config() -> Result<Config, ConfigErrors> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(FALLBACK_PATTERN)))
        .build();
    Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Info))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_config_is_valid() {
        let config = fallback_config().unwrap();
        assert_eq!(config.root().level(), LevelFilter::Info);
        assert_eq!(config.appenders().len(), 1);
    }
}
