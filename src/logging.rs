//! log4rs setup.
//!
//! Logs go to stderr (and wherever `log4rs.yml` sends them) because stdout
//! carries the document.

use crate::error::{KbError, Result};
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::path::Path;

/// Pattern used when no config file is present.
const DEFAULT_PATTERN: &str = "{d(%H:%M:%S)} {h({l:5})} {t} - {m}{n}";

/// Initialize logging from `config_file`, or a stderr logger at `info` if the
/// file does not exist.
pub fn init_logging(config_file: &Path) -> Result<()> {
    if config_file.exists() {
        return log4rs::init_file(config_file, Default::default())
            .map_err(|e| KbError::Config(format!("log4rs config {}: {e}", config_file.display())));
    }

    let config = default_config(LevelFilter::Info)?;
    log4rs::init_config(config).map_err(|e| KbError::Config(e.to_string()))?;
    log::debug!("{} not found, logging to stderr", config_file.display());
    Ok(())
}

fn default_config(level: LevelFilter) -> Result<Config> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(DEFAULT_PATTERN)))
        .build();

    Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))
        .map_err(|e| KbError::Config(e.to_string()))
}
