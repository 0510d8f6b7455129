use crate::settings::Settings;
use log::{LevelFilter, warn};
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};
use std::fs::File;

/// Installs the global logger: terminal output, plus a log file when `log_file` is set.
/// An unknown level in the settings falls back to `Info`.
pub fn init_logging(settings: &Settings) -> Result<(), String> {
    let (level, level_error) = match settings.level_filter() {
        Ok(level) => (level, None),
        Err(e) => (LevelFilter::Info, Some(e)),
    };
    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )];
    if let Some(log_file) = &settings.log_file {
        let file = File::create(log_file)
            .map_err(|e| format!("Failed to create log file '{}': {}", log_file, e))?;
        let file_config = ConfigBuilder::new().set_time_format_rfc3339().build();
        loggers.push(WriteLogger::new(level, file_config, file));
    }
    CombinedLogger::init(loggers).map_err(|e| format!("Failed to initialise logger: {}", e))?;
    if let Some(e) = level_error {
        warn!("{}, logging at info level", e);
    }
    Ok(())
}
