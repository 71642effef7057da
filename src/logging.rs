use std::str::FromStr;
use std::time::SystemTime;

use log::LevelFilter;

use crate::config::LogConfig;

/// installs the global logger. Rocket's own chatter is capped at `warn` so request logs don't drown out ours
pub fn setup_logger(config: &LogConfig) -> Result<(), fern::InitError> {
    let level = LevelFilter::from_str(&config.level).unwrap_or_else(|_| {
        eprintln!("Unknown log level {}, defaulting to info", config.level);
        LevelFilter::Info
    });
    let mut dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                humantime::format_rfc3339_seconds(SystemTime::now()),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .level_for("rocket", LevelFilter::Warn)
        .level_for("_", LevelFilter::Warn)
        .chain(std::io::stdout());
    if let Some(file) = &config.file {
        dispatch = dispatch.chain(fern::log_file(file)?);
    }
    dispatch.apply()?;
    Ok(())
}
