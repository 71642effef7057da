use config::{Config, ConfigError, Environment};
use once_cell::sync::Lazy;
use rocket::serde::Deserialize;

/// where the config file is read from, relative to the working directory
static CONFIG_FILE: &str = "./TagDashboard.toml";
/// environment variables with this prefix override the config file, e.g. `TAG_DASHBOARD__DATABASE__LOCATION`
static ENV_PREFIX: &str = "TAG_DASHBOARD";

#[derive(Deserialize, Clone, Debug)]
#[serde(crate = "rocket::serde")]
pub struct DbConfig {
    /// path to the sqlite database file
    pub location: String,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(crate = "rocket::serde")]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(crate = "rocket::serde")]
pub struct LogConfig {
    /// one of `off`, `error`, `warn`, `info`, `debug`, `trace`
    pub level: String,
    /// if present, log lines are also appended to this file
    pub file: Option<String>,
}

/// config properties for the whole of this application
#[derive(Deserialize, Clone, Debug)]
#[serde(crate = "rocket::serde")]
pub struct DashboardConfig {
    pub database: DbConfig,
    pub server: ServerConfig,
    #[serde(rename = "log")]
    pub logging: LogConfig,
}

fn build_config() -> Result<DashboardConfig, ConfigError> {
    Config::builder()
        .set_default("database.location", "./tag_dashboard.sqlite")?
        .set_default("server.port", 4000)?
        .set_default("log.level", "info")?
        .add_source(config::File::with_name(CONFIG_FILE).required(false))
        .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
        .build()?
        .try_deserialize()
}

/// Parses the config file located at ./TagDashboard.toml, if it exists.
/// A missing file falls back to the defaults, but a file that fails to parse will panic
pub fn parse_config() -> DashboardConfig {
    match build_config() {
        Ok(config) => config,
        Err(e) => {
            // the logger might not be set up yet, so this has to go to stderr too
            eprintln!("Failed to parse config file. Exception is {e}");
            panic!("Failed to parse config file. Exception is {e}");
        }
    }
}

/// global variable for config, that way it doesn't need to be repeatedly parsed
pub static DASHBOARD_CONFIG: Lazy<DashboardConfig> = Lazy::new(parse_config);

#[cfg(test)]
mod tests {
    use super::build_config;

    #[test]
    fn defaults_are_used_without_a_config_file() {
        let config = build_config().unwrap();
        assert_eq!(4000, config.server.port);
        assert_eq!("info", config.logging.level);
        assert_eq!(None, config.logging.file);
        assert!(!config.database.location.is_empty());
    }

    #[test]
    fn env_vars_override_the_database_location() {
        std::env::set_var("TAG_DASHBOARD__DATABASE__LOCATION", "./from_env.sqlite");
        let config = build_config().unwrap();
        std::env::remove_var("TAG_DASHBOARD__DATABASE__LOCATION");
        assert_eq!("./from_env.sqlite", config.database.location);
    }
}
