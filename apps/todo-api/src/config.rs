use core_config::{server::ServerConfig, ConfigError, Environment, FromEnv};
use database::postgres::PostgresConfig;

/// Runtime configuration for the todo API
#[derive(Clone, Debug)]
pub struct Config {
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: PostgresConfig,
}

impl FromEnv for Config {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            environment: Environment::from_env(),
            server: ServerConfig::from_env()?,
            database: PostgresConfig::from_env()?,
        })
    }
}
