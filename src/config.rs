use std::env;
use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub database_path: String,
    pub service_port: u16,
    pub service_host: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let database_path = env::var("DATABASE_PATH")
            .unwrap_or_else(|_| "database.db".to_string());

        let service_port = env::var("SERVICE_PORT")
            .unwrap_or_else(|_| "3111".to_string())
            .parse::<u16>()
            .context("SERVICE_PORT must be a valid port number (0-65535)")?;

        let service_host = env::var("SERVICE_HOST")
            .unwrap_or_else(|_| "0.0.0.0".to_string());

        Ok(Config {
            database_path,
            service_port,
            service_host,
        })
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Database file: {}", self.database_path);
        tracing::info!("  Service listening on: {}:{}", self.service_host, self.service_port);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn clear_env_vars() {
        unsafe {
            env::remove_var("DATABASE_PATH");
            env::remove_var("SERVICE_PORT");
            env::remove_var("SERVICE_HOST");
        }
    }

    // All env manipulation lives in one test body so parallel test
    // execution cannot interleave variable writes.
    #[test]
    fn test_config_from_env() {
        clear_env_vars();

        let config = Config::from_env().unwrap();
        assert_eq!(config.database_path, "database.db");
        assert_eq!(config.service_port, 3111);
        assert_eq!(config.service_host, "0.0.0.0");

        unsafe {
            env::set_var("DATABASE_PATH", "blog-test.db");
            env::set_var("SERVICE_PORT", "8080");
            env::set_var("SERVICE_HOST", "127.0.0.1");
        }

        let config = Config::from_env().unwrap();
        assert_eq!(config.database_path, "blog-test.db");
        assert_eq!(config.service_port, 8080);
        assert_eq!(config.service_host, "127.0.0.1");

        unsafe {
            env::set_var("SERVICE_PORT", "not-a-port");
        }
        assert!(Config::from_env().is_err());

        clear_env_vars();
    }
}
