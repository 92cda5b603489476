use std::env;
use std::path::PathBuf;
use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub database_path: PathBuf,
    pub service_port: u16,
    pub service_host: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let database_path = env::var("DATABASE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("items.db"));

        let service_port = env::var("SERVICE_PORT")
            .unwrap_or_else(|_| "8000".to_string())
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

    /// Address the HTTP listener binds to, as `host:port`
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.service_host, self.service_port)
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Database file: {}", self.database_path.display());
        tracing::info!("  Service listening on: {}", self.bind_address());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, MutexGuard};

    // Tests in this module mutate process-wide environment variables
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn lock_env() -> MutexGuard<'static, ()> {
        ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn clear_env_vars() {
        unsafe {
            env::remove_var("DATABASE_PATH");
            env::remove_var("SERVICE_PORT");
            env::remove_var("SERVICE_HOST");
        }
    }

    #[test]
    fn test_config_with_all_vars() {
        let _guard = lock_env();
        clear_env_vars();
        unsafe {
            env::set_var("DATABASE_PATH", "/tmp/items-test.db");
            env::set_var("SERVICE_PORT", "8080");
            env::set_var("SERVICE_HOST", "127.0.0.1");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.database_path, PathBuf::from("/tmp/items-test.db"));
        assert_eq!(config.service_port, 8080);
        assert_eq!(config.service_host, "127.0.0.1");
        assert_eq!(config.bind_address(), "127.0.0.1:8080");

        clear_env_vars();
    }

    #[test]
    fn test_config_with_defaults() {
        let _guard = lock_env();
        clear_env_vars();

        let config = Config::from_env().unwrap();

        assert_eq!(config.database_path, PathBuf::from("items.db"));
        assert_eq!(config.service_port, 8000);
        assert_eq!(config.service_host, "0.0.0.0");
    }

    #[test]
    fn test_invalid_port() {
        let _guard = lock_env();
        clear_env_vars();
        unsafe {
            env::set_var("SERVICE_PORT", "not-a-number");
        }

        let result = Config::from_env();
        clear_env_vars();

        assert!(result.is_err());
        let error = result.unwrap_err();
        assert!(error.to_string().contains("SERVICE_PORT"));
    }

    #[test]
    fn test_port_out_of_range() {
        let _guard = lock_env();
        clear_env_vars();
        unsafe {
            env::set_var("SERVICE_PORT", "99999");
        }

        let result = Config::from_env();
        clear_env_vars();

        assert!(result.is_err());
    }
}
