use serde::Deserialize;
use std::{fs::File, io::Read, path::Path};
use thiserror::Error;

use crate::errors::codes::ErrorCode;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to open config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("Invalid configuration: {reason}")]
    Invalid { reason: String },
}

impl ConfigError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ConfigError::Io(_) => ErrorCode::CONFIG_READ_FAILED,
            ConfigError::Yaml(_) => ErrorCode::CONFIG_PARSE_FAILED,
            ConfigError::Invalid { .. } => ErrorCode::CONFIG_INVALID,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct DockerConfig {
    /// Unix socket of the engine; local defaults are used when unset
    pub socket_path: Option<String>,
    pub timeout_secs: u64,
    /// Capacity of the change event channel
    pub event_buffer: usize,
}

impl Default for DockerConfig {
    fn default() -> Self {
        Self {
            socket_path: None,
            timeout_secs: 120,
            event_buffer: 128,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct TelemetryConfig {
    pub enabled: bool,
    pub log_level: String,
    pub excluded_modules: Vec<String>,
    pub service_name: String,
    pub otlp_endpoint: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_level: "info".to_string(),
            excluded_modules: vec!["hyper".to_string(), "h2".to_string()],
            service_name: "dockerapi".to_string(),
            otlp_endpoint: "http://localhost:4317".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub docker: DockerConfig,
    pub telemetry: TelemetryConfig,
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut file: File = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;
        let config: Config = serde_yaml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.docker.event_buffer == 0 {
            return Err(ConfigError::Invalid {
                reason: "docker.event_buffer must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn given_valid_yaml_when_loaded_then_config_is_parsed_correctly() {
        let yaml = r#"
docker:
  socket_path: /var/run/docker.sock
  timeout_secs: 30
  event_buffer: 16
telemetry:
  enabled: true
  log_level: debug
  excluded_modules: [tonic]
  service_name: agent
  otlp_endpoint: http://collector:4317
"#;
        let mut tmpfile = NamedTempFile::new().unwrap();
        write!(tmpfile, "{}", yaml).unwrap();

        let config = Config::from_file(tmpfile.path());

        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(
            config.docker.socket_path.as_deref(),
            Some("/var/run/docker.sock")
        );
        assert_eq!(config.docker.timeout_secs, 30);
        assert_eq!(config.docker.event_buffer, 16);
        assert!(config.telemetry.enabled);
        assert_eq!(config.telemetry.excluded_modules, vec!["tonic"]);
        assert_eq!(config.telemetry.otlp_endpoint, "http://collector:4317");
    }

    #[test]
    fn given_partial_yaml_when_loaded_then_missing_fields_use_defaults() {
        let yaml = "telemetry:\n  log_level: warn\n";
        let mut tmpfile = NamedTempFile::new().unwrap();
        write!(tmpfile, "{}", yaml).unwrap();

        let config = Config::from_file(tmpfile.path()).unwrap();

        assert_eq!(config.docker, DockerConfig::default());
        assert_eq!(config.telemetry.log_level, "warn");
        assert_eq!(config.telemetry.service_name, "dockerapi");
    }

    #[test]
    fn given_zero_event_buffer_when_loaded_then_returns_invalid_error() {
        let yaml = "docker:\n  event_buffer: 0\n";
        let mut tmpfile = NamedTempFile::new().unwrap();
        write!(tmpfile, "{}", yaml).unwrap();

        let error = Config::from_file(tmpfile.path()).unwrap_err();

        assert_eq!(error.error_code(), "F102");
    }

    #[test]
    fn given_invalid_yaml_when_loaded_then_returns_error() {
        let yaml = "not: valid: yaml";
        let mut tmpfile = NamedTempFile::new().unwrap();
        write!(tmpfile, "{}", yaml).unwrap();

        let config = Config::from_file(tmpfile.path());

        assert!(config.is_err());
    }

    #[test]
    fn given_missing_file_when_loaded_then_returns_io_error() {
        let config = Config::from_file("/nonexistent/dockerapi.yaml");

        assert!(matches!(config, Err(ConfigError::Io(_))));
    }
}
