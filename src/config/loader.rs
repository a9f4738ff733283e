//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading calculator
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{EngineError, EngineResult};

use super::types::{CalculatorConfig, ContactConfig, RegulationMetadata, ServerConfig};

/// Loads, validates and provides access to calculator configuration.
///
/// # Directory Structure
///
/// ```text
/// config/pesangon/
/// ├── regulation.yaml  # Regulation metadata and disclaimer
/// ├── contact.yaml     # Consultation contact for the message link
/// └── server.yaml      # HTTP binding
/// ```
///
/// # Example
///
/// ```no_run
/// use pesangon_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/pesangon").unwrap();
/// println!("Regulation: {}", loader.regulation().name);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: CalculatorConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if any file is missing, holds invalid YAML, or holds
    /// a value that fails validation.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let regulation = Self::load_yaml::<RegulationMetadata>(&path.join("regulation.yaml"))?;
        let contact = Self::load_yaml::<ContactConfig>(&path.join("contact.yaml"))?;
        let server = Self::load_yaml::<ServerConfig>(&path.join("server.yaml"))?;

        let loader = Self::from_config(CalculatorConfig::new(regulation, contact, server))?;
        info!(
            path = %path.display(),
            regulation = %loader.regulation().code,
            "Loaded calculator configuration"
        );
        Ok(loader)
    }

    /// Wraps an already-built configuration after validating it.
    pub fn from_config(config: CalculatorConfig) -> EngineResult<Self> {
        validate_contact(config.contact())?;
        validate_server(config.server())?;
        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();
        debug!(path = %path_str, "Reading configuration file");

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying calculator configuration.
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Returns the regulation metadata.
    pub fn regulation(&self) -> &RegulationMetadata {
        self.config.regulation()
    }

    /// Returns the consultation contact.
    pub fn contact(&self) -> &ContactConfig {
        self.config.contact()
    }

    /// Returns the server binding.
    pub fn server(&self) -> &ServerConfig {
        self.config.server()
    }

    /// Replaces the server binding, for command line overrides.
    pub fn with_server(self, server: ServerConfig) -> EngineResult<Self> {
        Self::from_config(self.config.with_server(server))
    }
}

fn validate_contact(contact: &ContactConfig) -> EngineResult<()> {
    let number = &contact.whatsapp_number;
    if number.is_empty() || !number.bytes().all(|b| b.is_ascii_digit()) {
        return Err(EngineError::InvalidConfig {
            field: "contact.whatsapp_number".to_string(),
            message: format!("must be a non-empty string of digits, got '{}'", number),
        });
    }

    if !(contact.link_base.starts_with("https://") || contact.link_base.starts_with("http://")) {
        return Err(EngineError::InvalidConfig {
            field: "contact.link_base".to_string(),
            message: format!("must be an http(s) URL, got '{}'", contact.link_base),
        });
    }

    Ok(())
}

fn validate_server(server: &ServerConfig) -> EngineResult<()> {
    if server.port == 0 {
        return Err(EngineError::InvalidConfig {
            field: "server.port".to_string(),
            message: "must be non-zero".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn config_path() -> &'static str {
        "./config/pesangon"
    }

    fn scratch_dir() -> PathBuf {
        let dir = std::env::temp_dir().join(format!("pesangon-config-{}", uuid::Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();
        fs::copy(
            Path::new(config_path()).join("regulation.yaml"),
            dir.join("regulation.yaml"),
        )
        .unwrap();
        fs::copy(
            Path::new(config_path()).join("server.yaml"),
            dir.join("server.yaml"),
        )
        .unwrap();
        dir
    }

    fn valid_contact() -> ContactConfig {
        ContactConfig {
            whatsapp_number: "6281234567890".to_string(),
            link_base: "https://wa.me".to_string(),
        }
    }

    fn valid_server() -> ServerConfig {
        ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }

    fn regulation() -> RegulationMetadata {
        RegulationMetadata {
            code: "PP 35/2021".to_string(),
            name: "Peraturan Pemerintah Nomor 35 Tahun 2021".to_string(),
            version: "2021-02-02".to_string(),
            source_url: "https://example.com".to_string(),
            disclaimer: "Perkiraan.".to_string(),
        }
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.regulation().code, "PP 35/2021");
        assert!(!loader.contact().whatsapp_number.is_empty());
        assert_ne!(loader.server().port, 0);
    }

    #[test]
    fn test_load_missing_directory_returns_not_found() {
        match ConfigLoader::load("./config/does-not-exist") {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.ends_with("regulation.yaml"));
            }
            other => panic!("Expected ConfigNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_load_invalid_yaml_returns_parse_error() {
        let dir = scratch_dir();
        fs::write(dir.join("contact.yaml"), "whatsapp_number: [unclosed").unwrap();

        match ConfigLoader::load(&dir) {
            Err(EngineError::ConfigParseError { path, .. }) => {
                assert!(path.ends_with("contact.yaml"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_load_rejects_placeholder_number() {
        let dir = scratch_dir();
        fs::write(dir.join("contact.yaml"), "whatsapp_number: \"628XXXXXXXXXX\"\n").unwrap();

        match ConfigLoader::load(&dir) {
            Err(EngineError::InvalidConfig { field, .. }) => {
                assert_eq!(field, "contact.whatsapp_number");
            }
            other => panic!("Expected InvalidConfig, got {:?}", other),
        }

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_from_config_rejects_non_http_link_base() {
        let mut contact = valid_contact();
        contact.link_base = "wa.me".to_string();

        let result =
            ConfigLoader::from_config(CalculatorConfig::new(regulation(), contact, valid_server()));

        match result {
            Err(EngineError::InvalidConfig { field, .. }) => {
                assert_eq!(field, "contact.link_base");
            }
            other => panic!("Expected InvalidConfig, got {:?}", other),
        }
    }

    #[test]
    fn test_from_config_rejects_zero_port() {
        let mut server = valid_server();
        server.port = 0;

        let result =
            ConfigLoader::from_config(CalculatorConfig::new(regulation(), valid_contact(), server));

        assert!(matches!(
            result,
            Err(EngineError::InvalidConfig { ref field, .. }) if field == "server.port"
        ));
    }

    #[test]
    fn test_with_server_overrides_binding() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let loader = loader
            .with_server(ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 9999,
            })
            .unwrap();

        assert_eq!(loader.server().bind_address(), "0.0.0.0:9999");
    }
}
