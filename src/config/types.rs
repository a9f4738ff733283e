//! Configuration types for the severance calculator.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::{Deserialize, Serialize};

/// Metadata about the regulation the calculator applies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegulationMetadata {
    /// Short code of the regulation (e.g., "PP 35/2021").
    pub code: String,
    /// The human-readable name of the regulation.
    pub name: String,
    /// The version or effective date of the tables.
    pub version: String,
    /// URL to the official regulation text.
    pub source_url: String,
    /// Disclaimer printed under every result.
    pub disclaimer: String,
}

fn default_link_base() -> String {
    "https://wa.me".to_string()
}

/// Consultation contact used to build the prefilled message link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactConfig {
    /// WhatsApp number in international format, digits only (e.g., "6281234567890").
    pub whatsapp_number: String,
    /// Base URL of the messaging link service.
    #[serde(default = "default_link_base")]
    pub link_base: String,
}

/// Network binding for the HTTP service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind to.
    pub host: String,
    /// TCP port to listen on.
    pub port: u16,
}

impl ServerConfig {
    /// Returns the `host:port` address to bind.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// The complete calculator configuration loaded from YAML files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculatorConfig {
    regulation: RegulationMetadata,
    contact: ContactConfig,
    server: ServerConfig,
}

impl CalculatorConfig {
    /// Creates a new CalculatorConfig from its component parts.
    pub fn new(
        regulation: RegulationMetadata,
        contact: ContactConfig,
        server: ServerConfig,
    ) -> Self {
        Self {
            regulation,
            contact,
            server,
        }
    }

    /// Returns the regulation metadata.
    pub fn regulation(&self) -> &RegulationMetadata {
        &self.regulation
    }

    /// Returns the consultation contact.
    pub fn contact(&self) -> &ContactConfig {
        &self.contact
    }

    /// Returns the server binding.
    pub fn server(&self) -> &ServerConfig {
        &self.server
    }

    /// Returns a copy with the server binding replaced.
    pub fn with_server(mut self, server: ServerConfig) -> Self {
        self.server = server;
        self
    }
}
