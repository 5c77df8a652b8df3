//! Configuration types for the payroll service.
//!
//! These structures are deserialized from the YAML configuration file.

use std::path::PathBuf;

use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct PayrollConfig {
    /// HTTP listener settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Where the persisted collections live.
    #[serde(default)]
    pub storage: StorageConfig,
    /// Operator login and administrator passphrase.
    pub security: SecurityConfig,
}

/// HTTP listener settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind, e.g. `127.0.0.1`.
    #[serde(default = "default_host")]
    pub host: String,
    /// TCP port.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl ServerConfig {
    /// The `host:port` string handed to the listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

/// Storage settings.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Directory holding `employees.json` and `wageRecords.json`.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}

/// Security settings.
#[derive(Debug, Clone, Deserialize)]
pub struct SecurityConfig {
    /// The single operator account.
    pub operator: OperatorConfig,
    /// The administrator passphrase.
    pub admin: AdminConfig,
}

/// Operator credentials.
///
/// Either `password` or `password_hash` must be set; the security policy
/// rejects the section otherwise.
#[derive(Debug, Clone, Deserialize)]
pub struct OperatorConfig {
    /// Login name, matched exactly.
    pub username: String,
    /// Plaintext password.
    #[serde(default)]
    pub password: Option<String>,
    /// Bcrypt hash of the password.
    #[serde(default)]
    pub password_hash: Option<String>,
}

/// Administrator passphrase. Either `passphrase` or `passphrase_hash` must be set.
#[derive(Debug, Clone, Deserialize)]
pub struct AdminConfig {
    /// Plaintext passphrase.
    #[serde(default)]
    pub passphrase: Option<String>,
    /// Bcrypt hash of the passphrase.
    #[serde(default)]
    pub passphrase_hash: Option<String>,
}
