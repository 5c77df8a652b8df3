//! Configuration loading for the payroll service.
//!
//! The configuration names the listen address, the data directory and the
//! operator and administrator secrets.
//!
//! # Example
//!
//! ```no_run
//! use payroll_ledger::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/payroll.yaml").unwrap();
//! println!("Data directory: {}", config.config().storage.data_dir.display());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{AdminConfig, OperatorConfig, PayrollConfig, SecurityConfig, ServerConfig, StorageConfig};
