//! Operator login and administrator confirmation.
//!
//! Secrets come from configuration and are checked through the
//! [`SecretVerifier`] trait, so a plaintext secret can be swapped for a
//! bcrypt hash without touching callers.

use std::fmt;
use std::sync::Arc;

use tracing::warn;

use crate::config::SecurityConfig;
use crate::error::{PayrollError, PayrollResult};

/// Checks a presented secret.
pub trait SecretVerifier: Send + Sync {
    /// Returns true if `secret` is accepted.
    fn verify(&self, secret: &str) -> bool;
}

/// A secret compared by exact string match.
pub struct PlaintextSecret(String);

impl PlaintextSecret {
    /// Wraps the expected secret.
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }
}

impl SecretVerifier for PlaintextSecret {
    fn verify(&self, secret: &str) -> bool {
        self.0 == secret
    }
}

impl fmt::Debug for PlaintextSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PlaintextSecret(***)")
    }
}

/// A secret checked against a bcrypt hash.
#[derive(Debug, Clone)]
pub struct BcryptSecret {
    hash: String,
}

impl BcryptSecret {
    /// Wraps a bcrypt hash such as `$2b$12$...`.
    pub fn new(hash: impl Into<String>) -> Self {
        Self { hash: hash.into() }
    }
}

impl SecretVerifier for BcryptSecret {
    fn verify(&self, secret: &str) -> bool {
        bcrypt::verify(secret, &self.hash).unwrap_or(false)
    }
}

/// Picks a verifier for a secret given in plaintext, as a hash, or both.
///
/// A hash wins over plaintext. Returns `None` when neither is set.
pub fn secret_verifier(
    plaintext: Option<&str>,
    hash: Option<&str>,
) -> Option<Arc<dyn SecretVerifier>> {
    match (hash, plaintext) {
        (Some(hash), _) => Some(Arc::new(BcryptSecret::new(hash))),
        (None, Some(plain)) => Some(Arc::new(PlaintextSecret::new(plain))),
        (None, None) => None,
    }
}

/// The operator login and the administrator passphrase.
#[derive(Clone)]
pub struct SecurityPolicy {
    username: String,
    password: Arc<dyn SecretVerifier>,
    admin: Arc<dyn SecretVerifier>,
}

impl SecurityPolicy {
    /// Creates a policy from explicit verifiers.
    pub fn new(
        username: impl Into<String>,
        password: Arc<dyn SecretVerifier>,
        admin: Arc<dyn SecretVerifier>,
    ) -> Self {
        Self {
            username: username.into(),
            password,
            admin,
        }
    }

    /// Builds the policy from the `security` section of the configuration.
    pub fn from_config(config: &SecurityConfig) -> PayrollResult<Self> {
        let password = secret_verifier(
            config.operator.password.as_deref(),
            config.operator.password_hash.as_deref(),
        )
        .ok_or_else(|| PayrollError::ConfigParseError {
            path: "security.operator".to_string(),
            message: "either password or password_hash must be set".to_string(),
        })?;
        let admin = secret_verifier(
            config.admin.passphrase.as_deref(),
            config.admin.passphrase_hash.as_deref(),
        )
        .ok_or_else(|| PayrollError::ConfigParseError {
            path: "security.admin".to_string(),
            message: "either passphrase or passphrase_hash must be set".to_string(),
        })?;

        Ok(Self::new(config.operator.username.clone(), password, admin))
    }

    /// Checks operator credentials. Username and password must both match.
    pub fn authenticate(&self, username: &str, password: &str) -> PayrollResult<()> {
        if username == self.username && self.password.verify(password) {
            Ok(())
        } else {
            warn!(username, "Rejected operator login");
            Err(PayrollError::Unauthorized)
        }
    }

    /// Checks the administrator passphrase guarding destructive operations.
    pub fn confirm_admin(&self, passphrase: Option<&str>) -> PayrollResult<()> {
        match passphrase {
            Some(p) if self.admin.verify(p) => Ok(()),
            _ => {
                warn!("Rejected administrator passphrase");
                Err(PayrollError::Unauthorized)
            }
        }
    }
}

impl fmt::Debug for SecurityPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecurityPolicy")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}
