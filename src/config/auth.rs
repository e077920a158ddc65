//! Authentication configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Login credential configuration
///
/// The intake service carries a single fixed operator credential pair.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Operator login email
    #[serde(default = "default_email")]
    pub email: String,

    /// Operator login password
    #[serde(default = "default_password")]
    pub password: String,
}

impl AuthConfig {
    /// Validate authentication configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.email.is_empty() {
            return Err(ValidationError::MissingRequired("AUTH__EMAIL"));
        }
        if !self.email.contains('@') {
            return Err(ValidationError::InvalidLoginEmail);
        }
        if self.password.is_empty() {
            return Err(ValidationError::MissingRequired("AUTH__PASSWORD"));
        }
        Ok(())
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            email: default_email(),
            password: default_password(),
        }
    }
}

fn default_email() -> String {
    "bagus@gmail.com".to_string()
}

fn default_password() -> String {
    "bagusganteng".to_string()
}
