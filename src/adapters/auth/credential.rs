//! Credential Verifier - the demo login gate.
//!
//! A single hardcoded credential pair gating navigation into the app.
//! This is presentation plumbing, not a security mechanism; the comparison
//! is constant-time only to keep the check free of trivial timing tells.

use subtle::ConstantTimeEq;

/// Verifies the single configured credential pair.
#[derive(Debug, Clone)]
pub struct CredentialVerifier {
    email: String,
    password: String,
}

impl CredentialVerifier {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Returns true if both email and password match.
    pub fn verify(&self, email: &str, password: &str) -> bool {
        let email_ok = constant_time_eq(self.email.as_bytes(), email.as_bytes());
        let password_ok = constant_time_eq(self.password.as_bytes(), password.as_bytes());
        email_ok && password_ok
    }
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verifier() -> CredentialVerifier {
        CredentialVerifier::new("bagus@gmail.com", "bagusganteng")
    }

    #[test]
    fn accepts_the_configured_pair() {
        assert!(verifier().verify("bagus@gmail.com", "bagusganteng"));
    }

    #[test]
    fn rejects_wrong_password() {
        assert!(!verifier().verify("bagus@gmail.com", "salah"));
    }

    #[test]
    fn rejects_wrong_email() {
        assert!(!verifier().verify("lain@gmail.com", "bagusganteng"));
    }

    #[test]
    fn rejects_empty_credentials() {
        assert!(!verifier().verify("", ""));
    }

    #[test]
    fn comparison_is_exact_not_prefix() {
        assert!(!verifier().verify("bagus@gmail.com", "bagusganteng "));
        assert!(!verifier().verify("bagus@gmail.com", "bagusganten"));
    }
}
