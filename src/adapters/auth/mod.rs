//! Auth adapters - the demo credential check.

mod credential;

pub use credential::CredentialVerifier;
