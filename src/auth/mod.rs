//! Bearer token storage.

pub mod credentials;

pub use credentials::{Credentials, CredentialsManager, AUTH_TOKEN_KEY};
