use std::fmt;
use std::rc::Rc;

use gloo_storage::{LocalStorage, Storage};

/// Local-storage key the login flow persists the bearer token under.
pub const TOKEN_STORAGE_KEY: &str = "token";

/// Read-only source of the stored bearer token.
///
/// The cart view only ever reads the credential; writing it is the login
/// flow's job.
pub trait CredentialStore {
    /// Returns the stored token, or `None` when the user is signed out.
    fn token(&self) -> Option<String>;
}

/// Credential store backed by browser local storage.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserCredentials;

impl CredentialStore for BrowserCredentials {
    fn token(&self) -> Option<String> {
        LocalStorage::get::<String>(TOKEN_STORAGE_KEY)
            .ok()
            .filter(|token| !token.is_empty())
    }
}

/// Fixed credential store for tests.
#[derive(Debug, Clone, Default)]
pub struct FixedCredentials(pub Option<String>);

impl CredentialStore for FixedCredentials {
    fn token(&self) -> Option<String> {
        self.0.clone()
    }
}

/// Cloneable credential-store handle usable as a component prop.
///
/// Equality is handle identity: two handles compare equal when they share
/// the same underlying store.
#[derive(Clone)]
pub struct Credentials(Rc<dyn CredentialStore>);

impl Credentials {
    pub fn new(store: impl CredentialStore + 'static) -> Self {
        Self(Rc::new(store))
    }

    /// Handle over the browser's local storage.
    pub fn browser() -> Self {
        Self::new(BrowserCredentials)
    }

    pub fn token(&self) -> Option<String> {
        self.0.token()
    }
}

impl PartialEq for Credentials {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credentials")
    }
}
