/**
 * Token Storage
 *
 * Where the client keeps the bearer token between requests.
 */

use std::sync::{Arc, RwLock};

/// Persistent home of the access token
pub trait TokenStorage: Send + Sync {
    fn get(&self) -> Option<String>;
    fn set(&self, token: &str);
    fn clear(&self);
}

/// Process-local token storage
#[derive(Debug, Default, Clone)]
pub struct MemoryTokenStorage {
    token: Arc<RwLock<Option<String>>>,
}

impl MemoryTokenStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStorage for MemoryTokenStorage {
    fn get(&self) -> Option<String> {
        self.token.read().ok().and_then(|token| token.clone())
    }

    fn set(&self, token: &str) {
        if let Ok(mut slot) = self.token.write() {
            *slot = Some(token.to_string());
        }
    }

    fn clear(&self) {
        if let Ok(mut slot) = self.token.write() {
            *slot = None;
        }
    }
}
