//! Token Storage
//!
//! Durable home of the auth token. The browser build keeps it in
//! `window.localStorage`.

use std::sync::Mutex;

/// The only key this app persists
pub const AUTH_TOKEN_KEY: &str = "AUTH_TOKEN";

pub trait TokenStorage: Send + Sync {
    fn token(&self) -> Option<String>;
    fn set_token(&self, token: &str);
    fn clear_token(&self);
}

/// `window.localStorage` backed storage
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalTokenStorage;

impl LocalTokenStorage {
    fn local_storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl TokenStorage for LocalTokenStorage {
    fn token(&self) -> Option<String> {
        Self::local_storage()?
            .get_item(AUTH_TOKEN_KEY)
            .ok()
            .flatten()
            .filter(|t| !t.is_empty())
    }

    fn set_token(&self, token: &str) {
        match Self::local_storage() {
            Some(storage) => {
                if storage.set_item(AUTH_TOKEN_KEY, token).is_err() {
                    log::error!("[API] could not persist auth token");
                }
            }
            None => log::error!("[API] localStorage unavailable, token not persisted"),
        }
    }

    fn clear_token(&self) {
        if let Some(storage) = Self::local_storage() {
            let _ = storage.remove_item(AUTH_TOKEN_KEY);
        }
    }
}

/// Process-local storage, for tests and non-browser embedding
#[derive(Debug, Default)]
pub struct MemoryTokenStorage {
    token: Mutex<Option<String>>,
}

impl TokenStorage for MemoryTokenStorage {
    fn token(&self) -> Option<String> {
        self.token.lock().ok()?.clone()
    }

    fn set_token(&self, token: &str) {
        if let Ok(mut slot) = self.token.lock() {
            *slot = Some(token.to_string());
        }
    }

    fn clear_token(&self) {
        if let Ok(mut slot) = self.token.lock() {
            *slot = None;
        }
    }
}
