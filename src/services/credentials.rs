// ============================================================================
// CREDENTIALS - Dónde viven los tokens de la sesión
// ============================================================================
// La capa de estado solo escribe (login/registro) y borra (logout). Quien lee
// es el ApiClient.
// ============================================================================

use std::cell::RefCell;

use crate::config::CONFIG;
use crate::models::Credentials;
use crate::utils::cookie::{delete_cookie, get_cookie, set_cookie};
use crate::utils::storage::{load_from_storage, remove_from_storage, save_to_storage};

pub trait CredentialSink {
    fn save(&self, credentials: &Credentials);
    fn clear(&self);
    fn access_token(&self) -> Option<String>;
    fn refresh_token(&self) -> Option<String>;
}

/// Access token en cookie, refresh token en localStorage
pub struct BrowserCredentials {
    cookie_name: String,
    storage_key: String,
}

impl BrowserCredentials {
    pub fn new() -> Self {
        Self {
            cookie_name: CONFIG.access_token_cookie.clone(),
            storage_key: CONFIG.refresh_token_key.clone(),
        }
    }
}

impl Default for BrowserCredentials {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialSink for BrowserCredentials {
    fn save(&self, credentials: &Credentials) {
        if let Err(e) = save_to_storage(&self.storage_key, &credentials.refresh_token) {
            log::error!("❌ Error guardando refresh token: {}", e);
        }
        if let Err(e) = set_cookie(&self.cookie_name, &credentials.access_token) {
            log::error!("❌ Error guardando access token: {}", e);
        }
    }

    fn clear(&self) {
        remove_from_storage(&self.storage_key);
        delete_cookie(&self.cookie_name);
        log::info!("🗑️ Credenciales eliminadas");
    }

    fn access_token(&self) -> Option<String> {
        get_cookie(&self.cookie_name)
    }

    fn refresh_token(&self) -> Option<String> {
        load_from_storage(&self.storage_key)
    }
}

/// Credenciales en memoria (fuera del navegador)
#[derive(Default)]
pub struct MemoryCredentials {
    credentials: RefCell<Option<Credentials>>,
}

impl MemoryCredentials {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(credentials: Credentials) -> Self {
        Self {
            credentials: RefCell::new(Some(credentials)),
        }
    }

    pub fn get(&self) -> Option<Credentials> {
        self.credentials.borrow().clone()
    }
}

impl CredentialSink for MemoryCredentials {
    fn save(&self, credentials: &Credentials) {
        *self.credentials.borrow_mut() = Some(credentials.clone());
    }

    fn clear(&self) {
        *self.credentials.borrow_mut() = None;
    }

    fn access_token(&self) -> Option<String> {
        self.credentials.borrow().as_ref().map(|c| c.access_token.clone())
    }

    fn refresh_token(&self) -> Option<String> {
        self.credentials.borrow().as_ref().map(|c| c.refresh_token.clone())
    }
}
