use gloo_storage::{LocalStorage, Storage};

/// Los valores se guardan en crudo (`localStorage.setItem`), no como JSON,
/// para leer también lo que dejó la versión web anterior.
pub fn save_to_storage(key: &str, value: &str) -> Result<(), String> {
    LocalStorage::raw()
        .set_item(key, value)
        .map_err(|e| format!("Error guardando en localStorage: {:?}", e))
}

pub fn load_from_storage(key: &str) -> Option<String> {
    let stored = LocalStorage::raw().get_item(key).ok()??;
    decode_stored(&stored)
}

pub fn remove_from_storage(key: &str) {
    if let Err(e) = LocalStorage::raw().remove_item(key) {
        log::warn!("⚠️ Error borrando {} de localStorage: {:?}", key, e);
    }
}

/// Valor crudo tal cual; un string JSON (`"abc"`) se desenvuelve
fn decode_stored(stored: &str) -> Option<String> {
    if stored.is_empty() {
        return None;
    }
    match serde_json::from_str::<String>(stored) {
        Ok(value) => Some(value),
        Err(_) => Some(stored.to_string()),
    }
}
