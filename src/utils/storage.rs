use web_sys::{window, Storage};

pub fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Store a plain string value. Failures are logged, never fatal.
pub fn save_raw(key: &str, value: &str) {
    if let Some(storage) = get_local_storage() {
        if storage.set_item(key, value).is_err() {
            log::error!("❌ Could not write {} to localStorage", key);
        }
    }
}

pub fn load_raw(key: &str) -> Option<String> {
    get_local_storage()?.get_item(key).ok()?
}

pub fn remove_raw(key: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(key);
    }
}
