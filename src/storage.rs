//! Local durable storage for profile and transcript data.
//!
//! Namespaced key/value store: file-per-key JSON under the platform data
//! directory on native, an in-memory map on wasm (the webview's own
//! localStorage is not reachable from the Rust side there).

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::Mutex;

#[cfg(not(target_arch = "wasm32"))]
use std::{fs, path::PathBuf};

/// In-memory storage for WASM, file-based for native
#[allow(dead_code)]
static MEMORY_STORE: Lazy<Mutex<HashMap<String, HashMap<String, String>>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

/// Storage directory for a namespace
#[cfg(not(target_arch = "wasm32"))]
fn namespace_dir(namespace: &str) -> PathBuf {
    let safe = sanitize_component(namespace);

    if let Some(data_dir) = dirs::data_local_dir() {
        return data_dir.join("dimple").join("store").join(safe);
    }

    PathBuf::from("cache").join("store").join(safe)
}

/// Sanitize a namespace or key for filesystem use
fn sanitize_component(raw: &str) -> String {
    raw.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .take(64)
        .collect()
}

/// Read a value, `None` when the key was never written
#[cfg(not(target_arch = "wasm32"))]
pub fn get(namespace: &str, key: &str) -> Option<String> {
    let file_path = namespace_dir(namespace).join(format!("{}.json", sanitize_component(key)));
    fs::read_to_string(file_path).ok()
}

#[cfg(target_arch = "wasm32")]
pub fn get(namespace: &str, key: &str) -> Option<String> {
    let store = MEMORY_STORE.lock().ok()?;
    store.get(namespace)?.get(key).cloned()
}

/// Write a value, creating the namespace on first use
#[cfg(not(target_arch = "wasm32"))]
pub fn set(namespace: &str, key: &str, value: &str) -> Result<(), String> {
    let dir = namespace_dir(namespace);
    fs::create_dir_all(&dir).map_err(|e| format!("Failed to create storage directory: {}", e))?;
    let file_path = dir.join(format!("{}.json", sanitize_component(key)));
    fs::write(file_path, value).map_err(|e| format!("Failed to write to storage: {}", e))
}

#[cfg(target_arch = "wasm32")]
pub fn set(namespace: &str, key: &str, value: &str) -> Result<(), String> {
    let mut store = MEMORY_STORE.lock().map_err(|e| e.to_string())?;
    let entries = store.entry(namespace.to_string()).or_default();
    entries.insert(key.to_string(), value.to_string());
    Ok(())
}

/// Delete a single key; deleting an absent key is not an error
#[cfg(not(target_arch = "wasm32"))]
pub fn delete(namespace: &str, key: &str) -> Result<(), String> {
    let file_path = namespace_dir(namespace).join(format!("{}.json", sanitize_component(key)));
    if file_path.exists() {
        fs::remove_file(file_path).map_err(|e| format!("Failed to delete from storage: {}", e))?;
    }
    Ok(())
}

#[cfg(target_arch = "wasm32")]
pub fn delete(namespace: &str, key: &str) -> Result<(), String> {
    let mut store = MEMORY_STORE.lock().map_err(|e| e.to_string())?;
    if let Some(entries) = store.get_mut(namespace) {
        entries.remove(key);
    }
    Ok(())
}

/// Remove an entire namespace
#[cfg(not(target_arch = "wasm32"))]
pub fn clear(namespace: &str) -> Result<(), String> {
    let dir = namespace_dir(namespace);
    if dir.exists() {
        fs::remove_dir_all(&dir).map_err(|e| format!("Failed to clear storage: {}", e))?;
    }
    Ok(())
}

#[cfg(target_arch = "wasm32")]
pub fn clear(namespace: &str) -> Result<(), String> {
    let mut store = MEMORY_STORE.lock().map_err(|e| e.to_string())?;
    store.remove(namespace);
    Ok(())
}
