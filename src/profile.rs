//! The persisted user profile: name, role, optional avatar.

use crate::storage;
use crate::types::UserProfile;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use tracing::warn;

const PROFILE_KEY: &str = "user_profile";

/// Load the stored profile, falling back to defaults when nothing was saved
/// yet or the stored record no longer parses.
pub fn load(namespace: &str) -> UserProfile {
    match storage::get(namespace, PROFILE_KEY) {
        Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|err| {
            warn!("stored profile unreadable, using defaults: {err}");
            UserProfile::default()
        }),
        None => UserProfile::default(),
    }
}

/// Persist the whole profile. Empty name/role fields fall back to the
/// defaults rather than saving blanks.
pub fn save(namespace: &str, profile: &UserProfile) -> Result<(), String> {
    let defaults = UserProfile::default();
    let normalized = UserProfile {
        name: if profile.name.trim().is_empty() {
            defaults.name
        } else {
            profile.name.clone()
        },
        role: if profile.role.trim().is_empty() {
            defaults.role
        } else {
            profile.role.clone()
        },
        avatar: profile.avatar.clone(),
    };
    let raw = serde_json::to_string(&normalized).map_err(|e| e.to_string())?;
    storage::set(namespace, PROFILE_KEY, &raw)
}

/// Encode a picked avatar file as a data URI for storage alongside the
/// profile. Unknown extensions are treated as PNG.
pub fn avatar_data_uri(file_name: &str, bytes: &[u8]) -> String {
    let extension = file_name
        .rsplit('.')
        .next()
        .map(|ext| ext.to_ascii_lowercase())
        .unwrap_or_default();
    let mime = match extension.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        _ => "image/png",
    };
    format!("data:{mime};base64,{}", BASE64.encode(bytes))
}
