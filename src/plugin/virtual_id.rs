//! Virtual module ids.
//!
//! ```text
//! virtual:svg-icons-register-app   ──► icon dir `app`
//! virtual:svg-icons-register-admin ──► icon dir `admin`
//! ```

/// Marker every claimed id starts with.
pub const VIRTUAL_MODULE_MARKER: &str = "virtual:svg-icons";

/// Prefix of per-directory module ids.
pub const REGISTER_PREFIX: &str = "virtual:svg-icons-register-";

/// Whether the plugin claims `id`.
#[inline]
pub fn is_virtual(id: &str) -> bool {
    id.starts_with(VIRTUAL_MODULE_MARKER)
}

/// Module id serving the sprite of icon directory `key`.
pub fn register_id(key: &str) -> String {
    format!("{REGISTER_PREFIX}{key}")
}

/// Whether `id` asks for the sprite of icon directory `key`.
pub fn targets(id: &str, key: &str) -> bool {
    id.strip_prefix(REGISTER_PREFIX) == Some(key)
}
