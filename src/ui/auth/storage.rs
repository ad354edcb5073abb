//! Bearer token persistence in `localStorage`

/// Storage key for the bearer token
pub const TOKEN_STORAGE_KEY: &str = "student_desk_token";

#[cfg(not(feature = "ssr"))]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// Read the stored token; blank values count as absent
#[cfg(not(feature = "ssr"))]
pub fn load_token() -> Option<String> {
    local_storage()?
        .get_item(TOKEN_STORAGE_KEY)
        .ok()?
        .filter(|token| !token.trim().is_empty())
}

#[cfg(not(feature = "ssr"))]
pub fn clear_token() -> Result<(), String> {
    let storage = local_storage().ok_or("localStorage not available")?;
    storage
        .remove_item(TOKEN_STORAGE_KEY)
        .map_err(|_| "Failed to remove token".to_string())
}

// No browser storage while rendering on the server

#[cfg(feature = "ssr")]
pub fn load_token() -> Option<String> {
    None
}

#[cfg(feature = "ssr")]
pub fn clear_token() -> Result<(), String> {
    Ok(())
}
