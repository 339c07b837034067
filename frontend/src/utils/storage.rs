//! Thin accessors over the browser globals the client touches.

use web_sys::{Storage, Window};

pub fn window() -> Result<Window, String> {
    web_sys::window().ok_or_else(|| "No window object".to_string())
}

pub fn local_storage() -> Result<Storage, String> {
    window()?
        .local_storage()
        .map_err(|_| "localStorage is blocked".to_string())?
        .ok_or_else(|| "No localStorage".to_string())
}

pub fn current_pathname() -> Option<String> {
    window().ok()?.location().pathname().ok()
}

pub fn set_location(href: &str) -> Result<(), String> {
    window()?
        .location()
        .set_href(href)
        .map_err(|_| format!("Failed to navigate to {href}"))
}
