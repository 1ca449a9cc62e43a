//! Clipboard writes. Requires a browser environment; a no-op elsewhere.

/// Copy `text` to the system clipboard.
///
/// Returns `true` if the write was handed to the browser.
pub fn copy_text(text: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Some(clipboard) = window.navigator().clipboard() {
                let _ = clipboard.write_text(text);
                return true;
            }
        }
        false
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
        false
    }
}
