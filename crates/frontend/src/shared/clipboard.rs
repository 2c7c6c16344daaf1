//! Clipboard utilities for copying text to clipboard
//!
//! Uses the Web Clipboard API; failures are reported through the
//! `on_done` callback rather than raised.

use wasm_bindgen_futures::spawn_local;

/// Copy text to the clipboard, then report whether it succeeded.
///
/// # Example
/// ```rust,ignore
/// copy_to_clipboard_with_callback("SRV_123", |ok| log::info!("copied: {}", ok));
/// ```
pub fn copy_to_clipboard_with_callback<F>(text: &str, on_done: F)
where
    F: FnOnce(bool) + 'static,
{
    let text = text.to_owned();
    spawn_local(async move {
        let copied = match web_sys::window() {
            Some(window) => {
                let clipboard = window.navigator().clipboard();
                wasm_bindgen_futures::JsFuture::from(clipboard.write_text(&text))
                    .await
                    .is_ok()
            }
            None => false,
        };
        if !copied {
            log::error!("Could not copy to clipboard");
        }
        on_done(copied);
    });
}
