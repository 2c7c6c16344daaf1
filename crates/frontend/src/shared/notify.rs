/// Show a blocking browser notification and log it.
pub fn notify(message: &str) {
    leptos::logging::log!("notify: {}", message);
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
