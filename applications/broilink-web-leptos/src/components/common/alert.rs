/// Blocking browser alert for a failed user action
pub fn alert(message: &str) {
    log::warn!("{}", message);

    #[cfg(target_arch = "wasm32")]
    if let Some(window) = web_sys::window() {
        if window.alert_with_message(message).is_err() {
            log::error!("Failed to show alert");
        }
    }
}
