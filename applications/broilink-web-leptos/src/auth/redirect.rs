use std::rc::Rc;

pub const LOGIN_ROUTE: &str = "/login";

/// Full-page navigation, used where the router context is not available
pub trait Navigator {
    fn navigate(&self, path: &str);
}

/// Navigates by assigning window.location.href
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn navigate(&self, path: &str) {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                if window.location().set_href(path).is_err() {
                    log::error!("Failed to navigate to {}", path);
                }
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        log::debug!("Navigation to {} skipped outside the browser", path);
    }
}

pub fn browser_navigator() -> Rc<dyn Navigator> {
    Rc::new(BrowserNavigator)
}
