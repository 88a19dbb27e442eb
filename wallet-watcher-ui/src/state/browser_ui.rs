//! Browser host seam
//!
//! Notifications and confirmations use the window's blocking dialogs; the
//! loading flag drives the overlay component.

use leptos::*;
use wallet_watcher::ui::{NotificationLevel, UserInterface};

#[derive(Debug, Clone, Copy)]
pub struct BrowserUi {
    loading: RwSignal<bool>,
}

impl BrowserUi {
    pub fn new(loading: RwSignal<bool>) -> Self {
        Self { loading }
    }
}

impl UserInterface for BrowserUi {
    fn notify(&self, level: NotificationLevel, message: &str) {
        if level == NotificationLevel::Error {
            tracing::warn!("{}", message);
        }
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }

    fn confirm(&self, prompt: &str) -> bool {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(prompt).ok())
            .unwrap_or(false)
    }

    fn set_loading(&self, loading: bool) {
        self.loading.set(loading);
    }
}
