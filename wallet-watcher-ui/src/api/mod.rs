//! Browser API Access
//!
//! The gloo-net transport and the client type every page uses.

pub mod transport;

pub use transport::GlooTransport;

use wallet_watcher::client::ApiClient;

use crate::state::browser_ui::BrowserUi;
use crate::state::storage::LocalStorageCredentials;

/// Client wired to the browser seams
pub type WebClient = ApiClient<GlooTransport, LocalStorageCredentials, BrowserUi>;

/// Origin the page was served from; requests are made against it
pub fn origin() -> String {
    web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .unwrap_or_default()
}
