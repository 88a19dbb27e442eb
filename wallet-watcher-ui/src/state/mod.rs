//! State Management
//!
//! Global application state and the browser implementations of the core's
//! storage and host seams.

pub mod browser_ui;
pub mod global;
pub mod storage;

pub use browser_ui::BrowserUi;
pub use global::{provide_global_state, GlobalState};
pub use storage::LocalStorageCredentials;
