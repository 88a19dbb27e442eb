//! # Wallet Watcher
//!
//! Client for the Wallet Watcher monitoring API: authenticated requests,
//! dashboard aggregation, the wallet detail view and alert management.
//!
//! ## Modules
//!
//! - [`client`]: Request helper and endpoint methods over a pluggable transport
//! - [`credentials`]: API key persistence
//! - [`dashboard`]: Page load flow, totals and wallet registration
//! - [`detail`]: Tabbed wallet detail view and alert mutations
//! - [`view`]: Display formatting and view-models
//! - [`ui`]: Host seam for notifications, confirmations and the loading indicator
//!
//! The core is platform independent. The `native` feature (on by default)
//! adds the reqwest transport, file-backed credentials, TOML configuration
//! and the terminal front end used by the `wallet-watcher` binary; the
//! browser front end builds the core without it.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use wallet_watcher::{
//!     load_dashboard, ApiClient, DashboardState, MemoryCredentialStore, ReqwestTransport,
//!     TerminalUi,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ApiClient::new(
//!         "http://localhost:5000",
//!         ReqwestTransport::new(None)?,
//!         MemoryCredentialStore::with_key("my-api-key"),
//!         TerminalUi::default(),
//!     );
//!
//!     if let DashboardState::Loaded(snapshot) = load_dashboard(&client).await {
//!         println!("Watching {} wallets", snapshot.stats.total_wallets);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod credentials;
pub mod dashboard;
pub mod detail;
pub mod error;
pub mod models;
pub mod ui;
pub mod view;

#[cfg(feature = "native")]
pub mod config;
#[cfg(feature = "native")]
pub mod terminal;

// Re-export top-level types for convenience
pub use client::{ApiClient, HttpRequest, HttpResponse, HttpTransport, Method, RequestOptions};

#[cfg(feature = "native")]
pub use client::ReqwestTransport;

pub use credentials::{CredentialStore, MemoryCredentialStore, API_KEY_STORAGE_KEY};

#[cfg(feature = "native")]
pub use credentials::FileCredentialStore;

pub use dashboard::{add_wallet, load_dashboard, logout, DashboardSnapshot, DashboardState};

pub use detail::{
    create_alert, delete_alert, load_alerts, load_tab, load_transactions, DeleteOutcome,
    DetailView, RequestFence, Tab, TabContent,
};

pub use error::{ClientError, ClientResult, CredentialError, TransportError};

pub use models::{
    Alert, AlertList, HealthStatus, NewAlert, NewWallet, Transaction,
    TransactionList, Wallet, WalletEnvelope, WalletList, ALERT_TYPES,
};

pub use ui::{LoadingGuard, NotificationLevel, UserInterface};

pub use view::{
    format_address, format_date, format_eth, AlertRow, DashboardStats, PanelKind, PanelView,
    TransactionRow, WalletCard, WalletListView,
};

#[cfg(feature = "native")]
pub use config::{Config, ConfigError};

#[cfg(feature = "native")]
pub use terminal::TerminalUi;
