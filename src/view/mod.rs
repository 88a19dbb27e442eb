//! View-Models
//!
//! Pure mappings from fetched data to what a front end displays. Both the
//! browser dashboard and the terminal renderer consume these types, so
//! neither builds markup from raw JSON.
//!
//! - [`format`]: address/date/amount formatting
//! - [`wallets`]: wallet cards and dashboard totals
//! - [`panels`]: the transaction and alert tabs of the detail view

pub mod format;
pub mod panels;
pub mod wallets;

pub use format::{format_address, format_date, format_eth, NOT_AVAILABLE};
pub use panels::{alerts_panel, transactions_panel, AlertRow, PanelKind, PanelView, TransactionRow};
pub use wallets::{render_wallets, DashboardStats, WalletCard, WalletListView};
