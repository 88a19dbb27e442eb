//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod add_wallet;
pub mod loading;
pub mod wallet_card;
pub mod wallet_detail;

pub use add_wallet::AddWalletModal;
pub use loading::LoadingOverlay;
pub use wallet_card::WalletCardView;
pub use wallet_detail::WalletDetailModal;
