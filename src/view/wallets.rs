//! Wallet list view-model

use super::format::{format_address, format_date, format_eth};
use crate::models::Wallet;

pub const UNNAMED_WALLET: &str = "Unnamed Wallet";
pub const NEVER_CHECKED: &str = "Never";

/// One wallet card on the dashboard
#[derive(Debug, Clone, PartialEq)]
pub struct WalletCard {
    /// Full address, used to open the detail view
    pub address: String,
    pub label: String,
    pub short_address: String,
    pub balance: String,
    pub added: String,
    pub last_checked: String,
}

impl From<&Wallet> for WalletCard {
    fn from(wallet: &Wallet) -> Self {
        let label = wallet
            .label
            .as_deref()
            .filter(|l| !l.is_empty())
            .unwrap_or(UNNAMED_WALLET)
            .to_string();

        let last_checked = match wallet.last_monitored.as_deref() {
            Some(ts) if !ts.is_empty() => format_date(Some(ts)),
            _ => NEVER_CHECKED.to_string(),
        };

        Self {
            address: wallet.address.clone(),
            label,
            short_address: format_address(Some(&wallet.address)),
            balance: format_eth(wallet.balance.as_deref()),
            added: format_date(wallet.created_at.as_deref()),
            last_checked,
        }
    }
}

/// The wallet list container plus its empty-state element
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WalletListView {
    pub cards: Vec<WalletCard>,
    pub empty_state_visible: bool,
}

/// Map the fetched wallets to cards; an empty list clears the container
/// and shows the empty state
pub fn render_wallets(wallets: &[Wallet]) -> WalletListView {
    if wallets.is_empty() {
        return WalletListView {
            cards: Vec::new(),
            empty_state_visible: true,
        };
    }

    WalletListView {
        cards: wallets.iter().map(WalletCard::from).collect(),
        empty_state_visible: false,
    }
}

/// Summary tiles above the wallet list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DashboardStats {
    pub total_wallets: usize,
    pub total_transactions: u64,
    pub total_alerts: u64,
}
