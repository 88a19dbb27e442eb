//! Terminal front end
//!
//! [`TerminalUi`] implements the host seam for the CLI, and the `render_*`
//! functions lay the shared view-models out as plain-text tables.

use std::io::{self, BufRead, Write};

use crate::dashboard::DashboardSnapshot;
use crate::models::Wallet;
use crate::ui::{NotificationLevel, UserInterface};
use crate::view::{AlertRow, PanelView, TransactionRow, WalletCard};

/// stdout/stderr/stdin implementation of [`UserInterface`]
#[derive(Debug, Clone, Default)]
pub struct TerminalUi {
    /// Answer yes to every confirmation (`--yes`)
    pub assume_yes: bool,
}

impl TerminalUi {
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

impl UserInterface for TerminalUi {
    fn notify(&self, level: NotificationLevel, message: &str) {
        match level {
            NotificationLevel::Error => eprintln!("Error: {}", message),
            NotificationLevel::Success => println!("✓ {}", message),
            NotificationLevel::Info => println!("{}", message),
        }
    }

    fn confirm(&self, prompt: &str) -> bool {
        if self.assume_yes {
            return true;
        }

        print!("{} [y/N] ", prompt);
        if io::stdout().flush().is_err() {
            return false;
        }

        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(_) => is_affirmative(&answer),
            Err(e) => {
                tracing::warn!("Failed to read confirmation: {}", e);
                false
            }
        }
    }

    fn set_loading(&self, loading: bool) {
        tracing::debug!(loading, "Loading indicator");
    }
}

/// Only an explicit yes confirms
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

pub fn render_dashboard(snapshot: &DashboardSnapshot) -> String {
    let stats = snapshot.stats;
    let mut out = format!(
        "Wallets: {}\nTransactions: {}\nAlerts: {}\n\n",
        stats.total_wallets, stats.total_transactions, stats.total_alerts
    );

    if snapshot.list.empty_state_visible {
        out.push_str("No wallets added yet.\n\n");
        out.push_str("Add your first wallet with:\n");
        out.push_str("  wallet-watcher wallet add <address> --label <label>\n");
        return out;
    }

    out.push_str(&format!(
        "{:<20} {:<15} {:<18} {:<12} {}\n",
        "Label", "Address", "Balance", "Added", "Last checked"
    ));
    out.push_str(&rule(80));
    for card in &snapshot.list.cards {
        out.push_str(&format!(
            "{:<20} {:<15} {:<18} {:<12} {}\n",
            card.label, card.short_address, card.balance, card.added, card.last_checked
        ));
    }

    if !snapshot.incomplete.is_empty() {
        out.push_str(&format!(
            "\nCounts unavailable for {} wallet(s); totals exclude them.\n",
            snapshot.incomplete.len()
        ));
    }

    out
}

pub fn render_wallet_header(wallet: &Wallet) -> String {
    let card = WalletCard::from(wallet);
    format!(
        "{} ({})\n  Address: {}\n  Balance: {}\n  Added: {}\n  Last checked: {}\n",
        card.label, card.short_address, card.address, card.balance, card.added, card.last_checked
    )
}

pub fn render_transactions(panel: &PanelView<TransactionRow>) -> String {
    if let Some(message) = panel.message() {
        return format!("{}\n", message);
    }

    let mut out = format!(
        "{:<15} {:<18} {:<12} {:<10} {}\n",
        "Hash", "Amount", "Date", "Status", "Block"
    );
    out.push_str(&rule(70));
    for row in panel.items() {
        let block = row
            .block_number
            .map(|b| b.to_string())
            .unwrap_or_else(|| "-".to_string());
        out.push_str(&format!(
            "{:<15} {:<18} {:<12} {:<10} {}\n",
            row.short_hash,
            row.amount,
            row.date,
            row.status.as_deref().unwrap_or("-"),
            block
        ));
    }
    out
}

pub fn render_alerts(panel: &PanelView<AlertRow>) -> String {
    if let Some(message) = panel.message() {
        return format!("{}\n", message);
    }

    let mut out = format!("{:<8} {:<16} {}\n", "ID", "Type", "Threshold");
    out.push_str(&rule(40));
    for row in panel.items() {
        out.push_str(&format!(
            "{:<8} {:<16} {}\n",
            row.id, row.alert_type, row.threshold
        ));
    }
    out
}

fn rule(width: usize) -> String {
    format!("{}\n", "-".repeat(width))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::{render_wallets, DashboardStats, PanelKind};

    #[test]
    fn test_affirmative_answers() {
        assert!(is_affirmative("y\n"));
        assert!(is_affirmative(" YES "));
        assert!(!is_affirmative("\n"));
        assert!(!is_affirmative("no"));
    }

    #[test]
    fn test_assume_yes_confirms_without_input() {
        assert!(TerminalUi::new(true).confirm("Delete?"));
    }

    #[test]
    fn test_render_empty_dashboard() {
        let snapshot = DashboardSnapshot {
            list: render_wallets(&[]),
            ..Default::default()
        };
        let text = render_dashboard(&snapshot);
        assert!(text.contains("Wallets: 0"));
        assert!(text.contains("No wallets added yet."));
    }

    #[test]
    fn test_render_dashboard_rows() {
        let wallets = vec![Wallet::new("0x742d35Cc6634C0532925a3b844Bc9e7595f0bEb0").label("Hot")];
        let snapshot = DashboardSnapshot {
            list: render_wallets(&wallets),
            wallets,
            stats: DashboardStats {
                total_wallets: 1,
                total_transactions: 4,
                total_alerts: 2,
            },
            incomplete: vec![],
        };

        let text = render_dashboard(&snapshot);
        assert!(text.contains("Transactions: 4"));
        assert!(text.contains("0x742d...bEb0"));
        assert!(text.contains("Hot"));
        assert!(text.starts_with("Wallets: 1\nTransactions: 4\nAlerts: 2\n\nLabel"));
        assert!(!text.contains("Counts unavailable"));
    }

    #[test]
    fn test_render_panel_messages() {
        let panel: PanelView<AlertRow> = PanelView::error(PanelKind::Alerts);
        assert_eq!(render_alerts(&panel), "Error loading alerts.\n");

        let panel = PanelView::Items(vec![AlertRow {
            id: 12,
            alert_type: "transaction".to_string(),
            threshold: "N/A".to_string(),
        }]);
        let text = render_alerts(&panel);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "-".repeat(40));
        assert_eq!(lines[2], "12       transaction      N/A");
    }

    #[test]
    fn test_render_wallet_header_defaults() {
        let text = render_wallet_header(&Wallet::new("0x742d35Cc6634C0532925a3b844Bc9e7595f0bEb0"));
        assert!(text.starts_with("Unnamed Wallet (0x742d...bEb0)"));
        assert!(text.contains("Balance: 0 ETH"));
        assert!(text.contains("Last checked: Never"));
    }
}
