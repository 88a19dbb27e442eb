//! Wire types for the Wallet Watcher REST API
//!
//! These are transient client-side projections of server state:
//! - `Wallet`: a monitored address with display metadata
//! - `Transaction`: read-only activity scoped to one wallet
//! - `Alert`: a user-configured condition scoped to one wallet
//!
//! Every optional field defaults when absent so a partial payload still
//! renders. Numeric strings (balances, values, thresholds) are accepted as
//! either JSON strings or JSON numbers.

use serde::{Deserialize, Deserializer, Serialize};

/// Alert types understood by the backend monitor
pub const ALERT_TYPES: [&str; 3] = ["balance_above", "balance_below", "transaction"];

/// The only notification method the dashboard offers
pub const DEFAULT_NOTIFICATION_METHOD: &str = "email";

/// A monitored wallet
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Wallet {
    #[serde(default)]
    pub id: Option<i64>,
    /// Checksummed address, unique per backend
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub label: Option<String>,
    /// Balance in ETH as reported by the backend
    #[serde(default, deserialize_with = "lossy_string")]
    pub balance: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub last_monitored: Option<String>,
}

impl Wallet {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            id: None,
            address: address.into(),
            label: None,
            balance: None,
            created_at: None,
            last_monitored: None,
        }
    }

    /// Builder method: set label
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Builder method: set balance
    pub fn balance(mut self, balance: impl Into<String>) -> Self {
        self.balance = Some(balance.into());
        self
    }
}

/// A transaction observed for a wallet
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub wallet_id: Option<i64>,
    #[serde(default)]
    pub tx_hash: String,
    #[serde(default)]
    pub from_address: Option<String>,
    #[serde(default)]
    pub to_address: Option<String>,
    #[serde(default, deserialize_with = "lossy_string")]
    pub value: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub block_number: Option<u64>,
    /// "success" or "failed"
    #[serde(default)]
    pub status: Option<String>,
}

/// An alert rule attached to a wallet
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Alert {
    /// Rows without an id cannot be deleted and are not listed
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub wallet_id: Option<i64>,
    #[serde(default)]
    pub alert_type: String,
    #[serde(default, deserialize_with = "lossy_string")]
    pub threshold: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub notification_method: Option<String>,
}

// ============================================
// Response envelopes
// ============================================

/// `GET /api/v1/wallets`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WalletList {
    #[serde(default)]
    pub wallets: Vec<Wallet>,
    #[serde(default)]
    pub count: Option<u64>,
}

/// `GET /api/v1/wallets/{address}/transactions`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TransactionList {
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub count: Option<u64>,
}

impl TransactionList {
    /// Server-reported count; missing counts contribute nothing to totals
    pub fn count(&self) -> u64 {
        self.count.unwrap_or(0)
    }
}

/// `GET /api/v1/wallets/{address}/alerts`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AlertList {
    #[serde(default)]
    pub alerts: Vec<Alert>,
    #[serde(default)]
    pub count: Option<u64>,
}

impl AlertList {
    pub fn count(&self) -> u64 {
        self.count.unwrap_or(0)
    }
}

/// Single-wallet responses (`GET`/`POST` on wallets)
#[derive(Debug, Clone, Deserialize)]
pub struct WalletEnvelope {
    pub wallet: Wallet,
    #[serde(default)]
    pub message: Option<String>,
}

/// `GET /health`
#[derive(Debug, Clone, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub database: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
}

/// Body carried by non-2xx responses
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

// ============================================
// Request bodies
// ============================================

/// Body for registering a wallet. Values are passed through untouched;
/// validation happens server-side.
#[derive(Debug, Clone, Serialize)]
pub struct NewWallet {
    pub address: String,
    pub label: String,
}

/// Body for creating an alert
#[derive(Debug, Clone, Serialize)]
pub struct NewAlert {
    pub alert_type: String,
    pub threshold: String,
    pub notification_method: String,
}

impl NewAlert {
    pub fn new(alert_type: impl Into<String>, threshold: impl Into<String>) -> Self {
        Self {
            alert_type: alert_type.into(),
            threshold: threshold.into(),
            notification_method: DEFAULT_NOTIFICATION_METHOD.to_string(),
        }
    }
}

/// Accept a string, a number or null for fields the backend stores as
/// decimal strings.
fn lossy_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wallet_from_backend_payload() {
        let json = r#"{
            "id": 3,
            "address": "0x742d35Cc6634C0532925a3b844Bc9e7595f0bEb0",
            "label": null,
            "balance": "1.5",
            "last_monitored": null,
            "created_at": "2024-03-01T09:15:00.123456"
        }"#;

        let wallet: Wallet = serde_json::from_str(json).unwrap();
        assert_eq!(wallet.id, Some(3));
        assert_eq!(wallet.label, None);
        assert_eq!(wallet.balance.as_deref(), Some("1.5"));
        assert!(wallet.last_monitored.is_none());
    }

    #[test]
    fn test_numeric_balance_accepted() {
        let wallet: Wallet = serde_json::from_str(r#"{"address": "0xabc", "balance": 2}"#).unwrap();
        assert_eq!(wallet.balance.as_deref(), Some("2"));
    }

    #[test]
    fn test_alert_without_id_still_decodes_list() {
        let list: AlertList = serde_json::from_str(
            r#"{"alerts": [{"alert_type": "transaction"}, {"id": 2, "alert_type": "balance_above"}], "count": 2}"#,
        )
        .unwrap();
        assert_eq!(list.alerts[0].id, None);
        assert_eq!(list.alerts[1].id, Some(2));
    }

    #[test]
    fn test_missing_counts_are_zero() {
        let list: AlertList = serde_json::from_str(r#"{"alerts": []}"#).unwrap();
        assert_eq!(list.count(), 0);

        let list: TransactionList = serde_json::from_str("{}").unwrap();
        assert!(list.transactions.is_empty());
        assert_eq!(list.count(), 0);
    }

    #[test]
    fn test_new_alert_uses_email() {
        let body = serde_json::to_value(NewAlert::new("balance_above", "10")).unwrap();
        assert_eq!(body["notification_method"], "email");
        assert_eq!(body["threshold"], "10");
    }
}
