//! Detail view tab panels
//!
//! Each tab shows a loading message, an empty message, its rows, or an
//! error message. The wording matches what the dashboard has always shown.

use super::format::{format_address, format_date, format_eth, NOT_AVAILABLE};
use crate::models::{AlertList, TransactionList};

/// Which panel a message belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelKind {
    Transactions,
    Alerts,
}

impl PanelKind {
    pub fn loading_message(&self) -> &'static str {
        match self {
            PanelKind::Transactions => "Loading transactions...",
            PanelKind::Alerts => "Loading alerts...",
        }
    }

    pub fn empty_message(&self) -> &'static str {
        match self {
            PanelKind::Transactions => "No transactions found.",
            PanelKind::Alerts => "No alerts configured.",
        }
    }

    pub fn error_message(&self) -> &'static str {
        match self {
            PanelKind::Transactions => "Error loading transactions.",
            PanelKind::Alerts => "Error loading alerts.",
        }
    }
}

/// Contents of one tab panel
#[derive(Debug, Clone, PartialEq)]
pub enum PanelView<T> {
    Loading(&'static str),
    Empty(&'static str),
    Items(Vec<T>),
    Error(&'static str),
}

impl<T> PanelView<T> {
    pub fn loading(kind: PanelKind) -> Self {
        PanelView::Loading(kind.loading_message())
    }

    pub fn error(kind: PanelKind) -> Self {
        PanelView::Error(kind.error_message())
    }

    /// Rows for `Items`, nothing otherwise
    pub fn items(&self) -> &[T] {
        match self {
            PanelView::Items(items) => items,
            _ => &[],
        }
    }

    /// The status line shown instead of rows
    pub fn message(&self) -> Option<&'static str> {
        match self {
            PanelView::Loading(m) | PanelView::Empty(m) | PanelView::Error(m) => Some(*m),
            PanelView::Items(_) => None,
        }
    }

    fn from_rows(kind: PanelKind, rows: Vec<T>) -> Self {
        if rows.is_empty() {
            PanelView::Empty(kind.empty_message())
        } else {
            PanelView::Items(rows)
        }
    }
}

/// One row in the transactions tab
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRow {
    pub tx_hash: String,
    pub short_hash: String,
    pub amount: String,
    pub date: String,
    pub status: Option<String>,
    pub block_number: Option<u64>,
    pub from: String,
    pub to: String,
}

/// One row in the alerts tab
#[derive(Debug, Clone, PartialEq)]
pub struct AlertRow {
    /// Needed by the delete action
    pub id: i64,
    pub alert_type: String,
    pub threshold: String,
}

pub fn transactions_panel(list: &TransactionList) -> PanelView<TransactionRow> {
    let rows = list
        .transactions
        .iter()
        .map(|tx| TransactionRow {
            tx_hash: tx.tx_hash.clone(),
            short_hash: format_address(Some(&tx.tx_hash)),
            amount: format_eth(tx.value.as_deref()),
            date: format_date(tx.timestamp.as_deref()),
            status: tx.status.clone(),
            block_number: tx.block_number,
            from: format_address(tx.from_address.as_deref()),
            to: format_address(tx.to_address.as_deref()),
        })
        .collect();

    PanelView::from_rows(PanelKind::Transactions, rows)
}

pub fn alerts_panel(list: &AlertList) -> PanelView<AlertRow> {
    let rows = list
        .alerts
        .iter()
        .filter_map(|alert| {
            let Some(id) = alert.id else {
                tracing::warn!(alert_type = %alert.alert_type, "Skipping alert without id");
                return None;
            };
            Some(AlertRow {
                id,
                alert_type: alert.alert_type.clone(),
                threshold: alert
                    .threshold
                    .clone()
                    .filter(|t| !t.is_empty())
                    .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            })
        })
        .collect();

    PanelView::from_rows(PanelKind::Alerts, rows)
}
