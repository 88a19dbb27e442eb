//! Wallet Detail View
//!
//! Scoped view-state for the detail modal. The selected wallet lives in a
//! [`DetailView`] owned by whoever opened it and is passed explicitly to the
//! tab and alert handlers. Tabs are never cached: every switch re-fetches.

use std::cell::Cell;
use std::fmt;
use std::str::FromStr;

use crate::client::{ApiClient, HttpTransport};
use crate::credentials::CredentialStore;
use crate::error::ClientResult;
use crate::models::NewAlert;
use crate::ui::{LoadingGuard, NotificationLevel, UserInterface};
use crate::view::{
    alerts_panel, transactions_panel, AlertRow, PanelKind, PanelView, TransactionRow,
};

pub const ALERT_CREATED: &str = "Alert created successfully!";
pub const ALERT_DELETED: &str = "Alert deleted successfully!";
pub const CONFIRM_DELETE_ALERT: &str = "Are you sure you want to delete this alert?";

/// Tabs of the detail modal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Transactions,
    Alerts,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Transactions, Tab::Alerts];

    pub fn name(&self) -> &'static str {
        match self {
            Tab::Transactions => "transactions",
            Tab::Alerts => "alerts",
        }
    }

    /// Element id of the panel this tab activates
    pub fn panel_id(&self) -> &'static str {
        match self {
            Tab::Transactions => "transactionsTab",
            Tab::Alerts => "alertsTab",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Transactions => "Transactions",
            Tab::Alerts => "Alerts",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Tab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "transactions" => Ok(Tab::Transactions),
            "alerts" => Ok(Tab::Alerts),
            other => Err(format!("Unknown tab: {}", other)),
        }
    }
}

/// Loaded contents of the active tab
#[derive(Debug, Clone, PartialEq)]
pub enum TabContent {
    Transactions(PanelView<TransactionRow>),
    Alerts(PanelView<AlertRow>),
}

/// The detail modal for one wallet
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    address: String,
    active_tab: Tab,
}

impl DetailView {
    /// Open the detail view; the transactions tab is active by default
    pub fn open(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            active_tab: Tab::default(),
        }
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    /// Deactivate every tab, then activate `tab`
    pub fn switch_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    pub fn is_active(&self, tab: Tab) -> bool {
        self.active_tab == tab
    }
}

/// Fetch whatever the active tab shows
pub async fn load_tab<T, S, U>(client: &ApiClient<T, S, U>, view: &DetailView) -> TabContent
where
    T: HttpTransport,
    S: CredentialStore,
    U: UserInterface,
{
    match view.active_tab() {
        Tab::Transactions => TabContent::Transactions(load_transactions(client, view.address()).await),
        Tab::Alerts => TabContent::Alerts(load_alerts(client, view.address()).await),
    }
}

pub async fn load_transactions<T, S, U>(
    client: &ApiClient<T, S, U>,
    address: &str,
) -> PanelView<TransactionRow>
where
    T: HttpTransport,
    S: CredentialStore,
    U: UserInterface,
{
    match client.wallet_transactions(address).await {
        Ok(list) => transactions_panel(&list),
        Err(e) => {
            tracing::error!(address = %address, "Error loading transactions: {}", e);
            PanelView::error(PanelKind::Transactions)
        }
    }
}

pub async fn load_alerts<T, S, U>(client: &ApiClient<T, S, U>, address: &str) -> PanelView<AlertRow>
where
    T: HttpTransport,
    S: CredentialStore,
    U: UserInterface,
{
    match client.wallet_alerts(address).await {
        Ok(list) => alerts_panel(&list),
        Err(e) => {
            tracing::error!(address = %address, "Error loading alerts: {}", e);
            PanelView::error(PanelKind::Alerts)
        }
    }
}

/// Create an alert on the open wallet and return the refreshed alert list
///
/// Threshold and type go to the server as typed; the notification method is
/// always email.
pub async fn create_alert<T, S, U>(
    client: &ApiClient<T, S, U>,
    view: &DetailView,
    alert_type: &str,
    threshold: &str,
) -> ClientResult<PanelView<AlertRow>>
where
    T: HttpTransport,
    S: CredentialStore,
    U: UserInterface,
{
    {
        let _loading = LoadingGuard::new(client.ui());
        let body = NewAlert::new(alert_type, threshold);
        if let Err(e) = client.create_alert(view.address(), &body).await {
            tracing::error!("Error creating alert: {}", e);
            return Err(e);
        }
        client.ui().notify(NotificationLevel::Success, ALERT_CREATED);
    }

    Ok(load_alerts(client, view.address()).await)
}

/// Result of a delete request
#[derive(Debug, Clone, PartialEq)]
pub enum DeleteOutcome {
    /// The user declined the confirmation; nothing was sent
    Cancelled,
    /// Deleted; carries the refreshed alert list
    Deleted(PanelView<AlertRow>),
}

/// Delete an alert after interactive confirmation
pub async fn delete_alert<T, S, U>(
    client: &ApiClient<T, S, U>,
    view: &DetailView,
    alert_id: i64,
) -> ClientResult<DeleteOutcome>
where
    T: HttpTransport,
    S: CredentialStore,
    U: UserInterface,
{
    if !client.ui().confirm(CONFIRM_DELETE_ALERT) {
        return Ok(DeleteOutcome::Cancelled);
    }

    {
        let _loading = LoadingGuard::new(client.ui());
        if let Err(e) = client.delete_alert(alert_id).await {
            tracing::error!(alert_id, "Error deleting alert: {}", e);
            return Err(e);
        }
        client.ui().notify(NotificationLevel::Success, ALERT_DELETED);
    }

    Ok(DeleteOutcome::Deleted(load_alerts(client, view.address()).await))
}

/// Generation counter for discarding stale renders
///
/// Each load takes a ticket; only the most recent ticket may render, so an
/// earlier request that resolves late cannot overwrite newer content.
#[derive(Debug, Default)]
pub struct RequestFence {
    generation: Cell<u64>,
}

impl RequestFence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new load, invalidating all earlier tickets
    pub fn issue(&self) -> u64 {
        let next = self.generation.get().wrapping_add(1);
        self.generation.set(next);
        next
    }

    /// Latest ticket, without invalidating anything
    ///
    /// Mutations that refresh a panel take this so that a cancelled
    /// confirmation does not orphan a load already in flight.
    pub fn current(&self) -> u64 {
        self.generation.get()
    }

    /// Whether a load started with `ticket` is still the latest
    pub fn is_current(&self, ticket: u64) -> bool {
        self.generation.get() == ticket
    }
}
