//! Dashboard Orchestration
//!
//! Page load flow: auth check, wallet fetch, then per-wallet transaction
//! and alert counts fetched one wallet at a time to build the totals.
//!
//! ```text
//! Unauthenticated <- (no key)  load_dashboard  -> Loading -> Loaded
//!                                                        \-> Error
//! ```

use crate::client::{ApiClient, HttpTransport};
use crate::credentials::CredentialStore;
use crate::error::{ClientResult, CredentialError};
use crate::models::Wallet;
use crate::ui::{LoadingGuard, NotificationLevel, UserInterface};
use crate::view::{render_wallets, DashboardStats, WalletListView};

/// Where unauthenticated users are sent
pub const LANDING_PATH: &str = "/";

/// The protected dashboard page
pub const DASHBOARD_PATH: &str = "/dashboard";

pub const WALLET_ADDED: &str = "Wallet added successfully!";

/// State of the dashboard page
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DashboardState {
    /// No API key; the host should redirect to [`LANDING_PATH`]
    Unauthenticated,
    #[default]
    Loading,
    Loaded(DashboardSnapshot),
    /// Wallet list could not be fetched; stats stay unset
    Error(String),
}

impl DashboardState {
    pub fn snapshot(&self) -> Option<&DashboardSnapshot> {
        match self {
            DashboardState::Loaded(snapshot) => Some(snapshot),
            _ => None,
        }
    }

    pub fn stats(&self) -> Option<DashboardStats> {
        self.snapshot().map(|s| s.stats)
    }
}

/// Everything rendered once the dashboard has loaded
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardSnapshot {
    pub wallets: Vec<Wallet>,
    pub stats: DashboardStats,
    pub list: WalletListView,
    /// Wallets whose counts could not be fetched (counted as zero)
    pub incomplete: Vec<String>,
}

/// Load the dashboard
///
/// A failing sub-fetch for one wallet is logged and that wallet counts as
/// zero; the rest of the batch continues. The loading indicator is cleared
/// on every path.
pub async fn load_dashboard<T, S, U>(client: &ApiClient<T, S, U>) -> DashboardState
where
    T: HttpTransport,
    S: CredentialStore,
    U: UserInterface,
{
    if !client.credentials().is_authenticated() {
        tracing::info!("No API key stored, redirecting to {}", LANDING_PATH);
        return DashboardState::Unauthenticated;
    }

    let _loading = LoadingGuard::new(client.ui());

    let wallets = match client.list_wallets().await {
        Ok(list) => list.wallets,
        Err(e) => {
            tracing::error!("Error loading dashboard: {}", e);
            return DashboardState::Error(e.to_string());
        }
    };

    let mut stats = DashboardStats {
        total_wallets: wallets.len(),
        ..Default::default()
    };
    let mut incomplete = Vec::new();

    // One wallet's requests finish before the next wallet's start
    for wallet in &wallets {
        match wallet_counts(client, &wallet.address).await {
            Ok((alerts, transactions)) => {
                stats.total_alerts += alerts;
                stats.total_transactions += transactions;
            }
            Err(e) => {
                tracing::warn!(address = %wallet.address, "Error loading wallet details: {}", e);
                incomplete.push(wallet.address.clone());
            }
        }
    }

    tracing::debug!(
        wallets = stats.total_wallets,
        transactions = stats.total_transactions,
        alerts = stats.total_alerts,
        "Dashboard loaded"
    );

    DashboardState::Loaded(DashboardSnapshot {
        list: render_wallets(&wallets),
        wallets,
        stats,
        incomplete,
    })
}

/// Alert and transaction counts for one wallet, committed only together
async fn wallet_counts<T, S, U>(
    client: &ApiClient<T, S, U>,
    address: &str,
) -> ClientResult<(u64, u64)>
where
    T: HttpTransport,
    S: CredentialStore,
    U: UserInterface,
{
    let alerts = client.wallet_alerts(address).await?.count();
    let transactions = client.wallet_transactions(address).await?.count();
    Ok((alerts, transactions))
}

/// Register a wallet with the raw form values
///
/// On success the caller closes the modal, resets the form and reloads the
/// dashboard. The wallet is returned when the server echoes it back.
/// Failures were already shown by the request helper.
pub async fn add_wallet<T, S, U>(
    client: &ApiClient<T, S, U>,
    address: &str,
    label: &str,
) -> ClientResult<Option<Wallet>>
where
    T: HttpTransport,
    S: CredentialStore,
    U: UserInterface,
{
    let _loading = LoadingGuard::new(client.ui());

    match client.add_wallet(address, label).await {
        Ok(wallet) => {
            client.ui().notify(NotificationLevel::Success, WALLET_ADDED);
            Ok(wallet)
        }
        Err(e) => {
            tracing::error!("Error adding wallet: {}", e);
            Err(e)
        }
    }
}

/// Forget the stored key; the caller then navigates to [`LANDING_PATH`]
pub fn logout<S: CredentialStore>(store: &S) -> Result<(), CredentialError> {
    store.clear()?;
    tracing::info!("Logged out");
    Ok(())
}
