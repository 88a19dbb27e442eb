//! Global Application State
//!
//! Reactive state management using Leptos signals. The open wallet lives in
//! the `detail` signal and is handed to every tab and alert handler; panel
//! and dashboard loads carry a fence ticket so a late response never
//! overwrites a newer render.

use std::rc::Rc;

use leptos::*;
use wallet_watcher::client::ApiClient;
use wallet_watcher::dashboard::{self, DashboardState, LANDING_PATH};
use wallet_watcher::detail::{self, DeleteOutcome, DetailView, RequestFence, Tab, TabContent};
use wallet_watcher::view::{AlertRow, PanelKind, PanelView, TransactionRow, WalletCard};

use crate::api::{self, GlooTransport, WebClient};
use crate::state::browser_ui::BrowserUi;
use crate::state::storage::LocalStorageCredentials;

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Dashboard page state
    pub dashboard: RwSignal<DashboardState>,
    /// Global loading overlay
    pub loading: RwSignal<bool>,
    /// Add-wallet modal visibility
    pub add_wallet_open: RwSignal<bool>,
    /// Wallet detail modal; `None` when closed
    pub detail: RwSignal<Option<DetailView>>,
    pub transactions: RwSignal<PanelView<TransactionRow>>,
    pub alerts: RwSignal<PanelView<AlertRow>>,
    /// Add-alert form visibility inside the alerts tab
    pub alert_form_open: RwSignal<bool>,
    dashboard_fence: Rc<RequestFence>,
    panel_fence: Rc<RequestFence>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        dashboard: create_rw_signal(DashboardState::Loading),
        loading: create_rw_signal(false),
        add_wallet_open: create_rw_signal(false),
        detail: create_rw_signal(None),
        transactions: create_rw_signal(PanelView::loading(PanelKind::Transactions)),
        alerts: create_rw_signal(PanelView::loading(PanelKind::Alerts)),
        alert_form_open: create_rw_signal(false),
        dashboard_fence: Rc::new(RequestFence::new()),
        panel_fence: Rc::new(RequestFence::new()),
    };

    provide_context(state);
}

/// Full page navigation, like following a link
pub fn redirect(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().set_href(path) {
            tracing::error!("Redirect to {} failed: {:?}", path, e);
        }
    }
}

impl GlobalState {
    pub fn client(&self) -> WebClient {
        ApiClient::new(
            api::origin(),
            GlooTransport,
            LocalStorageCredentials,
            BrowserUi::new(self.loading),
        )
    }

    /// Load (or reload) the whole dashboard
    pub fn reload_dashboard(&self) {
        let state = self.clone();
        let ticket = self.dashboard_fence.issue();

        spawn_local(async move {
            let client = state.client();
            let loaded = dashboard::load_dashboard(&client).await;

            if loaded == DashboardState::Unauthenticated {
                redirect(LANDING_PATH);
                return;
            }
            if state.dashboard_fence.is_current(ticket) {
                state.dashboard.set(loaded);
            }
        });
    }

    /// Card of a wallet already shown on the dashboard
    pub fn wallet_card(&self, address: &str) -> Option<WalletCard> {
        self.dashboard.with(|state| {
            state
                .snapshot()
                .and_then(|s| s.list.cards.iter().find(|c| c.address == address).cloned())
        })
    }

    pub fn add_wallet(&self, address: String, label: String, on_success: impl FnOnce() + 'static) {
        let state = self.clone();
        spawn_local(async move {
            let client = state.client();
            if dashboard::add_wallet(&client, &address, &label).await.is_ok() {
                state.add_wallet_open.set(false);
                on_success();
                state.reload_dashboard();
            }
        });
    }

    pub fn logout(&self) {
        if let Err(e) = dashboard::logout(&LocalStorageCredentials) {
            tracing::error!("Logout failed: {}", e);
        }
        redirect(LANDING_PATH);
    }

    /// Open the detail modal on the transactions tab
    pub fn open_detail(&self, address: &str) {
        self.alert_form_open.set(false);
        self.detail.set(Some(DetailView::open(address)));
        self.load_active_tab();
    }

    pub fn close_detail(&self) {
        self.panel_fence.issue();
        self.detail.set(None);
    }

    pub fn switch_tab(&self, tab: Tab) {
        self.detail.update(|view| {
            if let Some(view) = view {
                view.switch_tab(tab);
            }
        });
        self.load_active_tab();
    }

    fn load_active_tab(&self) {
        let Some(view) = self.detail.get_untracked() else {
            return;
        };

        match view.active_tab() {
            Tab::Transactions => self
                .transactions
                .set(PanelView::loading(PanelKind::Transactions)),
            Tab::Alerts => self.alerts.set(PanelView::loading(PanelKind::Alerts)),
        }

        let ticket = self.panel_fence.issue();
        let state = self.clone();
        spawn_local(async move {
            let client = state.client();
            let content = detail::load_tab(&client, &view).await;

            if !state.panel_fence.is_current(ticket) {
                tracing::debug!("Discarding stale {} panel", view.active_tab());
                return;
            }
            match content {
                TabContent::Transactions(panel) => state.transactions.set(panel),
                TabContent::Alerts(panel) => state.alerts.set(panel),
            }
        });
    }

    fn show_alerts(&self, ticket: u64, panel: PanelView<AlertRow>) {
        if self.panel_fence.is_current(ticket) {
            self.alerts.set(panel);
        }
    }

    pub fn create_alert(
        &self,
        alert_type: String,
        threshold: String,
        on_success: impl FnOnce() + 'static,
    ) {
        let Some(view) = self.detail.get_untracked() else {
            return;
        };

        let state = self.clone();
        spawn_local(async move {
            let client = state.client();
            let ticket = state.panel_fence.current();
            if let Ok(panel) = detail::create_alert(&client, &view, &alert_type, &threshold).await {
                state.show_alerts(ticket, panel);
                state.alert_form_open.set(false);
                on_success();
            }
        });
    }

    pub fn delete_alert(&self, alert_id: i64) {
        let Some(view) = self.detail.get_untracked() else {
            return;
        };

        let state = self.clone();
        spawn_local(async move {
            let client = state.client();
            let ticket = state.panel_fence.current();
            if let Ok(DeleteOutcome::Deleted(panel)) =
                detail::delete_alert(&client, &view, alert_id).await
            {
                state.show_alerts(ticket, panel);
            }
        });
    }
}
