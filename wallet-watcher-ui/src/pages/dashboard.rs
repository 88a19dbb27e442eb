//! Dashboard Page
//!
//! Totals, wallet cards and the add-wallet and detail modals. Loads on
//! mount; without a stored key the load redirects to the landing page.

use leptos::*;
use wallet_watcher::dashboard::DashboardState;

use crate::components::loading::CardSkeleton;
use crate::components::{AddWalletModal, WalletCardView, WalletDetailModal};
use crate::state::global::GlobalState;

/// Shown in place of a total that was never computed
const UNSET_STAT: &str = "-";

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // Fetch data on mount
    state.reload_dashboard();

    let add_wallet_open = state.add_wallet_open;
    let state_for_logout = state.clone();
    let dashboard = state.dashboard;

    view! {
        <div class="space-y-8">
            // Page header
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Dashboard"</h1>
                    <p class="text-gray-400 mt-1">"Your monitored wallets at a glance"</p>
                </div>

                <div class="flex space-x-2">
                    <button
                        id="addWalletBtn"
                        type="button"
                        class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                        on:click=move |_| add_wallet_open.set(true)
                    >
                        "Add Wallet"
                    </button>
                    <button
                        id="logoutBtn"
                        type="button"
                        class="px-4 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg font-medium transition-colors"
                        on:click=move |_| state_for_logout.logout()
                    >
                        "Logout"
                    </button>
                </div>
            </div>

            // Totals
            <section class="grid grid-cols-1 md:grid-cols-3 gap-4">
                <StatCard id="totalWallets" title="Wallets" value=Signal::derive(move || dashboard.with(|s| stat_values(s)[0].clone())) />
                <StatCard id="totalTransactions" title="Transactions" value=Signal::derive(move || dashboard.with(|s| stat_values(s)[1].clone())) />
                <StatCard id="totalAlerts" title="Alerts" value=Signal::derive(move || dashboard.with(|s| stat_values(s)[2].clone())) />
            </section>

            // Wallet list
            <section>
                <h2 class="text-xl font-semibold mb-4">"Wallets"</h2>
                {move || dashboard.with(|s| match s {
                    DashboardState::Loading => view! {
                        <div class="grid md:grid-cols-2 gap-4">
                            <CardSkeleton />
                            <CardSkeleton />
                        </div>
                    }.into_view(),
                    DashboardState::Loaded(snapshot) if snapshot.list.empty_state_visible => view! {
                        <div id="noWallets" class="text-center text-gray-400 py-12">
                            <p>"No wallets added yet."</p>
                            <p class="text-sm mt-2">"Add your first wallet to start monitoring."</p>
                        </div>
                    }.into_view(),
                    DashboardState::Loaded(snapshot) => {
                        let cards = snapshot.list.cards.clone();
                        view! {
                            <div id="walletsContainer" class="grid md:grid-cols-2 gap-4">
                                {cards.into_iter().map(|card| view! { <WalletCardView card=card /> }).collect_view()}
                            </div>
                        }.into_view()
                    }
                    DashboardState::Error(_) | DashboardState::Unauthenticated => view! {
                        <div id="walletsContainer" />
                    }.into_view(),
                })}
            </section>

            <AddWalletModal />
            <WalletDetailModal />
        </div>
    }
}

#[component]
fn StatCard(id: &'static str, title: &'static str, #[prop(into)] value: Signal<String>) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-xl p-6">
            <div class="text-gray-400 text-sm">{title}</div>
            <div id=id class="text-3xl font-bold mt-2">{move || value.get()}</div>
        </div>
    }
}

/// Wallet, transaction and alert totals as displayed
fn stat_values(state: &DashboardState) -> [String; 3] {
    match state.stats() {
        Some(stats) => [
            stats.total_wallets.to_string(),
            stats.total_transactions.to_string(),
            stats.total_alerts.to_string(),
        ],
        None => [UNSET_STAT.to_string(), UNSET_STAT.to_string(), UNSET_STAT.to_string()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wallet_watcher::dashboard::DashboardSnapshot;
    use wallet_watcher::view::DashboardStats;

    #[test]
    fn test_stats_unset_until_loaded() {
        assert_eq!(stat_values(&DashboardState::Loading), ["-", "-", "-"]);
        assert_eq!(
            stat_values(&DashboardState::Error("Request failed".to_string())),
            ["-", "-", "-"]
        );
    }

    #[test]
    fn test_stats_from_snapshot() {
        let state = DashboardState::Loaded(DashboardSnapshot {
            stats: DashboardStats {
                total_wallets: 2,
                total_transactions: 15,
                total_alerts: 3,
            },
            ..Default::default()
        });
        assert_eq!(stat_values(&state), ["2", "15", "3"]);
    }
}
