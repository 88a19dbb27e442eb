//! Wallet Detail Component
//!
//! Modal with a transactions tab and an alerts tab. Every tab switch
//! re-fetches its panel.

use leptos::*;
use wallet_watcher::detail::Tab;
use wallet_watcher::models::ALERT_TYPES;
use wallet_watcher::view::{format_address, AlertRow, PanelView, TransactionRow};

use crate::state::global::GlobalState;

/// Detail modal for the wallet held in `GlobalState::detail`
#[component]
pub fn WalletDetailModal() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let is_open = {
        let detail = state.detail;
        move || detail.with(Option::is_some)
    };

    let header = {
        let state = state.clone();
        move || {
            state.detail.with(|view| {
                view.as_ref().map(|view| {
                    let short = format_address(Some(view.address()));
                    match state.wallet_card(view.address()) {
                        Some(card) => format!("{} ({})", card.label, short),
                        None => short,
                    }
                })
            })
        }
    };

    let state_for_close = state.clone();
    let close = move |_| state_for_close.close_detail();
    let state_for_backdrop = state.clone();
    let state_for_transactions = state.clone();

    view! {
        <div
            id="walletDetailModal"
            class="modal fixed inset-0 bg-black/60 items-center justify-center z-40"
            class:show=is_open
            style:display=move || if is_open() { "flex" } else { "none" }
            on:click=move |_| state_for_backdrop.close_detail()
        >
            <div
                class="modal-content bg-gray-800 rounded-xl p-6 w-full max-w-2xl"
                on:click=|ev| ev.stop_propagation()
            >
                <div class="flex items-center justify-between mb-4">
                    <h2 id="detailWalletAddress" class="text-xl font-semibold font-mono">
                        {header}
                    </h2>
                    <button type="button" class="text-gray-400 hover:text-white" on:click=close>
                        "✕"
                    </button>
                </div>

                <TabBar />

                <div id=Tab::Transactions.panel_id() class=move || panel_class(&state_for_transactions, Tab::Transactions)>
                    <TransactionPanel />
                </div>
                <div id=Tab::Alerts.panel_id() class=move || panel_class(&state, Tab::Alerts)>
                    <AlertPanel />
                </div>
            </div>
        </div>
    }
}

fn panel_class(state: &GlobalState, tab: Tab) -> &'static str {
    let active = state
        .detail
        .with(|view| view.as_ref().is_some_and(|v| v.is_active(tab)));
    tab_content_class(active)
}

fn tab_content_class(active: bool) -> &'static str {
    if active {
        "tab-content active"
    } else {
        "tab-content hidden"
    }
}

fn tab_button_class(active: bool) -> &'static str {
    if active {
        "tab-btn active px-4 py-2 border-b-2 border-primary-500 text-white"
    } else {
        "tab-btn px-4 py-2 text-gray-400 hover:text-white"
    }
}

#[component]
fn TabBar() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="flex space-x-2 border-b border-gray-700 mb-4">
            {Tab::ALL.into_iter().map(|tab| {
                let state_for_class = state.clone();
                let state_for_click = state.clone();
                view! {
                    <button
                        type="button"
                        class=move || {
                            let active = state_for_class
                                .detail
                                .with(|view| view.as_ref().is_some_and(|v| v.is_active(tab)));
                            tab_button_class(active)
                        }
                        on:click=move |_| state_for_click.switch_tab(tab)
                    >
                        {tab.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}

/// Placeholder, empty or error message for a panel
#[component]
fn PanelMessage(message: &'static str) -> impl IntoView {
    view! { <p class="text-gray-400">{message}</p> }
}

#[component]
fn TransactionPanel() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div id="transactionsList" class="space-y-2">
            {move || render_panel(&state.transactions.get(), |row: TransactionRow| view! {
                <div class="transaction-item bg-gray-700 rounded-lg p-3">
                    <div class="transaction-hash font-mono">"Hash: " {row.short_hash}</div>
                    <div>"Amount: " {row.amount}</div>
                    <div class="text-sm text-gray-400">{row.date}</div>
                </div>
            })}
        </div>
    }
}

#[component]
fn AlertPanel() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let form_open = state.alert_form_open;

    view! {
        <div class="space-y-4">
            <button
                type="button"
                class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg text-sm font-medium"
                on:click=move |_| form_open.update(|open| *open = !*open)
            >
                "Add Alert"
            </button>

            <div id="addAlertForm" style:display=move || if form_open.get() { "block" } else { "none" }>
                <AlertForm />
            </div>

            <div id="alertsList" class="space-y-2">
                {move || {
                    let state_for_row = state.clone();
                    render_panel(&state.alerts.get(), move |row: AlertRow| {
                        let state = state_for_row.clone();
                        let id = row.id;
                        view! {
                            <div class="alert-item flex items-center justify-between bg-gray-700 rounded-lg p-3">
                                <div class="alert-info">
                                    <div class="alert-type font-semibold">{row.alert_type}</div>
                                    <div class="alert-threshold text-sm text-gray-400">"Threshold: " {row.threshold}</div>
                                </div>
                                <div class="alert-actions">
                                    <button
                                        type="button"
                                        class="px-3 py-1 bg-red-600 hover:bg-red-700 rounded text-sm"
                                        on:click=move |_| state.delete_alert(id)
                                    >
                                        "Delete"
                                    </button>
                                </div>
                            </div>
                        }
                    })
                }}
            </div>
        </div>
    }
}

fn render_panel<T, V>(panel: &PanelView<T>, row: impl Fn(T) -> V) -> View
where
    T: Clone,
    V: IntoView,
{
    match panel.message() {
        Some(message) => view! { <PanelMessage message=message /> }.into_view(),
        None => panel
            .items()
            .iter()
            .cloned()
            .map(row)
            .collect_view(),
    }
}

/// Create-alert form; the notification method is always email
#[component]
fn AlertForm() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (alert_type, set_alert_type) = create_signal(ALERT_TYPES[0].to_string());
    let (threshold, set_threshold) = create_signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let reset = move || {
            set_alert_type.set(ALERT_TYPES[0].to_string());
            set_threshold.set(String::new());
        };
        state.create_alert(alert_type.get(), threshold.get(), reset);
    };

    view! {
        <form id="createAlertForm" on:submit=on_submit class="space-y-3 bg-gray-700 rounded-lg p-4">
            <div>
                <label class="block text-sm text-gray-400 mb-1" for="alertType">"Alert Type"</label>
                <select
                    id="alertType"
                    class="w-full bg-gray-600 rounded-lg px-3 py-2"
                    prop:value=move || alert_type.get()
                    on:change=move |ev| set_alert_type.set(event_target_value(&ev))
                >
                    {ALERT_TYPES.into_iter().map(|kind| view! {
                        <option value=kind>{alert_type_label(kind)}</option>
                    }).collect_view()}
                </select>
            </div>
            <div>
                <label class="block text-sm text-gray-400 mb-1" for="alertThreshold">"Threshold"</label>
                <input
                    id="alertThreshold"
                    type="text"
                    class="w-full bg-gray-600 rounded-lg px-3 py-2"
                    prop:value=move || threshold.get()
                    on:input=move |ev| set_threshold.set(event_target_value(&ev))
                />
            </div>
            <button type="submit" class="w-full bg-primary-600 hover:bg-primary-700 rounded-lg py-2 font-semibold">
                "Create Alert"
            </button>
        </form>
    }
}

fn alert_type_label(alert_type: &str) -> &str {
    match alert_type {
        "balance_above" => "Balance above",
        "balance_below" => "Balance below",
        "transaction" => "Any transaction",
        other => other,
    }
}
