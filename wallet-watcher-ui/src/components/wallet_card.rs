//! Wallet Card Component

use leptos::*;
use wallet_watcher::view::WalletCard;

use crate::state::global::GlobalState;

/// One wallet on the dashboard; clicking opens the detail modal
#[component]
pub fn WalletCardView(card: WalletCard) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let address = card.address.clone();

    view! {
        <div
            class="wallet-card bg-gray-800 rounded-xl p-6 cursor-pointer hover:bg-gray-700 transition-colors"
            on:click=move |_| state.open_detail(&address)
        >
            <div class="wallet-header flex items-start justify-between mb-4">
                <div>
                    <div class="wallet-label font-semibold">{card.label}</div>
                    <div class="wallet-address text-gray-400 text-sm font-mono">{card.short_address}</div>
                </div>
                <span class="badge px-2 py-1 rounded bg-green-600 text-xs">"Active"</span>
            </div>
            <div class="wallet-balance text-2xl font-bold mb-4">{card.balance}</div>
            <div class="wallet-footer flex justify-between text-sm text-gray-400">
                <span>"Added: " {card.added}</span>
                <span>"Last checked: " {card.last_checked}</span>
            </div>
        </div>
    }
}
