//! Add Wallet Component
//!
//! Modal form for registering a wallet. Values are sent exactly as typed.

use leptos::*;

use crate::state::global::GlobalState;

#[component]
pub fn AddWalletModal() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (address, set_address) = create_signal(String::new());
    let (label, set_label) = create_signal(String::new());

    let state_for_submit = state.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let reset = move || {
            set_address.set(String::new());
            set_label.set(String::new());
        };
        state_for_submit.add_wallet(address.get(), label.get(), reset);
    };

    let open = state.add_wallet_open;

    view! {
        <div
            id="addWalletModal"
            class="modal fixed inset-0 bg-black/60 items-center justify-center z-40"
            class:show=move || open.get()
            style:display=move || if open.get() { "flex" } else { "none" }
            on:click=move |_| open.set(false)
        >
            <div
                class="modal-content bg-gray-800 rounded-xl p-6 w-full max-w-md"
                on:click=|ev| ev.stop_propagation()
            >
                <div class="flex items-center justify-between mb-4">
                    <h2 class="text-xl font-semibold">"Add Wallet"</h2>
                    <button type="button" class="text-gray-400 hover:text-white" on:click=move |_| open.set(false)>
                        "✕"
                    </button>
                </div>

                <form id="addWalletForm" on:submit=on_submit class="space-y-4">
                    <div>
                        <label class="block text-sm text-gray-400 mb-1" for="walletAddress">"Wallet Address"</label>
                        <input
                            id="walletAddress"
                            type="text"
                            placeholder="0x..."
                            class="w-full bg-gray-700 rounded-lg px-4 py-2"
                            prop:value=move || address.get()
                            on:input=move |ev| set_address.set(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label class="block text-sm text-gray-400 mb-1" for="walletLabel">"Label (optional)"</label>
                        <input
                            id="walletLabel"
                            type="text"
                            class="w-full bg-gray-700 rounded-lg px-4 py-2"
                            prop:value=move || label.get()
                            on:input=move |ev| set_label.set(event_target_value(&ev))
                        />
                    </div>
                    <button
                        type="submit"
                        class="w-full bg-primary-600 hover:bg-primary-700 rounded-lg py-3 font-semibold transition-colors"
                    >
                        "Add Wallet"
                    </button>
                </form>
            </div>
        </div>
    }
}
