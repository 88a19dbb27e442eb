//! Login Page
//!
//! Landing page. Stores the pasted API key and moves on to the dashboard;
//! the key is checked by the server on the first request.

use leptos::*;
use leptos_router::use_navigate;
use wallet_watcher::credentials::CredentialStore;
use wallet_watcher::dashboard::DASHBOARD_PATH;
use wallet_watcher::ui::{NotificationLevel, UserInterface};

use crate::state::browser_ui::BrowserUi;
use crate::state::global::GlobalState;
use crate::state::storage::LocalStorageCredentials;

#[component]
pub fn Login() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let navigate = use_navigate();

    let (api_key, set_api_key) = create_signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        match LocalStorageCredentials.store_api_key(&api_key.get()) {
            Ok(()) => navigate(DASHBOARD_PATH, Default::default()),
            Err(e) => {
                tracing::error!("Failed to store API key: {}", e);
                BrowserUi::new(state.loading)
                    .notify(NotificationLevel::Error, &format!("Could not save API key: {}", e));
            }
        }
    };

    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh]">
            <div class="bg-gray-800 rounded-xl p-8 w-full max-w-md">
                <h1 class="text-3xl font-bold mb-2">"Wallet Watcher"</h1>
                <p class="text-gray-400 mb-6">"Enter your API key to open the dashboard"</p>

                <form on:submit=on_submit class="space-y-4">
                    <input
                        id="apiKey"
                        type="password"
                        placeholder="API key"
                        class="w-full bg-gray-700 rounded-lg px-4 py-2 font-mono"
                        prop:value=move || api_key.get()
                        on:input=move |ev| set_api_key.set(event_target_value(&ev))
                    />
                    <button
                        type="submit"
                        class="w-full bg-primary-600 hover:bg-primary-700 rounded-lg py-3 font-semibold transition-colors"
                    >
                        "Continue"
                    </button>
                </form>
            </div>
        </div>
    }
}
