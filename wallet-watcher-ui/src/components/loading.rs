//! Loading Component
//!
//! Page-wide overlay shown while a request is in flight.

use leptos::*;

use crate::state::global::GlobalState;

/// Loading overlay driven by the global loading flag
#[component]
pub fn LoadingOverlay() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div
            id="loadingOverlay"
            class="fixed inset-0 bg-gray-900/50 items-center justify-center z-50"
            style:display=move || if state.loading.get() { "flex" } else { "none" }
        >
            <div class="loading-spinner w-8 h-8" />
        </div>
    }
}

/// Skeleton loader for wallet cards
#[component]
pub fn CardSkeleton() -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-lg p-4 animate-pulse">
            <div class="h-4 bg-gray-700 rounded w-1/3 mb-4" />
            <div class="h-8 bg-gray-700 rounded w-1/2 mb-2" />
            <div class="h-4 bg-gray-700 rounded w-2/3" />
        </div>
    }
}
