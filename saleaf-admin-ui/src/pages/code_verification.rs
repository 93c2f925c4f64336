//! Code Verification Page
//!
//! Landing page after a reset code was requested.

use leptos::*;
use leptos_router::*;

#[component]
pub fn CodeVerification() -> impl IntoView {
    let query = use_query_map();
    let email = move || query.with(|q| q.get("email").cloned().unwrap_or_default());

    view! {
        <div class="max-w-md mx-auto bg-gray-800 rounded-xl p-8 space-y-4 text-center">
            <div class="text-5xl">"📧"</div>
            <h1 class="text-2xl font-bold">"Check your inbox"</h1>
            <p class="text-gray-400">
                "We sent a reset code to "
                <span class="text-white font-medium">{email}</span>
            </p>
            <A href="/forgot-password" class="block text-sm text-primary-400 hover:underline">
                "Didn't get it? Send again"
            </A>
        </div>
    }
}
