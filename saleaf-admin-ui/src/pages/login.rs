//! Login Page
//!
//! Starts a session from an issued bearer token. The API base URL can be
//! changed here too; both are kept in browser storage.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::state::global::GlobalState;

#[component]
pub fn Login() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let navigate = use_navigate();

    let (token, set_token) = create_signal(String::new());
    let (user, set_user) = create_signal(String::new());
    let (api_url, set_api_url) = create_signal(api::get_api_base());
    let (error, set_error) = create_signal(None::<String>);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        api::set_api_base(&api_url.get_untracked());

        let user = user.get_untracked();
        let user = Some(user.trim()).filter(|u| !u.is_empty());
        match state.login(&token.get_untracked(), user) {
            Ok(()) => {
                set_error.set(None);
                state.show_success("Signed in");
                navigate("/", Default::default());
            }
            Err(message) => set_error.set(Some(message)),
        }
    };

    view! {
        <div class="max-w-md mx-auto bg-gray-800 rounded-xl p-8 space-y-6">
            <h1 class="text-2xl font-bold">"Login"</h1>

            <form class="space-y-4" on:submit=on_submit>
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Access Token"</label>
                    <input
                        type="password"
                        prop:value=move || token.get()
                        on:input=move |ev| set_token.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3 border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Name (optional)"</label>
                    <input
                        type="text"
                        prop:value=move || user.get()
                        on:input=move |ev| set_user.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3 border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"API URL"</label>
                    <input
                        type="text"
                        prop:value=move || api_url.get()
                        on:input=move |ev| set_api_url.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3 border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>

                {move || error.get().map(|message| view! {
                    <p class="text-red-400 text-sm">{message}</p>
                })}

                <button
                    type="submit"
                    class="w-full py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                >
                    "Sign In"
                </button>
            </form>

            <A href="/forgot-password" class="block text-center text-sm text-primary-400 hover:underline">
                "Forgot password?"
            </A>
        </div>
    }
}
