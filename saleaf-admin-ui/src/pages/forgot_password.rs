//! Forgot Password Page
//!
//! Requests a reset code by email, then moves on to code verification.

use leptos::*;
use leptos_router::*;

use saleaf_admin::account::{ForgotPasswordForm, RESET_MAIL_SENT};

use crate::api;
use crate::components::InlineLoading;
use crate::state::global::GlobalState;

#[component]
pub fn ForgotPassword() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let form = create_rw_signal(ForgotPasswordForm::new());
    let navigate = use_navigate();

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let request = match form.try_update(|f| f.begin_submit()) {
            Some(Ok(request)) => request,
            _ => return,
        };

        let session = state.session();
        let logged_in = session.is_logged_in();
        let navigate = navigate.clone();
        spawn_local(async move {
            let result = api::forgot_password(&session, &request).await;
            if let Err(e) = &result {
                web_sys::console::error_1(&format!("Forgot password failed: {}", e).into());
            }

            let Some(redirect) = form.try_update(|f| f.finish_submit(result, logged_in)).flatten() else {
                return;
            };
            state.show_success(RESET_MAIL_SENT);

            let delay = u32::try_from(redirect.delay_ms).unwrap_or(u32::MAX);
            gloo_timers::callback::Timeout::new(delay, move || {
                navigate(
                    &redirect.path,
                    NavigateOptions {
                        replace: redirect.replace,
                        ..Default::default()
                    },
                );
            })
            .forget();
        });
    };

    view! {
        <div class="max-w-md mx-auto bg-gray-800 rounded-xl p-8 space-y-6">
            <div>
                <h1 class="text-2xl font-bold">"Forgot Password"</h1>
                <p class="text-gray-400 mt-1">"Enter your email and we'll send you a reset code."</p>
            </div>

            <form class="space-y-4" on:submit=on_submit>
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Email Address"</label>
                    <input
                        type="email"
                        prop:value=move || form.with(|f| f.email().to_string())
                        on:input=move |ev| {
                            let email = event_target_value(&ev);
                            form.update(|f| f.set_email(&email));
                        }
                        on:blur=move |_| form.update(|f| f.blur())
                        class="w-full bg-gray-700 rounded-lg px-4 py-3 border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                    {move || form.with(|f| f.email_error().map(str::to_string)).map(|message| view! {
                        <p class="text-red-400 text-sm mt-1">{message}</p>
                    })}
                </div>

                {move || form.with(|f| f.submit_error().map(str::to_string)).map(|message| view! {
                    <p class="text-red-400 text-sm">{message}</p>
                })}

                {move || form.with(|f| f.succeeded()).then(|| view! {
                    <p class="text-green-400 text-sm">{RESET_MAIL_SENT}</p>
                })}

                <button
                    type="submit"
                    disabled=move || form.with(|f| f.is_submitting())
                    class="w-full py-3 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-700 rounded-lg font-medium transition-colors"
                >
                    {move || if form.with(|f| f.is_submitting()) {
                        view! { <InlineLoading /> }.into_view()
                    } else {
                        "Send Reset Code".into_view()
                    }}
                </button>
            </form>

            <A href="/login" class="block text-center text-sm text-primary-400 hover:underline">
                "Back to Login"
            </A>
        </div>
    }
}
