//! Bursary Applications Page
//!
//! Expandable application cards. Accepting an application assigns the
//! student role to the applicant's account.

use leptos::*;

use saleaf_admin::bursary::{detail_sections, ApplicationCard, Detail, DetailGroup, DetailSection, DetailValue};
use saleaf_admin::models::BursaryApplication;

use crate::api;
use crate::components::{InlineLoading, Loading};
use crate::state::global::GlobalState;

#[component]
pub fn BursaryApplications() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let applications = create_rw_signal(None::<Result<Vec<BursaryApplication>, String>>);

    // Fetch on mount
    create_effect(move |_| {
        let session = state.session();
        spawn_local(async move {
            let result = api::fetch_bursary_applications(&session).await.map_err(|e| {
                web_sys::console::error_1(&format!("Failed to fetch bursary applications: {}", e).into());
                e.user_message()
            });
            applications.set(Some(result));
        });
    });

    view! {
        <div class="space-y-6">
            <h1 class="text-3xl font-bold">"Bursary Applications"</h1>

            {move || match applications.get() {
                None => view! { <Loading /> }.into_view(),
                Some(Err(message)) => view! {
                    <div class="bg-red-900/40 border border-red-700 text-red-300 rounded-lg px-4 py-3">
                        {message}
                    </div>
                }.into_view(),
                Some(Ok(list)) if list.is_empty() => view! {
                    <div class="text-center text-gray-400 py-12">"No records found"</div>
                }.into_view(),
                Some(Ok(list)) => list
                    .into_iter()
                    .map(|application| view! { <ApplicationCardView application=application /> })
                    .collect_view(),
            }}
        </div>
    }
}

#[component]
fn ApplicationCardView(application: BursaryApplication) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let card = create_rw_signal(ApplicationCard::new(application));

    let on_accept = move |_| {
        let Some(request) = card.try_update(|c| c.begin_accept()).flatten() else {
            return;
        };
        let session = state.session();
        spawn_local(async move {
            let result = api::assign_role(&session, &request).await;
            if let Err(e) = &result {
                web_sys::console::error_1(&format!("Failed to assign role: {}", e).into());
            }
            card.update(|c| c.finish_accept(result));
        });
    };

    view! {
        <div class="bg-gray-800 rounded-xl p-6 border border-gray-700">
            <div class="flex items-center justify-between">
                <h2 class="text-xl font-semibold">{move || card.with(|c| c.title())}</h2>
                <div class="flex items-center space-x-2">
                    {move || card.with(|c| c.show_accept()).then(|| view! {
                        <button
                            on:click=on_accept
                            disabled=move || card.with(|c| c.accept_disabled())
                            class="px-4 py-2 bg-green-600 hover:bg-green-700 disabled:bg-gray-700 rounded-lg font-medium transition-colors"
                        >
                            {move || if card.with(|c| c.accept_disabled()) {
                                view! { <InlineLoading /> }.into_view()
                            } else {
                                "Accept".into_view()
                            }}
                        </button>
                    })}
                    <button
                        on:click=move |_| card.update(|c| c.toggle())
                        class="px-4 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg font-medium transition-colors"
                    >
                        {move || card.with(|c| c.toggle_label())}
                    </button>
                </div>
            </div>

            {move || card.with(|c| c.message().map(str::to_string)).map(|message| {
                let class = if card.with(|c| c.is_accepted()) { "text-green-400" } else { "text-red-400" };
                view! { <p class=format!("mt-3 text-sm {}", class)>{message}</p> }
            })}

            {move || card.with(|c| c.is_expanded().then(|| detail_sections(&c.application))).map(|sections| view! {
                <div class="mt-6 space-y-6">
                    {sections.into_iter().map(section_view).collect_view()}
                </div>
            })}
        </div>
    }
}

fn section_view(section: DetailSection) -> impl IntoView {
    view! {
        <section>
            <h3 class="text-lg font-semibold mb-2 text-primary-400">{section.title}</h3>
            {section.groups.into_iter().map(group_view).collect_view()}
        </section>
    }
}

fn group_view(group: DetailGroup) -> impl IntoView {
    view! {
        <div class="mb-3">
            {group.heading.map(|heading| view! { <h4 class="font-medium text-gray-300 mb-1">{heading}</h4> })}
            <dl class="grid md:grid-cols-2 gap-x-6 gap-y-1 text-sm">
                {group.rows.into_iter().map(detail_view).collect_view()}
            </dl>
        </div>
    }
}

fn detail_view(detail: Detail) -> impl IntoView {
    let value = match detail.value {
        DetailValue::Text(text) => text.into_view(),
        DetailValue::Link(Some(href)) => view! {
            <a href=href target="_blank" rel="noopener" class="text-primary-400 hover:underline">"View Document"</a>
        }
        .into_view(),
        DetailValue::Link(None) => "-".into_view(),
    };

    view! {
        <div class="flex justify-between border-b border-gray-700 py-1">
            <dt class="text-gray-400">{detail.label}</dt>
            <dd>{value}</dd>
        </div>
    }
}
