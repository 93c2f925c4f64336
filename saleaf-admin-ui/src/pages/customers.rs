//! Customers Page
//!
//! The whole customer list is fetched once; search, sort and paging are
//! derived locally and never hit the API.

use leptos::*;

use saleaf_admin::listing::{ClientPaginatedList, CustomerSortKey, ListView, CUSTOMERS_PER_PAGE};
use saleaf_admin::models::Customer;

use crate::api;
use crate::components::{Loading, PageControls};
use crate::state::global::GlobalState;

#[component]
pub fn Customers() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let list = create_rw_signal(ClientPaginatedList::<Customer>::new(CUSTOMERS_PER_PAGE));
    let (loading, set_loading) = create_signal(true);
    let (error, set_error) = create_signal(None::<String>);

    // Fetch on mount
    create_effect(move |_| {
        let session = state.session();
        spawn_local(async move {
            match api::fetch_customers(&session).await {
                Ok(customers) => list.update(|l| l.set_source(customers)),
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch customers: {}", e).into());
                    set_error.set(Some(e.user_message()));
                }
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="space-y-6">
            <div class="flex flex-col md:flex-row md:items-center md:justify-between gap-4">
                <h1 class="text-3xl font-bold">"Customers"</h1>

                <div class="flex flex-col sm:flex-row gap-3">
                    <input
                        type="search"
                        placeholder="Search by name"
                        prop:value=move || list.with(|l| l.query().to_string())
                        on:input=move |ev| {
                            let query = event_target_value(&ev);
                            list.update(|l| l.set_query(&query));
                        }
                        class="bg-gray-700 rounded-lg px-4 py-2 border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                    <select
                        class="bg-gray-700 rounded-lg px-3 py-2 border border-gray-600"
                        on:change=move |ev| {
                            let key = CustomerSortKey::from_label(&event_target_value(&ev));
                            list.update(|l| l.set_sort_key(key));
                        }
                    >
                        {CustomerSortKey::ALL.iter().map(|key| {
                            let key = *key;
                            view! {
                                <option value=key.label() selected=move || list.with(|l| l.sort_key() == key)>
                                    {key.label()}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                </div>
            </div>

            {move || {
                if loading.get() {
                    return view! { <Loading /> }.into_view();
                }
                if let Some(message) = error.get() {
                    return view! {
                        <div class="bg-red-900/40 border border-red-700 text-red-300 rounded-lg px-4 py-3">
                            {message}
                        </div>
                    }.into_view();
                }

                list.with(|l| match l.view() {
                    ListView::Rows(rows) => view! {
                        <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-4">
                            {rows.iter().cloned().map(|customer| view! { <CustomerCard customer=customer /> }).collect_view()}
                        </div>
                    }.into_view(),
                    ListView::Empty => view! {
                        <div class="text-center text-gray-400 py-12">"No records found"</div>
                    }.into_view(),
                    ListView::Error(message) => view! {
                        <div class="text-red-400">{message.to_string()}</div>
                    }.into_view(),
                })
            }}

            <PageControls
                page=Signal::derive(move || list.with(|l| l.page()))
                total_pages=Signal::derive(move || list.with(|l| l.page_count()))
                disabled=Signal::derive(move || list.with(|l| l.page_count() <= 1))
                on_page=move |page| list.update(|l| l.set_page(page))
            />
        </div>
    }
}

#[component]
fn CustomerCard(customer: Customer) -> impl IntoView {
    let initial = customer.name.chars().next().map(|c| c.to_uppercase().to_string()).unwrap_or_default();

    view! {
        <div class="bg-gray-800 rounded-lg p-4 border border-gray-700 space-y-3">
            <div class="flex items-center space-x-3">
                <div class="w-10 h-10 rounded-full bg-primary-600 flex items-center justify-center font-bold">
                    {initial}
                </div>
                <div>
                    <div class="font-semibold">{customer.name}</div>
                    <div class="text-sm text-gray-400">{customer.role.unwrap_or_default()}</div>
                </div>
            </div>
            {customer.about.map(|about| view! { <p class="text-sm text-gray-300">{about}</p> })}
            <dl class="grid grid-cols-2 gap-x-4 gap-y-1 text-sm">
                <dt class="text-gray-400">"Email"</dt><dd class="truncate">{customer.email}</dd>
                <dt class="text-gray-400">"Contact"</dt><dd>{customer.contact}</dd>
                <dt class="text-gray-400">"Age"</dt><dd>{customer.age}</dd>
                <dt class="text-gray-400">"Country"</dt><dd>{customer.country}</dd>
                <dt class="text-gray-400">"Status"</dt><dd>{customer.status}</dd>
            </dl>
            <div class="flex flex-wrap gap-2">
                {customer.skills.into_iter().map(|skill| view! {
                    <span class="px-2 py-1 rounded bg-gray-700 text-xs">{skill}</span>
                }).collect_view()}
            </div>
        </div>
    }
}
