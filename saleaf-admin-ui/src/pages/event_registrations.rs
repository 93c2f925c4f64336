//! Event Registrations Page
//!
//! Server-paginated registrations with search. Each row links to the
//! registration's detail route.

use leptos::*;

use saleaf_admin::listing::{PageRequest, ServerPaginatedList};
use saleaf_admin::models::EventRegistration;
use saleaf_admin::pagination::PageSize;
use saleaf_admin::table::{registration_details_path, TableRow};

use super::spawn_page_request;
use crate::api;
use crate::components::{DataTable, LoadingOverlay, PageControls, PageSizeSelect, TableContent, TableSkeleton};
use crate::state::global::GlobalState;

#[component]
pub fn EventRegistrations() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let list = create_rw_signal(ServerPaginatedList::<EventRegistration>::new(PageSize::default()));

    let issue = move |request: Option<PageRequest>| {
        spawn_page_request(list, state.session(), request, |session, req| async move {
            api::fetch_event_registrations(&session, &req).await
        });
    };

    create_effect(move |_| issue(list.try_update(|l| l.request())));

    let content = Signal::derive(move || {
        list.with(|l| TableContent::from_view(l.view(), |row| Some(registration_details_path(&row.id))))
    });

    view! {
        <div class="space-y-6">
            <div class="flex flex-col md:flex-row md:items-center md:justify-between gap-4">
                <div>
                    <h1 class="text-3xl font-bold">"Event Registrations"</h1>
                    <p class="text-gray-400 mt-1">
                        {move || format!("{} registrations", list.with(|l| l.total_items()))}
                    </p>
                </div>

                <input
                    type="search"
                    placeholder="Search registrations"
                    prop:value=move || list.with(|l| l.search_query().to_string())
                    on:input=move |ev| {
                        let query = event_target_value(&ev);
                        issue(list.try_update(|l| l.set_search(&query)).flatten());
                    }
                    class="bg-gray-700 rounded-lg px-4 py-2 border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
            </div>

            <section class="bg-gray-800 rounded-xl p-6">
                <LoadingOverlay loading=Signal::derive(move || list.with(|l| l.is_loading()))>
                    {move || if list.with(|l| l.is_loading() && l.items().is_empty() && l.error().is_none()) {
                        view! { <TableSkeleton columns=EventRegistration::headers().len() /> }.into_view()
                    } else {
                        view! { <DataTable headers=EventRegistration::headers() content=content /> }.into_view()
                    }}
                </LoadingOverlay>

                <div class="flex flex-col md:flex-row md:items-center md:justify-between mt-4 gap-4">
                    <PageSizeSelect
                        value=Signal::derive(move || list.with(|l| l.page_size()))
                        disabled=Signal::derive(move || list.with(|l| l.controls_disabled()))
                        on_change=move |size| issue(list.try_update(|l| l.set_page_size(size)).flatten())
                    />
                    <PageControls
                        page=Signal::derive(move || list.with(|l| l.page_number()))
                        total_pages=Signal::derive(move || list.with(|l| l.total_pages()))
                        disabled=Signal::derive(move || list.with(|l| l.controls_disabled()))
                        on_page=move |page| issue(list.try_update(|l| l.set_page(page)).flatten())
                    />
                </div>
            </section>
        </div>
    }
}
