//! Student Mark Uploads Page

use leptos::*;

use saleaf_admin::listing::{PageRequest, ServerPaginatedList};
use saleaf_admin::models::StudentMarkUpload;
use saleaf_admin::pagination::PageSize;
use saleaf_admin::table::TableRow;

use super::spawn_page_request;
use crate::api;
use crate::components::{DataTable, LoadingOverlay, PageControls, PageSizeSelect, TableContent, TableSkeleton};
use crate::state::global::GlobalState;

#[component]
pub fn StudentMarks() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let list = create_rw_signal(ServerPaginatedList::<StudentMarkUpload>::new(PageSize::default()));

    let issue = move |request: Option<PageRequest>| {
        spawn_page_request(list, state.session(), request, |session, req| async move {
            api::fetch_student_mark_uploads(&session, &req).await
        });
    };

    create_effect(move |_| issue(list.try_update(|l| l.request())));

    let content = Signal::derive(move || list.with(|l| TableContent::from_view(l.view(), |_| None)));
    let disabled = Signal::derive(move || list.with(|l| l.controls_disabled()));

    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-3xl font-bold">"Student Mark Uploads"</h1>
                <p class="text-gray-400 mt-1">
                    {move || format!("{} uploads", list.with(|l| l.total_items()))}
                </p>
            </div>

            <section class="bg-gray-800 rounded-xl p-6">
                <LoadingOverlay loading=Signal::derive(move || list.with(|l| l.is_loading()))>
                    {move || if list.with(|l| l.is_loading() && l.items().is_empty() && l.error().is_none()) {
                        view! { <TableSkeleton columns=StudentMarkUpload::headers().len() /> }.into_view()
                    } else {
                        view! { <DataTable headers=StudentMarkUpload::headers() content=content /> }.into_view()
                    }}
                </LoadingOverlay>

                <div class="flex flex-col md:flex-row md:items-center md:justify-between mt-4 gap-4">
                    <PageSizeSelect
                        value=Signal::derive(move || list.with(|l| l.page_size()))
                        disabled=disabled
                        on_change=move |size| issue(list.try_update(|l| l.set_page_size(size)).flatten())
                    />
                    <PageControls
                        page=Signal::derive(move || list.with(|l| l.page_number()))
                        total_pages=Signal::derive(move || list.with(|l| l.total_pages()))
                        disabled=disabled
                        on_page=move |page| issue(list.try_update(|l| l.set_page(page)).flatten())
                    />
                </div>
            </section>
        </div>
    }
}
