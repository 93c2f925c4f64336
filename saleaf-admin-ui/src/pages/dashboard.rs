//! Dashboard Page
//!
//! Donation summary cards, the monthly income chart and recent
//! transactions. Fetched once on mount; nothing renders until it settles.

use leptos::*;

use saleaf_admin::dashboard::{
    monthly_series, recent_transactions, summary_cards, total_income_label, DashboardState, TransactionRow,
};
use saleaf_admin::models::DashboardData;
use saleaf_admin::table::TableRow;

use crate::api;
use crate::components::data_table::RowView;
use crate::components::{CardSkeleton, ChartSkeleton, DataTable, IncomeChart, SummaryCardView, TableContent};
use crate::state::global::GlobalState;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let dashboard = create_rw_signal(DashboardState::Loading);

    // Fetch on mount
    create_effect(move |_| {
        let session = state.session();
        spawn_local(async move {
            let (next, notice) = DashboardState::settle(api::fetch_dashboard(&session).await);
            if let Some(notice) = notice {
                web_sys::console::error_1(&notice.message.as_str().into());
                state.notify(&notice);
            }
            dashboard.set(next);
        });
    });

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Dashboard"</h1>
                <p class="text-gray-400 mt-1">"Donations, events and students at a glance"</p>
            </div>

            {move || match dashboard.get() {
                DashboardState::Loading => view! {
                    <div class="space-y-8">
                        <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                            <CardSkeleton />
                            <CardSkeleton />
                            <CardSkeleton />
                            <CardSkeleton />
                        </div>
                        <ChartSkeleton />
                    </div>
                }.into_view(),
                DashboardState::Failed(message) => view! {
                    <div class="bg-gray-800 rounded-xl p-6 text-center text-red-400">{message}</div>
                }.into_view(),
                DashboardState::Ready(data) => view! { <DashboardContent data=*data /> }.into_view(),
            }}
        </div>
    }
}

#[component]
fn DashboardContent(data: DashboardData) -> impl IntoView {
    let cards = summary_cards(&data);
    let series = monthly_series(&data.monthly_donations);
    let total = total_income_label(&data.monthly_donations);
    let rows: Vec<RowView> = recent_transactions(&data.donations_transactions)
        .iter()
        .map(|row| RowView { cells: row.cells(), href: None })
        .collect();
    let transactions = if rows.is_empty() {
        TableContent::Empty
    } else {
        TableContent::Rows(rows)
    };

    view! {
        <section>
            <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                {cards.into_iter().map(|card| view! { <SummaryCardView card=card /> }).collect_view()}
            </div>
        </section>

        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Monthly Donations"</h2>
            <IncomeChart points=series total=total />
        </section>

        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Recent Transactions"</h2>
            <DataTable headers=TransactionRow::headers() content=Signal::derive(move || transactions.clone()) />
        </section>
    }
}
