//! Data Table Component
//!
//! Renders a [`ListView`] from the core: inline error text, an explicit
//! "no records" row, or the current page's rows.

use leptos::*;
use leptos_router::*;

use saleaf_admin::listing::ListView;
use saleaf_admin::table::TableRow;

/// One drawn row; `href` makes the first cell a link
#[derive(Debug, Clone, PartialEq)]
pub struct RowView {
    pub cells: Vec<String>,
    pub href: Option<String>,
}

/// What the table area shows, detached from the list's borrow
#[derive(Debug, Clone, PartialEq)]
pub enum TableContent {
    Error(String),
    Empty,
    Rows(Vec<RowView>),
}

impl TableContent {
    /// Snapshot a list view, optionally linking each row
    pub fn from_view<T: TableRow>(view: ListView<'_, T>, link: impl Fn(&T) -> Option<String>) -> Self {
        match view {
            ListView::Error(message) => TableContent::Error(message.to_string()),
            ListView::Empty => TableContent::Empty,
            ListView::Rows(rows) => TableContent::Rows(
                rows.iter()
                    .map(|row| RowView {
                        cells: row.cells(),
                        href: link(row),
                    })
                    .collect(),
            ),
        }
    }
}

#[component]
pub fn DataTable(
    headers: &'static [&'static str],
    #[prop(into)]
    content: Signal<TableContent>,
) -> impl IntoView {
    view! {
        {move || match content.get() {
            TableContent::Error(message) => view! {
                <div class="bg-red-900/40 border border-red-700 text-red-300 rounded-lg px-4 py-3">
                    {message}
                </div>
            }.into_view(),
            TableContent::Empty => view! {
                <div class="text-center text-gray-400 py-12">"No records found"</div>
            }.into_view(),
            TableContent::Rows(rows) => view! {
                <div class="overflow-x-auto">
                    <table class="w-full text-sm">
                        <thead>
                            <tr class="text-left text-gray-400 border-b border-gray-700">
                                {headers.iter().map(|h| view! { <th class="py-3 px-3 font-medium">{*h}</th> }).collect_view()}
                            </tr>
                        </thead>
                        <tbody>
                            {rows.into_iter().map(table_row).collect_view()}
                        </tbody>
                    </table>
                </div>
            }.into_view(),
        }}
    }
}

fn table_row(row: RowView) -> impl IntoView {
    let href = row.href;
    view! {
        <tr class="border-b border-gray-700 last:border-0 hover:bg-gray-750">
            {row.cells.into_iter().enumerate().map(|(idx, cell)| {
                match (idx, href.clone()) {
                    (0, Some(href)) => view! {
                        <td class="py-3 px-3">
                            <A href=href class="text-primary-400 hover:underline">{cell}</A>
                        </td>
                    }.into_view(),
                    _ => view! { <td class="py-3 px-3">{cell}</td> }.into_view(),
                }
            }).collect_view()}
        </tr>
    }
}
