//! Paging Controls
//!
//! Page buttons with ellipsis gaps and the page-size selector.

use leptos::*;

use saleaf_admin::pagination::{page_links, PageSize};

const EDGE_PAGES: usize = 1;
const AROUND_PAGES: usize = 2;

/// Page buttons; inactive while only one page exists
#[component]
pub fn PageControls(
    #[prop(into)]
    page: Signal<usize>,
    #[prop(into)]
    total_pages: Signal<usize>,
    #[prop(into)]
    disabled: Signal<bool>,
    #[prop(into)]
    on_page: Callback<usize>,
) -> impl IntoView {
    let button = move |label: String, target: usize, active: bool| {
        let class = if active {
            "px-3 py-1 rounded bg-primary-600 text-white"
        } else {
            "px-3 py-1 rounded bg-gray-700 text-gray-300 hover:bg-gray-600 disabled:opacity-50"
        };
        view! {
            <button
                class=class
                disabled=move || disabled.get()
                on:click=move |_| on_page.call(target)
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="flex items-center justify-center flex-wrap gap-2 mt-4">
            {move || {
                let current = page.get();
                let total = total_pages.get();
                if total == 0 {
                    return view! {}.into_view();
                }

                let mut views = Vec::new();
                views.push(button("‹".to_string(), current.saturating_sub(1).max(1), false).into_view());
                for link in page_links(total, current, EDGE_PAGES, AROUND_PAGES) {
                    views.push(match link {
                        Some(n) => button(n.to_string(), n, n == current).into_view(),
                        None => view! { <span class="px-2 text-gray-500">"…"</span> }.into_view(),
                    });
                }
                views.push(button("›".to_string(), (current + 1).min(total), false).into_view());
                views.collect_view()
            }}
        </div>
    }
}

/// Rows-per-page selector
#[component]
pub fn PageSizeSelect(
    #[prop(into)]
    value: Signal<PageSize>,
    #[prop(into)]
    disabled: Signal<bool>,
    #[prop(into)]
    on_change: Callback<PageSize>,
) -> impl IntoView {
    view! {
        <label class="flex items-center space-x-2 text-sm text-gray-400">
            <span>"Rows per page"</span>
            <select
                class="bg-gray-700 rounded-lg px-3 py-2 border border-gray-600 disabled:opacity-50"
                disabled=move || disabled.get()
                on:change=move |ev| {
                    let size = event_target_value(&ev)
                        .parse::<usize>()
                        .ok()
                        .and_then(PageSize::from_value);
                    if let Some(size) = size {
                        on_change.call(size);
                    }
                }
            >
                {PageSize::ALL.iter().map(|size| {
                    let size = *size;
                    view! {
                        <option value=size.get().to_string() selected=move || value.get() == size>
                            {size.to_string()}
                        </option>
                    }
                }).collect_view()}
            </select>
        </label>
    }
}
