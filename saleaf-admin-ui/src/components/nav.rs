//! Navigation Components
//!
//! Header bar with session-gated links, and the API-driven sidebar menu.

use leptos::*;
use leptos_router::*;

use saleaf_admin::models::MenuItemType;
use saleaf_admin::nav::{header_entries, MenuNode, MenuState, NavEntry, NavLayout, NavTarget};

use crate::api;
use crate::state::global::GlobalState;

/// Navigation header component
#[component]
pub fn Header() -> impl IntoView {
    let (menu_open, set_menu_open) = create_signal(false);

    view! {
        <nav class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    <A href="/" class="flex items-center space-x-3">
                        <span class="text-2xl">"🎓"</span>
                        <span class="text-xl font-bold text-white">"SALEAF"</span>
                    </A>

                    <div class="hidden md:flex items-center space-x-1">
                        <HeaderLinks layout=NavLayout::Desktop />
                    </div>

                    <button
                        class="md:hidden px-3 py-2 rounded-lg text-gray-300 hover:bg-gray-700"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        "☰"
                    </button>
                </div>

                {move || menu_open.get().then(|| view! {
                    <div class="md:hidden flex flex-col space-y-1 pb-4" on:click=move |_| set_menu_open.set(false)>
                        <HeaderLinks layout=NavLayout::Mobile />
                    </div>
                })}
            </div>
        </nav>
    }
}

/// Header entries for the current login state
#[component]
fn HeaderLinks(layout: NavLayout) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    move || {
        header_entries(state.is_logged_in(), layout)
            .into_iter()
            .map(|entry| view! { <HeaderLink entry=entry /> })
            .collect_view()
    }
}

const LINK_CLASS: &str = "px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors";

#[component]
fn HeaderLink(entry: NavEntry) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    match entry.target {
        NavTarget::Route(href) => view! {
            <A href=href class=LINK_CLASS active_class="bg-gray-700 text-white">
                {entry.label}
            </A>
        }
        .into_view(),
        NavTarget::Logout => view! {
            <button class=format!("{} text-left", LINK_CLASS) on:click=move |_| state.logout()>
                {entry.label}
            </button>
        }
        .into_view(),
    }
}

/// Sidebar menu fetched from the API once a session exists. Hidden for
/// signed-out visitors.
#[component]
pub fn Sidebar() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    create_effect(move |_| {
        let session = state.session.get();
        if !session.is_logged_in() {
            return;
        }
        state.menu.set(MenuState::Loading);
        spawn_local(async move {
            let (menu, notice) = MenuState::settle(api::fetch_dashboard_menu(&session).await);
            // Signed out while the request was in flight
            if state.session.with_untracked(|s| s.token() != session.token()) {
                return;
            }
            state.menu.set(menu);
            if let Some(notice) = notice {
                state.notify(&notice);
            }
        });
    });

    move || {
        state.is_logged_in().then(|| view! {
            <aside class="hidden lg:block w-64 shrink-0 bg-gray-800 border-r border-gray-700 p-4">
                {move || state.menu.with(|menu| match menu.visible_menu() {
                    Some(root) => menu_node(root),
                    None => view! {
                        <p class="px-2 text-sm text-red-400">{menu.error().map(str::to_string)}</p>
                    }
                    .into_view(),
                })}
            </aside>
        })
    }
}

fn menu_node(node: MenuNode) -> View {
    match node.item_type {
        MenuItemType::Group => view! {
            <div class="mb-6">
                <div class="flex items-center space-x-2 px-2 mb-2 text-xs uppercase tracking-wider text-gray-500">
                    <span>{node.icon.glyph()}</span>
                    <span>{node.title}</span>
                </div>
                <div class="space-y-1">
                    {node.children.into_iter().map(menu_node).collect_view()}
                </div>
            </div>
        }
        .into_view(),
        MenuItemType::Collapse => view! { <MenuCollapse node=node /> }.into_view(),
        MenuItemType::Item => {
            let href = node.url.unwrap_or_else(|| "/".to_string());
            view! {
                <A
                    href=href
                    class="flex items-center space-x-2 px-3 py-2 rounded-lg text-gray-300 hover:bg-gray-700"
                    active_class="bg-gray-700 text-white"
                >
                    <span>{node.icon.glyph()}</span>
                    <span>{node.title}</span>
                </A>
            }
            .into_view()
        }
    }
}

#[component]
fn MenuCollapse(node: MenuNode) -> impl IntoView {
    let (open, set_open) = create_signal(false);
    let children = store_value(node.children);

    view! {
        <div>
            <button
                class="w-full flex items-center justify-between px-3 py-2 rounded-lg text-gray-300 hover:bg-gray-700"
                on:click=move |_| set_open.update(|o| *o = !*o)
            >
                <span class="flex items-center space-x-2">
                    <span>{node.icon.glyph()}</span>
                    <span>{node.title}</span>
                </span>
                <span>{move || if open.get() { "▾" } else { "▸" }}</span>
            </button>
            {move || open.get().then(|| view! {
                <div class="ml-4 space-y-1">
                    {children.get_value().into_iter().map(menu_node).collect_view()}
                </div>
            })}
        </div>
    }
}
