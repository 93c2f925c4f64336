//! Summary Card Component
//!
//! One dashboard figure with its icon.

use leptos::*;

use saleaf_admin::dashboard::{CardColor, CardIcon, SummaryCard};

fn icon_glyph(icon: CardIcon) -> &'static str {
    match icon {
        CardIcon::Wallet => "👛",
        CardIcon::Book => "📘",
        CardIcon::Calendar => "📅",
        CardIcon::CloudChange => "☁️",
    }
}

fn color_classes(color: CardColor) -> &'static str {
    match color {
        CardColor::Primary => "bg-primary-600/20 text-primary-400",
        CardColor::Warning => "bg-yellow-600/20 text-yellow-400",
        CardColor::Success => "bg-green-600/20 text-green-400",
        CardColor::Error => "bg-red-600/20 text-red-400",
    }
}

#[component]
pub fn SummaryCardView(card: SummaryCard) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-lg p-4 border border-gray-700 hover:border-gray-600 transition">
            <div class="flex items-center justify-between">
                <span class="text-gray-400 text-sm">{card.title}</span>
                <span class=format!("w-10 h-10 rounded-lg flex items-center justify-center text-xl {}", color_classes(card.color))>
                    {icon_glyph(card.icon)}
                </span>
            </div>
            <div class="text-3xl font-bold mt-2">{card.value}</div>
        </div>
    }
}
