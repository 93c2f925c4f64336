//! Chart Component
//!
//! Monthly donation income drawn on an HTML5 canvas.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use saleaf_admin::dashboard::ChartPoint;

const BAR_COLOR: &str = "#FF9800";

/// Bar chart of monthly income
#[component]
pub fn IncomeChart(
    points: Vec<ChartPoint>,
    /// Formatted total shown above the chart
    #[prop(into)]
    total: String,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();
    let points = store_value(points);

    create_effect(move |_| {
        if let Some(canvas) = canvas_ref.get() {
            points.with_value(|points| draw_chart(&canvas, points));
        }
    });

    view! {
        <div class="relative">
            <div class="flex items-baseline justify-between mb-4">
                <span class="text-gray-400 text-sm">"Total Income"</span>
                <span class="text-2xl font-bold">{total}</span>
            </div>
            <canvas
                node_ref=canvas_ref
                width="800"
                height="400"
                class="w-full h-64 md:h-96 rounded-lg"
            />
        </div>
    }
}

fn draw_chart(canvas: &HtmlCanvasElement, points: &[ChartPoint]) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    let margin_left = 70.0;
    let margin_right = 20.0;
    let margin_top = 20.0;
    let margin_bottom = 40.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    ctx.set_fill_style(&"#1f2937".into()); // gray-800
    ctx.fill_rect(0.0, 0.0, width, height);

    if points.is_empty() {
        ctx.set_fill_style(&"#6b7280".into());
        ctx.set_font("16px sans-serif");
        let _ = ctx.fill_text("No donations yet", width / 2.0 - 60.0, height / 2.0);
        return;
    }

    let max = points.iter().map(|p| p.value).fold(0.0_f64, f64::max);
    let max = if max > 0.0 { max * 1.1 } else { 1.0 };

    // Horizontal grid lines (5 lines)
    ctx.set_stroke_style(&"#374151".into()); // gray-700
    ctx.set_line_width(1.0);
    ctx.set_font("12px sans-serif");
    for i in 0..=5 {
        let y = margin_top + (i as f64 / 5.0) * chart_height;
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        let value = max - (i as f64 / 5.0) * max;
        ctx.set_fill_style(&"#9ca3af".into()); // gray-400
        let _ = ctx.fill_text(&format!("{:.0}", value), 5.0, y + 4.0);
    }

    let slot = chart_width / points.len() as f64;
    let bar_width = (slot * 0.6).max(2.0);

    for (i, point) in points.iter().enumerate() {
        let bar_height = (point.value.max(0.0) / max) * chart_height;
        let x = margin_left + i as f64 * slot + (slot - bar_width) / 2.0;
        let y = margin_top + chart_height - bar_height;

        ctx.set_fill_style(&BAR_COLOR.into());
        ctx.fill_rect(x, y, bar_width, bar_height);

        ctx.set_fill_style(&"#9ca3af".into());
        let _ = ctx.fill_text(&point.label, x, height - 10.0);
    }
}
