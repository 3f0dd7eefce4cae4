//! Pie Chart Component
//!
//! Spending-by-category pie drawn on an HTML5 canvas.

use leptos::*;
use std::f64::consts::FRAC_PI_2;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use finsight::report::{pie_segments, ChartSlice, PieSegment};

const RADIUS: f64 = 110.0;
const LABEL_GAP: f64 = 14.0;

/// Pie chart with a color legend underneath
#[component]
pub fn PieChart(
    #[prop(into)]
    slices: MaybeSignal<Vec<ChartSlice>>,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();
    let slices = Signal::derive(move || slices.get());

    create_effect(move |_| {
        let slices = slices.get();
        if let Some(canvas) = canvas_ref.get() {
            draw_pie(&canvas, &slices);
        }
    });

    view! {
        <div class="relative">
            <canvas
                node_ref=canvas_ref
                width="520"
                height="320"
                class="w-full rounded-lg"
            />

            <div class="flex justify-center flex-wrap gap-4 mt-4">
                {move || {
                    slices.get()
                        .into_iter()
                        .map(|slice| view! {
                            <div class="flex items-center space-x-2">
                                <div
                                    class="w-3 h-3 rounded-full"
                                    style=format!("background-color: {}", slice.color)
                                />
                                <span class="text-sm text-gray-300">{slice.name}</span>
                            </div>
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}

/// Point just outside the rim, halfway through the slice
fn label_anchor(segment: &PieSegment, cx: f64, cy: f64, radius: f64) -> (f64, f64) {
    let angle = segment.mid() - FRAC_PI_2;
    (cx + radius * angle.cos(), cy + radius * angle.sin())
}

fn draw_pie(canvas: &HtmlCanvasElement, slices: &[ChartSlice]) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let (cx, cy) = (width / 2.0, height / 2.0);

    ctx.set_fill_style(&"#1f2937".into()); // gray-800
    ctx.fill_rect(0.0, 0.0, width, height);

    let segments = pie_segments(slices);
    if segments.is_empty() {
        ctx.set_fill_style(&"#6b7280".into());
        ctx.set_font("16px sans-serif");
        ctx.set_text_align("center");
        let _ = ctx.fill_text("No spending data", cx, cy);
        return;
    }

    ctx.set_stroke_style(&"#1f2937".into());
    ctx.set_line_width(2.0);
    for segment in &segments {
        let (start, end) = segment.canvas_angles();
        ctx.begin_path();
        ctx.move_to(cx, cy);
        let _ = ctx.arc(cx, cy, RADIUS, start, end);
        ctx.close_path();
        ctx.set_fill_style(&segment.color.into());
        ctx.fill();
        ctx.stroke();
    }

    ctx.set_fill_style(&"#d1d5db".into()); // gray-300
    ctx.set_font("12px sans-serif");
    for segment in &segments {
        let (x, y) = label_anchor(segment, cx, cy, RADIUS + LABEL_GAP);
        ctx.set_text_align(if x >= cx { "left" } else { "right" });
        let _ = ctx.fill_text(&segment.label, x, y + 4.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{PI, TAU};

    fn segment(start: f64, end: f64) -> PieSegment {
        PieSegment {
            start,
            end,
            color: "#0088FE",
            label: "Groceries: $600".to_string(),
        }
    }

    #[test]
    fn test_label_anchor_right_half() {
        let (x, y) = label_anchor(&segment(0.0, PI), 100.0, 100.0, 50.0);
        assert!((x - 150.0).abs() < 1e-9);
        assert!((y - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_label_anchor_full_circle_points_down() {
        let (x, y) = label_anchor(&segment(0.0, TAU), 100.0, 100.0, 50.0);
        assert!((x - 100.0).abs() < 1e-9);
        assert!((y - 150.0).abs() < 1e-9);
    }
}
