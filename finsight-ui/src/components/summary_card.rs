//! Summary Card Component
//!
//! One headline number on the dashboard.

use leptos::*;

#[component]
pub fn SummaryCard(
    title: &'static str,
    #[prop(into)]
    value: String,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-lg p-4 border border-gray-700">
            <span class="text-gray-400 text-sm">{title}</span>
            <div class="text-3xl font-bold mt-2">{value}</div>
        </div>
    }
}
