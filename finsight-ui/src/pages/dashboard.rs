//! Dashboard Page
//!
//! Summary cards, category pie chart, ranked categories and anomalies for
//! one fetched `InsightsData`. Renders nothing until insights exist.

use leptos::*;

use finsight::report::{
    anomaly_section, chart_slices, format_money, format_percent, summary_cards, trend_arrow,
    ChartSlice,
};
use finsight::{AnomalyAlert, InsightsData, SpendingInsight, Trend};

use crate::components::{AiSummaryPanel, Loading, PieChart, SummaryCard};

#[component]
pub fn Dashboard(
    #[prop(into)]
    insights: Signal<Option<InsightsData>>,
    #[prop(into)]
    loading: Signal<bool>,
) -> impl IntoView {
    view! {
        {move || {
            if loading.get() {
                return view! { <Loading message="Loading insights..." /> }.into_view();
            }
            match insights.get() {
                Some(data) => view! { <InsightsView data=data /> }.into_view(),
                None => ().into_view(),
            }
        }}
    }
}

#[component]
fn InsightsView(data: InsightsData) -> impl IntoView {
    let cards = summary_cards(&data);
    let slices: Vec<ChartSlice> = chart_slices(&data);
    let anomalies = anomaly_section(&data).map(|a| a.to_vec());
    let rows: Vec<(SpendingInsight, &'static str)> = data
        .top_categories
        .into_iter()
        .zip(slices.iter().map(|s| s.color))
        .collect();

    view! {
        <div class="space-y-8">
            <h2 class="text-2xl font-bold">"Your Financial Insights"</h2>

            <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                {cards
                    .into_iter()
                    .map(|card| view! { <SummaryCard title=card.title value=card.value /> })
                    .collect_view()}
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                <section class="bg-gray-800 rounded-xl p-6">
                    <h3 class="text-lg font-semibold mb-4">"Spending by Category"</h3>
                    <PieChart slices=slices />
                </section>

                <section class="bg-gray-800 rounded-xl p-6">
                    <h3 class="text-lg font-semibold mb-4">"Top Spending Categories"</h3>
                    <div class="space-y-3">
                        {rows
                            .into_iter()
                            .map(|(category, color)| view! {
                                <CategoryRow category=category color=color />
                            })
                            .collect_view()}
                    </div>
                </section>
            </div>

            {anomalies.map(|list| view! { <AnomalyList anomalies=list /> })}

            <AiSummaryPanel />
        </div>
    }
}

#[component]
fn CategoryRow(category: SpendingInsight, color: &'static str) -> impl IntoView {
    // Rising spend is the bad direction
    let trend_class = match category.trend {
        Trend::Up => "text-red-400",
        Trend::Down => "text-green-400",
        Trend::Stable => "text-gray-400",
    };

    view! {
        <div class="flex items-center justify-between p-3 bg-gray-700 rounded-lg">
            <div class="flex items-center space-x-3">
                <div class="w-3 h-3 rounded-full" style=format!("background-color: {}", color) />
                <span class="font-medium">{category.category}</span>
            </div>
            <div class="flex items-center space-x-4 text-sm">
                <span class="text-gray-400">{format_percent(category.percentage)}</span>
                <span class="font-semibold">{format_money(category.total)}</span>
                <span class=trend_class>{trend_arrow(category.trend)}</span>
            </div>
        </div>
    }
}

#[component]
fn AnomalyList(anomalies: Vec<AnomalyAlert>) -> impl IntoView {
    view! {
        <section class="bg-gray-800 rounded-xl p-6 border border-yellow-700">
            <h3 class="text-lg font-semibold mb-4">"⚠️ Unusual Transactions"</h3>
            <div class="space-y-3">
                {anomalies
                    .into_iter()
                    .map(|anomaly| view! {
                        <div class="p-3 bg-gray-700 rounded-lg">
                            <div class="flex items-center justify-between">
                                <span class="font-medium">{anomaly.description}</span>
                                <span class="font-semibold text-yellow-400">
                                    {format_money(anomaly.amount)}
                                </span>
                            </div>
                            <div class="flex items-center justify-between text-sm text-gray-400 mt-1">
                                <span>{anomaly.date}</span>
                                <span>{anomaly.reason}</span>
                            </div>
                        </div>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
