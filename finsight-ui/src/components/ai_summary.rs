//! AI Summary Component
//!
//! Narrative summary of the uploaded data, fetched once when shown.

use leptos::*;

use finsight::{AiSummary, InsightsBackend};

use crate::components::{FormattedReply, Loading};
use crate::state::global::GlobalState;

#[component]
pub fn AiSummaryPanel() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let (summary, set_summary) = create_signal(None::<Result<AiSummary, String>>);

    let backend = state.backend();
    spawn_local(async move {
        let result = backend.fetch_summary().await.map_err(|e| {
            web_sys::console::error_1(&format!("Failed to fetch AI summary: {}", e).into());
            e.to_string()
        });
        set_summary.set(Some(result));
    });

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h3 class="text-lg font-semibold mb-4">"🤖 AI Summary"</h3>
            {move || match summary.get() {
                None => view! { <Loading message="Generating summary..." /> }.into_view(),
                Some(Ok(s)) => view! {
                    <div class="text-gray-200 text-sm">
                        <FormattedReply content=s.summary />
                    </div>
                    <p class="text-xs text-gray-500 mt-3">"Generated " {s.generated_at}</p>
                }
                .into_view(),
                Some(Err(_)) => view! {
                    <p class="text-gray-400 text-sm">"AI summary is unavailable right now."</p>
                }
                .into_view(),
            }}
        </section>
    }
}
