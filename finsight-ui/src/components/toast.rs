//! Notice Toast
//!
//! Bottom-right banner for upload results and backend connection checks.

use leptos::*;

use crate::state::global::{GlobalState, Notice, NoticeTopic};

/// Heading line above the notice text
fn heading(topic: NoticeTopic, failed: bool) -> &'static str {
    match (topic, failed) {
        (NoticeTopic::Upload, false) => "Transactions uploaded",
        (NoticeTopic::Upload, true) => "Upload failed",
        (NoticeTopic::Connection, false) => "Backend reachable",
        (NoticeTopic::Connection, true) => "Backend unreachable",
        (NoticeTopic::Settings, false) => "API URL saved",
        (NoticeTopic::Settings, true) => "API URL not saved",
    }
}

#[component]
pub fn Toast() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="fixed bottom-20 right-4 z-50 max-w-sm">
            {move || state.notice.get().map(|notice| view! { <NoticeCard notice=notice /> })}
        </div>
    }
}

#[component]
fn NoticeCard(notice: Notice) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let border = if notice.failed { "border-red-500" } else { "border-green-500" };

    view! {
        <div
            role="status"
            class=format!(
                "bg-gray-800 border-l-4 {} text-white px-4 py-3 rounded-lg shadow-lg flex items-start space-x-3",
                border
            )
        >
            <div class="flex-1 min-w-0">
                <p class="text-sm font-semibold">{heading(notice.topic, notice.failed)}</p>
                <p class="text-xs text-gray-300 break-words">{notice.text}</p>
            </div>
            <button
                on:click=move |_| state.dismiss_notice()
                class="text-gray-500 hover:text-white"
                aria-label="Dismiss"
            >
                "×"
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_connection_heading() {
        assert_eq!(heading(NoticeTopic::Connection, true), "Backend unreachable");
    }

    #[test]
    fn test_upload_headings_differ_by_outcome() {
        assert_ne!(
            heading(NoticeTopic::Upload, false),
            heading(NoticeTopic::Upload, true)
        );
    }
}
