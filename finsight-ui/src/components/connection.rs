//! Backend Connection Settings
//!
//! Base URL editor with a reachability test against the service root.

use leptos::*;

use finsight::InsightsBackend;

use crate::api::GlooBackend;
use crate::state::global::{GlobalState, NoticeTopic};

/// Text and color for a reachability result
pub fn status_badge(online: Option<bool>) -> (&'static str, &'static str) {
    match online {
        Some(true) => ("Connected", "text-green-400"),
        Some(false) => ("Unreachable", "text-red-400"),
        None => ("Not checked", "text-gray-400"),
    }
}

/// Check the saved backend once and record the result
pub fn check_backend(state: GlobalState) {
    let backend = state.backend();
    spawn_local(async move {
        let online = backend.service_info().await.is_ok();
        state.backend_online.set(Some(online));
    });
}

#[component]
pub fn ConnectionPanel() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (api_url, set_api_url) = create_signal(state.api_base.get_untracked());
    let (testing, set_testing) = create_signal(false);

    let test_connection = move |_| {
        set_testing.set(true);
        let backend = GlooBackend::new(&api_url.get_untracked());

        spawn_local(async move {
            match backend.service_info().await {
                Ok(info) => {
                    state.show_success(
                        NoticeTopic::Connection,
                        &format!(
                            "{} {}",
                            info.message,
                            info.version.unwrap_or_default()
                        ),
                    );
                }
                Err(e) => {
                    state.show_error(NoticeTopic::Connection, &e.to_string());
                }
            }
            set_testing.set(false);
        });
    };

    let save_url = move |_| {
        state.save_api_base(&api_url.get_untracked());
        set_api_url.set(state.api_base.get_untracked());
        state.show_success(NoticeTopic::Settings, &state.api_base.get_untracked());
        check_backend(state);
    };

    view! {
        <div class="space-y-2">
            <label class="block text-sm text-gray-400">"Analysis API URL"</label>
            <div class="flex space-x-2">
                <input
                    type="text"
                    prop:value=move || api_url.get()
                    on:input=move |ev| set_api_url.set(event_target_value(&ev))
                    class="flex-1 bg-gray-700 rounded-lg px-4 py-2
                           border border-gray-600 focus:border-blue-500 focus:outline-none"
                />
                <button
                    on:click=test_connection
                    disabled=move || testing.get()
                    class="px-4 py-2 bg-gray-600 hover:bg-gray-500 disabled:bg-gray-700
                           rounded-lg font-medium transition-colors"
                >
                    {move || if testing.get() { "Testing..." } else { "Test" }}
                </button>
                <button
                    on:click=save_url
                    class="px-4 py-2 bg-blue-600 hover:bg-blue-700
                           rounded-lg font-medium transition-colors"
                >
                    "Save"
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_badge() {
        assert_eq!(status_badge(Some(true)).0, "Connected");
        assert_eq!(status_badge(Some(false)).1, "text-red-400");
        assert_eq!(status_badge(None).0, "Not checked");
    }
}
