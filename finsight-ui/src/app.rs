//! App Root Component
//!
//! Upload screen until insights arrive, then dashboard plus chat.

use leptos::*;

use finsight::session::View as Screen;
use finsight::{AppState, InsightsBackend};

use crate::components::connection::{check_backend, status_badge};
use crate::components::{ChatInterface, ConnectionPanel, FileUpload, Loading, Toast};
use crate::pages::Dashboard;
use crate::state::global::{provide_global_state, GlobalState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_global_state();
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    check_backend(state);

    let app = create_rw_signal(AppState::new());
    // Only flips once; keeps the chat mounted while the dashboard refreshes
    let mode = create_memo(move |_| app.with(AppState::view));

    let on_uploaded = Callback::new(move |_: ()| {
        app.update(AppState::begin_insights_fetch);

        let backend = state.backend();
        spawn_local(async move {
            let result = backend.fetch_insights().await;
            let outcome = app.try_update(|a| a.complete_insights_fetch(result));

            if let Some(Err(alert)) = outcome {
                web_sys::console::error_1(&alert.into());
                if let Some(window) = web_sys::window() {
                    let _ = window.alert_with_message(alert);
                }
            }
        });
    });

    let insights = Signal::derive(move || app.with(|a| a.insights.clone()));
    let loading = Signal::derive(move || app.with(|a| a.loading));

    view! {
        <div class="min-h-screen bg-gray-900 text-white flex flex-col">
            <header class="bg-gray-800 border-b border-gray-700 py-6">
                <div class="container mx-auto px-4">
                    <h1 class="text-3xl font-bold">"💰 Financial Insights Platform"</h1>
                    <p class="text-gray-400 mt-1">"AI-powered analysis of your spending patterns"</p>
                </div>
            </header>

            <main class="flex-1 container mx-auto px-4 py-8 pb-24">
                {move || match mode.get() {
                    Screen::Upload => view! {
                        <div class="space-y-6">
                            <div class="text-center">
                                <h2 class="text-2xl font-bold">"Get Started"</h2>
                                <p class="text-gray-400 mt-1">
                                    "Upload your financial data to generate insights"
                                </p>
                            </div>
                            <FileUpload on_uploaded=on_uploaded />
                            {move || loading.get().then(|| view! {
                                <Loading message="Loading insights..." />
                            })}
                        </div>
                    }
                    .into_view(),
                    Screen::Dashboard => view! {
                        <div class="grid grid-cols-1 xl:grid-cols-3 gap-8">
                            <div class="xl:col-span-2">
                                <Dashboard insights=insights loading=loading />
                            </div>
                            <ChatInterface />
                        </div>
                    }
                    .into_view(),
                }}
            </main>

            <Footer />

            <Toast />
        </div>
    }
}

/// Footer showing backend status and connection settings
#[component]
fn Footer() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let (show_settings, set_show_settings) = create_signal(false);

    view! {
        <footer class="fixed bottom-0 left-0 right-0 bg-gray-800 border-t border-gray-700 py-3 px-4">
            <div class="container mx-auto space-y-3">
                {move || show_settings.get().then(|| view! { <ConnectionPanel /> })}

                <div class="flex items-center justify-between text-sm">
                    {move || {
                        let (label, color) = status_badge(state.backend_online.get());
                        view! {
                            <span class=format!("flex items-center space-x-2 {}", color)>
                                <span>{label}</span>
                                <span class="text-gray-500">{state.api_base.get()}</span>
                            </span>
                        }
                    }}

                    <button
                        on:click=move |_| set_show_settings.update(|open| *open = !*open)
                        class="text-gray-400 hover:text-white"
                    >
                        {move || if show_settings.get() { "Close" } else { "⚙ Connection" }}
                    </button>
                </div>
            </div>
        </footer>
    }
}
