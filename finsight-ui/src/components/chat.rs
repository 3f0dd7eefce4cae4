//! Chat Interface Component
//!
//! Free-text questions about the uploaded data. The user's message is
//! appended before the request goes out; every request ends in exactly one
//! assistant entry, a fallback text if the call failed.

use leptos::*;

use finsight::{ChatMessage, ChatSession, InsightsBackend, Role};

use crate::components::FormattedReply;
use crate::state::global::GlobalState;

const EXAMPLE_QUESTIONS: [&str; 3] = [
    "Why did my spending spike last month?",
    "What are my top spending categories?",
    "Any unusual transactions recently?",
];

#[component]
pub fn ChatInterface() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let session = create_rw_signal(ChatSession::new());
    let end_ref = create_node_ref::<html::Div>();

    // Keep the newest message in view
    create_effect(move |_| {
        session.with(|s| (s.messages.len(), s.loading));
        if let Some(end) = end_ref.get() {
            end.scroll_into_view();
        }
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let Some(query) = session.try_update(ChatSession::submit).flatten() else {
            return;
        };

        let backend = state.backend();
        spawn_local(async move {
            let result = backend.chat(&query).await;
            if let Err(e) = &result {
                web_sys::console::error_1(&format!("Chat error: {}", e).into());
            }
            session.update(|s| s.resolve(result));
        });
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6 flex flex-col">
            <h2 class="text-xl font-semibold mb-4">"💬 Ask About Your Finances"</h2>

            <div class="flex-1 overflow-y-auto max-h-96 space-y-3 mb-4">
                {move || {
                    if session.with(|s| s.messages.is_empty()) {
                        view! { <ChatIntro /> }.into_view()
                    } else {
                        session
                            .with(|s| s.messages.clone())
                            .into_iter()
                            .map(|message| view! { <MessageBubble message=message /> })
                            .collect_view()
                    }
                }}

                {move || session.with(|s| s.loading).then(|| view! {
                    <div class="flex justify-start">
                        <div class="bg-gray-700 rounded-lg px-4 py-2 text-gray-300 italic">
                            "Thinking..."
                        </div>
                    </div>
                })}

                <div node_ref=end_ref />
            </div>

            <form on:submit=on_submit class="flex space-x-2">
                <input
                    type="text"
                    placeholder="Ask a question about your finances..."
                    prop:value=move || session.with(|s| s.input.clone())
                    on:input=move |ev| session.update(|s| s.set_input(event_target_value(&ev)))
                    disabled=move || session.with(|s| s.loading)
                    class="flex-1 bg-gray-700 rounded-lg px-4 py-2
                           border border-gray-600 focus:border-blue-500 focus:outline-none"
                />
                <button
                    type="submit"
                    disabled=move || !session.with(ChatSession::can_send)
                    class="px-4 py-2 bg-blue-600 hover:bg-blue-700 disabled:bg-gray-600
                           rounded-lg font-medium transition-colors"
                >
                    "Send"
                </button>
            </form>
        </section>
    }
}

#[component]
fn ChatIntro() -> impl IntoView {
    view! {
        <div class="text-gray-400 text-sm">
            <p class="mb-2">"Ask me anything about your spending patterns!"</p>
            <p class="mb-1">"Examples:"</p>
            <ul class="space-y-1">
                {EXAMPLE_QUESTIONS
                    .iter()
                    .map(|q| view! { <li class="ml-4 list-disc">{format!("\"{}\"", q)}</li> })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[component]
fn MessageBubble(message: ChatMessage) -> impl IntoView {
    let time = message.time_label();
    let (row_class, bubble_class) = match message.role {
        Role::User => ("flex justify-end", "bg-blue-600 text-white"),
        Role::Assistant => ("flex justify-start", "bg-gray-700 text-gray-100"),
    };

    let body = match message.role {
        Role::User => view! { <p>{message.content}</p> }.into_view(),
        Role::Assistant => view! { <FormattedReply content=message.content /> }.into_view(),
    };

    view! {
        <div class=row_class>
            <div class=format!("max-w-[80%] rounded-lg px-4 py-2 {}", bubble_class)>
                <div class="text-sm">{body}</div>
                <div class="text-xs opacity-60 mt-1">{time}</div>
            </div>
        </div>
    }
}
