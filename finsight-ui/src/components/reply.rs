//! Formatted Reply Component
//!
//! Renders assistant text as structured markup. Nothing is injected as raw
//! HTML; bold and list markers become elements.

use leptos::*;

use finsight::markup::{format_reply, Block, Span};

#[component]
pub fn FormattedReply(
    #[prop(into)]
    content: String,
) -> impl IntoView {
    format_reply(&content)
        .into_iter()
        .map(render_block)
        .collect_view()
}

fn render_block(block: Block) -> View {
    match block {
        Block::Paragraph(spans) => view! {
            <p class="mb-1">{render_spans(spans)}</p>
        }
        .into_view(),
        Block::ListItem(spans) => view! {
            <li class="ml-4 list-disc">{render_spans(spans)}</li>
        }
        .into_view(),
        Block::Break => view! { <br /> }.into_view(),
    }
}

fn render_spans(spans: Vec<Span>) -> View {
    spans
        .into_iter()
        .map(|span| match span {
            Span::Text(text) => text.into_view(),
            Span::Strong(text) => view! { <strong>{text}</strong> }.into_view(),
        })
        .collect_view()
}
