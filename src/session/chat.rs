//! Conversation state with optimistic user entries.

use crate::backend::InsightsBackend;
use crate::error::ApiError;
use crate::models::{ChatMessage, ChatReply};

/// Assistant entry appended in place of a failed reply
pub const CHAT_FALLBACK_REPLY: &str = "Sorry, I encountered an error. Please try again.";

/// Append-only conversation plus the input box state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChatSession {
    pub messages: Vec<ChatMessage>,
    pub input: String,
    pub loading: bool,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Send button rule
    pub fn can_send(&self) -> bool {
        !self.loading && !self.input.trim().is_empty()
    }

    /// Append the user's message before any network work and return the
    /// query to send. Blank input is ignored.
    pub fn submit(&mut self) -> Option<String> {
        if self.input.trim().is_empty() {
            return None;
        }

        let query = std::mem::take(&mut self.input);
        self.messages.push(ChatMessage::user(query.clone()));
        self.loading = true;
        Some(query)
    }

    /// Append exactly one assistant entry for the pending query
    pub fn resolve(&mut self, result: Result<ChatReply, ApiError>) {
        let content = match result {
            Ok(reply) => reply.response,
            Err(e) => {
                tracing::warn!("Chat error: {}", e);
                CHAT_FALLBACK_REPLY.to_string()
            }
        };
        self.messages.push(ChatMessage::assistant(content));
        self.loading = false;
    }

    /// Submit the current input and wait for the reply
    pub async fn ask<B: InsightsBackend + ?Sized>(&mut self, backend: &B) -> bool {
        let Some(query) = self.submit() else {
            return false;
        };
        let result = backend.chat(&query).await;
        self.resolve(result);
        true
    }

    pub fn last_reply(&self) -> Option<&ChatMessage> {
        self.messages
            .last()
            .filter(|m| m.role == crate::models::Role::Assistant)
    }
}
