//! Global Application State
//!
//! Backend configuration and toast notifications shared by every view.
//! View-local state (upload form, chat) stays in its own component.

use leptos::*;

use crate::api::{self, GlooBackend};

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Analysis backend base URL, loaded once from local storage
    pub api_base: RwSignal<String>,
    /// Result of the last reachability check; `None` until one completes
    pub backend_online: RwSignal<Option<bool>>,
    /// Upload or connection notice shown by the toast
    pub notice: RwSignal<Option<Notice>>,
}

/// Which flow raised a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeTopic {
    Upload,
    Connection,
    Settings,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    /// Distinguishes a replaced notice from the one a timer was set for
    pub id: u64,
    pub topic: NoticeTopic,
    pub failed: bool,
    pub text: String,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        api_base: create_rw_signal(api::get_api_base()),
        backend_online: create_rw_signal(None),
        notice: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    /// Client for the current base URL
    pub fn backend(&self) -> GlooBackend {
        GlooBackend::new(&self.api_base.get_untracked())
    }

    /// Persist a new base URL; later requests use it
    pub fn save_api_base(&self, url: &str) {
        api::set_api_base(url);
        self.api_base.set(api::get_api_base());
        self.backend_online.set(None);
    }

    /// Show a notice for 3s
    pub fn show_success(&self, topic: NoticeTopic, message: &str) {
        self.post(topic, false, message, 3000);
    }

    /// Show a failure notice for 5s
    pub fn show_error(&self, topic: NoticeTopic, message: &str) {
        self.post(topic, true, message, 5000);
    }

    pub fn dismiss_notice(&self) {
        self.notice.set(None);
    }

    fn post(&self, topic: NoticeTopic, failed: bool, message: &str, millis: u32) {
        let id = self
            .notice
            .with_untracked(|n| n.as_ref().map_or(0, |n| n.id + 1));
        self.notice.set(Some(Notice {
            id,
            topic,
            failed,
            text: message.to_string(),
        }));

        let notice = self.notice;
        gloo_timers::callback::Timeout::new(millis, move || {
            if notice.with_untracked(|n| n.as_ref().map(|n| n.id)) == Some(id) {
                notice.set(None);
            }
        })
        .forget();
    }
}
