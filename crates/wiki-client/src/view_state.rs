//! Process-wide sidebar view state
//!
//! Four independent slots, each a pure set-to-payload reducer, no
//! cross-slot invariants. The sidebar toggle is a registered capability:
//! the owning scope registers a callback under a stable key at
//! initialization, consumers look it up instead of relying on a shared
//! mutable function slot.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Which panel the sidebar is showing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SidebarView {
    Welcome,
    #[default]
    List,
    SingleWikiDoc,
}

/// Sidebar view state consumed by presentation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub sidebar_open: bool,
    pub view: SidebarView,
    /// Correlation id for host dialog round trips
    pub trigger_id: String,
}

/// State transitions; every event just sets its slot to the payload value
#[derive(Debug, Clone)]
pub enum ViewEvent {
    SetSidebarOpen(bool),
    SetView(SidebarView),
    SetTriggerId(String),
}

impl ViewState {
    pub fn apply(&mut self, event: ViewEvent) {
        match event {
            ViewEvent::SetSidebarOpen(open) => self.sidebar_open = open,
            ViewEvent::SetView(view) => self.view = view,
            ViewEvent::SetTriggerId(trigger_id) => self.trigger_id = trigger_id,
        }
    }
}

type ToggleFn = Arc<dyn Fn() + Send + Sync>;

/// Registry of sidebar-toggle callbacks keyed by a stable string
#[derive(Default)]
pub struct ToggleRegistry {
    callbacks: RwLock<HashMap<String, ToggleFn>>,
}

impl ToggleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the toggle callback for a key.
    pub fn register(&self, key: impl Into<String>, callback: impl Fn() + Send + Sync + 'static) {
        self.callbacks
            .write()
            .expect("toggle registry poisoned")
            .insert(key.into(), Arc::new(callback));
    }

    pub fn unregister(&self, key: &str) {
        self.callbacks
            .write()
            .expect("toggle registry poisoned")
            .remove(key);
    }

    /// Invoke the callback registered under `key`. Returns false when no
    /// callback is registered there.
    pub fn toggle(&self, key: &str) -> bool {
        let callback = self
            .callbacks
            .read()
            .expect("toggle registry poisoned")
            .get(key)
            .cloned();
        match callback {
            Some(callback) => {
                callback();
                true
            }
            None => false,
        }
    }
}
