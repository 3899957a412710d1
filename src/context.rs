//! Application Context
//!
//! Store handle provided via Leptos Context API.

use leptos::prelude::*;

use crate::config::AppConfig;
use crate::models::{Filter, Todo};
use crate::store::TodoStore;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// The todo store, owned by `App`
    store: StoredValue<TodoStore, LocalStorage>,
    /// Bumped by the store subscription after every change - read
    pub revision: ReadSignal<u32>,
    pub config: StoredValue<AppConfig>,
}

impl AppContext {
    /// Wrap `store` and subscribe the revision signal to its changes
    pub fn new(mut store: TodoStore, config: AppConfig) -> Self {
        let (revision, set_revision) = signal(0u32);
        store.subscribe(move |_| set_revision.update(|v| *v += 1));

        Self {
            store: StoredValue::new_local(store),
            revision,
            config: StoredValue::new(config),
        }
    }

    // ========================
    // Store operations
    // ========================

    pub fn add(&self, text: &str) -> Option<u64> {
        self.store.try_update_value(|s| s.add(text)).flatten()
    }

    pub fn toggle(&self, id: u64) {
        self.store.update_value(|s| {
            s.toggle(id);
        });
    }

    pub fn remove(&self, id: u64) {
        self.store.update_value(|s| {
            s.remove(id);
        });
    }

    pub fn set_filter(&self, filter: Filter) {
        self.store.update_value(|s| s.set_filter(filter));
    }

    // ========================
    // Tracked reads
    // ========================

    /// Visible todos; re-runs when the store changes
    pub fn visible(&self) -> Vec<Todo> {
        self.revision.track();
        self.store.with_value(|s| s.visible().cloned().collect())
    }

    pub fn filter(&self) -> Filter {
        self.revision.track();
        self.store.with_value(|s| s.filter())
    }

    pub fn active_count(&self) -> usize {
        self.revision.track();
        self.store.with_value(|s| s.active_count())
    }
}
