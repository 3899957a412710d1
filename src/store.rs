//! Todo Store
//!
//! Owns the todo list and the current filter. All mutations go through
//! `add`, `toggle`, `remove` and `set_filter`; list mutations are written
//! through to storage and every change is announced to subscribers.

use std::collections::HashSet;

use tracing::{debug, info, warn};

use crate::models::{Filter, Todo};
use crate::storage::{load_todos, save_todos, Storage};

/// Millisecond wall clock used to seed ids
pub type Clock = Box<dyn Fn() -> u64>;

/// `Date.now()`
pub fn browser_clock() -> Clock {
    Box::new(|| js_sys::Date::now() as u64)
}

/// A successful mutation, delivered to subscribers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    Added(u64),
    Toggled(u64),
    Removed(u64),
    FilterChanged(Filter),
}

type Listener = Box<dyn Fn(&Change)>;

pub struct TodoStore {
    todos: Vec<Todo>,
    filter: Filter,
    /// Highest id handed out or loaded
    last_id: u64,
    key: String,
    storage: Box<dyn Storage>,
    clock: Clock,
    listeners: Vec<Listener>,
}

impl TodoStore {
    /// Hydrate from `storage`, starting empty if nothing usable is stored
    pub fn load(storage: Box<dyn Storage>, key: impl Into<String>, clock: Clock) -> Self {
        let key = key.into();
        let loaded = load_todos(storage.as_ref(), &key);
        let total = loaded.len();

        // Keep the first occurrence of each id; blank text can never be entered
        let mut seen = HashSet::new();
        let todos: Vec<Todo> = loaded
            .into_iter()
            .filter(|t| !t.text.trim().is_empty() && seen.insert(t.id))
            .collect();
        if todos.len() < total {
            warn!("dropped {} todos with blank text or duplicate ids", total - todos.len());
        }

        let last_id = todos.iter().map(|t| t.id).max().unwrap_or(0);
        info!("loaded {} todos from {}", todos.len(), key);

        Self {
            todos,
            filter: Filter::default(),
            last_id,
            key,
            storage,
            clock,
            listeners: Vec::new(),
        }
    }

    /// Register a callback run after every successful mutation
    pub fn subscribe(&mut self, listener: impl Fn(&Change) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    // ========================
    // Mutations
    // ========================

    /// Append a todo. Returns its id, or `None` if `text` is blank or ids are exhausted.
    pub fn add(&mut self, text: &str) -> Option<u64> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let Some(id) = self.next_id() else {
            warn!("no ids left after {}, todo not added", self.last_id);
            return None;
        };
        self.todos.push(Todo::new(id, text));
        debug!("added todo {}", id);
        self.commit(Change::Added(id));
        Some(id)
    }

    /// Flip `completed` on the todo with `id`. Returns false if there is none.
    pub fn toggle(&mut self, id: u64) -> bool {
        let Some(todo) = self.todos.iter_mut().find(|t| t.id == id) else {
            return false;
        };
        todo.completed = !todo.completed;
        debug!("toggled todo {} -> completed={}", id, todo.completed);
        self.commit(Change::Toggled(id));
        true
    }

    /// Delete the todo with `id`. Returns false if there is none.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.todos.len();
        self.todos.retain(|t| t.id != id);
        if self.todos.len() == before {
            return false;
        }
        debug!("removed todo {}", id);
        self.commit(Change::Removed(id));
        true
    }

    /// Select which todos `visible` yields. Not persisted.
    pub fn set_filter(&mut self, filter: Filter) {
        if self.filter == filter {
            return;
        }
        self.filter = filter;
        debug!("filter -> {}", filter);
        self.notify(&Change::FilterChanged(filter));
    }

    // ========================
    // Queries
    // ========================

    #[cfg(test)]
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    /// Todos passing the current filter, in insertion order
    pub fn visible(&self) -> impl Iterator<Item = &Todo> + '_ {
        let filter = self.filter;
        self.todos.iter().filter(move |t| filter.matches(t))
    }

    pub fn active_count(&self) -> usize {
        self.todos.iter().filter(|t| !t.completed).count()
    }

    #[cfg(test)]
    pub fn completed_count(&self) -> usize {
        self.todos.len() - self.active_count()
    }

    // ========================
    // Internals
    // ========================

    /// Timestamp-seeded but strictly increasing, so same-tick adds never collide
    fn next_id(&mut self) -> Option<u64> {
        let id = (self.clock)().max(self.last_id.checked_add(1)?);
        self.last_id = id;
        Some(id)
    }

    fn commit(&self, change: Change) {
        if let Err(e) = save_todos(self.storage.as_ref(), &self.key, &self.todos) {
            warn!("could not persist todos: {}", e);
        }
        self.notify(&change);
    }

    fn notify(&self, change: &Change) {
        for listener in &self.listeners {
            listener(change);
        }
    }
}
