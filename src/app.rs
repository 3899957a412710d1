//! Todo Widget App
//!
//! Top-level component: owns the store and lays out the widget.

use leptos::prelude::*;

use crate::components::{FilterBar, NewTodoForm, TodoList};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::storage;
use crate::store::{browser_clock, TodoStore};

#[component]
pub fn App(#[prop(optional)] config: Option<AppConfig>) -> impl IntoView {
    let config = config.unwrap_or_default();
    let title = config.title.clone();

    // State
    let store = TodoStore::load(storage::open_default(), config.storage_key.clone(), browser_clock());
    let ctx = AppContext::new(store, config);

    // Provide context to all children
    provide_context(ctx);

    let items_left = move || match ctx.active_count() {
        1 => "1 item left".to_string(),
        n => format!("{} items left", n),
    };

    view! {
        <div class="todo-app">
            <h1>{title}</h1>

            <NewTodoForm />
            <FilterBar />
            <TodoList />

            <p class="item-count">{items_left}</p>
        </div>
    }
}
