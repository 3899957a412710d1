//! Todo List Component
//!
//! Renders the todos that pass the current filter.

use leptos::prelude::*;

use crate::components::TodoRow;
use crate::context::AppContext;

#[component]
pub fn TodoList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <ul class="todo-list">
            <For
                each=move || ctx.visible()
                // Completion is part of the key so a toggled row re-renders
                key=|todo| (todo.id, todo.completed)
                children=|todo| view! { <TodoRow todo=todo /> }
            />
        </ul>
    }
}
