//! Todo Row Component
//!
//! A single entry in the todo list.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::models::Todo;

/// A single todo row with toggle and delete controls
#[component]
pub fn TodoRow(todo: Todo) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let id = todo.id;
    let completed = todo.completed;

    view! {
        <li class=if completed { "todo-row completed" } else { "todo-row" }>
            <button
                class="toggle-btn"
                title=if completed { "Mark as active" } else { "Mark as completed" }
                on:click=move |_| ctx.toggle(id)
            >
                {if completed { "●" } else { "○" }}
            </button>

            <span class="todo-text">{todo.text}</span>

            <button class="delete-btn" title="Delete" on:click=move |_| ctx.remove(id)>"×"</button>
        </li>
    }
}
