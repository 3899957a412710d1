//! New Todo Form Component
//!
//! Text input with submit button for adding todos.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::context::AppContext;

/// Form for creating new todos
#[component]
pub fn NewTodoForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let placeholder = ctx.config.with_value(|c| c.placeholder.clone());

    let (new_text, set_new_text) = signal(String::new());

    let create_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        // Blank input is ignored and left in place
        if ctx.add(&new_text.get_untracked()).is_some() {
            set_new_text.set(String::new());
        }
    };

    view! {
        <form class="new-todo-form" on:submit=create_todo>
            <input
                type="text"
                placeholder=placeholder
                prop:value=move || new_text.get()
                on:input=move |ev| {
                    if let Some(input) = ev
                        .target()
                        .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
                    {
                        set_new_text.set(input.value());
                    }
                }
            />
            <button type="submit" title="Add">"+"</button>
        </form>
    }
}
