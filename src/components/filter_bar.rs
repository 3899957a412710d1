//! Filter Bar Component
//!
//! All / Active / Completed selector buttons.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::models::Filter;

/// Filter selector buttons
#[component]
pub fn FilterBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <div class="filter-bar">
            {Filter::ALL.into_iter().map(|filter| {
                let is_selected = move || ctx.filter() == filter;
                view! {
                    <button
                        type="button"
                        class=move || if is_selected() { "filter-btn active" } else { "filter-btn" }
                        on:click=move |_| ctx.set_filter(filter)
                    >
                        {filter.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
