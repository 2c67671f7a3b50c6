//! Add Idea Button Component
//!
//! Toggles add-idea mode; its label and colour follow the mode.

use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn AddIdeaButton() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    view! {
        <button
            type="button"
            id="addIdeaBtn"
            class=move || ctx.add_mode.get().button().class
            on:click=move |_| ctx.toggle_add_mode()
        >
            {move || ctx.add_mode.get().button().label}
        </button>
    }
}
