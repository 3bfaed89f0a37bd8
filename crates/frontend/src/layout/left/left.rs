use crate::layout::global_context::use_app_context;
use leptos::prelude::*;

#[component]
pub fn Left(children: Children) -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div data-zone="left" class="app-sidebar" class:app-sidebar--open=move || ctx.menu_open.get()>
            {children()}
        </div>
    }
}
