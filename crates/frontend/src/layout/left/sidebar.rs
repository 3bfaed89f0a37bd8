//! Sidebar navigation built from the configured nav items

use crate::layout::global_context::use_app_context;
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_app_context();
    let items = ctx.config.with_value(|c| c.navigation.clone());

    view! {
        <nav class="app-sidebar__content">
            {items.into_iter().map(|item| {
                view! {
                    // A sets aria-current="page" on the active route
                    <A href=item.route attr:class="app-sidebar__item" on:click=move |_| ctx.close_menu()>
                        <div class="app-sidebar__item-content">
                            {icon(&item.icon)}
                            <span>{item.name}</span>
                        </div>
                    </A>
                }
            }).collect_view()}
        </nav>
    }
}
