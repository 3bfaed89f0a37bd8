//! TopHeader component - application top bar with menu toggle and title.

use crate::layout::global_context::use_app_context;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_app_context();

    let toggle_menu = move |_| {
        ctx.toggle_menu();
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=toggle_menu
                    title=move || if ctx.menu_open.get() { "Hide navigation" } else { "Show navigation" }
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">{ctx.title()}</span>
            </div>

            <div class="top-header__actions">
                <button class="top-header__icon-btn" title="Notifications">
                    {icon("notifications")}
                </button>
            </div>
        </div>
    }
}
