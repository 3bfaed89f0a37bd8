use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use contracts::shared::config::{load_config, AppConfig};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = load_config().unwrap_or_else(|err| {
        log::error!("Failed to load configuration: {err:#}");
        AppConfig::default()
    });

    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        document.set_title(&config.app.title);
    }

    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new(config));

    view! {
        <AppRoutes />
    }
}
