use contracts::shared::config::AppConfig;
use leptos::prelude::*;

/// Shared UI state of the shell, provided through Leptos context.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    /// Sidebar visibility on narrow screens
    pub menu_open: RwSignal<bool>,
    pub config: StoredValue<AppConfig>,
}

impl AppGlobalContext {
    pub fn new(config: AppConfig) -> Self {
        Self {
            menu_open: RwSignal::new(false),
            config: StoredValue::new(config),
        }
    }

    pub fn toggle_menu(&self) {
        self.menu_open.update(|val| *val = !*val);
        leptos::logging::log!("☰ menu_open={}", self.menu_open.get_untracked());
    }

    pub fn close_menu(&self) {
        self.menu_open.set(false);
    }

    pub fn title(&self) -> String {
        self.config.with_value(|c| c.app.title.clone())
    }
}

pub fn use_app_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not found")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_starts_closed_and_toggles() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = AppGlobalContext::new(AppConfig::default());
            assert!(!ctx.menu_open.get_untracked());

            ctx.toggle_menu();
            assert!(ctx.menu_open.get_untracked());

            ctx.toggle_menu();
            assert!(!ctx.menu_open.get_untracked());

            ctx.toggle_menu();
            ctx.close_menu();
            assert!(!ctx.menu_open.get_untracked());
        });
    }

    #[test]
    fn test_title_from_config() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = AppGlobalContext::new(AppConfig::default());
            assert_eq!(ctx.title(), "Modern Demo App");
        });
    }
}
