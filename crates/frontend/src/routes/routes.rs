//! Routing table: four views plus a fallback to the default view.

use crate::dashboards::{AnalyticsDashboard, OverviewDashboard};
use crate::domain::a100_team_member::ui::list::TeamList;
use crate::layout::global_context::use_app_context;
use crate::layout::Shell;
use crate::system::settings::ui::SettingsPage;
use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

/// Routed views of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Analytics,
    Team,
    Settings,
}

impl Page {
    pub fn all() -> [Page; 4] {
        [Page::Dashboard, Page::Analytics, Page::Team, Page::Settings]
    }

    pub fn path(&self) -> &'static str {
        match self {
            Page::Dashboard => "/dashboard",
            Page::Analytics => "/analytics",
            Page::Team => "/team",
            Page::Settings => "/settings",
        }
    }

    /// Exact path match; `""`, `/` and unknown paths give `None`.
    pub fn from_path(path: &str) -> Option<Page> {
        Page::all().into_iter().find(|p| p.path() == path)
    }

    /// Route the user lands on for `path`, falling back to `default`.
    pub fn resolve(path: &str, default: Page) -> Page {
        Page::from_path(path).unwrap_or(default)
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let ctx = use_app_context();
    let default_route = ctx.config.with_value(|c| c.app.default_route.clone());
    let fallback = Page::resolve(&default_route, Page::Dashboard).path();
    if Page::from_path(&default_route).is_none() {
        log::warn!("default_route '{}' has no view, using {}", default_route, fallback);
    }

    view! {
        <Router>
            <Shell>
                <Routes fallback=move || view! { <Redirect path=fallback /> }>
                    <Route path=path!("/") view=move || view! { <Redirect path=fallback /> } />
                    <Route path=path!("/dashboard") view=OverviewDashboard />
                    <Route path=path!("/analytics") view=AnalyticsDashboard />
                    <Route path=path!("/team") view=TeamList />
                    <Route path=path!("/settings") view=SettingsPage />
                </Routes>
            </Shell>
        </Router>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_paths() {
        for page in Page::all() {
            assert_eq!(Page::from_path(page.path()), Some(page));
        }
    }

    #[test]
    fn test_fallback_to_default() {
        assert_eq!(Page::resolve("", Page::Dashboard), Page::Dashboard);
        assert_eq!(Page::resolve("/", Page::Dashboard), Page::Dashboard);
        assert_eq!(Page::resolve("/projects", Page::Dashboard), Page::Dashboard);
        assert_eq!(Page::resolve("/Team", Page::Dashboard), Page::Dashboard);
        assert_eq!(Page::resolve("/team/", Page::Dashboard), Page::Dashboard);
        assert_eq!(Page::resolve("/team", Page::Dashboard), Page::Team);
        assert_eq!(Page::resolve("/nowhere", Page::Settings), Page::Settings);
    }
}
