use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub app: AppSection,
    #[serde(default)]
    pub navigation: Vec<NavItem>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppSection {
    pub title: String,
    /// Route used for `""` and for every path without a view.
    pub default_route: String,
}

/// Пункт бокового меню.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct NavItem {
    pub name: String,
    pub route: String,
    pub icon: String,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[app]
title = "Modern Demo App"
default_route = "/dashboard"

[[navigation]]
name = "Dashboard"
route = "/dashboard"
icon = "dashboard"

[[navigation]]
name = "Analytics"
route = "/analytics"
icon = "analytics"

[[navigation]]
name = "Projects"
route = "/projects"
icon = "work"

[[navigation]]
name = "Team"
route = "/team"
icon = "people"

[[navigation]]
name = "Settings"
route = "/settings"
icon = "settings"
"#;

impl Default for AppConfig {
    /// Minimal config without navigation, used when the embedded one fails to parse.
    fn default() -> Self {
        Self {
            app: AppSection {
                title: "Modern Demo App".to_string(),
                default_route: "/dashboard".to_string(),
            },
            navigation: Vec::new(),
        }
    }
}

impl AppConfig {
    pub fn from_toml(contents: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(contents)?;
        if !config.app.default_route.starts_with('/') {
            anyhow::bail!(
                "default_route must be an absolute path, got '{}'",
                config.app.default_route
            );
        }
        Ok(config)
    }
}

/// Load the embedded configuration.
///
/// A browser bundle has no config file next to it, so the embedded
/// default is the only source.
pub fn load_config() -> anyhow::Result<AppConfig> {
    log::debug!("Using default embedded configuration");
    AppConfig::from_toml(DEFAULT_CONFIG)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = load_config();
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.app.title, "Modern Demo App");
        assert_eq!(config.app.default_route, "/dashboard");
    }

    #[test]
    fn test_default_navigation() {
        let config = load_config().unwrap();
        let routes: Vec<&str> = config.navigation.iter().map(|n| n.route.as_str()).collect();
        assert_eq!(
            routes,
            vec!["/dashboard", "/analytics", "/projects", "/team", "/settings"]
        );
        assert_eq!(config.navigation[2].icon, "work");
    }

    #[test]
    fn test_navigation_is_optional() {
        let config = AppConfig::from_toml(
            r#"
            [app]
            title = "Custom"
            default_route = "/team"
            "#,
        )
        .unwrap();
        assert_eq!(config.app.title, "Custom");
        assert!(config.navigation.is_empty());
    }

    #[test]
    fn test_default_matches_embedded_app_section() {
        let embedded = load_config().unwrap();
        assert_eq!(AppConfig::default().app, embedded.app);
    }

    #[test]
    fn test_relative_default_route_rejected() {
        let result = AppConfig::from_toml(
            r#"
            [app]
            title = "Custom"
            default_route = "team"
            "#,
        );
        assert!(result.is_err());
    }
}
