//! Page category constants for view standardization.
//!
//! Every routed view must declare:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"a100_team_member--list"`)
//!   - `data-page-category` with one of the constants below
//!
//! The `--` separator keeps the entity name searchable: copy the id from
//! the DOM Inspector, paste into IDE search, and you land in the
//! matching `domain/`, `dashboards/` or `system/` directory.

/// List of records (table).
pub const PAGE_CAT_LIST: &str = "list";

/// Analytical dashboard / chart view.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// System / preferences page.
pub const PAGE_CAT_SYSTEM: &str = "system";

/// All known category values.
pub const ALL_CATEGORIES: &[&str] = &[PAGE_CAT_LIST, PAGE_CAT_DASHBOARD, PAGE_CAT_SYSTEM];

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    let parts: Vec<&str> = id.splitn(2, "--").collect();
    parts.len() == 2 && !parts[0].is_empty() && !parts[1].is_empty()
}

/// Return true if the category value is recognised.
pub fn is_known_category(cat: &str) -> bool {
    ALL_CATEGORIES.contains(&cat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_ids() {
        assert!(is_valid_page_id("a100_team_member--list"));
        assert!(is_valid_page_id("d101_analytics--dashboard"));
        assert!(!is_valid_page_id("a100_team_member"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("settings--"));
    }

    #[test]
    fn test_categories() {
        assert!(is_known_category(PAGE_CAT_SYSTEM));
        assert!(!is_known_category("legacy"));
    }
}
