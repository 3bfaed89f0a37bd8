use thaw::BadgeColor;

/// Maps a theme colour name ("primary" / "accent" / "warn") onto a thaw badge colour.
/// Anything else is rendered as informative.
pub fn badge_color(theme_color: &str) -> BadgeColor {
    match theme_color {
        "primary" => BadgeColor::Brand,
        "accent" => BadgeColor::Success,
        "warn" => BadgeColor::Warning,
        _ => BadgeColor::Informative,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::classification::ThemeColor;

    #[test]
    fn test_theme_colors() {
        assert!(matches!(badge_color(ThemeColor::Primary.as_str()), BadgeColor::Brand));
        assert!(matches!(badge_color(ThemeColor::Accent.as_str()), BadgeColor::Success));
        assert!(matches!(badge_color(ThemeColor::Warn.as_str()), BadgeColor::Warning));
    }

    #[test]
    fn test_unknown_color_is_informative() {
        assert!(matches!(badge_color(""), BadgeColor::Informative));
        assert!(matches!(badge_color("Primary"), BadgeColor::Informative));
    }
}
