pub mod d100_overview;
pub mod d101_analytics;

pub use d100_overview::ui::OverviewDashboard;
pub use d101_analytics::ui::AnalyticsDashboard;
