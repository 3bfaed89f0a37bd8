use crate::shared::classification::project_status_color;
use crate::shared::validation::DataError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Summary card at the top of the overview dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardCard {
    pub title: String,
    pub value: String,
    pub icon: String,
    /// CSS gradient class, e.g. "gradient-bg-2"
    pub color: String,
    pub trend: String,
    pub trend_icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub action: String,
    pub user: String,
    /// Human readable, e.g. "5 minutes ago"
    pub time: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectStatus {
    pub name: String,
    /// 0..=100
    pub progress: f64,
    /// Free text; known values are "Completed", "In Progress", "Planning"
    pub status: String,
    pub due_date: NaiveDate,
}

impl ProjectStatus {
    pub fn color(&self) -> &'static str {
        project_status_color(self.status.as_str())
    }
}

/// Всё содержимое обзорного дашборда
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewSnapshot {
    pub dashboard_cards: Vec<DashboardCard>,
    pub recent_activities: Vec<ActivityEntry>,
    pub project_status: Vec<ProjectStatus>,
}

fn card(title: &str, value: &str, icon: &str, color: &str, trend: &str) -> DashboardCard {
    DashboardCard {
        title: title.to_string(),
        value: value.to_string(),
        icon: icon.to_string(),
        color: color.to_string(),
        trend: trend.to_string(),
        trend_icon: "trending_up".to_string(),
    }
}

fn activity(action: &str, user: &str, time: &str, icon: &str) -> ActivityEntry {
    ActivityEntry {
        action: action.to_string(),
        user: user.to_string(),
        time: time.to_string(),
        icon: icon.to_string(),
    }
}

fn project(name: &str, progress: f64, status: &str, due: (i32, u32, u32)) -> ProjectStatus {
    let due_date = NaiveDate::from_ymd_opt(due.0, due.1, due.2).unwrap_or_else(|| {
        log::warn!("project '{name}': invalid due date {:?}", due);
        NaiveDate::default()
    });
    ProjectStatus {
        name: name.to_string(),
        progress,
        status: status.to_string(),
        due_date,
    }
}

impl OverviewSnapshot {
    pub fn seeded() -> Self {
        Self {
            dashboard_cards: vec![
                card("Total Users", "2,451", "people", "gradient-bg", "+12%"),
                card("Revenue", "$54,679", "attach_money", "gradient-bg-2", "+8%"),
                card("Projects", "127", "work", "gradient-bg-3", "+3%"),
                card("Performance", "98.2%", "speed", "gradient-bg", "+0.5%"),
            ],
            recent_activities: vec![
                activity("New user registration", "John Doe", "5 minutes ago", "person_add"),
                activity("Project completed", "Sarah Wilson", "1 hour ago", "task_alt"),
                activity("System backup completed", "System", "2 hours ago", "backup"),
                activity("New order received", "Mike Johnson", "3 hours ago", "shopping_cart"),
            ],
            project_status: vec![
                project("Website Redesign", 85.0, "In Progress", (2024, 1, 15)),
                project("Mobile App Development", 60.0, "In Progress", (2024, 2, 28)),
                project("Database Migration", 100.0, "Completed", (2024, 1, 10)),
                project("API Integration", 35.0, "Planning", (2024, 3, 15)),
            ],
        }
    }

    pub fn validate(&self) -> Result<(), DataError> {
        for p in &self.project_status {
            if !(0.0..=100.0).contains(&p.progress) {
                return Err(DataError::ProgressOutOfRange {
                    name: p.name.clone(),
                    progress: p.progress,
                });
            }
            // 1970-01-01 is what `project` stores for an impossible date
            if p.due_date == NaiveDate::default() {
                return Err(DataError::MissingDueDate(p.name.clone()));
            }
        }
        Ok(())
    }

    /// Average progress over all projects, 0 when there are none.
    pub fn average_progress(&self) -> f64 {
        if self.project_status.is_empty() {
            return 0.0;
        }
        let total: f64 = self.project_status.iter().map(|p| p.progress).sum();
        total / self.project_status.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_shape() {
        let s = OverviewSnapshot::seeded();
        assert_eq!(s.dashboard_cards.len(), 4);
        assert_eq!(s.recent_activities.len(), 4);
        assert_eq!(s.project_status.len(), 4);
        assert_eq!(s.dashboard_cards[1].title, "Revenue");
        assert_eq!(s.dashboard_cards[1].color, "gradient-bg-2");
        assert!(s.dashboard_cards.iter().all(|c| c.trend_icon == "trending_up"));
        assert_eq!(s.recent_activities[2].user, "System");
    }

    #[test]
    fn test_seeded_is_valid() {
        assert_eq!(OverviewSnapshot::seeded().validate(), Ok(()));
    }

    #[test]
    fn test_progress_out_of_range() {
        let mut s = OverviewSnapshot::seeded();
        s.project_status[0].progress = 101.0;
        assert!(matches!(
            s.validate(),
            Err(DataError::ProgressOutOfRange { .. })
        ));
        s.project_status[0].progress = -1.0;
        assert!(s.validate().is_err());
    }

    #[test]
    fn test_impossible_due_date_is_reported() {
        let mut s = OverviewSnapshot::seeded();
        s.project_status
            .push(project("Quarter Close", 10.0, "Planning", (2024, 2, 30)));
        assert_eq!(
            s.validate(),
            Err(DataError::MissingDueDate("Quarter Close".to_string()))
        );
    }

    #[test]
    fn test_project_colors() {
        let s = OverviewSnapshot::seeded();
        let colors: Vec<&str> = s.project_status.iter().map(|p| p.color()).collect();
        assert_eq!(colors, vec!["accent", "accent", "primary", "warn"]);
    }

    #[test]
    fn test_due_dates() {
        let s = OverviewSnapshot::seeded();
        assert_eq!(
            s.project_status[2].due_date,
            NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()
        );
    }

    #[test]
    fn test_average_progress() {
        let s = OverviewSnapshot::seeded();
        assert_eq!(s.average_progress(), 70.0);
        let empty = OverviewSnapshot {
            project_status: vec![],
            ..s
        };
        assert_eq!(empty.average_progress(), 0.0);
    }

    #[test]
    fn test_serializes_camel_case() {
        let s = OverviewSnapshot::seeded();
        let json = serde_json::to_value(&s.project_status[0]).unwrap();
        assert_eq!(json["dueDate"], "2024-01-15");
        assert_eq!(json["status"], "In Progress");
    }
}
