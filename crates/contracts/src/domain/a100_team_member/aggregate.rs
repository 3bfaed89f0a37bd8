use crate::shared::classification::{department_color, PresenceStatus};
use crate::shared::validation::{is_email_shape, DataError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Columns of the team table, in display order.
pub const TEAM_TABLE_COLUMNS: [&str; 7] = [
    "name",
    "role",
    "department",
    "status",
    "projects",
    "tasks",
    "actions",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: u32,
    pub name: String,
    pub role: String,
    pub department: String,
    /// Initials, at most 3 characters
    pub avatar: String,
    pub email: String,
    pub status: PresenceStatus,
    pub projects: u32,
    pub tasks_completed: u32,
}

impl TeamMember {
    pub fn status_icon(&self) -> &'static str {
        self.status.icon()
    }

    pub fn status_color(&self) -> &'static str {
        self.status.color().as_str()
    }

    pub fn department_color(&self) -> &'static str {
        department_color(self.department.as_str())
    }

    fn validate(&self) -> Result<(), DataError> {
        if self.id == 0 {
            return Err(DataError::ZeroMemberId);
        }
        if !is_email_shape(&self.email) {
            return Err(DataError::BadEmail {
                name: self.name.clone(),
                email: self.email.clone(),
            });
        }
        if self.avatar.chars().count() > 3 {
            return Err(DataError::AvatarTooLong {
                name: self.name.clone(),
                avatar: self.avatar.clone(),
            });
        }
        Ok(())
    }
}

/// Состав команды
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamRoster {
    pub team_members: Vec<TeamMember>,
}

#[allow(clippy::too_many_arguments)]
fn member(
    id: u32,
    name: &str,
    role: &str,
    department: &str,
    avatar: &str,
    status: PresenceStatus,
    projects: u32,
    tasks_completed: u32,
) -> TeamMember {
    // sarah.johnson@company.com
    let email = format!("{}@company.com", name.to_lowercase().replace(' ', "."));
    TeamMember {
        id,
        name: name.to_string(),
        role: role.to_string(),
        department: department.to_string(),
        avatar: avatar.to_string(),
        email,
        status,
        projects,
        tasks_completed,
    }
}

impl TeamRoster {
    pub fn seeded() -> Self {
        use PresenceStatus::*;
        Self {
            team_members: vec![
                member(1, "Sarah Johnson", "Frontend Developer", "Engineering", "SJ", Online, 3, 28),
                member(2, "Mike Chen", "Backend Developer", "Engineering", "MC", Online, 2, 35),
                member(3, "Emily Davis", "UX Designer", "Design", "ED", Away, 4, 22),
                member(4, "Alex Rodriguez", "Product Manager", "Product", "AR", Online, 5, 18),
                member(5, "Lisa Wang", "Data Scientist", "Analytics", "LW", Offline, 2, 31),
                member(6, "David Brown", "DevOps Engineer", "Engineering", "DB", Online, 3, 26),
            ],
        }
    }

    pub fn find(&self, id: u32) -> Option<&TeamMember> {
        self.team_members.iter().find(|m| m.id == id)
    }

    pub fn count_with_status(&self, status: PresenceStatus) -> usize {
        self.team_members.iter().filter(|m| m.status == status).count()
    }

    pub fn total_tasks_completed(&self) -> u32 {
        self.team_members.iter().map(|m| m.tasks_completed).sum()
    }

    pub fn validate(&self) -> Result<(), DataError> {
        let mut seen = HashSet::new();
        for m in &self.team_members {
            m.validate()?;
            if !seen.insert(m.id) {
                return Err(DataError::DuplicateMemberId(m.id));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_members() {
        let roster = TeamRoster::seeded();
        assert_eq!(roster.team_members.len(), 6);
        let emily = roster.find(3).unwrap();
        assert_eq!(emily.name, "Emily Davis");
        assert_eq!(emily.email, "emily.davis@company.com");
        assert_eq!(emily.status, PresenceStatus::Away);
        assert_eq!(emily.projects, 4);
        assert_eq!(emily.tasks_completed, 22);
        assert_eq!(roster.find(5).unwrap().department, "Analytics");
        assert!(roster.find(7).is_none());
    }

    #[test]
    fn test_columns() {
        assert_eq!(
            TEAM_TABLE_COLUMNS,
            ["name", "role", "department", "status", "projects", "tasks", "actions"]
        );
    }

    #[test]
    fn test_seeded_is_valid() {
        assert_eq!(TeamRoster::seeded().validate(), Ok(()));
    }

    #[test]
    fn test_duplicate_id() {
        let mut roster = TeamRoster::seeded();
        roster.team_members[5].id = 2;
        assert_eq!(roster.validate(), Err(DataError::DuplicateMemberId(2)));
    }

    #[test]
    fn test_bad_member_fields() {
        let mut roster = TeamRoster::seeded();
        roster.team_members[0].email = "not-an-email".into();
        assert!(matches!(roster.validate(), Err(DataError::BadEmail { .. })));

        let mut roster = TeamRoster::seeded();
        roster.team_members[0].avatar = "SJXX".into();
        assert!(matches!(
            roster.validate(),
            Err(DataError::AvatarTooLong { .. })
        ));

        let mut roster = TeamRoster::seeded();
        roster.team_members[0].id = 0;
        assert_eq!(roster.validate(), Err(DataError::ZeroMemberId));
    }

    #[test]
    fn test_status_counts() {
        let roster = TeamRoster::seeded();
        assert_eq!(roster.count_with_status(PresenceStatus::Online), 4);
        assert_eq!(roster.count_with_status(PresenceStatus::Away), 1);
        assert_eq!(roster.count_with_status(PresenceStatus::Offline), 1);
        assert_eq!(roster.total_tasks_completed(), 160);
    }

    #[test]
    fn test_member_colors() {
        let roster = TeamRoster::seeded();
        let lisa = roster.find(5).unwrap();
        assert_eq!(lisa.status_icon(), "radio_button_unchecked");
        assert_eq!(lisa.status_color(), "warn");
        assert_eq!(lisa.department_color(), "primary");
        let alex = roster.find(4).unwrap();
        assert_eq!(alex.department_color(), "warn");
        assert_eq!(alex.status_icon(), "radio_button_checked");
    }

    #[test]
    fn test_status_json() {
        let roster = TeamRoster::seeded();
        let json = serde_json::to_value(&roster.team_members[2]).unwrap();
        assert_eq!(json["status"], "away");
        assert_eq!(json["tasksCompleted"], 22);
    }
}
