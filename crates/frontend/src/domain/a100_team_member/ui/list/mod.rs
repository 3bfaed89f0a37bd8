mod state;

use contracts::domain::a100_team_member::{TeamMember, TeamRoster, TEAM_TABLE_COLUMNS};
use contracts::shared::classification::PresenceStatus;
use leptos::prelude::*;
use std::cmp::Ordering;
use thaw::*;

use crate::shared::badge_color::badge_color;
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    filter_list, get_sort_class, get_sort_indicator, sort_list, Searchable, Sortable,
};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use state::create_state;

const TABLE_ID: &str = "a100-team-member-table";

impl Sortable for TeamMember {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
            "role" => self.role.to_lowercase().cmp(&other.role.to_lowercase()),
            "department" => self.department.cmp(&other.department),
            "status" => self.status.as_str().cmp(other.status.as_str()),
            "projects" => self.projects.cmp(&other.projects),
            "tasks" => self.tasks_completed.cmp(&other.tasks_completed),
            _ => self.id.cmp(&other.id),
        }
    }
}

impl Searchable for TeamMember {
    fn matches_filter(&self, filter: &str) -> bool {
        let filter = filter.to_lowercase();
        [&self.name, &self.role, &self.department, &self.email]
            .iter()
            .any(|v| v.to_lowercase().contains(&filter))
    }
}

/// Заголовок колонки таблицы
fn column_title(column: &str) -> &'static str {
    match column {
        "name" => "Name",
        "role" => "Role",
        "department" => "Department",
        "status" => "Status",
        "projects" => "Projects",
        "tasks" => "Tasks Completed",
        "actions" => "Actions",
        _ => "",
    }
}

fn is_sortable(column: &str) -> bool {
    column != "actions"
}

#[component]
pub fn TeamList() -> impl IntoView {
    let roster = TeamRoster::seeded();
    if let Err(err) = roster.validate() {
        log::warn!("a100 team roster is inconsistent: {err}");
    }

    let summary = PresenceStatus::all()
        .into_iter()
        .map(|status| {
            let count = roster.count_with_status(status);
            view! {
                <Badge appearance=BadgeAppearance::Tint color=badge_color(status.color().as_str())>
                    {format!("{}: {}", status.as_str(), count)}
                </Badge>
            }
        })
        .collect_view();
    let total_tasks = roster.total_tasks_completed();

    let state = create_state(roster.team_members);

    let visible_items = move || {
        let s = state.get();
        let mut items = filter_list(s.items, &s.search_query);
        sort_list(&mut items, &s.sort_field, s.sort_ascending);
        items
    };

    let toggle_sort = move |field: &'static str| {
        move |_: leptos::ev::MouseEvent| {
            state.update(|s| {
                if s.sort_field == field {
                    s.sort_ascending = !s.sort_ascending;
                } else {
                    s.sort_field = field.to_string();
                    s.sort_ascending = true;
                }
            });
        }
    };

    let header_cells = TEAM_TABLE_COLUMNS
        .into_iter()
        .map(|column| {
            if is_sortable(column) {
                view! {
                    <TableHeaderCell>
                        <div class="table__sortable-header" style="cursor:pointer;" on:click=toggle_sort(column)>
                            {column_title(column)}
                            <span class=move || state.with(|s| get_sort_class(&s.sort_field, column))>
                                {move || state.with(|s| get_sort_indicator(&s.sort_field, column, s.sort_ascending))}
                            </span>
                        </div>
                    </TableHeaderCell>
                }
                .into_any()
            } else {
                view! { <TableHeaderCell>{column_title(column)}</TableHeaderCell> }.into_any()
            }
        })
        .collect_view();

    view! {
        <PageFrame page_id="a100_team_member--list" category=PAGE_CAT_LIST>
            <PageHeader title="Team" icon_name="people" subtitle=format!("{} tasks completed", total_tasks)>
                <Space>{summary}</Space>
            </PageHeader>

            <div class="page__content">
                <div class="filter-panel">
                    <input
                        type="text"
                        class="form__input"
                        placeholder="Search name, role, department, email..."
                        prop:value=move || state.with(|s| s.search_query.clone())
                        on:input=move |ev| {
                            let query = event_target_value(&ev);
                            state.update(|s| s.search_query = query);
                        }
                    />
                </div>

                <Table attr:id=TABLE_ID attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            {header_cells}
                        </TableRow>
                    </TableHeader>

                    <TableBody>
                        <For
                            each=visible_items
                            key=|m| m.id
                            children=move |member: TeamMember| {
                                let status_icon = member.status_icon();
                                let status_color = member.status_color();
                                let department_color = member.department_color();
                                let mailto = format!("mailto:{}", member.email);
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                <div class="member">
                                                    <span class="member__avatar">{member.avatar.clone()}</span>
                                                    <div>
                                                        <div style="font-weight: 500;">{member.name.clone()}</div>
                                                        <div class="member__email">{member.email.clone()}</div>
                                                    </div>
                                                </div>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>{member.role.clone()}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <Badge appearance=BadgeAppearance::Tint color=badge_color(department_color)>
                                                    {member.department.clone()}
                                                </Badge>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <span class=format!("presence presence--{status_color}")>
                                                    {icon(status_icon)}
                                                    <span>{member.status.as_str()}</span>
                                                </span>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell class="text-right">
                                            <TableCellLayout>{member.projects}</TableCellLayout>
                                        </TableCell>
                                        <TableCell class="text-right">
                                            <TableCellLayout>{member.tasks_completed}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <a class="table__action" href=mailto title="Send email">
                                                    {icon("email")}
                                                </a>
                                            </TableCellLayout>
                                        </TableCell>
                                    </TableRow>
                                }
                            }
                        />
                    </TableBody>
                </Table>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_by_tasks_descending() {
        let mut items = TeamRoster::seeded().team_members;
        sort_list(&mut items, "tasks", false);
        assert_eq!(items[0].name, "Mike Chen");
        assert_eq!(items[5].name, "Alex Rodriguez");
    }

    #[test]
    fn test_search_matches_department_and_email() {
        let items = TeamRoster::seeded().team_members;
        let design = filter_list(items.clone(), "design");
        // "UX Designer" role and "Design" department are the same person
        assert_eq!(design.len(), 1);
        assert_eq!(design[0].id, 3);
        let by_mail = filter_list(items, "lisa.wang@");
        assert_eq!(by_mail.len(), 1);
    }

    #[test]
    fn test_column_titles() {
        for column in TEAM_TABLE_COLUMNS {
            assert!(!column_title(column).is_empty(), "{column}");
        }
        assert!(!is_sortable("actions"));
        assert!(is_sortable("tasks"));
    }
}
