use crate::shared::badge_color::badge_color;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::progress_bar::ProgressBar;
use crate::shared::components::stat_card::StatCard;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use contracts::dashboards::d100_overview::OverviewSnapshot;
use contracts::shared::classification::ThemeColor;
use leptos::prelude::*;
use thaw::{Badge, BadgeAppearance, Card};

#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let snapshot = OverviewSnapshot::seeded();
    if let Err(err) = snapshot.validate() {
        log::warn!("d100 overview data is inconsistent: {err}");
    }
    let average = format!("{:.0}% average progress", snapshot.average_progress());

    let cards = snapshot
        .dashboard_cards
        .into_iter()
        .map(|card| {
            view! {
                <StatCard
                    label=card.title
                    icon_name=card.icon
                    value=card.value
                    change=card.trend
                    change_icon=card.trend_icon
                    change_color=ThemeColor::Primary.as_str()
                    background=card.color
                />
            }
        })
        .collect_view();

    let activities = snapshot
        .recent_activities
        .into_iter()
        .map(|a| {
            view! {
                <li class="activity-list__item">
                    <div class="activity-list__icon">{icon(&a.icon)}</div>
                    <div class="activity-list__text">
                        <div class="activity-list__action">{a.action}</div>
                        <div class="activity-list__meta">{format!("{} · {}", a.user, a.time)}</div>
                    </div>
                </li>
            }
        })
        .collect_view();

    let projects = snapshot
        .project_status
        .into_iter()
        .map(|p| {
            let color = p.color();
            view! {
                <div class="project-row">
                    <div class="project-row__head">
                        <span class="project-row__name">{p.name.clone()}</span>
                        <Badge appearance=BadgeAppearance::Tint color=badge_color(color)>
                            {p.status.clone()}
                        </Badge>
                    </div>
                    <ProgressBar value=p.progress color=color />
                    <div class="project-row__meta">
                        <span>{format!("{:.0}%", p.progress)}</span>
                        <span>{format!("Due {}", format_date(p.due_date))}</span>
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <PageFrame page_id="d100_overview--dashboard" category=PAGE_CAT_DASHBOARD>
            <PageHeader title="Dashboard" icon_name="dashboard" subtitle="Overview of users, revenue and projects">
                {()}
            </PageHeader>

            <div class="page__content">
                <div class="card-grid card-grid--4">
                    {cards}
                </div>

                <div class="card-grid card-grid--2">
                    <Card>
                        <h3 class="card__title">"Recent Activity"</h3>
                        <ul class="activity-list">
                            {activities}
                        </ul>
                    </Card>

                    <Card>
                        <h3 class="card__title">"Project Status"</h3>
                        <div class="card__subtitle">{average}</div>
                        {projects}
                    </Card>
                </div>
            </div>
        </PageFrame>
    }
}
