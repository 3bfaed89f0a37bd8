use crate::shared::components::page_header::PageHeader;
use crate::shared::components::progress_bar::ProgressBar;
use crate::shared::components::stat_card::StatCard;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use contracts::dashboards::d101_analytics::AnalyticsSnapshot;
use contracts::shared::classification::ThemeColor;
use leptos::prelude::*;
use thaw::Card;

/// Colour cycle for traffic source bars.
const SLICE_COLORS: [ThemeColor; 3] = [ThemeColor::Primary, ThemeColor::Accent, ThemeColor::Warn];

#[component]
pub fn AnalyticsDashboard() -> impl IntoView {
    let snapshot = AnalyticsSnapshot::seeded();
    if let Err(err) = snapshot.validate() {
        log::warn!("d101 analytics data is inconsistent: {err}");
    }

    let cards = snapshot
        .analytics_cards
        .into_iter()
        .map(|card| {
            let change_icon = card.change_icon();
            let change_color = card.change_color();
            view! {
                <StatCard
                    label=card.title
                    icon_name=card.icon
                    value=card.value
                    change=card.change
                    change_icon=change_icon
                    change_color=change_color
                />
            }
        })
        .collect_view();

    let sources = snapshot
        .traffic_sources
        .into_iter()
        .enumerate()
        .map(|(i, s)| {
            let color = SLICE_COLORS[i % SLICE_COLORS.len()].as_str();
            view! {
                <div class="traffic-row">
                    <div class="traffic-row__head">
                        <span>{s.name}</span>
                        <span class="traffic-row__value">{format!("{:.0}%", s.value)}</span>
                    </div>
                    <ProgressBar value=s.value color=color />
                </div>
            }
        })
        .collect_view();

    view! {
        <PageFrame page_id="d101_analytics--dashboard" category=PAGE_CAT_DASHBOARD>
            <PageHeader title="Analytics" icon_name="analytics" subtitle="Traffic and conversion metrics">
                {()}
            </PageHeader>

            <div class="page__content">
                <div class="card-grid card-grid--4">
                    {cards}
                </div>

                <Card>
                    <h3 class="card__title">"Traffic Sources"</h3>
                    {sources}
                </Card>
            </div>
        </PageFrame>
    }
}
