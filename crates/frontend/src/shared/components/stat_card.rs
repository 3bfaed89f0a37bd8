use crate::shared::icons::icon;
use leptos::prelude::*;

/// KPI card: icon, label, value and a change line.
#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: String,
    /// Icon name from the icon() helper
    #[prop(into)]
    icon_name: String,
    /// Already formatted value, e.g. "45,678"
    #[prop(into)]
    value: String,
    /// Change text, e.g. "+12.5%"
    #[prop(into)]
    change: String,
    /// Icon for the change line
    #[prop(into)]
    change_icon: String,
    /// Theme colour of the change line
    #[prop(into)]
    change_color: String,
    /// Background modifier, e.g. "gradient-bg-2"
    #[prop(optional, into)]
    background: Option<String>,
) -> impl IntoView {
    let class = match background {
        Some(bg) => format!("stat-card stat-card--{bg}"),
        None => "stat-card".to_string(),
    };

    view! {
        <div class=class>
            <div class="stat-card__icon">
                {icon(&icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{value}</div>
                <div class=format!("stat-card__change stat-card__change--{change_color}")>
                    {icon(&change_icon)}
                    <span>{change}</span>
                </div>
            </div>
        </div>
    }
}
