use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::{Checkbox, Input, Select};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use contracts::system::settings::{Setting, SettingKind, SettingValue, SettingsPanel};
use leptos::prelude::*;
use thaw::*;

/// Converts raw text of a number field into a setting value.
///
/// Empty text clears the value, text that is not a number is kept as is.
fn number_input_value(raw: &str) -> SettingValue {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return SettingValue::Null;
    }
    match trimmed.parse::<f64>() {
        Ok(n) => SettingValue::Number(n),
        Err(_) => SettingValue::Text(raw.to_string()),
    }
}

fn control_id(category: &str, name: &str) -> String {
    format!("setting-{}-{}", category, name)
        .to_lowercase()
        .replace(' ', "-")
}

/// Writes a value into the panel through the unchecked mutator.
fn apply(panel: RwSignal<SettingsPanel>, category: &str, name: &str, value: SettingValue) {
    panel.update(|p| match p.find_mut(category, name) {
        Some(setting) => {
            setting.set_value(value);
        }
        None => log::warn!("settings: unknown setting {category}/{name}"),
    });
}

#[component]
fn SettingControl(panel: RwSignal<SettingsPanel>, category: String, setting: Setting) -> impl IntoView {
    let id = control_id(&category, &setting.name);
    let name = StoredValue::new(setting.name.clone());
    let category = StoredValue::new(category);
    let current = move || {
        panel.with(|p| {
            category.with_value(|c| name.with_value(|n| p.find(c, n).map(|s| s.value.clone())))
        })
    };

    match setting.kind {
        SettingKind::Boolean => {
            let checked = Signal::derive(move || current().and_then(|v| v.as_bool()).unwrap_or(false));
            view! {
                <Checkbox
                    id=id
                    label=setting.name
                    hint=setting.description
                    checked=checked
                    on_change=Callback::new(move |v: bool| {
                        apply(panel, &category.get_value(), &name.get_value(), SettingValue::Bool(v));
                    })
                />
            }
            .into_any()
        }
        SettingKind::Select => {
            let options: Vec<(String, String)> = setting
                .options
                .unwrap_or_default()
                .into_iter()
                .map(|o| (o.clone(), o))
                .collect();
            let value = Signal::derive(move || {
                current().map(|v| v.as_text().unwrap_or_default().to_string()).unwrap_or_default()
            });
            view! {
                <Select
                    id=id
                    label=setting.name
                    hint=setting.description
                    value=value
                    options=options
                    on_change=Callback::new(move |v: String| {
                        apply(panel, &category.get_value(), &name.get_value(), SettingValue::Text(v));
                    })
                />
            }
            .into_any()
        }
        SettingKind::Number => {
            let value = Signal::derive(move || match current() {
                Some(SettingValue::Null) | None => String::new(),
                Some(v) => v.to_string(),
            });
            view! {
                <Input
                    id=id
                    label=setting.name
                    hint=setting.description
                    input_type="number"
                    value=value
                    on_input=Callback::new(move |raw: String| {
                        apply(panel, &category.get_value(), &name.get_value(), number_input_value(&raw));
                    })
                />
            }
            .into_any()
        }
        SettingKind::Text => {
            let value = Signal::derive(move || match current() {
                Some(SettingValue::Null) | None => String::new(),
                Some(v) => v.to_string(),
            });
            view! {
                <Input
                    id=id
                    label=setting.name
                    hint=setting.description
                    value=value
                    on_input=Callback::new(move |raw: String| {
                        apply(panel, &category.get_value(), &name.get_value(), SettingValue::Text(raw));
                    })
                />
            }
            .into_any()
        }
    }
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    let seeded = SettingsPanel::seeded();
    if let Err(err) = seeded.validate() {
        log::warn!("settings panel is inconsistent: {err}");
    }
    let categories = seeded.setting_categories.clone();
    let panel = RwSignal::new(seeded);

    let sections = categories
        .into_iter()
        .map(|category| {
            let controls = category
                .settings
                .into_iter()
                .map(|setting| {
                    view! { <SettingControl panel=panel category=category.name.clone() setting=setting /> }
                })
                .collect_view();
            view! {
                <Card class="settings__category">
                    <h3 class="settings__category-title">
                        {icon(&category.icon)}
                        <span>{category.name.clone()}</span>
                    </h3>
                    <div class="settings__controls">{controls}</div>
                </Card>
            }
        })
        .collect_view();

    view! {
        <PageFrame page_id="settings--system" category=PAGE_CAT_SYSTEM>
            <PageHeader title="Settings" icon_name="settings" subtitle="Application preferences">
                <Space>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| {
                            panel.with_untracked(|p| p.reset_to_defaults());
                        }
                    >
                        {icon("restore")}
                        " Reset to Defaults"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| {
                            panel.with_untracked(|p| p.import_settings());
                        }
                    >
                        {icon("upload")}
                        " Import"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| {
                            panel.with_untracked(|p| p.export_settings());
                        }
                    >
                        {icon("download")}
                        " Export"
                    </Button>
                </Space>
            </PageHeader>

            <div class="page__content settings">
                {sections}
            </div>
        </PageFrame>
    }
}
