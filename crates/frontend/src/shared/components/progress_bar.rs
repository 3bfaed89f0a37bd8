use leptos::prelude::*;

/// Horizontal progress bar, value in percent.
#[component]
pub fn ProgressBar(
    /// 0..=100; values outside are clamped for drawing only
    value: f64,
    /// Theme colour: "primary", "accent", "warn"
    #[prop(into)]
    color: String,
) -> impl IntoView {
    let width = format!("width: {:.0}%;", value.clamp(0.0, 100.0));

    view! {
        <div
            class="progress"
            role="progressbar"
            aria-valuemin="0"
            aria-valuemax="100"
            aria-valuenow=value.to_string()
        >
            <div class=format!("progress__fill progress__fill--{color}") style=width></div>
        </div>
    }
}
