use leptos::*;

#[component]
pub fn StatCard(
    #[prop(into)] label: String,
    #[prop(into)] value: MaybeSignal<String>,
    #[prop(optional, into)] value_class: Option<String>,
) -> impl IntoView {
    let value_class = format!(
        "mt-1 text-2xl font-semibold {}",
        value_class.unwrap_or_else(|| "text-fg".into())
    );
    view! {
        <div class="bg-surface-elevated overflow-hidden shadow rounded-lg">
            <div class="px-4 py-5 sm:p-6">
                <dt class="text-sm font-medium text-fg-muted">{label}</dt>
                <dd class=value_class>{move || value.get()}</dd>
            </div>
        </div>
    }
}

/// Share shown as a number plus a bar; values are clamped to 0..=100.
#[component]
pub fn PercentCard(
    #[prop(into)] label: String,
    percent: f64,
    #[prop(optional, into)] bar_class: Option<String>,
) -> impl IntoView {
    let clamped = percent.clamp(0.0, 100.0);
    let bar_class = format!(
        "h-2 rounded-full {}",
        bar_class.unwrap_or_else(|| "bg-action-primary-bg".into())
    );
    view! {
        <div class="bg-surface-elevated overflow-hidden shadow rounded-lg">
            <div class="px-4 py-5 sm:p-6 space-y-2">
                <dt class="text-sm font-medium text-fg-muted">{label}</dt>
                <dd class="text-2xl font-semibold text-fg">
                    {crate::utils::format::format_percent(percent)}
                </dd>
                <div class="w-full h-2 rounded-full bg-surface-muted">
                    <div class=bar_class style=format!("width: {}%", clamped)></div>
                </div>
            </div>
        </div>
    }
}
