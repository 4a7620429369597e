use leptos::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum BadgeTone {
    Success,
    Warning,
    Danger,
    Info,
    Primary,
    #[default]
    Outline,
}

impl BadgeTone {
    pub fn classes(&self) -> &'static str {
        match self {
            BadgeTone::Success => "bg-status-success-bg text-status-success-text border-status-success-border",
            BadgeTone::Warning => "bg-status-warning-bg text-status-warning-text border-status-warning-border",
            BadgeTone::Danger => "bg-status-error-bg text-status-error-text border-status-error-border",
            BadgeTone::Info => "bg-status-info-bg text-status-info-text border-status-info-border",
            BadgeTone::Primary => "bg-action-primary-bg/20 text-action-primary-bg border-action-primary-bg/30",
            BadgeTone::Outline => "bg-transparent text-fg border-border",
        }
    }
}

/// A label plus the tone it is drawn in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BadgeInfo {
    pub label: String,
    pub tone: BadgeTone,
}

impl BadgeInfo {
    pub fn new(label: impl Into<String>, tone: BadgeTone) -> Self {
        Self {
            label: label.into(),
            tone,
        }
    }
}

#[component]
pub fn Badge(#[prop(into)] label: String, #[prop(optional)] tone: BadgeTone) -> impl IntoView {
    view! {
        <span class=format!(
            "inline-flex items-center rounded-full border px-2.5 py-0.5 text-xs font-semibold {}",
            tone.classes()
        )>
            {label}
        </span>
    }
}

#[component]
pub fn StatusBadge(badge: BadgeInfo) -> impl IntoView {
    view! { <Badge label=badge.label tone=badge.tone /> }
}
