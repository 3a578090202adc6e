use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTone {
    Primary,
    Success,
    Warning,
    Error,
    Neutral,
}

impl BadgeTone {
    fn class(&self) -> &'static str {
        match self {
            BadgeTone::Primary => "badge--primary",
            BadgeTone::Success => "badge--success",
            BadgeTone::Warning => "badge--warning",
            BadgeTone::Error => "badge--error",
            BadgeTone::Neutral => "badge--neutral",
        }
    }

    /// Colour of a workflow status code, shared by every record type.
    pub fn for_status(code: &str) -> Self {
        match code {
            "pending" | "new" | "draft" | "on_leave" => BadgeTone::Warning,
            "accepted" | "confirmed" | "completed" | "responded" | "published" | "active" => {
                BadgeTone::Success
            }
            "rejected" | "cancelled" | "suspended" | "inactive" => BadgeTone::Error,
            "under_review" | "waitlisted" | "read" | "graduated" => BadgeTone::Primary,
            _ => BadgeTone::Neutral,
        }
    }
}

#[component]
pub fn Badge(
    /// Colour; neutral when unset
    #[prop(optional)]
    tone: Option<BadgeTone>,
    children: Children,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let tone = tone.unwrap_or(BadgeTone::Neutral);
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <span class=move || format!("badge {} {}", tone.class(), additional_class())>
            {children()}
        </span>
    }
}

/// Badge showing a status code's label in the status colour.
#[component]
pub fn StatusBadge(
    /// Workflow status code, e.g. "pending"
    #[prop(into)]
    code: String,
    /// Text shown in the badge
    #[prop(into)]
    label: Signal<String>,
) -> impl IntoView {
    let tone = BadgeTone::for_status(&code);
    view! {
        <span class=format!("badge badge--status {}", tone.class())>
            {move || label.get()}
        </span>
    }
}
