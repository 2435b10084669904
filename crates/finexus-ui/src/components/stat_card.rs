//! Stat Card
//!
//! Small glass card with a muted title, a large value and an optional
//! subtitle. Used for section totals and the dashboard summary strip.

use dioxus::prelude::*;

#[derive(Clone, PartialEq, Props)]
pub struct StatCardProps {
    pub title: String,
    pub value: String,
    #[props(default)]
    pub subtitle: Option<String>,
}

#[component]
pub fn StatCard(props: StatCardProps) -> Element {
    rsx! {
        div { class: "stat-card",
            div { class: "stat-title", "{props.title}" }
            div { class: "stat-value", "{props.value}" }
            if let Some(subtitle) = &props.subtitle {
                div { class: "stat-subtitle", "{subtitle}" }
            }
        }
    }
}
