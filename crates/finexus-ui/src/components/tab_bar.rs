//! Tab Bar Component
//!
//! Horizontal row of tab triggers. The active tab gets a white raised
//! background; switching is reported through `on_select`.

use dioxus::prelude::*;

/// One tab trigger.
#[derive(Clone, Debug, PartialEq)]
pub struct TabItem {
    /// Value reported when selected
    pub value: String,
    /// Visible label
    pub label: String,
}

impl TabItem {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Properties for the TabBar component
#[derive(Clone, PartialEq, Props)]
pub struct TabBarProps {
    pub tabs: Vec<TabItem>,
    /// Value of the active tab
    pub selected: String,
    pub on_select: EventHandler<String>,
}

/// Tab strip.
///
/// # Example
///
/// ```rust,ignore
/// let mut active = use_signal(|| "assets".to_string());
///
/// rsx! {
///     TabBar {
///         tabs: vec![TabItem::new("assets", "Assets"), TabItem::new("tax", "Income Tax")],
///         selected: active(),
///         on_select: move |value| active.set(value)
///     }
/// }
/// ```
#[component]
pub fn TabBar(props: TabBarProps) -> Element {
    rsx! {
        div { class: "tab-list", role: "tablist",
            for tab in props.tabs.iter() {
                {
                    let value = tab.value.clone();
                    let is_active = props.selected == tab.value;
                    let on_select = props.on_select;
                    rsx! {
                        button {
                            key: "{tab.value}",
                            class: tab_class(is_active),
                            role: "tab",
                            "aria-selected": if is_active { "true" } else { "false" },
                            onclick: move |_| on_select.call(value.clone()),
                            "{tab.label}"
                        }
                    }
                }
            }
        }
    }
}

fn tab_class(active: bool) -> &'static str {
    if active {
        "tab-trigger active"
    } else {
        "tab-trigger"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_item_new() {
        let tab = TabItem::new("tax", "Income Tax");
        assert_eq!(tab.value, "tax");
        assert_eq!(tab.label, "Income Tax");
    }

    #[test]
    fn active_tab_class() {
        assert_eq!(tab_class(true), "tab-trigger active");
        assert_eq!(tab_class(false), "tab-trigger");
    }
}
