//! Dashboard - summary strip plus one tab per category.
//!
//! Only the active tab's section is mounted, so switching tabs reloads that
//! category from the API.

use dioxus::prelude::*;
use finexus_core::Category;
use finexus_ui::{StatCard, TabBar, TabItem};

use crate::app::Route;
use crate::components::ResourceSection;

#[component]
pub fn Dashboard() -> Element {
    let mut active = use_signal(|| Category::Assets);

    let tabs: Vec<TabItem> = Category::ALL
        .iter()
        .map(|c| TabItem::new(c.slug(), c.tab_label()))
        .collect();
    let current = active();

    let select_tab = move |slug: String| match slug.parse::<Category>() {
        Ok(category) => active.set(category),
        Err(e) => tracing::warn!("Ignoring tab selection: {}", e),
    };

    rsx! {
        div { class: "dashboard",
            header { class: "hero hero-compact",
                Link { class: "pill", to: Route::Landing {}, "Finexus \u{00B7} Smart finance, one dashboard" }
                h1 { class: "hero-title", "Unified Finance Dashboard" }
                p { class: "hero-text",
                    "Track assets, investments, crypto, wills and income tax in one workspace."
                }
            }

            div { class: "content",
                div { class: "summary-grid",
                    StatCard {
                        title: "Net Worth".to_string(),
                        value: "$\u{2014}".to_string(),
                        subtitle: "Sum of all categories".to_string(),
                    }
                    StatCard { title: "Investments".to_string(), value: "$\u{2014}".to_string() }
                    StatCard { title: "Crypto".to_string(), value: "$\u{2014}".to_string() }
                    StatCard { title: "Tax Status".to_string(), value: "On track".to_string() }
                }

                TabBar {
                    tabs: tabs,
                    selected: current.slug().to_string(),
                    on_select: select_tab,
                }

                div { class: "tab-content", role: "tabpanel",
                    ResourceSection { key: "{current.slug()}", config: current.section() }
                }
            }
        }
    }
}
