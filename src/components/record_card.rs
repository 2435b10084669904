//! Card for one record: currency headline, then label/value rows.

use dioxus::prelude::*;
use finexus_core::RecordCard;

#[component]
pub fn RecordCardView(card: RecordCard) -> Element {
    rsx! {
        div { class: "record-card",
            if let Some(headline) = &card.headline {
                div { class: "record-headline", "{headline}" }
            }
            div { class: "record-rows",
                for (label, value) in card.rows.iter() {
                    div { class: "record-row",
                        span { class: "record-label", "{label}: " }
                        span { "{value}" }
                    }
                }
            }
        }
    }
}
