//! Resource Section - list, add form and running total for one category.
//!
//! Loads the whole collection on mount, posts the form payload on submit and
//! reloads afterwards, through the same core flows the CLI uses. Spawned
//! tasks belong to this component's scope, so nothing lands after unmount.

use dioxus::prelude::*;
use finexus_core::{
    add_record, format_currency, load_records, SectionConfig, SectionPhase,
    SectionStore, StoreAccess,
};
use finexus_ui::StatCard;
use serde_json::{Map, Value};

use crate::components::{DynamicForm, RecordCardView};
use crate::context::use_api;

/// Section store held in a signal; each update is one short write borrow.
#[derive(Clone, Copy)]
struct SignalStore(Signal<SectionStore>);

impl StoreAccess for SignalStore {
    fn update<R>(&mut self, f: impl FnOnce(&mut SectionStore) -> R) -> R {
        f(&mut *self.0.write())
    }
}

#[component]
pub fn ResourceSection(config: SectionConfig) -> Element {
    let api = use_api();
    let mut store = use_signal(|| SectionStore::for_config(&config));
    let list_path = config.add.list_path;

    // Load on mount
    let load_api = api.clone();
    use_effect(move || {
        let api = load_api.clone();
        spawn(async move {
            // failures are already on the banner
            load_records(&api, list_path, &mut SignalStore(store)).await.ok();
        });
    });

    let add = config.add.clone();
    let on_submit = move |payload: Map<String, Value>| {
        let api = api.clone();
        let add = add.clone();
        spawn(async move {
            // outcome is rendered from the store; a second submit is refused
            add_record(&api, &add, &mut SignalStore(store), payload).await.ok();
        });
    };

    let state = store.read();
    let total = format_currency(state.total());
    let cards = state.cards(&config.columns);
    let error = state.error().map(str::to_string);
    let loading = matches!(
        state.phase(),
        SectionPhase::Unloaded | SectionPhase::Loading
    );
    let submitting = state.is_submitting();
    drop(state);

    rsx! {
        section { class: "resource-section",
            div { class: "section-header",
                div {
                    h3 { class: "section-title", "{config.title}" }
                    p { class: "section-description", "{config.description}" }
                }
                StatCard { title: "Total".to_string(), value: total }
            }

            if let Some(message) = error {
                div { class: "error-banner", role: "alert",
                    span { "{message}" }
                    button {
                        class: "error-dismiss",
                        "aria-label": "Dismiss",
                        onclick: move |_| store.write().clear_error(),
                        "\u{00D7}"
                    }
                }
            }

            DynamicForm {
                fields: config.add.fields.clone(),
                cta: config.add.cta.to_string(),
                disabled: submitting,
                on_submit: on_submit,
            }

            if loading {
                div { class: "section-loading", "loading\u{2026}" }
            } else if cards.is_empty() {
                div { class: "section-empty", "Nothing here yet." }
            }

            div { class: "card-grid",
                for (idx, card) in cards.into_iter().enumerate() {
                    RecordCardView { key: "{idx}", card }
                }
            }
        }
    }
}
