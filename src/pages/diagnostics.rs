//! Diagnostics - is the finance API reachable?
//!
//! Probes `GET {base}/` on mount and on every retry.

use dioxus::prelude::*;
use finexus_core::{FinexusResult, RecordApi, ServiceStatus};
use finexus_ui::{Button, ButtonVariant};

use crate::app::Route;
use crate::context::use_api;

/// Probe outcome, flattened for rendering.
#[derive(Clone, PartialEq)]
enum ProbeView {
    Pending,
    Reachable {
        status: u16,
        healthy: bool,
        body: Option<String>,
    },
    Unreachable(String),
}

impl ProbeView {
    fn from_result(result: &FinexusResult<ServiceStatus>) -> Self {
        match result {
            Ok(status) => ProbeView::Reachable {
                status: status.status,
                healthy: status.is_healthy(),
                body: status
                    .body
                    .as_ref()
                    .and_then(|b| serde_json::to_string_pretty(b).ok()),
            },
            Err(e) => ProbeView::Unreachable(e.to_string()),
        }
    }
}

#[component]
pub fn Diagnostics() -> Element {
    let api = use_api();
    let base_url = api.config().base_url().to_string();
    let mut attempt = use_signal(|| 0u32);
    let mut probe = use_signal(|| ProbeView::Pending);

    use_effect(move || {
        let round = attempt();
        let api = api.clone();
        probe.set(ProbeView::Pending);
        spawn(async move {
            let result = api.status().await;
            tracing::info!(round, ok = result.is_ok(), "API probe finished");
            probe.set(ProbeView::from_result(&result));
        });
    });

    rsx! {
        main { class: "diagnostics",
            div { class: "diagnostics-card",
                h1 { class: "page-title", "API connectivity" }
                p { class: "muted", "Base URL: "
                    code { "{base_url}" }
                }

                match probe() {
                    ProbeView::Pending => rsx! {
                        p { class: "probe probe-pending", "checking\u{2026}" }
                    },
                    ProbeView::Reachable { status, healthy, body } => rsx! {
                        p {
                            class: if healthy { "probe probe-ok" } else { "probe probe-warn" },
                            "Backend answered with HTTP {status}"
                        }
                        if let Some(body) = body {
                            pre { class: "probe-body", "{body}" }
                        }
                    },
                    ProbeView::Unreachable(message) => rsx! {
                        p { class: "probe probe-error", "Backend unreachable: {message}" }
                    },
                }

                div { class: "diagnostics-actions",
                    Button {
                        onclick: move |_| *attempt.write() += 1,
                        "Check again"
                    }
                    Link { class: ButtonVariant::Secondary.class().to_string(), to: Route::Dashboard {}, "Open App" }
                    Link { class: ButtonVariant::Secondary.class().to_string(), to: Route::Landing {}, "Home" }
                }
            }
        }
    }
}
