//! Fallback for unknown paths: swap the URL for `/` and show the landing page.

use dioxus::prelude::*;

use crate::app::Route;
use crate::pages::Landing;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let navigator = use_navigator();
    let path = format!("/{}", segments.join("/"));

    use_effect(move || {
        tracing::debug!("Unknown path {}, redirecting to /", path);
        navigator.replace(Route::Landing {});
    });

    // Render the marketing page right away so there is never a blank frame
    rsx! {
        Landing {}
    }
}
