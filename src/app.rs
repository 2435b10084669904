use dioxus::prelude::*;

use crate::pages::{Dashboard, Diagnostics, Landing, NotFound};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Marketing page
/// - `/app` - Dashboard with one tab per category
/// - `/test` - API connectivity check
/// - anything else - back to `/`
#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Landing {},
    #[route("/app")]
    Dashboard {},
    #[route("/test")]
    Diagnostics {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

/// Root application component.
///
/// Provides global styles and routing. The API client arrives as launch
/// context (see `main`).
#[component]
pub fn App() -> Element {
    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(path: &str) -> Option<Route> {
        path.parse::<Route>().ok()
    }

    #[test]
    fn known_paths() {
        assert_eq!(parse("/"), Some(Route::Landing {}));
        assert_eq!(parse("/app"), Some(Route::Dashboard {}));
        assert_eq!(parse("/test"), Some(Route::Diagnostics {}));
    }

    #[test]
    fn unknown_paths_fall_through_to_not_found() {
        assert_eq!(
            parse("/unknown-path"),
            Some(Route::NotFound {
                segments: vec!["unknown-path".to_string()]
            })
        );
        assert!(matches!(parse("/app/extra"), Some(Route::NotFound { .. })));
    }

    #[test]
    fn routes_render_their_paths() {
        assert_eq!(Route::Landing {}.to_string(), "/");
        assert_eq!(Route::Dashboard {}.to_string(), "/app");
        assert_eq!(Route::Diagnostics {}.to_string(), "/test");
    }
}
