//! API context for Finexus.
//!
//! The [`HttpApi`] is built once in `main` from the resolved configuration
//! and handed to the launch builder; components read it with [`use_api`].
//!
//! ## Usage
//!
//! ```ignore
//! let api = use_api();
//! spawn(async move {
//!     let records = api.list("/assets").await;
//! });
//! ```

use dioxus::prelude::*;
use finexus_core::HttpApi;

/// Hook to access the API client from context.
pub fn use_api() -> HttpApi {
    use_context::<HttpApi>()
}
