//! Finexus UI Components
//!
//! Presentational Dioxus widgets for the Finexus dashboard. They know nothing
//! about the finance API; data comes in through props and leaves through
//! event handlers.
//!
//! ## Look
//!
//! Frosted glass on a slate background:
//! - **Blue (#2563eb)**: primary actions, active tab
//! - **Slate (#0f172a / #475569)**: titles and body text
//! - **White at 60%**: cards, with a soft blur and hairline border

pub mod components;

pub use components::*;
