//! Reusable UI components.
//!
//! Class names match the stylesheet shipped by the desktop app.

mod button;
mod input;
mod stat_card;
mod tab_bar;

pub use button::*;
pub use input::*;
pub use stat_card::*;
pub use tab_bar::*;
