//! Visual theme for Finexus.

mod styles;

pub use styles::GLOBAL_STYLES;
