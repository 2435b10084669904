//! Page components for Finexus.

mod dashboard;
mod diagnostics;
mod landing;
mod not_found;

pub use dashboard::Dashboard;
pub use diagnostics::Diagnostics;
pub use landing::Landing;
pub use not_found::NotFound;
