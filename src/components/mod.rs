//! UI Components for Finexus.

mod dynamic_form;
mod record_card;
mod resource_section;

pub use dynamic_form::DynamicForm;
pub use record_card::RecordCardView;
pub use resource_section::ResourceSection;
