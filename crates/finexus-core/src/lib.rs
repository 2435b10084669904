//! Finexus Core Library
//!
//! Schema-driven personal-finance records over a plain REST API.
//!
//! ## Overview
//!
//! Every dashboard category (assets, investments, crypto, wills, tax) is the
//! same thing: a form built from a field schema, a `GET` that returns the
//! whole collection, a `POST` that adds one record, and a total over the
//! category's monetary column. This crate holds that pattern; the desktop app
//! and the CLI only render it.
//!
//! ## Quick Start
//!
//! ```ignore
//! use finexus_core::{ApiConfig, Category, HttpApi, ResourceSection};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = HttpApi::new(ApiConfig::from_env()?)?;
//!     let mut section = ResourceSection::new(api, Category::Assets.section());
//!
//!     let mut form = section.config().form();
//!     form.set("name", "MacBook Pro")?;
//!     form.set("value", "1800")?;
//!     section.submit(&mut form).await?;
//!
//!     for card in section.cards() {
//!         println!("{}", card.lines().join(" | "));
//!     }
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod card;
pub mod category;
pub mod config;
pub mod draft;
pub mod error;
pub mod form;
pub mod format;
pub mod logging;
pub mod record;
pub mod schema;
pub mod section;

// Re-exports
pub use api::{HttpApi, RecordApi, ServiceStatus};
pub use card::RecordCard;
pub use category::Category;
pub use config::{ApiConfig, API_URL_ENV, DEFAULT_API_BASE, DEFAULT_TIMEOUT};
pub use draft::{Draft, DraftValue};
pub use error::{FinexusError, FinexusResult};
pub use form::FormModel;
pub use format::format_currency;
pub use record::{total, CategoryRecord, DEFAULT_MONETARY_KEYS};
pub use schema::{ColumnKind, ColumnSchema, FieldKind, FieldSchema};
pub use section::{
    add_record, load_records, AddConfig, LoadTicket, ResourceSection, SectionConfig, SectionPhase,
    SectionStore, StoreAccess,
};
