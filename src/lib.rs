//! Travel Point Search
//!
//! Client-side logic for a travel-search form: classification of free-form
//! search input into typed point-lookup intents, URL-encoded query building,
//! date/time validation, data-source bounds display, and debounced
//! autocomplete for the source and destination fields. The remote
//! travel-search API is an external collaborator consumed over HTTP.

pub mod api;
pub mod config;
pub mod form;
pub mod intent;
pub mod query;
pub mod validation;

// Re-export commonly used types for convenience
pub use api::{HttpPointLookup, Point, PointLookup};
pub use config::FormConfig;
pub use form::{FormEvent, FormField, FormUpdate, TravelSearchForm};
pub use intent::{classify, SearchIntent};
pub use query::PointQuery;
pub use validation::{validate_date_time, ValidationError};
