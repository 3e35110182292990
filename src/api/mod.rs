//! Client side of the travel-search HTTP API.

mod client;
mod models;

pub use client::{HttpPointLookup, PointLookup};
pub use models::*;
