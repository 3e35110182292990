//! Common test infrastructure
//!
//! Spawns a stub travel-search API over the same wire format the real
//! backend uses, so the client and form are exercised over actual HTTP.

// Not every test binary touches every helper.
#![allow(dead_code)]

mod fixtures;
mod server;

// Public API - this is what tests import
pub use fixtures::{BOOM_DATABASE, EMPTY_DATABASE, TEST_DATABASE};
pub use server::StubApiServer;
