//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization and validator for query
//! validation. Response DTOs are also deserialized by [`crate::client`].

pub mod currency;
pub mod health;
pub mod weather;
