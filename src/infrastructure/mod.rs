//! Infrastructure layer implementing the domain's provider traits.
//!
//! - [`upstream`] - reqwest-based clients for the weather and exchange rate APIs

pub mod upstream;
