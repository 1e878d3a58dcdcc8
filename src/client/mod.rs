//! Client orchestrator for the proxy.
//!
//! Runs the weather → currency pipeline against the proxy and turns each step
//! into an explicit [`state::UiState`]. Rendering is a pure function of that
//! state, so any front-end (the `weather-client` binary, tests) can drive it.
//!
//! # Modules
//!
//! - [`api_client`] - [`api_client::ProxyClient`] trait and its HTTP implementation
//! - [`orchestrator`] - the two-stage pipeline
//! - [`state`] - UI state machine
//! - [`render`] - display model and formatting

pub mod api_client;
pub mod orchestrator;
pub mod render;
pub mod state;

pub use api_client::{ClientError, HttpProxyClient, ProxyClient};
pub use orchestrator::Orchestrator;
pub use render::{Display, render};
pub use state::UiState;
