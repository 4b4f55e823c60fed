//! Climate document gateway HTTP application.
//!
//! Public modules exist for integration tests, which build the same state
//! and router as `main`.

pub mod constants;
pub mod data;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod services;
pub mod setup;
pub mod state;
pub mod telemetry;
