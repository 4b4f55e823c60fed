//! Clima Core Library
//!
//! This crate provides core domain models, error types, and configuration
//! that are shared across all gateway components.

pub mod config;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use config::{
    BaseConfig, ClimateValidationConfig, Config, FileUploadConfig, GatewayConfig,
};
pub use error::{AppError, ErrorMetadata, LogLevel};
