//! # Moivon UI Library
//!
//! Terminal front-end for the Moivon events platform. This library
//! provides a tui-realm application around the login workflow: form
//! validation, credential submission, notification toasts, session
//! persistence, and navigation to the authenticated routes.
//!
//! ## Modules
//!
//! - [`app`] - Main application logic and component orchestration
//! - [`components`] - UI components and message handling
//! - [`config`] - Configuration management
//! - [`constants`] - Fixed names, durations, and message literals
//! - [`error`] - Error types for the UI layer
//! - [`logger`] - Logging configuration
//! - [`services`] - Login workflow, auth strategies, and notifications
//! - [`theme`] - Color palette
//! - [`validation`] - Input validation
//!
//! This library interface enables integration testing by providing access
//! to internal modules.

pub mod app;
pub mod components;
pub mod config;
pub mod constants;
pub mod error;
pub mod logger;
pub mod services;
pub mod theme;
pub mod validation;

// Re-export commonly used types for easier access in tests
pub use error::AppError;

// Re-export the Msg type that tests commonly need
pub use components::common::Msg;

// Re-export validation trait for broader use
pub use validation::Validator;
