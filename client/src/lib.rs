//! # Moivon Client Library
//!
//! Core library for talking to the Moivon API from the terminal
//! application. This library provides endpoint building, the
//! authentication service calls, API error decoding, and the durable
//! session store.
//!
//! ## Modules
//!
//! - [`api`] - Endpoint URL building and the shared HTTP client
//! - [`auth`] - Authentication service calls and error types
//! - [`session`] - Session payload and durable session storage

pub mod api;
pub mod auth;
pub mod session;

pub use auth::{AuthError, AuthService, Credentials};
pub use session::{Session, SessionStore};
