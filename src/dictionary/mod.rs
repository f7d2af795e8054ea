//! Free Dictionary API access: response model, error classification, the
//! HTTP client and the task spawner that feeds lookup results back into the
//! event loop.

pub mod client;
pub mod error;
pub mod model;
pub mod service;
