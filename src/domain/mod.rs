//! Domain layer for the simulated service layer
//!
//! This module contains the core models, errors and port traits.

pub mod errors;
pub mod models;
pub mod ports;

pub use errors::{ServiceError, ServiceResult};
