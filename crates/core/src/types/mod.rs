//! Core types for Question Desk.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod broker;
pub mod email;
pub mod id;

pub use broker::Broker;
pub use email::{Email, EmailError};
pub use id::*;
