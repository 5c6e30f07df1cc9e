//! Question Desk Core - Shared types library.
//!
//! This crate provides the common types used across all Question Desk
//! components:
//!
//! - `store` - The in-memory question store
//! - `web` - Server-rendered table/detail UI
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP, no async. This
//! keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, validated email addresses, and the fixed
//!   broker reference set

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
