//! Xeinst Core - Shared types library.
//!
//! This crate provides common types used across all Xeinst components:
//! - `web` - Public marketplace site (landing, explore, dashboard)
//! - `integration-tests` - HTTP-level test suite
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients, no
//! provider logic. This keeps it lightweight and allows it to be used
//! anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, emails,
//!   ratings, and roles

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
