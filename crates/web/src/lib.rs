//! Xeinst marketplace web library.
//!
//! This crate provides the marketplace site as a library, allowing it to
//! be tested and reused.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod models;
pub mod providers;
pub mod routes;
pub mod state;
pub mod views;
