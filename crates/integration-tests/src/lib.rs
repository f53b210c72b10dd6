//! Integration tests for the Xeinst marketplace.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the marketplace server
//! XEINST_BASE_URL=http://localhost:3000 cargo run -p xeinst-web
//!
//! # Run integration tests
//! cargo test -p xeinst-integration-tests -- --ignored
//! ```
//!
//! # Test Categories
//!
//! - `pages` - Public page rendering tests
//! - `auth_flow` - Sign-in, access guard, and sign-out tests
