//! View model assembly.
//!
//! Each page combines the resolved session with Catalog Provider data
//! into a plain display model here, before anything is rendered. The
//! templates consume these models as inert data: no provider access, no
//! role re-derivation, no I/O happens during rendering.
//!
//! Provider failures are caught at this boundary and converted into a
//! degraded display model (empty lists plus an `unavailable` flag), so a
//! provider outage produces a page with an inline notice rather than an
//! aborted render.

pub mod dashboard;
pub mod explore;
pub mod nav;

pub use nav::NavView;
