//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `registration`, `login`, `ui`) so pages
//! and components depend on small focused models. Form models are plain
//! structs wrapped in signals by the page that owns them.

pub mod auth;
pub mod form;
pub mod login;
pub mod registration;
pub mod ui;
