//! Networking modules for the identity provider and the course API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `identity` defines the provider capability the auth flows depend on,
//! `hosted` implements it over HTTP, `api` handles REST calls for course data,
//! and `types` defines the shared wire schema.

pub mod api;
#[cfg(test)]
pub(crate) mod fake_identity;
pub mod hosted;
pub mod identity;
pub mod types;
