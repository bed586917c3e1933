//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome, form inputs, and auth-dependent panels while
//! reading shared state from Leptos context providers.

pub mod form_field;
pub mod header;
pub mod protected_route;
pub mod signed_in_panel;
