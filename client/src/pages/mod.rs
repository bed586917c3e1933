//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`.

pub mod about;
pub mod contact;
pub mod courses;
pub mod explore;
pub mod home;
pub mod login;
pub mod not_found;
pub mod register;
