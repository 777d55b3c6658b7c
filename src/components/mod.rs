//! Reusable UI components shared by routes.
//!
//! ARCHITECTURE
//! ============
//! Components here only read session state; pages own side effects.

pub mod loading;
pub mod notice_banner;
pub mod route_guard;
