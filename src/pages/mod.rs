//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its flow (login, logout) and leaves access control to the
//! route guards that wrap it in `app`.

pub mod dashboard;
pub mod home;
pub mod login;
