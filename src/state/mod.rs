//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The session is owned by one store and mirrored into a reactive signal
//! for the view tree. `notice` carries flow failures across route changes.

pub mod notice;
pub mod session;
