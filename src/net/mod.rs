//! Networking modules for the backend REST surface.
//!
//! SYSTEM CONTEXT
//! ==============
//! `transport` is the seam to the browser `fetch` API, `dispatch` turns it
//! into the envelope contract, `api` names the concrete endpoints, and
//! `types` defines the shared wire schema.

pub mod api;
pub mod dispatch;
pub mod transport;
pub mod types;

#[cfg(test)]
pub(crate) mod mock_transport;
