//! Networking modules for the external recipe API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` holds every REST call the UI makes. Wire types live in the
//! `models` crate so the server host can share them.

pub mod api;
