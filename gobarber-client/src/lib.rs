//! GoBarber client library
//!
//! Application layer for the GoBarber profile and dashboard screens. The
//! rules live in `gobarber-core`; this crate wires them to the HTTP API, the
//! signed-in session, toast notifications and navigation.
//!
//! Notes
//! - Collaborators are traits in [`infra::services`] and are injected into
//!   the domain workflows, so the workflows run without a UI or a server.
//! - The `gobarber-client` binary drives the workflows from the command line.

pub mod app;
pub mod domains;
pub mod infra;
