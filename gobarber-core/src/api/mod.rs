//! Remote API surface shared between client components.

pub mod routes;
