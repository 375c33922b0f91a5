//! Network layer: wire types, the HTTP pipeline, and session policy.
//!
//! DESIGN
//! ======
//! `policy` is pure decision logic so it stays testable without a browser;
//! `api` is the thin effectful shell that performs headers, calls, and the
//! invalidation redirect; `auth` holds the handshake endpoints.

pub mod api;
pub mod auth;
pub mod policy;
pub mod types;
