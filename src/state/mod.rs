//! Shared client-side session state.
//!
//! DESIGN
//! ======
//! `credentials` owns everything persisted; `session` owns the in-memory
//! state machine. UI code never touches storage directly.

pub mod credentials;
pub mod session;
