//! Reusable UI components.

pub mod guards;
pub mod top_bar;
