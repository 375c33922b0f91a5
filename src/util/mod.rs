//! Small pure helpers.

pub mod role_paths;
