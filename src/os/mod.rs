//! OS-level inputs.

pub mod env;
