//! Shared building blocks for the cardbox workspace: settings, the core
//! error type, constants, and small path utilities.

pub mod config;
pub mod constants;
pub mod error;
pub mod util;
