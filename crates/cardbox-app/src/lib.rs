//! The `cardbox` command line: argument definitions and command execution.

pub mod cli;
pub mod error;
