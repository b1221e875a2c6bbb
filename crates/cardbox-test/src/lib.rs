//! cardbox - integration test support.
//!
//! This crate re-exports the workspace crates so integration tests can use
//! `cardbox_test::` paths.

pub mod component {
    pub use cardbox_service::*;

    pub mod config {
        pub use cardbox_core::config::*;
    }

    pub mod constants {
        pub use cardbox_core::constants::*;
    }
}

pub use cardbox_app as app;
pub use cardbox_rfc as rfc;
