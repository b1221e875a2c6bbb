//! Contact directory service: scanning vCard sources into a directory of
//! records, finding duplicate candidates, and writing records back out.

pub mod directory;
pub mod error;
pub mod similarity;

pub use directory::{
    ContactDirectory, DuplicateCandidate, DuplicateReason, ExportOptions, ExportReport, Handle,
};
pub use error::{ServiceError, ServiceResult};
