//! Writing records back to vCard files.

use std::fs::{self, OpenOptions};
use std::io::Write as _;
use std::path::{Path, PathBuf};

use cardbox_rfc::codec::{EncodeOptions, encode_all, encode_with, export_file_name};

use super::{ContactDirectory, Handle};
use crate::error::{ServiceError, ServiceResult};

/// Options for export, append and bundle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportOptions {
    /// Write non-ASCII names quoted-printable for legacy readers.
    pub quoted_printable: bool,
}

impl From<ExportOptions> for EncodeOptions {
    fn from(options: ExportOptions) -> Self {
        Self {
            quoted_printable: options.quoted_printable,
        }
    }
}

/// Outcome of a per-record export.
#[derive(Debug, Default)]
pub struct ExportReport {
    /// Distinct files written, in the order first written. Records sharing
    /// a file name produce one entry.
    pub written: Vec<PathBuf>,
    /// One entry per replacement of an existing file, including files
    /// written earlier in the same export.
    pub overwritten: Vec<PathBuf>,
    /// Records that were not written.
    pub failures: Vec<(Handle, ServiceError)>,
}

impl ExportReport {
    /// Number of distinct files written.
    #[must_use]
    pub fn count(&self) -> usize {
        self.written.len()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

impl ContactDirectory {
    /// Writes each record to `destination/<full_name>.vcf`.
    ///
    /// ## Summary
    /// Existing files are replaced; each replacement is logged as a warning
    /// and listed in [`ExportReport::overwritten`]. A record without a usable
    /// full name is not written and is listed in [`ExportReport::failures`],
    /// as is a record whose file could not be written. Neither stops the
    /// remaining records.
    ///
    /// ## Errors
    /// Returns an error only if `destination` cannot be created.
    #[tracing::instrument(skip(self, destination), fields(destination = %destination.display(), contacts = self.len()))]
    pub fn export(&self, destination: &Path, options: ExportOptions) -> ServiceResult<ExportReport> {
        fs::create_dir_all(destination).map_err(|source| ServiceError::IoWrite {
            path: destination.to_path_buf(),
            source,
        })?;

        let mut report = ExportReport::default();

        for (handle, record) in self.iter() {
            let file_name = match export_file_name(record) {
                Ok(name) => name,
                Err(source) => {
                    tracing::warn!(%handle, error = %source, "Skipping contact without a usable file name");
                    report
                        .failures
                        .push((handle, ServiceError::Encode { handle, source }));
                    continue;
                }
            };

            let path = destination.join(file_name);
            let existed = path.exists();

            if let Err(source) = fs::write(&path, encode_with(record, options.into())) {
                tracing::warn!(%handle, path = %path.display(), error = %source, "Failed to write contact");
                report.failures.push((handle, ServiceError::IoWrite { path, source }));
                continue;
            }

            if existed {
                tracing::warn!(%handle, path = %path.display(), "Overwrote existing file");
                report.overwritten.push(path.clone());
            }
            if !report.written.contains(&path) {
                report.written.push(path);
            }
        }

        tracing::info!(
            written = report.count(),
            overwritten = report.overwritten.len(),
            failed = report.failures.len(),
            "Export finished"
        );

        Ok(report)
    }

    /// Appends one record to a single destination file.
    ///
    /// ## Summary
    /// Only the record named by `handle` is written; this is not a bulk
    /// merge. If `destination` is an existing directory, the record is
    /// appended to `<full_name>.vcf` inside it. Returns the file written to.
    ///
    /// ## Errors
    /// Returns `NotFound` for an unknown handle, `Encode` if a file name is
    /// needed and the record has none, and `IoWrite` if the file cannot be
    /// opened or written.
    #[tracing::instrument(skip(self, destination), fields(destination = %destination.display()))]
    pub fn append_record(
        &self,
        handle: Handle,
        destination: &Path,
        options: ExportOptions,
    ) -> ServiceResult<PathBuf> {
        let record = self.require(handle)?;

        let path = if destination.is_dir() {
            let file_name =
                export_file_name(record).map_err(|source| ServiceError::Encode { handle, source })?;
            destination.join(file_name)
        } else {
            destination.to_path_buf()
        };

        let text = encode_with(record, options.into());

        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .and_then(|mut file| file.write_all(text.as_bytes()))
            .map_err(|source| ServiceError::IoWrite {
                path: path.clone(),
                source,
            })?;

        tracing::debug!(path = %path.display(), "Appended contact");

        Ok(path)
    }

    /// Writes every record, in handle order, into one `.vcf` file.
    ///
    /// Returns the number of records written.
    ///
    /// ## Errors
    /// Returns `IoWrite` if the file cannot be written.
    #[tracing::instrument(skip(self, path), fields(path = %path.display(), contacts = self.len()))]
    pub fn export_bundle(&self, path: &Path, options: ExportOptions) -> ServiceResult<usize> {
        let text = encode_all(self.iter().map(|(_, record)| record), options.into());

        fs::write(path, text).map_err(|source| ServiceError::IoWrite {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::info!(count = self.len(), "Bundle written");

        Ok(self.len())
    }
}
