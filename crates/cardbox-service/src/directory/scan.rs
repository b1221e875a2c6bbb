//! Loading a directory from a file or a directory tree.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use cardbox_core::constants::{VCF_EXTENSION, VCF_GLOB};

use super::ContactDirectory;
use crate::error::ServiceError;

impl ContactDirectory {
    /// Builds a directory from one file or from every `*.vcf` file under a
    /// directory tree.
    ///
    /// ## Summary
    /// Files are read in lexicographic path order and their records get
    /// handles in that order. A missing location, an unreadable file, or a
    /// malformed block is recorded in [`ContactDirectory::errors`]; the scan
    /// itself never fails.
    #[tracing::instrument(skip(location), fields(location = %location.display()))]
    pub fn scan(location: &Path, is_directory: bool) -> Self {
        let mut directory = Self::new();

        if !location.exists() {
            tracing::warn!("Scan location does not exist");
            directory.record_error(ServiceError::SourceNotFound {
                path: location.to_path_buf(),
            });
            return directory;
        }

        if is_directory {
            for path in directory.collect_vcf_files(location) {
                directory.scan_file(&path);
            }
        } else {
            directory.scan_file(location);
        }

        tracing::info!(
            contacts = directory.len(),
            errors = directory.errors().len(),
            "Scan finished"
        );

        directory
    }

    /// Scans `location`, treating it as a tree if it is a directory.
    #[must_use]
    pub fn scan_auto(location: &Path) -> Self {
        Self::scan(location, location.is_dir())
    }

    /// Reads one file and appends its records. Returns the number added.
    pub fn scan_file(&mut self, path: &Path) -> usize {
        tracing::debug!(path = %path.display(), "Reading vCard file");

        let bytes = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(source) => {
                tracing::warn!(path = %path.display(), error = %source, "Failed to read file");
                self.record_error(ServiceError::SourceRead {
                    path: path.to_path_buf(),
                    source,
                });
                return 0;
            }
        };

        let text = String::from_utf8_lossy(&bytes);
        if matches!(text, Cow::Owned(_)) {
            tracing::warn!(path = %path.display(), "File is not valid UTF-8, invalid bytes replaced");
        }

        self.load_text(&path.display().to_string(), &text)
    }

    /// Returns every regular file under `root` with the vCard extension,
    /// sorted. Traversal errors are recorded and skipped.
    fn collect_vcf_files(&mut self, root: &Path) -> Vec<PathBuf> {
        let mut files = Vec::new();

        for entry in WalkDir::new(root) {
            match entry {
                Ok(entry) => {
                    let path = entry.path();
                    if entry.file_type().is_file()
                        && path.extension().is_some_and(|ext| ext == VCF_EXTENSION)
                    {
                        files.push(path.to_path_buf());
                    }
                }
                Err(err) => {
                    let path = err.path().map_or_else(|| root.to_path_buf(), Path::to_path_buf);
                    tracing::warn!(path = %path.display(), error = %err, "Failed to walk directory");
                    let source = err
                        .into_io_error()
                        .unwrap_or_else(|| std::io::Error::other("filesystem loop"));
                    self.record_error(ServiceError::SourceRead { path, source });
                }
            }
        }

        files.sort();
        tracing::debug!(count = files.len(), pattern = VCF_GLOB, "Collected vCard files");

        files
    }
}
