#![allow(clippy::expect_used, dead_code)]
//! Test helpers for integration tests.
//!
//! Provides a temporary contact tree that tests populate with vCard files,
//! plus small builders for vCard text and assertions on directories.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use cardbox_test::component::ContactDirectory;

/// A temporary directory holding `.vcf` files, removed on drop.
pub struct ContactTree {
    dir: TempDir,
}

impl ContactTree {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes `content` to `relative`, creating parent directories.
    pub fn write(&self, relative: &str, content: impl AsRef<[u8]>) -> PathBuf {
        let path = self.dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.dir.path().join(relative)).expect("Failed to read file")
    }

    pub fn exists(&self, relative: &str) -> bool {
        self.dir.path().join(relative).exists()
    }

    /// Scans the whole tree.
    pub fn scan(&self) -> ContactDirectory {
        ContactDirectory::scan(self.dir.path(), true)
    }
}

/// A minimal vCard 3.0 block with a full name and an optional phone.
pub fn card(full_name: &str, phone: Option<&str>) -> String {
    let tel = phone.map(|p| format!("TEL;TYPE=CELL:{p}\r\n")).unwrap_or_default();
    format!("BEGIN:VCARD\r\nVERSION:3.0\r\nFN:{full_name}\r\n{tel}END:VCARD\r\n")
}

/// Display names in handle order.
pub fn names(directory: &ContactDirectory) -> Vec<String> {
    directory
        .iter()
        .map(|(_, record)| record.display_name())
        .collect()
}

/// Handle values in iteration order.
pub fn handles(directory: &ContactDirectory) -> Vec<u64> {
    directory.iter().map(|(handle, _)| handle.get()).collect()
}

pub const PHONE_EXPORT: &str = "\
BEGIN:VCARD\r
VERSION:2.1\r
N;CHARSET=UTF-8;ENCODING=QUOTED-PRINTABLE:=D0=9F=D0=B5=D1=82=D1=80=D0=BE=D0=B2;=D0=98=D0=B2=D0=B0=D0=BD;;;\r
FN;CHARSET=UTF-8;ENCODING=QUOTED-PRINTABLE:=D0=98=D0=B2=D0=B0=D0=BD =D0=9F=D0=B5=D1=82=D1=80=D0=BE=D0=B2\r
TEL;CELL:+7 900 123-45-67\r
EMAIL;INTERNET:ivan@example.ru\r
END:VCARD\r
BEGIN:VCARD\r
VERSION:3.0\r
FN:Jane Doe\r
N:Doe;Jane;;;\r
ORG:Example Corp;Research\r
TITLE:Engineer\r
TEL;TYPE=WORK:+1 555 0100\r
TEL;TYPE=HOME:+1 555 0101\r
ADR;TYPE=WORK:;;1 Main St;Springfield;IL;62701;USA\r
BDAY:1990-04-01\r
NOTE:Met at the conference\\, 2019\r
END:VCARD\r
";
