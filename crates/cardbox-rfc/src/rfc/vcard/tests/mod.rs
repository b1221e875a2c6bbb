//! vCard test fixtures and parse/serialize tests.
//!
//! Fixtures cover the shapes real address book exports take: 3.0 desktop
//! exports, 2.1 phone exports with quoted-printable names, and documents
//! with a broken block in the middle.
