//! Integration tests over real temporary directories.

mod cli;
mod codec;
mod duplicates;
mod export;
mod helpers;
mod scan;
