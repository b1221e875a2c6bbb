//! vCard parsing.

mod error;
mod lexer;
mod parser;
pub mod quoted_printable;
pub mod values;


pub use error::{ParseError, ParseErrorKind, ParseResult};
pub use lexer::{split_lines, unfold};
pub use parser::{ParsedDocument, parse, parse_single};
