//! vCard document parser.

use super::error::{ParseError, ParseErrorKind, ParseResult};
use super::lexer::{ContentLine, is_delimiter, parse_content_line, split_lines, unfold};
use super::quoted_printable;
use super::values::{
    parse_address, parse_organization, parse_structured_name, split_component, unescape_text,
};
use crate::rfc::vcard::core::{
    VCard, VCardProperty, VCardValue, VCardVersion, encodings, names, param_names,
};

/// Everything recovered from one vCard document.
///
/// Cards are in document order. Each malformed block contributes one entry
/// to `errors` instead of a card.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedDocument {
    /// Successfully parsed cards.
    pub cards: Vec<VCard>,
    /// One error per block that could not be parsed.
    pub errors: Vec<ParseError>,
}

impl ParsedDocument {
    /// Returns whether every block in the document parsed.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Parses a vCard document into every card it contains.
///
/// ## Summary
/// Never fails as a whole: a block that cannot be parsed is reported in
/// [`ParsedDocument::errors`] and parsing resumes after its `END:VCARD`
/// (or at the next `BEGIN:VCARD` if the block was never closed).
#[tracing::instrument(skip(input), fields(input_len = input.len()))]
pub fn parse(input: &str) -> ParsedDocument {
    tracing::debug!("Parsing vCard document");

    let unfolded = unfold(input);
    let lines = split_lines(&unfolded);

    tracing::trace!(count = lines.len(), "Split lines");

    let mut parser = Parser::new(lines);
    let mut document = ParsedDocument::default();

    while let Some(result) = parser.next_block() {
        match result {
            Ok(card) => document.cards.push(card),
            Err(err) => {
                tracing::warn!(line = err.line, error = %err, "Skipping malformed vCard block");
                document.errors.push(err);
            }
        }
    }

    tracing::debug!(
        count = document.cards.len(),
        errors = document.errors.len(),
        "Parsed vCards"
    );

    document
}

/// Parses the first vCard in the input.
///
/// ## Summary
/// Strict counterpart to [`parse`]: the first block must be well formed.
///
/// ## Errors
/// Returns an error if the document contains no vCard or its first block is
/// malformed.
#[tracing::instrument(skip(input), fields(input_len = input.len()))]
pub fn parse_single(input: &str) -> ParseResult<VCard> {
    tracing::debug!("Parsing single vCard");

    let unfolded = unfold(input);
    let mut parser = Parser::new(split_lines(&unfolded));

    parser.next_block().unwrap_or_else(|| {
        tracing::warn!("No vCard found in document");
        Err(ParseError::new(
            ParseErrorKind::UnexpectedEof,
            1,
            "no vCard found in document",
        ))
    })
}

struct Parser {
    lines: Vec<String>,
    pos: usize,
}

impl Parser {
    fn new(lines: Vec<String>) -> Self {
        Self { lines, pos: 0 }
    }

    fn current_line(&self) -> usize {
        self.pos + 1
    }

    /// Advances to the next `BEGIN:VCARD` and parses that block.
    ///
    /// Content outside of blocks is ignored. Returns `None` at end of input.
    fn next_block(&mut self) -> Option<ParseResult<VCard>> {
        while self.pos < self.lines.len() {
            let is_begin = is_delimiter(&self.lines[self.pos], names::BEGIN);
            self.pos += 1;

            if is_begin {
                let start_line = self.pos;
                let result = self.parse_vcard(start_line);
                if result.is_err() {
                    self.recover();
                }
                return Some(result);
            }
        }

        None
    }

    /// Skips the rest of a failed block.
    ///
    /// Consumes through the block's `END:VCARD`; stops before a new
    /// `BEGIN:VCARD` so the following block is still parsed.
    fn recover(&mut self) {
        while let Some(line) = self.lines.get(self.pos) {
            if is_delimiter(line, names::BEGIN) {
                return;
            }
            self.pos += 1;
            if is_delimiter(line, names::END) {
                return;
            }
        }
    }

    fn parse_vcard(&mut self, start_line: usize) -> ParseResult<VCard> {
        let mut version = VCardVersion::default();
        let mut properties = Vec::new();

        while let Some(line) = self.lines.get(self.pos) {
            let line_num = self.current_line();

            if is_delimiter(line, names::BEGIN) {
                return Err(ParseError::unterminated(start_line));
            }

            self.pos += 1;

            if is_delimiter(line, names::END) {
                return Ok(VCard {
                    version,
                    properties,
                });
            }

            let content_line = parse_content_line(line, line_num)?;

            if content_line.name == names::VERSION {
                version = VCardVersion::parse(&content_line.value).ok_or_else(|| {
                    ParseError::new(
                        ParseErrorKind::UnsupportedVersion,
                        line_num,
                        format!("unsupported vCard version: {}", content_line.value),
                    )
                })?;
            } else {
                properties.push(convert_to_property(content_line));
            }
        }

        Err(ParseError::unterminated(start_line))
    }
}

fn convert_to_property(line: ContentLine) -> VCardProperty {
    let encoding = line
        .params
        .iter()
        .find(|p| p.name == param_names::ENCODING)
        .and_then(|p| p.value())
        .map(str::to_ascii_uppercase);

    let raw_value = match encoding.as_deref() {
        Some(encodings::QUOTED_PRINTABLE) => {
            let charset = line
                .params
                .iter()
                .find(|p| p.name == param_names::CHARSET)
                .and_then(|p| p.value());
            quoted_printable::decode_text(&line.value, charset)
        }
        _ => line.value,
    };

    let value = match encoding.as_deref() {
        Some(encodings::BASE64 | encodings::B) => VCardValue::Binary(raw_value.clone()),
        _ => parse_property_value(&line.name, &raw_value),
    };

    VCardProperty {
        group: line.group,
        name: line.name,
        params: line.params,
        value,
        raw_value,
    }
}

fn parse_property_value(name: &str, raw_value: &str) -> VCardValue {
    match name {
        names::N => VCardValue::StructuredName(parse_structured_name(raw_value)),
        names::ADR => VCardValue::Address(parse_address(raw_value)),
        names::ORG => VCardValue::Organization(parse_organization(raw_value)),
        names::NICKNAME | names::CATEGORIES => VCardValue::TextList(split_component(raw_value)),
        _ => VCardValue::Text(unescape_text(raw_value)),
    }
}
