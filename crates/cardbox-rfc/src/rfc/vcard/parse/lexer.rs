//! vCard lexer for line unfolding and content line parsing.
//!
//! Folding follows RFC 6350 §3.2 (CRLF followed by one space or tab).
//! vCard 2.1 quoted-printable values use a different continuation: the
//! encoded value ends with `=` and carries on at the start of the next line.

use super::error::{ParseError, ParseResult};
use crate::rfc::vcard::core::{VCardParameter, encodings};

/// Joins folded physical lines into logical lines.
///
/// A line starting with a space or tab continues the previous one; the
/// line break and that one whitespace character are dropped. CRLF and bare
/// LF are both accepted and logical lines are joined with LF. A leading
/// byte order mark is dropped.
#[must_use]
pub fn unfold(input: &str) -> String {
    let input = input.strip_prefix('\u{FEFF}').unwrap_or(input);
    let mut logical: Vec<String> = Vec::new();

    for physical in input.split('\n') {
        let physical = physical.strip_suffix('\r').unwrap_or(physical);
        match (physical.strip_prefix([' ', '\t']), logical.last_mut()) {
            (Some(continuation), Some(previous)) => previous.push_str(continuation),
            _ => logical.push(physical.to_string()),
        }
    }

    logical.join("\n")
}

/// Splits unfolded input into non-empty logical lines and joins
/// quoted-printable soft line breaks.
#[must_use]
pub fn split_lines(input: &str) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut pending_soft_break = false;

    for line in input.lines() {
        if line.trim().is_empty() {
            continue;
        }

        if pending_soft_break
            && !is_delimiter(line, "END")
            && let Some(prev) = lines.last_mut()
        {
            prev.pop(); // trailing '='
            prev.push_str(line);
        } else {
            lines.push(line.to_string());
        }

        pending_soft_break = lines.last().is_some_and(|l| has_soft_break(l));
    }

    lines
}

/// Returns whether a line is `BEGIN:VCARD` or `END:VCARD` (for `keyword` `BEGIN`/`END`).
#[must_use]
pub fn is_delimiter(line: &str, keyword: &str) -> bool {
    line.trim()
        .split_once(':')
        .is_some_and(|(k, v)| k.eq_ignore_ascii_case(keyword) && v.trim().eq_ignore_ascii_case("VCARD"))
}

/// A quoted-printable value ending in `=` continues on the next line.
fn has_soft_break(line: &str) -> bool {
    if !line.ends_with('=') {
        return false;
    }
    find_value_separator(line).is_some_and(|pos| {
        line[..pos]
            .to_ascii_uppercase()
            .contains(encodings::QUOTED_PRINTABLE)
    })
}

/// A parsed content line before value interpretation.
#[derive(Debug, Clone)]
pub struct ContentLine {
    /// Property group (e.g., "item1" in "item1.TEL").
    pub group: Option<String>,
    /// Property name (uppercase).
    pub name: String,
    /// Parameters.
    pub params: Vec<VCardParameter>,
    /// Raw value string.
    pub value: String,
}

/// Parses a single content line into its components.
///
/// Format: `[group.]name[;param[=value]]*:value`
///
/// ## Errors
/// Returns an error if the line is malformed or missing the colon separator.
pub fn parse_content_line(line: &str, line_num: usize) -> ParseResult<ContentLine> {
    let colon_pos = find_value_separator(line)
        .ok_or_else(|| ParseError::invalid_property_name(line_num, line))?;

    let (name_params, value) = line.split_at(colon_pos);
    let value = &value[1..]; // Skip the colon

    let (group, name_params) = parse_group(name_params);

    let (name, params_str) = match name_params.split_once(';') {
        Some((name, params)) => (name, Some(params)),
        None => (name_params, None),
    };

    let name = name.trim();
    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return Err(ParseError::invalid_property_name(line_num, name));
    }

    let params = match params_str {
        Some(params_str) => parse_parameters(params_str, line_num)?,
        None => Vec::new(),
    };

    Ok(ContentLine {
        group: group.map(String::from),
        name: name.to_ascii_uppercase(),
        params,
        value: value.to_string(),
    })
}

/// Finds the colon that separates name/params from value.
///
/// Must handle quoted parameter values that may contain colons.
fn find_value_separator(line: &str) -> Option<usize> {
    let mut in_quotes = false;

    for (i, c) in line.char_indices() {
        match c {
            '"' => in_quotes = !in_quotes,
            ':' if !in_quotes => return Some(i),
            _ => {}
        }
    }

    None
}

/// Parses optional group prefix.
fn parse_group(s: &str) -> (Option<&str>, &str) {
    let name_end = s.find(';').unwrap_or(s.len());
    if let Some(dot_pos) = s[..name_end].find('.') {
        let potential_group = &s[..dot_pos];
        if !potential_group.is_empty()
            && potential_group
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-')
        {
            return (Some(potential_group), &s[dot_pos + 1..]);
        }
    }
    (None, s)
}

/// Parses parameter string into parameters.
fn parse_parameters(s: &str, line_num: usize) -> ParseResult<Vec<VCardParameter>> {
    let mut params = Vec::new();
    let mut remaining = s;

    while !remaining.is_empty() {
        let (param, rest) = parse_single_parameter(remaining, line_num)?;
        params.push(param);
        remaining = rest;
    }

    Ok(params)
}

/// Parses a single parameter and returns remaining string.
///
/// A token without `=` before the next `;` is a vCard 2.1 bare parameter.
fn parse_single_parameter(s: &str, line_num: usize) -> ParseResult<(VCardParameter, &str)> {
    let semi_pos = s.find(';');

    match s.find('=') {
        Some(eq_pos) if semi_pos.is_none_or(|semi| eq_pos < semi) => {
            let name = s[..eq_pos].trim();
            if name.is_empty() {
                return Err(ParseError::invalid_parameter(
                    line_num,
                    "missing parameter name",
                ));
            }
            let (values, remaining) = parse_param_values(&s[eq_pos + 1..]);
            Ok((VCardParameter::multi(name, values), remaining))
        }
        _ => {
            let (token, remaining) = match semi_pos {
                Some(semi) => (&s[..semi], &s[semi + 1..]),
                None => (s, ""),
            };
            let token = token.trim();
            if token.is_empty() {
                return Err(ParseError::invalid_parameter(line_num, "empty parameter"));
            }
            Ok((VCardParameter::bare(token), remaining))
        }
    }
}

/// Reads one parameter's values up to the next unquoted `;`.
///
/// Values are comma separated and may be double-quoted. RFC 6868 caret
/// escapes (`^n`, `^'`, `^^`) are decoded. Returns the values and the text
/// after the `;`.
fn parse_param_values(s: &str) -> (Vec<String>, &str) {
    let mut values = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut rest = "";
    let mut chars = s.char_indices();

    while let Some((i, c)) = chars.next() {
        match c {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => values.push(std::mem::take(&mut current)),
            ';' if !in_quotes => {
                rest = &s[i + 1..];
                break;
            }
            '^' => match chars.next() {
                Some((_, 'n' | 'N')) => current.push('\n'),
                Some((_, '\'')) => current.push('"'),
                Some((_, '^')) => current.push('^'),
                Some((_, other)) => {
                    current.push('^');
                    current.push(other);
                }
                None => current.push('^'),
            },
            _ => current.push(c),
        }
    }

    if !current.is_empty() || !values.is_empty() {
        values.push(current);
    }

    (values, rest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unfold_crlf() {
        let input = "FN:John\r\n Doe";
        assert_eq!(unfold(input), "FN:JohnDoe");
    }

    #[test]
    fn unfold_bare_lf() {
        let input = "FN:John\n Doe";
        assert_eq!(unfold(input), "FN:JohnDoe");
    }

    #[test]
    fn unfold_keeps_line_breaks() {
        assert_eq!(unfold("A:1\r\nB:2\r\n"), "A:1\nB:2\n");
    }

    #[test]
    fn unfold_drops_byte_order_mark() {
        assert_eq!(unfold("\u{FEFF}BEGIN:VCARD\r\n"), "BEGIN:VCARD\n");
        assert_eq!(unfold("A:\u{FEFF}x"), "A:\u{FEFF}x");
    }

    #[test]
    fn parse_caret_encoded_param() {
        let line = parse_content_line("ADR;LABEL=\"1 Main^nSpringfield\":;;1 Main", 1).unwrap();
        assert_eq!(line.params[0].value(), Some("1 Main\nSpringfield"));
    }

    #[test]
    fn unfold_tab() {
        let input = "FN:John\r\n\tDoe";
        assert_eq!(unfold(input), "FN:JohnDoe");
    }

    #[test]
    fn split_lines_filters_empty() {
        let input = "LINE1\n\n  \nLINE2\n";
        let lines = split_lines(input);
        assert_eq!(lines, vec!["LINE1", "LINE2"]);
    }

    #[test]
    fn split_lines_joins_soft_breaks() {
        let input = "FN;ENCODING=QUOTED-PRINTABLE:=D0=90=\n=D0=91\nTEL:1\n";
        let lines = split_lines(input);
        assert_eq!(lines, vec!["FN;ENCODING=QUOTED-PRINTABLE:=D0=90=D0=91", "TEL:1"]);
    }

    #[test]
    fn split_lines_keeps_plain_trailing_equals() {
        let input = "NOTE:a=\nTEL:1\n";
        let lines = split_lines(input);
        assert_eq!(lines, vec!["NOTE:a=", "TEL:1"]);
    }

    #[test]
    fn delimiters() {
        assert!(is_delimiter("BEGIN:VCARD", "BEGIN"));
        assert!(is_delimiter("begin:vcard ", "BEGIN"));
        assert!(is_delimiter("END:VCARD", "END"));
        assert!(!is_delimiter("BEGIN:VCALENDAR", "BEGIN"));
    }

    #[test]
    fn parse_simple_line() {
        let line = parse_content_line("FN:John Doe", 1).unwrap();
        assert!(line.group.is_none());
        assert_eq!(line.name, "FN");
        assert!(line.params.is_empty());
        assert_eq!(line.value, "John Doe");
    }

    #[test]
    fn parse_grouped_line() {
        let line = parse_content_line("item1.TEL:+1-555-555-5555", 1).unwrap();
        assert_eq!(line.group, Some("item1".to_string()));
        assert_eq!(line.name, "TEL");
    }

    #[test]
    fn parse_with_parameters() {
        let line = parse_content_line("TEL;TYPE=home,voice;PREF=1:+1-555-555-5555", 1).unwrap();
        assert_eq!(line.name, "TEL");
        assert_eq!(line.params.len(), 2);

        let type_param = &line.params[0];
        assert_eq!(type_param.name, "TYPE");
        assert_eq!(type_param.values, vec!["home", "voice"]);

        let pref_param = &line.params[1];
        assert_eq!(pref_param.name, "PREF");
        assert_eq!(pref_param.value(), Some("1"));
    }

    #[test]
    fn parse_bare_parameters() {
        let line = parse_content_line("TEL;CELL;VOICE:123", 1).unwrap();
        assert_eq!(line.params.len(), 2);
        assert_eq!(line.params[0].name, "TYPE");
        assert_eq!(line.params[0].value(), Some("CELL"));
        assert_eq!(line.params[1].value(), Some("VOICE"));
    }

    #[test]
    fn parse_mixed_bare_and_named() {
        let line =
            parse_content_line("N;CHARSET=UTF-8;QUOTED-PRINTABLE:=D0=90;;;;", 1).unwrap();
        assert_eq!(line.params[0].name, "CHARSET");
        assert_eq!(line.params[1].name, "ENCODING");
        assert_eq!(line.value, "=D0=90;;;;");
    }

    #[test]
    fn parse_quoted_param() {
        let line =
            parse_content_line("ADR;LABEL=\"123 Main St\\nAnytown\":;;123 Main St", 1).unwrap();
        assert_eq!(line.params.len(), 1);
        assert_eq!(line.value, ";;123 Main St");
    }

    #[test]
    fn parse_colon_in_value() {
        let line = parse_content_line("URL:https://example.com:8080/path", 1).unwrap();
        assert_eq!(line.value, "https://example.com:8080/path");
    }

    #[test]
    fn parse_missing_colon_fails() {
        assert!(parse_content_line("THIS IS NOT A PROPERTY", 4).is_err());
    }

    #[test]
    fn parse_empty_parameter_fails() {
        assert!(parse_content_line("TEL;;CELL:1", 2).is_err());
    }
}
