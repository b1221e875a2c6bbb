//! vCard line folding.

/// Maximum line length in octets (not characters), excluding the line break.
pub const MAX_LINE_OCTETS: usize = 75;

/// Folds a content line to the maximum length.
///
/// Lines longer than 75 octets are folded by inserting CRLF + space; the
/// leading space counts toward the next line's length. Folds at UTF-8
/// character boundaries.
#[must_use]
pub fn fold_line(line: &str) -> String {
    if line.len() <= MAX_LINE_OCTETS {
        return line.to_string();
    }

    let mut result = String::with_capacity(line.len() + line.len() / MAX_LINE_OCTETS * 3);
    let mut current_len = 0;

    for c in line.chars() {
        let char_len = c.len_utf8();

        if current_len + char_len > MAX_LINE_OCTETS {
            result.push_str("\r\n ");
            current_len = 1;
        }

        result.push(c);
        current_len += char_len;
    }

    result
}

/// Folds a quoted-printable content line using soft line breaks.
///
/// Each physical line ends in `=` and stays within 75 octets including
/// that marker. `=XX` escapes are never split. The encoder never leaves a
/// literal space in the value, so continuation lines can't be mistaken for
/// RFC folding.
#[must_use]
pub fn fold_quoted_printable(line: &str) -> String {
    if line.len() <= MAX_LINE_OCTETS {
        return line.to_string();
    }

    let budget = MAX_LINE_OCTETS - 1;
    let mut result = String::with_capacity(line.len() + line.len() / budget * 3);
    let mut current_len = 0;
    let mut rest = line;

    while let Some(c) = rest.chars().next() {
        let unit_len = if c == '=' && rest.len() >= 3 && rest.is_char_boundary(3) {
            3
        } else {
            c.len_utf8()
        };

        if current_len + unit_len > budget {
            result.push_str("=\r\n");
            current_len = 0;
        }

        result.push_str(&rest[..unit_len]);
        current_len += unit_len;
        rest = &rest[unit_len..];
    }

    result
}
