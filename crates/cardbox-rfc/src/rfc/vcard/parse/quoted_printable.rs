//! Quoted-printable value decoding (RFC 2045 §6.7) as used by vCard 2.1.

/// Decodes `=XX` escapes into raw bytes.
///
/// Soft line breaks have already been joined by the lexer; a `=` that is not
/// followed by two hex digits is a leftover break marker and is dropped.
#[must_use]
pub fn decode_bytes(input: &str) -> Vec<u8> {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'=' {
            if let Some(pair) = bytes.get(i + 1..i + 3)
                && let Ok(decoded) = hex::decode(pair)
            {
                out.extend_from_slice(&decoded);
                i += 3;
            } else {
                i += 1;
            }
            continue;
        }

        out.push(bytes[i]);
        i += 1;
    }

    out
}

/// Decodes a quoted-printable value into text using the declared charset.
///
/// UTF-8 is assumed unless the charset names ISO-8859-1/Latin-1; bytes that
/// are not valid in the charset are replaced rather than rejected.
#[must_use]
pub fn decode_text(input: &str, charset: Option<&str>) -> String {
    let bytes = decode_bytes(input);

    let latin1 = charset.is_some_and(|c| {
        ["ISO-8859-1", "LATIN1", "LATIN-1"]
            .iter()
            .any(|name| c.eq_ignore_ascii_case(name))
    });

    if latin1 {
        bytes.iter().copied().map(char::from).collect()
    } else {
        String::from_utf8_lossy(&bytes).into_owned()
    }
}
