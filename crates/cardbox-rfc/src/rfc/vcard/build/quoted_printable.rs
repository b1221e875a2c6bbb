//! Quoted-printable value encoding for legacy vCard readers.

/// Encodes text as quoted-printable `=XX` escapes over its UTF-8 bytes.
///
/// Printable ASCII other than `=` passes through; everything else,
/// including space, is escaped.
#[must_use]
pub fn encode(input: &str) -> String {
    let mut out = String::with_capacity(input.len() * 3);

    for &byte in input.as_bytes() {
        if byte.is_ascii_graphic() && byte != b'=' {
            out.push(char::from(byte));
        } else {
            out.push('=');
            out.push_str(&hex::encode_upper([byte]));
        }
    }

    out
}

/// Returns whether a value needs quoted-printable transfer encoding.
#[must_use]
pub fn needs_encoding(input: &str) -> bool {
    !input.is_ascii()
}
