//! URL-encoded form decoding that keeps raw bytes.
//!
//! Page bodies are opaque bytes, so a submitted `%FF` must reach storage as
//! `0xFF` rather than a UTF-8 replacement character.

use percent_encoding::percent_decode;

/// First value of `field` in an `application/x-www-form-urlencoded` body.
///
/// A pair without `=` counts as the field with an empty value. Returns `None`
/// when the field is absent.
pub(crate) fn field_value(body: &[u8], field: &str) -> Option<Vec<u8>> {
    body.split(|&b| b == b'&')
        .filter(|pair| !pair.is_empty())
        .find_map(|pair| {
            let (key, value) = match pair.iter().position(|&b| b == b'=') {
                Some(at) => (&pair[..at], &pair[at + 1..]),
                None => (pair, &[][..]),
            };
            (decode(key) == field.as_bytes()).then(|| decode(value))
        })
}

/// Decode one form component: `+` is a space, `%XX` is a raw byte.
fn decode(raw: &[u8]) -> Vec<u8> {
    let spaced: Vec<u8> = raw
        .iter()
        .map(|&b| if b == b'+' { b' ' } else { b })
        .collect();
    percent_decode(&spaced).collect()
}
