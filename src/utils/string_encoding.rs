// src/utils/string_encoding.rs

/// Palm text is single-byte; each byte maps to the code point of the same value.
pub fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

/// Decode up to the first NUL, or the whole slice if there is none.
pub fn decode_latin1_nul_terminated(bytes: &[u8]) -> String {
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    decode_latin1(&bytes[..end])
}
