//! Byte payload helpers for write scenarios

/// One byte per UTF-16 code unit of `text`, keeping the low eight bits
///
/// ASCII input maps to its character codes: `"Hi"` becomes `[72, 105]`.
pub fn ascii_to_bytes(text: &str) -> Vec<u8> {
    text.encode_utf16().map(|unit| unit as u8).collect()
}

/// A payload of `len` zero bytes
///
/// Stands in for an uninitialized array of the same length, which the
/// browser converts to zeros when building the write buffer.
pub fn zeroed_payload(len: usize) -> Vec<u8> {
    vec![0; len]
}
