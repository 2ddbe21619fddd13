//! String conversion utilities for Windows API

/// Convert a Rust string to a null-terminated UTF-16 string
pub fn string_to_wide(s: &str) -> Vec<u16> {
    s.encode_utf16().chain(std::iter::once(0)).collect()
}
