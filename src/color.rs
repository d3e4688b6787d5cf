//! Color-code helpers for the stop list.
//!
//! Hosts hand over whatever their picker produces: hex with or without `#`,
//! `rgb()` notation, or a named CSS color. The stop list only ever stores
//! `#RRGGBB` codes (or the empty string for an unset stop).

use csscolorparser::parse as parse_color;

/// Normalizes any CSS color expression into a `#RRGGBB` code. Alpha is
/// dropped; the gradient grammar has no slot for it.
pub fn normalize(input: &str) -> Option<String> {
    let [r, g, b, _] = parse_color(input).ok()?.to_rgba8();
    Some(format!("#{:02X}{:02X}{:02X}", r, g, b))
}

/// A stored code is either empty or six hex digits, optionally `#`-prefixed.
pub fn is_valid_code(code: &str) -> bool {
    if code.is_empty() {
        return true;
    }
    let digits = code.strip_prefix('#').unwrap_or(code);
    digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit())
}
