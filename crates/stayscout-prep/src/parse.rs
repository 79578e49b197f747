//! Scalar parsers for loosely typed listing fields.

/// Parse a currency-formatted price string.
///
/// Strips the dollar sign and thousands separators, then parses the rest as
/// a float. Returns `None` when nothing numeric remains.
pub fn parse_price(raw: &str) -> Option<f64> {
    let stripped: String = raw
        .trim()
        .chars()
        .filter(|c| *c != '$' && *c != ',')
        .collect();
    stripped.parse().ok()
}

/// Extract the leading decimal number from a bathrooms description.
///
/// Matches one or more digits with an optional fractional part, anywhere in
/// the text ("2.5 baths" → 2.5, "1 shared bath" → 1.0). Text without digits
/// yields `None`; the caller records a missing value.
pub fn parse_bathrooms(text: &str) -> Option<f64> {
    let bytes = text.as_bytes();
    let start = bytes.iter().position(u8::is_ascii_digit)?;
    let mut end = start;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
    }
    text[start..end].parse().ok()
}

/// Count items in a brace-delimited, comma-separated amenities list.
///
/// A missing list counts 0, as does an empty `"{}"`.
pub fn count_amenities(raw: Option<&str>) -> u32 {
    let Some(raw) = raw else {
        return 0;
    };
    let inner = raw
        .trim()
        .trim_start_matches('{')
        .trim_end_matches('}')
        .trim();
    if inner.is_empty() {
        0
    } else {
        inner.split(',').count() as u32
    }
}
