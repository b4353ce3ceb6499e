use crate::data_models::RawCount;

pub const HIDDEN: &str = "Hidden";

const SCALES: [(f64, &str); 3] = [(1e9, "B"), (1e6, "M"), (1e3, "K")];

/// Render a subscriber or view count the way it is shown in the result list:
/// `1.2K`, `2.0M`, `3.2B`, or the plain integer below a thousand.
///
/// Absent counts, zero, the `"hidden"` sentinel and anything without a leading
/// integer all render as `"Hidden"`. One decimal is kept via `{:.1}`, so exact
/// ties round to even.
pub fn format_count(count: Option<&RawCount>) -> String {
    let value = match count {
        None | Some(RawCount::Number(0)) => return HIDDEN.to_string(),
        Some(RawCount::Number(n)) => *n as f64,
        Some(RawCount::Text(text)) => {
            if text.is_empty() || text == "hidden" {
                return HIDDEN.to_string();
            }
            match parse_leading_integer(text) {
                Some(n) => n as f64,
                None => return HIDDEN.to_string(),
            }
        }
    };

    for (scale, suffix) in SCALES {
        if value >= scale {
            return format!("{:.1}{suffix}", value / scale);
        }
    }
    format!("{value}")
}

/// Parses the integer prefix of `text`, ignoring leading whitespace and any
/// trailing non-digit characters (`" 42abc"` -> 42).
fn parse_leading_integer(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let value = digits[..end].parse::<i64>().ok()?;
    Some(if negative { -value } else { value })
}

#[test]
fn test_parse_leading_integer() {
    assert_eq!(parse_leading_integer("1200"), Some(1200));
    assert_eq!(parse_leading_integer("  77 views"), Some(77));
    assert_eq!(parse_leading_integer("-5"), Some(-5));
    assert_eq!(parse_leading_integer("+9"), Some(9));
    assert_eq!(parse_leading_integer("abc"), None);
    assert_eq!(parse_leading_integer(""), None);
    assert_eq!(parse_leading_integer("-"), None);
}
