//! Parsing of abbreviated, localized count text such as `"1.2 مليون مشاهدة"`,
//! `"450K views"` or `"20,000+"`.
//!
//! Uses manual character scanning; see [`crate::normalize`] for where counts
//! enter the canonical post.

/// Unit labels removed before scanning for the number.
const UNIT_LABELS: &[&str] = &["مشاهدة", "views"];

/// Thousands separators: ASCII comma and the Arabic thousands separator.
const SEPARATORS: &[char] = &[',', '\u{066C}'];

/// Multiplier markers, checked in this order; the first group that matches wins.
const MARKERS: &[(&[&str], f64)] = &[
    (&["ألف", "آلاف", "k"], 1_000.0),
    (&["مليون", "m"], 1_000_000.0),
    (&["مليار"], 1_000_000_000.0),
];

/// Converts free-form count text into an integer.
///
/// Rules:
/// 1. Lower-case, strip unit labels (`مشاهدة`, `views`) and thousands separators.
/// 2. Take the first run of digits, allowing one decimal point, which may
///    lead the run (`.5`). Arabic-Indic digits and the Arabic decimal
///    separator are accepted.
/// 3. Scale by the first matching marker: thousand (`ألف` / `k`), million
///    (`مليون` / `m`) or billion (`مليار`).
/// 4. Truncate toward zero.
///
/// Returns `0` for empty text or text without digits. Never panics.
#[must_use]
pub fn parse_count(text: &str) -> u64 {
    let mut cleaned = text.to_lowercase();
    for label in UNIT_LABELS {
        cleaned = cleaned.replace(label, "");
    }
    cleaned.retain(|c| !SEPARATORS.contains(&c));

    let Some(value) = leading_number(&cleaned) else {
        return 0;
    };

    let multiplier = MARKERS
        .iter()
        .find(|(markers, _)| markers.iter().any(|m| cleaned.contains(m)))
        .map_or(1.0, |&(_, multiplier)| multiplier);

    truncate(value * multiplier)
}

/// Extracts the first run of digits (with at most one decimal point) and
/// parses it as `f64`. Returns `None` when the text holds no digit.
fn leading_number(text: &str) -> Option<f64> {
    let mut digits = String::new();
    let mut seen_point = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if let Some(d) = ascii_digit(ch) {
            digits.push(d);
        } else if is_decimal_point(ch) && !seen_point {
            // A point before any digit only starts the number if a digit follows.
            let starts_number = chars.peek().is_some_and(|&next| ascii_digit(next).is_some());
            if digits.is_empty() && !starts_number {
                continue;
            }
            seen_point = true;
            digits.push('.');
        } else if !digits.is_empty() {
            break;
        }
    }

    let digits = digits.trim_end_matches('.');
    if digits.is_empty() {
        return None;
    }
    digits.parse::<f64>().ok()
}

/// Maps ASCII, Arabic-Indic and Extended Arabic-Indic digits to ASCII.
fn ascii_digit(ch: char) -> Option<char> {
    let offset = match ch {
        '0'..='9' => return Some(ch),
        '\u{0660}'..='\u{0669}' => u32::from(ch) - 0x0660,
        '\u{06F0}'..='\u{06F9}' => u32::from(ch) - 0x06F0,
        _ => return None,
    };
    char::from_digit(offset, 10)
}

fn is_decimal_point(ch: char) -> bool {
    ch == '.' || ch == '\u{066B}'
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn truncate(value: f64) -> u64 {
    if value.is_finite() && value > 0.0 {
        // `as` saturates at u64::MAX and truncates the fraction.
        value as u64
    } else {
        0
    }
}

#[cfg(test)]
#[path = "parse_test.rs"]
mod tests;
