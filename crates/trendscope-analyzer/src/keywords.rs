//! Keyword frequency over post titles.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

/// Function words excluded from keyword counts.
pub const STOP_WORDS: &[&str] = &[
    "من", "عن", "في", "و", "أو", "إلى", "هو", "هي", "هذا", "هذه", "جدا", "تم", "علي", "مع",
    "بعد", "أن",
];

/// Number of keywords reported.
pub const TOP_KEYWORDS: usize = 5;

// Unicode-aware: Arabic letters and marks are word characters.
static WORD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").expect("valid word regex"));

/// Most frequent non-stop-word tokens across `titles`.
///
/// Titles are joined with a space and lower-cased, tokenized on `\w+`, and
/// purely numeric tokens and [`STOP_WORDS`] are dropped. Returns at most
/// `limit` `(word, count)` pairs by descending count; equal counts keep the
/// order in which the words first appeared.
#[must_use]
pub fn top_keywords<'a, I>(titles: I, limit: usize) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = &'a str>,
{
    let text = titles.into_iter().collect::<Vec<_>>().join(" ").to_lowercase();

    // Insertion-ordered counts: `order` holds words by first appearance.
    let mut order: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for token in WORD_RE.find_iter(&text).map(|m| m.as_str()) {
        if token.chars().all(char::is_numeric) || STOP_WORDS.contains(&token) {
            continue;
        }
        if let Some(&i) = index.get(token) {
            order[i].1 += 1;
        } else {
            index.insert(token, order.len());
            order.push((token.to_string(), 1));
        }
    }

    // Stable sort keeps first-appearance order among equal counts.
    order.sort_by(|a, b| b.1.cmp(&a.1));
    order.truncate(limit);
    order
}
