//! Title polarity scoring.
//!
//! [`SentimentScorer`] is the seam the analyzer depends on; [`LexiconScorer`]
//! is the built-in implementation, a small English and Arabic word lexicon.

/// Scores the polarity of a piece of text.
///
/// Implementations must return a value in `[-1.0, 1.0]` and must not fail.
pub trait SentimentScorer {
    fn score(&self, text: &str) -> f32;
}

impl<F> SentimentScorer for F
where
    F: Fn(&str) -> f32,
{
    fn score(&self, text: &str) -> f32 {
        self(text)
    }
}

/// Scorer backed by [`LEXICON`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconScorer;

impl SentimentScorer for LexiconScorer {
    fn score(&self, text: &str) -> f32 {
        lexicon_score(text)
    }
}

/// Word weights.
///
/// Keys are lowercase single words. Values in `(0.0, 1.0]` are positive,
/// in `[-1.0, 0.0)` are negative. The final score is clamped to `[-1.0, 1.0]`.
pub(crate) const LEXICON: &[(&str, f32)] = &[
    // Positive signals
    ("great", 0.4),
    ("good", 0.3),
    ("amazing", 0.5),
    ("excellent", 0.5),
    ("love", 0.5),
    ("best", 0.5),
    ("happy", 0.4),
    ("win", 0.4),
    ("victory", 0.5),
    ("success", 0.4),
    ("beautiful", 0.4),
    ("stunning", 0.5),
    ("رائع", 0.5),
    ("رائعة", 0.5),
    ("مذهل", 0.5),
    ("مذهلة", 0.5),
    ("جميل", 0.4),
    ("جميلة", 0.4),
    ("أفضل", 0.5),
    ("نجاح", 0.5),
    ("فوز", 0.5),
    ("سعادة", 0.4),
    ("حب", 0.5),
    ("ممتع", 0.4),
    ("ممتعة", 0.4),
    ("تتويج", 0.4),
    // Negative signals
    ("bad", -0.4),
    ("terrible", -0.6),
    ("worst", -0.6),
    ("fail", -0.4),
    ("failed", -0.4),
    ("failure", -0.4),
    ("crash", -0.5),
    ("crisis", -0.5),
    ("disaster", -0.7),
    ("sad", -0.4),
    ("angry", -0.5),
    ("death", -0.6),
    ("فشل", -0.5),
    ("خيبة", -0.5),
    ("سيء", -0.4),
    ("سيئ", -0.4),
    ("كارثة", -0.7),
    ("أزمة", -0.5),
    ("غضب", -0.5),
    ("حزين", -0.4),
    ("حزن", -0.4),
    ("حادث", -0.5),
    ("وفاة", -0.6),
    ("حاد", -0.3),
    ("جدل", -0.2),
];

/// Arabic clitics tried in order when a word is not in the lexicon as-is.
const ARABIC_PREFIXES: &[&str] = &["وال", "بال", "ال", "و"];

/// Score a text string using the lexicon.
///
/// Splits text into lowercase words, sums matching weights, and clamps
/// the result to `[-1.0, 1.0]`. Returns `0.0` for empty or unknown text.
#[must_use]
pub fn lexicon_score(text: &str) -> f32 {
    let mut score = 0.0_f32;
    for word in text.split_whitespace() {
        let w = word
            .trim_matches(|c: char| !c.is_alphabetic())
            .to_lowercase();
        if let Some(weight) = word_weight(&w) {
            score += weight;
        }
    }
    score.clamp(-1.0, 1.0)
}

fn word_weight(word: &str) -> Option<f32> {
    if word.is_empty() {
        return None;
    }
    lookup(word).or_else(|| {
        ARABIC_PREFIXES
            .iter()
            .filter_map(|prefix| word.strip_prefix(prefix))
            .find_map(lookup)
    })
}

fn lookup(word: &str) -> Option<f32> {
    LEXICON
        .iter()
        .find(|&&(lex_word, _)| lex_word == word)
        .map(|&(_, weight)| weight)
}
