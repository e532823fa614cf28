//! Text normalization and word counting.
//!
//! Word counts drive every ratio in the scoring model, so they must not
//! depend on how a page happens to encode accented letters. Text is first
//! decomposed (NFKD) and stripped of combining marks, then word-character
//! runs are counted.

use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Maximal run of word characters (letters, digits, underscore).
#[allow(clippy::expect_used)]
static WORD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").expect("WORD_RE regex"));

/// Remove diacritics using compatibility decomposition.
///
/// # Examples
///
/// ```
/// use rs_coreex::text::normalize;
///
/// assert_eq!(normalize("un éléphant ça trompe énormément!"), "un elephant ca trompe enormement!");
/// ```
#[must_use]
pub fn normalize(text: &str) -> String {
    text.nfkd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Count the words in `text` after normalization.
///
/// # Examples
///
/// ```
/// use rs_coreex::text::count_words;
///
/// assert_eq!(count_words("one two  three"), 3);
/// assert_eq!(count_words("café"), count_words("cafe"));
/// assert_eq!(count_words(""), 0);
/// ```
#[must_use]
pub fn count_words(text: &str) -> usize {
    if text.is_empty() {
        return 0;
    }
    WORD_RE.find_iter(&normalize(text)).count()
}

/// Collapse whitespace runs to single spaces and trim.
#[must_use]
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
