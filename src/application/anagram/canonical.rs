use std::fmt;

/// Anagram class identifier: the lowercased characters of a word in code point order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CanonicalKey(String);

impl CanonicalKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CanonicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn canonicalize(word: &str) -> CanonicalKey {
    let mut chars: Vec<char> = word.chars().map(simple_lowercase).collect();
    chars.sort_unstable();
    CanonicalKey(chars.into_iter().collect())
}

// One char in, one char out. `str::to_lowercase` would expand `İ` and
// rewrite a trailing `Σ` depending on its position.
fn simple_lowercase(ch: char) -> char {
    ch.to_lowercase().next().unwrap_or(ch)
}
