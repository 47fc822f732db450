//! Sentence splitting, casing helpers, and the grammar cleanup pass.

use regex::{Captures, Regex};

use crate::{
    vocabulary::{CONSONANT_SOUND_PREFIXES, SILENT_H_PREFIXES},
    HumanizerError,
};

pub(crate) struct Grammar {
    whitespace: Regex,
    space_before_punctuation: Regex,
    missing_space: Regex,
    missing_space_after_period: Regex,
    article: Regex,
    lowercase_after_terminal: Regex,
    their_verb: Regex,
    your_verb: Regex,
}

impl Grammar {
    pub(crate) fn compile() -> Result<Self, HumanizerError> {
        Ok(Self {
            whitespace: compile(r"\s+")?,
            space_before_punctuation: compile(r"\s+([,.!?;:])")?,
            missing_space: compile(r"([,;:!?])([A-Za-z])")?,
            missing_space_after_period: compile(r"\.([A-Z][a-z])")?,
            article: compile(r"\b([Aa]n?)\s+([A-Za-z][a-z]+)")?,
            lowercase_after_terminal: compile(r"([.!?])\s+([a-z])")?,
            their_verb: compile(r"\b([Tt])heir\s+(is|are)\b")?,
            your_verb: compile(r"\b([Yy])our\s+(?:is|are)\b")?,
        })
    }

    /// Normalizes spacing, punctuation, articles and sentence-initial casing.
    pub(crate) fn fix(&self, text: &str) -> String {
        let text = self.whitespace.replace_all(text, " ");
        let text = self.space_before_punctuation.replace_all(&text, "$1");
        let text = self.missing_space.replace_all(&text, "$1 $2");
        let text = self.missing_space_after_period.replace_all(&text, ". $1");
        let text = self.article.replace_all(&text, |caps: &Captures| {
            let article = match_case(&caps[1], article_for(&caps[2]));
            format!("{article} {}", &caps[2])
        });
        let text = self
            .lowercase_after_terminal
            .replace_all(&text, |caps: &Captures| {
                format!("{} {}", &caps[1], caps[2].to_uppercase())
            });
        let text = self.their_verb.replace_all(&text, "${1}here $2");
        let text = self.your_verb.replace_all(&text, "${1}ou're");
        let text = self.whitespace.replace_all(&text, " ");
        text.trim().to_string()
    }
}

pub(crate) fn compile(pattern: &str) -> Result<Regex, HumanizerError> {
    Regex::new(pattern).map_err(|source| HumanizerError::Pattern {
        pattern: pattern.to_string(),
        source,
    })
}

fn article_for(word: &str) -> &'static str {
    let lower = word.to_ascii_lowercase();
    if SILENT_H_PREFIXES.iter().any(|prefix| lower.starts_with(prefix)) {
        return "an";
    }
    if CONSONANT_SOUND_PREFIXES
        .iter()
        .any(|prefix| lower.starts_with(prefix))
    {
        return "a";
    }
    match lower.chars().next() {
        Some('a' | 'e' | 'i' | 'o' | 'u') => "an",
        _ => "a",
    }
}

/// Splits after `.`, `!` or `?` when followed by whitespace.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();
    while let Some((idx, ch)) = chars.next() {
        if !matches!(ch, '.' | '!' | '?') {
            continue;
        }
        if let Some(&(next_idx, next)) = chars.peek() {
            if next.is_whitespace() {
                let sentence = text[start..idx + ch.len_utf8()].trim();
                if !sentence.is_empty() {
                    sentences.push(sentence);
                }
                start = next_idx;
            }
        }
    }
    let tail = text[start..].trim();
    if !tail.is_empty() {
        sentences.push(tail);
    }
    sentences
}

pub(crate) fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub(crate) fn lowercase_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Gives `replacement` the initial casing of `original`.
pub(crate) fn match_case(original: &str, replacement: &str) -> String {
    if original.chars().next().is_some_and(char::is_uppercase) {
        capitalize_first(replacement)
    } else {
        lowercase_first(replacement)
    }
}

pub(crate) fn capitalize_sentences(text: &str) -> String {
    split_sentences(text)
        .into_iter()
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}
