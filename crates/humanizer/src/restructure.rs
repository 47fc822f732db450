//! Sentence-level variation: merging and splitting sentences, breaking up
//! uniform sentence lengths, and light punctuation changes.

use rand::{seq::IndexedRandom, Rng};

use crate::{
    grammar::{capitalize_first, split_sentences},
    soften_opening,
    vocabulary::{
        DASH_PROBABILITY, EXCLAMATION_PROBABILITY, INTERJECTIONS, INTERJECTION_PROBABILITY,
        JOIN_CONNECTORS, JOIN_PROBABILITY, PARENTHETICALS, PARENTHETICAL_PROBABILITY,
        SPLIT_CONJUNCTIONS, SPLIT_CONNECTORS, SPLIT_CONNECTOR_PROBABILITY, SPLIT_PROBABILITY,
    },
};

/// A sentence shorter than this may be merged with its neighbour.
const SHORT_SENTENCE_WORDS: usize = 10;
/// The neighbour absorbed by a merge must be shorter than this.
const SHORT_FOLLOWER_WORDS: usize = 15;
/// Sentences longer than this are candidates for a split.
const LONG_SENTENCE_WORDS: usize = 30;
/// Word-count spread below which sentence lengths count as uniform.
const UNIFORM_SPREAD: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Odds {
    pub(crate) join: f64,
    pub(crate) split: f64,
    pub(crate) split_connector: f64,
    pub(crate) interjection: f64,
    pub(crate) parenthetical: f64,
    pub(crate) dash: f64,
    pub(crate) exclamation: f64,
}

impl Default for Odds {
    fn default() -> Self {
        Self {
            join: JOIN_PROBABILITY,
            split: SPLIT_PROBABILITY,
            split_connector: SPLIT_CONNECTOR_PROBABILITY,
            interjection: INTERJECTION_PROBABILITY,
            parenthetical: PARENTHETICAL_PROBABILITY,
            dash: DASH_PROBABILITY,
            exclamation: EXCLAMATION_PROBABILITY,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Restructured {
    pub(crate) text: String,
    pub(crate) joined: usize,
    pub(crate) split: usize,
}

fn word_count(sentence: &str) -> usize {
    sentence.split_whitespace().count()
}

/// Merges short neighbouring sentences and splits overly long ones.
pub(crate) fn restructure_sentences(text: &str, rng: &mut impl Rng, odds: &Odds) -> Restructured {
    let sentences = split_sentences(text);
    if sentences.len() <= 1 {
        return Restructured {
            text: text.to_string(),
            joined: 0,
            split: 0,
        };
    }

    let mut out = Vec::with_capacity(sentences.len());
    let (mut joined, mut split) = (0, 0);
    let mut idx = 0;
    while idx < sentences.len() {
        let sentence = sentences[idx];
        let words = word_count(sentence);

        if words < SHORT_SENTENCE_WORDS {
            if let Some(next) = sentences.get(idx + 1) {
                if word_count(next) < SHORT_FOLLOWER_WORDS && rng.random_bool(odds.join) {
                    if let Some(connector) = JOIN_CONNECTORS.choose(rng) {
                        let head = sentence.trim_end_matches(['.', '!', '?']);
                        out.push(format!("{head}{connector} {}", soften_opening(next)));
                        joined += 1;
                        idx += 2;
                        continue;
                    }
                }
            }
        }

        if words > LONG_SENTENCE_WORDS && rng.random_bool(odds.split) {
            let (first, second) = split_long_sentence(sentence, rng, odds);
            out.push(first);
            out.push(second);
            split += 1;
            idx += 1;
            continue;
        }

        out.push(sentence.to_string());
        idx += 1;
    }

    Restructured {
        text: out.join(" "),
        joined,
        split,
    }
}

/// Index range `(end_of_first, start_of_second)` near the middle of `words`.
fn split_point(words: &[&str]) -> (usize, usize) {
    let mid = words.len() / 2;
    let lower = mid.saturating_sub(5).max(3);
    let upper = (mid + 5).min(words.len().saturating_sub(2));
    for idx in lower..upper {
        let word = words[idx];
        let bare = word.to_lowercase();
        if SPLIT_CONJUNCTIONS.iter().any(|conjunction| *conjunction == bare) {
            return (idx, idx + 1);
        }
        if word.ends_with(',') {
            return (idx + 1, idx + 1);
        }
    }
    (mid, mid)
}

fn split_long_sentence(sentence: &str, rng: &mut impl Rng, odds: &Odds) -> (String, String) {
    let words: Vec<&str> = sentence.split_whitespace().collect();
    let (end, start) = split_point(&words);

    let first = words[..end].join(" ");
    let first = format!("{}.", first.trim_end_matches([',', '.', ';', ':']));

    let second = words[start..].join(" ");
    let second = if rng.random_bool(odds.split_connector) {
        match SPLIT_CONNECTORS.choose(rng) {
            Some(connector) => format!("{connector} {}", soften_opening(&second)),
            None => capitalize_first(&second),
        }
    } else {
        capitalize_first(&second)
    };
    (first, second)
}

/// When every sentence has roughly the same length, slips a short
/// interjection after some of them. Returns the text and how many were added.
pub(crate) fn vary_sentence_length(text: &str, rng: &mut impl Rng, odds: &Odds) -> (String, usize) {
    let sentences = split_sentences(text);
    if sentences.len() < 3 {
        return (text.to_string(), 0);
    }
    let lengths: Vec<usize> = sentences.iter().map(|s| word_count(s)).collect();
    let (min, max) = match (lengths.iter().min(), lengths.iter().max()) {
        (Some(min), Some(max)) => (*min, *max),
        _ => return (text.to_string(), 0),
    };
    if max - min >= UNIFORM_SPREAD {
        return (text.to_string(), 0);
    }

    let last = sentences.len() - 1;
    let mut added = 0;
    let mut out = Vec::with_capacity(sentences.len() * 2);
    for (idx, sentence) in sentences.iter().enumerate() {
        out.push(*sentence);
        if idx < last && lengths[idx] > 8 && rng.random_bool(odds.interjection) {
            if let Some(interjection) = INTERJECTIONS.choose(rng) {
                out.push(*interjection);
                added += 1;
            }
        }
    }
    (out.join(" "), added)
}

/// Occasional parenthetical asides, a dash in place of a comma, and a rare
/// exclamation mark.
pub(crate) fn vary_punctuation(text: &str, rng: &mut impl Rng, odds: &Odds) -> String {
    split_sentences(text)
        .into_iter()
        .map(|sentence| {
            let mut words: Vec<&str> = sentence.split_whitespace().collect();
            let count = words.len();
            let mut sentence = sentence.to_string();

            if count > 8 && rng.random_bool(odds.parenthetical) {
                let lower = (count / 3).max(2);
                let upper = (2 * count / 3).min(count - 2);
                let position = rng.random_range(lower..=upper);
                if let Some(aside) = PARENTHETICALS.choose(rng) {
                    words.insert(position, *aside);
                    sentence = words.join(" ");
                }
            }
            if count > 6 && rng.random_bool(odds.dash) {
                sentence = sentence.replacen(", ", " — ", 1);
            }
            if count > 5 && sentence.ends_with('.') && rng.random_bool(odds.exclamation) {
                sentence.pop();
                sentence.push('!');
            }
            sentence
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
#[path = "tests/restructure_tests.rs"]
mod tests;
