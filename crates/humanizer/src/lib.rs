//! Rule-based rewriter that makes machine-sounding prose read more like a
//! human research writer: phrase variation, vocabulary paraphrase, sentence
//! transitions, tone adjustments and a grammar cleanup pass.

use std::collections::{HashMap, HashSet};

use rand::{rngs::StdRng, seq::IndexedRandom, Rng, SeedableRng};
use regex::{Captures, Regex};
use thiserror::Error;
use tracing::debug;

mod grammar;
mod restructure;
mod vocabulary;

pub use grammar::split_sentences;

use grammar::{capitalize_sentences, compile, lowercase_first, match_case, Grammar};
use restructure::{restructure_sentences, vary_punctuation, vary_sentence_length, Odds};
use vocabulary::{
    FixedTable, PhraseTable, Section, TransitionKind, ACADEMIC_OPTIMIZATIONS, AI_PATTERNS,
    AI_PATTERN_PROBABILITY, CAUSE_CUES, CONTRAST_CUES, EMPHASIS_PROBABILITY,
    EXISTING_TRANSITIONS, EXTRA_PATTERNS, EXTRA_PATTERN_PROBABILITY, PRESERVED_TERMS,
    PROFESSIONAL_TONE, RESEARCH_PATTERNS, RESEARCH_PATTERN_PROBABILITY, RESEARCH_VOCABULARY,
    SECTION_KEYWORDS, SYNONYM_PROBABILITY, TRANSITION_PROBABILITY,
};

#[derive(Debug, Error)]
pub enum HumanizerError {
    #[error("invalid rewrite pattern {pattern:?}: {source}")]
    Pattern {
        pattern: String,
        source: regex::Error,
    },
}

struct PhraseRule {
    pattern: Regex,
    alternatives: &'static [&'static str],
    probability: f64,
}

struct FixedRule {
    pattern: Regex,
    replacement: &'static str,
}

struct RuleSet {
    phrases: Vec<PhraseRule>,
    optimizations: Vec<FixedRule>,
    tone: Vec<FixedRule>,
    abstract_tense: Vec<FixedRule>,
    methodology: Vec<FixedRule>,
    results: Vec<FixedRule>,
    word: Regex,
    vocabulary: HashMap<&'static str, &'static [&'static str]>,
    preserved: HashSet<&'static str>,
    grammar: Grammar,
}

impl RuleSet {
    fn compile() -> Result<Self, HumanizerError> {
        let mut phrases = phrase_rules(RESEARCH_PATTERNS, RESEARCH_PATTERN_PROBABILITY)?;
        phrases.extend(phrase_rules(AI_PATTERNS, AI_PATTERN_PROBABILITY)?);
        phrases.extend(phrase_rules(EXTRA_PATTERNS, EXTRA_PATTERN_PROBABILITY)?);

        Ok(Self {
            phrases,
            optimizations: fixed_rules(ACADEMIC_OPTIMIZATIONS)?,
            tone: fixed_rules(PROFESSIONAL_TONE)?,
            abstract_tense: fixed_rules(&[(r"\bwas\b", "is"), (r"\bwere\b", "are")])?,
            methodology: fixed_rules(&[(r"\bwe do\b", "we conducted")])?,
            results: fixed_rules(&[(r"\bwe show\b", "we demonstrated")])?,
            word: compile(r"[A-Za-z]+")?,
            vocabulary: RESEARCH_VOCABULARY.iter().copied().collect(),
            preserved: PRESERVED_TERMS.iter().copied().collect(),
            grammar: Grammar::compile()?,
        })
    }

    fn section(&self, section: Section) -> &[FixedRule] {
        match section {
            Section::Abstract => &self.abstract_tense,
            Section::Methodology => &self.methodology,
            Section::Results => &self.results,
        }
    }
}

fn phrase_rules(table: PhraseTable, probability: f64) -> Result<Vec<PhraseRule>, HumanizerError> {
    table
        .iter()
        .map(|&(pattern, alternatives)| {
            Ok(PhraseRule {
                pattern: compile(&format!("(?i){pattern}"))?,
                alternatives,
                probability,
            })
        })
        .collect()
}

fn fixed_rules(table: FixedTable) -> Result<Vec<FixedRule>, HumanizerError> {
    table
        .iter()
        .map(|&(pattern, replacement)| {
            Ok(FixedRule {
                pattern: compile(&format!("(?i){pattern}"))?,
                replacement,
            })
        })
        .collect()
}

fn apply_fixed(rules: &[FixedRule], text: &str) -> String {
    rules.iter().fold(text.to_string(), |text, rule| {
        rule.pattern
            .replace_all(&text, |caps: &Captures| match_case(&caps[0], rule.replacement))
            .into_owned()
    })
}

fn starts_with_transition(sentence: &str) -> bool {
    let lower = sentence.to_lowercase();
    let first_word = lower
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .trim_matches(|ch: char| !ch.is_alphabetic());
    if EXISTING_TRANSITIONS.iter().any(|known| *known == first_word) {
        return true;
    }
    [
        TransitionKind::Addition,
        TransitionKind::Contrast,
        TransitionKind::Cause,
        TransitionKind::Emphasis,
    ]
    .iter()
    .flat_map(|kind| kind.phrases())
    .any(|phrase| lower.starts_with(&phrase.to_lowercase()))
}

/// Lowercases the opening word unless it is "I" or an acronym.
fn soften_opening(sentence: &str) -> String {
    let first_word = sentence.split_whitespace().next().unwrap_or_default();
    let letters: Vec<char> = first_word.chars().filter(|ch| ch.is_alphabetic()).collect();
    let keep_case = first_word == "I"
        || first_word.starts_with("I'")
        || (letters.len() > 1 && letters.iter().all(|ch| ch.is_uppercase()));
    if keep_case {
        sentence.to_string()
    } else {
        lowercase_first(sentence)
    }
}

pub struct Humanizer {
    rng: StdRng,
    rules: RuleSet,
    odds: Odds,
}

impl Humanizer {
    pub fn new() -> Result<Self, HumanizerError> {
        Ok(Self {
            rng: StdRng::from_os_rng(),
            rules: RuleSet::compile()?,
            odds: Odds::default(),
        })
    }

    /// Reproducible rewrites for a given seed.
    pub fn with_seed(seed: u64) -> Result<Self, HumanizerError> {
        Ok(Self {
            rng: StdRng::seed_from_u64(seed),
            rules: RuleSet::compile()?,
            odds: Odds::default(),
        })
    }

    pub fn humanize(&mut self, text: &str) -> String {
        if text.trim().is_empty() {
            return text.to_string();
        }

        let rewritten = self.enhance_structure(text);
        let rewritten = self.vary_phrases(&rewritten);
        let rewritten = self.paraphrase(&rewritten);
        let rewritten = apply_fixed(&self.rules.optimizations, &rewritten);
        let restructured = restructure_sentences(&rewritten, &mut self.rng, &self.odds);
        let rewritten = self.add_transitions(&restructured.text);
        let (rewritten, interjections) =
            vary_sentence_length(&rewritten, &mut self.rng, &self.odds);
        let rewritten = vary_punctuation(&rewritten, &mut self.rng, &self.odds);
        let rewritten = apply_fixed(&self.rules.tone, &rewritten);
        let rewritten = self.rules.grammar.fix(&rewritten);
        let rewritten = capitalize_sentences(&rewritten);

        debug!(
            input_chars = text.chars().count(),
            output_chars = rewritten.chars().count(),
            joined = restructured.joined,
            split = restructured.split,
            interjections,
            "humanized text"
        );
        rewritten
    }

    fn enhance_structure(&self, text: &str) -> String {
        let lower = text.to_lowercase();
        SECTION_KEYWORDS
            .iter()
            .filter(|(_, keywords)| keywords.iter().any(|keyword| lower.contains(keyword)))
            .fold(text.to_string(), |text, (section, _)| {
                apply_fixed(self.rules.section(*section), &text)
            })
    }

    fn vary_phrases(&mut self, text: &str) -> String {
        let Self { rng, rules, .. } = self;
        let mut text = text.to_string();
        for rule in &rules.phrases {
            if !rng.random_bool(rule.probability) {
                continue;
            }
            let Some(choice) = rule.alternatives.choose(rng) else {
                continue;
            };
            text = rule
                .pattern
                .replace_all(&text, |caps: &Captures| match_case(&caps[0], choice))
                .into_owned();
        }
        text
    }

    fn paraphrase(&mut self, text: &str) -> String {
        let Self { rng, rules, .. } = self;
        split_sentences(text)
            .into_iter()
            .map(|sentence| {
                if sentence.split_whitespace().count() <= 2 {
                    return sentence.to_string();
                }
                rules
                    .word
                    .replace_all(sentence, |caps: &Captures| {
                        let word = &caps[0];
                        let lower = word.to_ascii_lowercase();
                        if rules.preserved.contains(lower.as_str()) {
                            return word.to_string();
                        }
                        match rules.vocabulary.get(lower.as_str()) {
                            Some(synonyms) if rng.random_bool(SYNONYM_PROBABILITY) => synonyms
                                .choose(rng)
                                .map(|synonym| match_case(word, synonym))
                                .unwrap_or_else(|| word.to_string()),
                            _ => word.to_string(),
                        }
                    })
                    .into_owned()
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn add_transitions(&mut self, text: &str) -> String {
        let sentences = split_sentences(text);
        let Some(first) = sentences.first() else {
            return text.to_string();
        };
        if sentences.len() < 2 {
            return text.to_string();
        }

        let mut out = Vec::with_capacity(sentences.len());
        out.push(first.to_string());
        for pair in sentences.windows(2) {
            let (previous, current) = (pair[0], pair[1]);
            if !self.rng.random_bool(TRANSITION_PROBABILITY) || starts_with_transition(current) {
                out.push(current.to_string());
                continue;
            }
            let kind = self.transition_kind(previous);
            match kind.phrases().choose(&mut self.rng) {
                Some(transition) => out.push(format!("{transition}, {}", soften_opening(current))),
                None => out.push(current.to_string()),
            }
        }
        out.join(" ")
    }

    fn transition_kind(&mut self, previous: &str) -> TransitionKind {
        let previous = previous.to_lowercase();
        if CONTRAST_CUES.iter().any(|cue| previous.contains(cue)) {
            TransitionKind::Contrast
        } else if CAUSE_CUES.iter().any(|cue| previous.contains(cue)) {
            TransitionKind::Cause
        } else if self.rng.random_bool(EMPHASIS_PROBABILITY) {
            TransitionKind::Emphasis
        } else {
            TransitionKind::Addition
        }
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
