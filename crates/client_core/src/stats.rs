use std::collections::HashSet;

/// Length and word-overlap figures for one original/humanized pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsSnapshot {
    pub original_length: usize,
    pub humanized_length: usize,
    pub similarity_percent: u32,
}

impl StatsSnapshot {
    pub fn original_length_label(&self) -> String {
        format_count(self.original_length)
    }

    pub fn humanized_length_label(&self) -> String {
        format_count(self.humanized_length)
    }

    pub fn similarity_label(&self) -> String {
        format!("{}%", self.similarity_percent)
    }
}

/// Lengths are in characters. Similarity is the Jaccard index of the
/// lowercase whitespace-separated token sets, as a rounded percentage; two
/// texts without any tokens count as identical (100%).
pub fn compute_stats(original: &str, humanized: &str) -> StatsSnapshot {
    let original_tokens = token_set(original);
    let humanized_tokens = token_set(humanized);

    let union = original_tokens.union(&humanized_tokens).count();
    let intersection = original_tokens.intersection(&humanized_tokens).count();
    let similarity_percent = if union == 0 {
        100
    } else {
        ((intersection as f64 / union as f64) * 100.0).round() as u32
    };

    StatsSnapshot {
        original_length: original.chars().count(),
        humanized_length: humanized.chars().count(),
        similarity_percent,
    }
}

fn token_set(text: &str) -> HashSet<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Renders a count with comma thousands separators.
pub fn format_count(value: usize) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
