//! Boundary and span scoring.

use crate::constants::{break_weights, suitability};
use crate::transcript::TranscriptLine;

use super::vocabulary::{BREAK_VOCABULARY, BreakVocabulary, SPAN_VOCABULARY, SpanVocabulary};

/// Scores how good a line is as the last line of a segment.
///
/// Scores are unbounded in both directions; higher is a better cut.
#[derive(Debug, Clone, Copy)]
pub struct BreakScorer {
    vocabulary: &'static BreakVocabulary,
}

impl Default for BreakScorer {
    fn default() -> Self {
        Self::new(&BREAK_VOCABULARY)
    }
}

impl BreakScorer {
    /// Create a scorer over the given vocabulary.
    #[must_use]
    pub const fn new(vocabulary: &'static BreakVocabulary) -> Self {
        Self { vocabulary }
    }

    /// Score `line` as a segment boundary, looking ahead at `next` when present.
    pub fn score(&self, line: &TranscriptLine, next: Option<&TranscriptLine>) -> f64 {
        let vocab = self.vocabulary;
        let text = line.text.to_lowercase();
        let mut score = 0.0;

        score += weighted(count_contained(vocab.strong, &text), break_weights::STRONG);
        score += weighted(count_contained(vocab.medium, &text), break_weights::MEDIUM);

        let weak_openers = vocab
            .weak
            .iter()
            .filter(|word| {
                text.strip_prefix(**word)
                    .is_some_and(|rest| rest.starts_with(' '))
            })
            .count();
        score += weighted(weak_openers, break_weights::WEAK);

        score -= weighted(
            count_contained(vocab.continuation, &text),
            break_weights::CONTINUATION_PENALTY,
        );

        if ends_with_word(&text, vocab.filler_endings) {
            score += break_weights::FILLER_ENDING;
        }

        if let Some(next) = next {
            let next_text = next.text.to_lowercase();
            if vocab.topic_change.iter().any(|word| next_text.contains(word)) {
                score += break_weights::TOPIC_CHANGE;
            }
        }

        let trimmed = text.trim();
        let completes = vocab.completion_endings.iter().any(|word| {
            trimmed
                .strip_suffix(word)
                .is_some_and(|rest| rest.ends_with(' '))
        });
        if completes {
            score += break_weights::COMPLETION_ENDING;
        }

        score
    }

    /// Number of distinct strong transition terms in `text`.
    pub fn strong_transitions(&self, text: &str) -> usize {
        count_contained(self.vocabulary.strong, &text.to_lowercase())
    }
}

/// Scores whether a span of text can stand as one long clip.
#[derive(Debug, Clone, Copy)]
pub struct SpanScorer {
    vocabulary: &'static SpanVocabulary,
    breaks: BreakScorer,
}

impl Default for SpanScorer {
    fn default() -> Self {
        Self::new(&SPAN_VOCABULARY, BreakScorer::default())
    }
}

impl SpanScorer {
    /// Create a span scorer; `breaks` supplies the strong transition list.
    #[must_use]
    pub const fn new(vocabulary: &'static SpanVocabulary, breaks: BreakScorer) -> Self {
        Self { vocabulary, breaks }
    }

    /// Content suitability of `text` for a long clip.
    ///
    /// Topic coverage and explanations raise the score; a span with many
    /// hard transitions is penalized.
    pub fn suitability(&self, text: &str) -> f64 {
        let lowered = text.to_lowercase();
        let mut score = 0.0;

        let topics = count_contained(self.vocabulary.topics, &lowered);
        if topics >= suitability::RICH_TOPIC_COUNT {
            score += suitability::RICH_TOPIC_BONUS;
        } else if topics >= 1 {
            score += suitability::TOPIC_BONUS;
        }

        if self
            .vocabulary
            .explanations
            .iter()
            .any(|phrase| lowered.contains(phrase))
        {
            score += suitability::EXPLANATION_BONUS;
        }

        if self.breaks.strong_transitions(&lowered) > suitability::MAX_STRONG_TRANSITIONS {
            score -= suitability::CHOPPY_PENALTY;
        }

        score
    }

    /// Whether `text` clears the bar for a long clip.
    pub fn is_suitable(&self, text: &str) -> bool {
        self.suitability(text) >= suitability::MIN_SCORE
    }
}

fn count_contained(terms: &[&str], text: &str) -> usize {
    terms.iter().filter(|term| text.contains(**term)).count()
}

#[allow(clippy::cast_precision_loss)]
fn weighted(count: usize, weight: f64) -> f64 {
    count as f64 * weight
}

/// Whether `text` ends with one of `words` as a whole word, ignoring trailing whitespace.
fn ends_with_word(text: &str, words: &[&str]) -> bool {
    let text = text.trim_end();
    words.iter().any(|word| {
        text.strip_suffix(word).is_some_and(|rest| {
            rest.chars()
                .next_back()
                .is_none_or(|c| !(c.is_alphanumeric() || c == '_'))
        })
    })
}
