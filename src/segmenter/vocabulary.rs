//! Word lists the break heuristics match against.
//!
//! Every term is matched as a substring of the lowercased line text, so a
//! short term like `so` also fires inside `also` or `sound`. The weak tier
//! and the ending lists are the only position-sensitive checks.

/// Vocabulary for scoring a line as a segment boundary.
#[derive(Debug)]
pub struct BreakVocabulary {
    /// Hard transitions, each worth the strong weight when present.
    pub strong: &'static [&'static str],
    /// Softer connectives, each worth the medium weight when present.
    pub medium: &'static [&'static str],
    /// Openers that only count at the very start of a line.
    pub weak: &'static [&'static str],
    /// Phrases that mean the speaker is mid-explanation.
    pub continuation: &'static [&'static str],
    /// Filler words that close a sentence.
    pub filler_endings: &'static [&'static str],
    /// Words in the following line that signal a new topic.
    pub topic_change: &'static [&'static str],
    /// Words that suggest a thought has been completed.
    pub completion_endings: &'static [&'static str],
}

/// Vocabulary for judging whether a span can carry a long clip.
#[derive(Debug)]
pub struct SpanVocabulary {
    /// Subject-matter keywords; more distinct hits means richer content.
    pub topics: &'static [&'static str],
    /// Phrases that introduce an explanation worth keeping whole.
    pub explanations: &'static [&'static str],
}

/// Default English break vocabulary.
pub static BREAK_VOCABULARY: BreakVocabulary = BreakVocabulary {
    strong: &[
        "now",
        "however",
        "but",
        "meanwhile",
        "furthermore",
        "moreover",
        "additionally",
        "therefore",
        "consequently",
        "as a result",
        "in conclusion",
        "to summarize",
        "moving on",
        "next up",
        "speaking of",
        "that said",
        "on the other hand",
        "in contrast",
        "alternatively",
        "instead",
        "rather",
        "anyway",
        "so",
    ],
    medium: &[
        "also", "and", "plus", "then", "after", "before", "while", "during", "since", "because",
        "if", "when", "where", "why", "how", "what", "which", "who", "though", "although",
        "unless", "until", "once", "as", "like",
    ],
    weak: &[
        "the", "this", "that", "these", "those", "here", "there", "i", "you", "we", "they", "it",
        "he", "she",
    ],
    continuation: &[
        "for example",
        "such as",
        "in other words",
        "that is",
        "i.e.",
        "e.g.",
        "specifically",
        "particularly",
        "especially",
        "including",
        "like this",
        "as follows",
        "as well as",
    ],
    filler_endings: &["right", "okay", "well", "yeah", "alright", "so"],
    topic_change: &["app", "feature", "update", "new", "also", "another", "next"],
    completion_endings: &["now", "too", "well", "right", "there", "here", "done"],
};

/// Default English span vocabulary.
pub static SPAN_VOCABULARY: SpanVocabulary = SpanVocabulary {
    topics: &[
        "app",
        "feature",
        "update",
        "design",
        "camera",
        "battery",
        "privacy",
        "performance",
        "developer",
        "intelligence",
        "widget",
        "display",
        "chip",
        "software",
        "interface",
    ],
    explanations: &[
        "let me explain",
        "here's how",
        "how it works",
        "the way it works",
        "what this means",
        "the reason",
        "step by step",
        "let's take a look",
        "under the hood",
        "for example",
    ],
};
