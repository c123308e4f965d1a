//! Word/phrase-to-symbol substitution pipeline.
//!
//! Turns a free-text question into a candidate expression string: lowercase,
//! number words to digits, operator phrases to symbols, conversational
//! filler dropped, whitespace stripped. "what is seven plus three" comes out
//! as "7+3".
//!
//! Replacement is literal substring replacement, not word-boundary matching.
//! A vocabulary word hiding inside an unrelated word gets spliced ("money"
//! becomes "m1y"), and the corrupted token survives filler filtering because
//! it is no longer purely alphabetic. That corruption is deliberate,
//! documented behavior inherited from the reference table semantics; the
//! tests pin it down rather than fix it.

use super::vocab::{NUMBER_WORDS, OPERATOR_PHRASES};

/// Words that survive filler filtering even though they are alphabetic:
/// the boolean literals and logical connectives the evaluator understands.
const LOGICAL_KEYWORDS: [&str; 5] = ["true", "false", "and", "or", "not"];

/// Normalize a raw question into an expression candidate.
pub fn normalize(question: &str) -> String {
    let mut q = question.to_lowercase();

    for (word, digits) in NUMBER_WORDS {
        q = q.replace(word, digits);
    }

    for (phrase, symbol) in OPERATOR_PHRASES {
        q = q.replace(phrase, symbol);
    }

    // Drop question filler ("what", "is", ...): any token the substitution
    // passes left purely alphabetic and that is not a logical keyword.
    q.split_whitespace()
        .filter(|tok| !is_filler(tok))
        .collect::<Vec<_>>()
        .concat()
}

fn is_filler(token: &str) -> bool {
    token.chars().all(|c| c.is_alphabetic()) && !LOGICAL_KEYWORDS.contains(&token)
}
