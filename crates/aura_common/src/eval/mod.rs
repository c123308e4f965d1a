//! Expression Normalizer & Evaluator.
//!
//! Takes a free-text question ("what is seven plus three") and attempts to
//! produce a computed answer. Three classification stages run in order over
//! the normalized string: arithmetic, relational, logical. Each stage that
//! matches tries a full evaluation; any failure falls through silently to
//! the next stage, and exhausting all stages yields `None` so the answer
//! router can try its next strategy.
//!
//! Pure function of its input, no shared mutable state; safe to call from
//! concurrent request handlers.

pub mod normalize;
pub mod parser;
pub mod value;
pub mod vocab;

pub use normalize::normalize;
pub use parser::evaluate;
pub use value::Value;

use tracing::debug;

/// Arithmetic operators that route a normalized string to the first stage.
const ARITHMETIC_OPS: [&str; 6] = ["+", "-", "*", "/", "%", "**"];

/// Relational operators that route to the second stage.
const RELATIONAL_OPS: [&str; 6] = [">", "<", ">=", "<=", "==", "!="];

/// Logical keywords that route to the third stage.
const LOGICAL_WORDS: [&str; 3] = ["and", "or", "not"];

/// Try to answer a question as an arithmetic, relational, or logical
/// expression. `None` means "not handled here, try the next fallback".
pub fn calculate_expression(question: &str) -> Option<String> {
    let expr = normalize(question);
    if expr.is_empty() {
        return None;
    }

    if ARITHMETIC_OPS.iter().any(|op| expr.contains(op)) {
        match evaluate(&expr) {
            Ok(result) => return Some(format!("✅ Answer: {result}")),
            Err(err) => debug!(%expr, %err, "arithmetic stage fell through"),
        }
    }

    if RELATIONAL_OPS.iter().any(|op| expr.contains(op)) {
        match evaluate(&expr) {
            Ok(result) => return Some(format!("✅ Result: {result}")),
            Err(err) => debug!(%expr, %err, "relational stage fell through"),
        }
    }

    if LOGICAL_WORDS.iter().any(|word| expr.contains(word)) {
        match evaluate(&expr) {
            Ok(result) => return Some(format!("✅ Logical Result: {result}")),
            Err(err) => debug!(%expr, %err, "logical stage fell through"),
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arithmetic_question() {
        assert_eq!(
            calculate_expression("what is seven plus three").as_deref(),
            Some("✅ Answer: 10")
        );
        assert_eq!(
            calculate_expression("two power three").as_deref(),
            Some("✅ Answer: 8")
        );
        assert_eq!(
            calculate_expression("seven divide two").as_deref(),
            Some("✅ Answer: 3.5")
        );
    }

    #[test]
    fn test_relational_question() {
        assert_eq!(
            calculate_expression("five greater than two").as_deref(),
            Some("✅ Result: True")
        );
        assert_eq!(
            calculate_expression("three equals four").as_deref(),
            Some("✅ Result: False")
        );
    }

    #[test]
    fn test_relational_with_arithmetic_reports_as_answer() {
        // The '+' routes this to the arithmetic stage first, which evaluates
        // the whole expression, boolean result and all.
        assert_eq!(
            calculate_expression("five greater than two plus one").as_deref(),
            Some("✅ Answer: True")
        );
    }

    #[test]
    fn test_logical_question() {
        assert_eq!(
            calculate_expression("true and false").as_deref(),
            Some("✅ Logical Result: False")
        );
        assert_eq!(
            calculate_expression("not false").as_deref(),
            Some("✅ Logical Result: True")
        );
        assert_eq!(
            calculate_expression("true or false").as_deref(),
            Some("✅ Logical Result: True")
        );
    }

    #[test]
    fn test_malformed_falls_through_without_panicking() {
        assert_eq!(calculate_expression("plus plus"), None);
        assert_eq!(calculate_expression("five divided by zero"), None);
        assert_eq!(calculate_expression(""), None);
    }

    #[test]
    fn test_unrecognized_input_returns_none() {
        assert_eq!(calculate_expression("banana"), None);
        assert_eq!(calculate_expression("tell me a joke"), None);
    }

    #[test]
    fn test_substring_corruption_blocks_evaluation() {
        // "money plus five" normalizes to "m1y+5"; the splice makes the
        // expression unevaluable, which is the documented outcome.
        assert_eq!(calculate_expression("money plus five"), None);
    }

    #[test]
    fn test_division_by_zero_falls_through() {
        assert_eq!(calculate_expression("five divide zero"), None);
    }
}
