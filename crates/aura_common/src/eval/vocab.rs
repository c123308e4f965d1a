//! Fixed vocabulary tables for the expression normalizer.
//!
//! Both tables are applied as literal substring replacements in declaration
//! order, and the replacement output of one pass feeds the next, so the
//! order is part of the contract.

/// Number words to decimal digit strings. Covers 0-20, the tens up to 90,
/// and "hundred". Longer words come first: replacement is blind substring
/// splicing, so "seventeen" has to win before "seven" and "ninety" before
/// "nine".
pub static NUMBER_WORDS: &[(&str, &str)] = &[
    ("hundred", "100"),
    ("thirteen", "13"),
    ("fourteen", "14"),
    ("fifteen", "15"),
    ("sixteen", "16"),
    ("seventeen", "17"),
    ("eighteen", "18"),
    ("nineteen", "19"),
    ("eleven", "11"),
    ("twelve", "12"),
    ("twenty", "20"),
    ("thirty", "30"),
    ("forty", "40"),
    ("fifty", "50"),
    ("sixty", "60"),
    ("seventy", "70"),
    ("eighty", "80"),
    ("ninety", "90"),
    ("ten", "10"),
    ("zero", "0"),
    ("one", "1"),
    ("two", "2"),
    ("three", "3"),
    ("four", "4"),
    ("five", "5"),
    ("six", "6"),
    ("seven", "7"),
    ("eight", "8"),
    ("nine", "9"),
];

/// Operator phrases to symbolic tokens, grouped additive, subtractive,
/// multiplicative, divisive, modulus, power, relational, equality.
pub static OPERATOR_PHRASES: &[(&str, &str)] = &[
    ("plus", "+"),
    ("add", "+"),
    ("added to", "+"),
    ("minus", "-"),
    ("subtract", "-"),
    ("subtracted from", "-"),
    ("multiply", "*"),
    ("multiplied by", "*"),
    ("times", "*"),
    ("into", "*"),
    ("x", "*"),
    ("divide", "/"),
    ("divided by", "/"),
    ("mod", "%"),
    ("remainder", "%"),
    ("modulus", "%"),
    ("power", "**"),
    ("raised to", "**"),
    ("greater than", ">"),
    ("less than", "<"),
    ("equal to", "=="),
    ("equals", "=="),
    ("not equal to", "!="),
];
