//! National ID (Brazilian CPF) checks.
//!
//! An ID is 11 digits; the last two are check digits computed with a
//! weighted sum modulo 11 over the preceding digits.
//!
//! Two numeric checks exist because callers differ on formatting:
//! [`numeric_only`] rejects punctuation outright and is used by
//! [`COMPLETE`]; [`numeric_ignoring_formatting`] strips punctuation first and
//! is used by [`COMPLETE_FORMATTED`]. The length, repeated-digit and checksum
//! checks always work on the digit-only form.

use serde_json::json;

use super::outcome::{FailureKind, ValidationOutcome};
use super::pipeline::{Pipeline, Rule};
use super::{digits_only, is_numeric};

/// Number of digits in a national ID.
pub const LENGTH: usize = 11;

/// Strict: the raw input must consist of ASCII digits only.
pub fn numeric_only(raw: &str) -> ValidationOutcome {
    if raw.is_empty() || is_numeric(raw) {
        return ValidationOutcome::Valid;
    }
    ValidationOutcome::invalid(FailureKind::NonNumericId, json!({ "value": raw }))
}

/// Lenient: punctuation is ignored, but at least one digit must remain.
pub fn numeric_ignoring_formatting(raw: &str) -> ValidationOutcome {
    if raw.is_empty() || is_numeric(&digits_only(raw)) {
        return ValidationOutcome::Valid;
    }
    ValidationOutcome::invalid(FailureKind::NonNumericId, json!({ "value": raw }))
}

pub fn exact_length(raw: &str) -> ValidationOutcome {
    if raw.is_empty() {
        return ValidationOutcome::Valid;
    }
    let actual = digits_only(raw).len();
    if actual == LENGTH {
        return ValidationOutcome::Valid;
    }
    ValidationOutcome::invalid(
        FailureKind::IdWrongLength,
        json!({ "actualLength": actual, "expectedLength": LENGTH }),
    )
}

/// Rejects IDs made of one repeated digit (`00000000000`, `11111111111`, ...).
///
/// Runs before [`checksum`]: an all-zero ID would otherwise pass the
/// checksum arithmetic.
pub fn all_same_digits(raw: &str) -> ValidationOutcome {
    let digits = digits_only(raw);
    let repeated = digits.len() == LENGTH && digits.bytes().all(|b| b == digits.as_bytes()[0]);
    if repeated {
        return ValidationOutcome::invalid(FailureKind::IdAllSameDigits, json!({ "value": raw }));
    }
    ValidationOutcome::Valid
}

/// Verify both check digits.
///
/// Input whose digit form is not exactly 11 digits cannot carry valid check
/// digits and is reported as `invalidIdDigits`.
pub fn checksum(raw: &str) -> ValidationOutcome {
    if raw.is_empty() {
        return ValidationOutcome::Valid;
    }
    let digits: Vec<u32> = digits_only(raw)
        .chars()
        .filter_map(|c| c.to_digit(10))
        .collect();

    let matches = digits.len() == LENGTH
        && digits[9] == check_digit(&digits[..9])
        && digits[10] == check_digit(&digits[..10]);
    if matches {
        return ValidationOutcome::Valid;
    }
    ValidationOutcome::invalid(FailureKind::InvalidIdDigits, json!({ "value": raw }))
}

/// Check digit over `digits`, weighting from `len + 1` down to 2.
///
/// A remainder of 10 or 11 maps to 0.
pub fn check_digit(digits: &[u32]) -> u32 {
    let top = digits.len() as u32 + 1;
    let sum: u32 = digits
        .iter()
        .zip((2..=top).rev())
        .map(|(digit, weight)| digit * weight)
        .sum();
    let remainder = 11 - sum % 11;
    if remainder >= 10 {
        0
    } else {
        remainder
    }
}

const COMPLETE_RULES: &[Rule] = &[
    Rule::new("numericOnly", numeric_only),
    Rule::new("exactLength", exact_length),
    Rule::new("allSameDigits", all_same_digits),
    Rule::new("checksum", checksum),
];

const COMPLETE_FORMATTED_RULES: &[Rule] = &[
    Rule::new("numericIgnoringFormatting", numeric_ignoring_formatting),
    Rule::new("exactLength", exact_length),
    Rule::new("allSameDigits", all_same_digits),
    Rule::new("checksum", checksum),
];

const SIMPLE_RULES: &[Rule] = &[
    Rule::new("exactLength", exact_length),
    Rule::new("allSameDigits", all_same_digits),
];

/// Digits only, no punctuation allowed.
pub const COMPLETE: Pipeline = Pipeline::new("nationalId.complete", COMPLETE_RULES);

/// Accepts `529.982.247-25` style input.
pub const COMPLETE_FORMATTED: Pipeline =
    Pipeline::new("nationalId.completeFormatted", COMPLETE_FORMATTED_RULES);

/// Length and repeated digits only. Paired with the uniqueness lookup.
pub const SIMPLE: Pipeline = Pipeline::new("nationalId.simple", SIMPLE_RULES);

pub fn complete_validation(raw: &str) -> ValidationOutcome {
    COMPLETE.run(raw)
}

pub fn complete_formatted_validation(raw: &str) -> ValidationOutcome {
    COMPLETE_FORMATTED.run(raw)
}

pub fn simple_validation(raw: &str) -> ValidationOutcome {
    SIMPLE.run(raw)
}
