//! Brazilian phone number checks (landline and mobile).
//!
//! A number is a two-digit area code (11-99) followed by 8 or 9 digits.
//! Everything except [`numeric_only`] works on the digit-only form.
//!
//! [`COMPLETE`] runs the area code check before the leading-zero check, so
//! `01199999999` is reported as `invalidAreaCode` with `areaCode: 1` rather
//! than `phoneLeadingZero`. The order is kept as is; [`Pipeline::failures`]
//! shows both.

use std::ops::RangeInclusive;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::json;

use super::outcome::{FailureKind, ValidationOutcome};
use super::pipeline::{Pipeline, Rule};
use super::{digits_only, is_numeric};

pub const MIN_LENGTH: usize = 10;
pub const MAX_LENGTH: usize = 11;
pub const MOBILE_LENGTH: usize = 11;
pub const LANDLINE_LENGTH: usize = 10;
pub const AREA_CODES: RangeInclusive<u32> = 11..=99;

static FORMAT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10,11}$").expect("valid regex"));

pub fn numeric_only(raw: &str) -> ValidationOutcome {
    if raw.is_empty() || is_numeric(raw) {
        return ValidationOutcome::Valid;
    }
    ValidationOutcome::invalid(FailureKind::NonNumericPhone, json!({ "value": raw }))
}

pub fn length_check(raw: &str) -> ValidationOutcome {
    if raw.is_empty() {
        return ValidationOutcome::Valid;
    }
    let actual = digits_only(raw).len();
    if (MIN_LENGTH..=MAX_LENGTH).contains(&actual) {
        return ValidationOutcome::Valid;
    }
    ValidationOutcome::invalid(
        FailureKind::PhoneWrongLength,
        json!({ "actualLength": actual, "minLength": MIN_LENGTH, "maxLength": MAX_LENGTH }),
    )
}

/// First two digits, parsed as an integer, must be a valid area code.
///
/// Inputs with fewer than two digits are left to [`length_check`].
pub fn area_code_check(raw: &str) -> ValidationOutcome {
    let digits = digits_only(raw);
    let Some(area_code) = digits.get(..2).and_then(|prefix| prefix.parse::<u32>().ok()) else {
        return ValidationOutcome::Valid;
    };
    if AREA_CODES.contains(&area_code) {
        return ValidationOutcome::Valid;
    }
    ValidationOutcome::invalid(
        FailureKind::InvalidAreaCode,
        json!({ "areaCode": area_code, "value": raw }),
    )
}

pub fn no_leading_zero(raw: &str) -> ValidationOutcome {
    if digits_only(raw).starts_with('0') {
        return ValidationOutcome::invalid(FailureKind::PhoneLeadingZero, json!({ "value": raw }));
    }
    ValidationOutcome::Valid
}

/// Standalone convenience: 10 or 11 digits once punctuation is removed.
pub fn format_check(raw: &str) -> ValidationOutcome {
    if raw.is_empty() || FORMAT_RE.is_match(&digits_only(raw)) {
        return ValidationOutcome::Valid;
    }
    ValidationOutcome::invalid(FailureKind::InvalidPhoneFormat, json!({ "value": raw }))
}

pub fn mobile_check(raw: &str) -> ValidationOutcome {
    exact_length(raw, MOBILE_LENGTH, FailureKind::MobileWrongLength)
}

pub fn landline_check(raw: &str) -> ValidationOutcome {
    exact_length(raw, LANDLINE_LENGTH, FailureKind::LandlineWrongLength)
}

fn exact_length(raw: &str, expected: usize, kind: FailureKind) -> ValidationOutcome {
    if raw.is_empty() {
        return ValidationOutcome::Valid;
    }
    let actual = digits_only(raw).len();
    if actual == expected {
        return ValidationOutcome::Valid;
    }
    ValidationOutcome::invalid(
        kind,
        json!({ "actualLength": actual, "expectedLength": expected }),
    )
}

const COMPLETE_RULES: &[Rule] = &[
    Rule::new("numericOnly", numeric_only),
    Rule::new("length", length_check),
    Rule::new("areaCode", area_code_check),
    Rule::new("noLeadingZero", no_leading_zero),
    Rule::new("format", format_check),
];

pub const COMPLETE: Pipeline = Pipeline::new("phone.complete", COMPLETE_RULES);

pub fn complete_validation(raw: &str) -> ValidationOutcome {
    COMPLETE.run(raw)
}
