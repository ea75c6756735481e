//! Email address checks.
//!
//! The three checks overlap (the format regex already excludes most forbidden
//! characters) and are kept independent; [`FORM`] is the order the
//! registration form runs them in.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::json;

use super::outcome::{FailureKind, ValidationOutcome};
use super::pipeline::{Pipeline, Rule};

/// RFC 5321 mailbox limit.
pub const MAX_LENGTH: usize = 254;

static FORMAT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("valid regex")
});

static FORBIDDEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[<>()\[\]\\,;:\s"]"#).expect("valid regex"));

/// `local@domain.tld` with a top-level segment of at least two letters.
pub fn format_check(raw: &str) -> ValidationOutcome {
    if raw.is_empty() || FORMAT_RE.is_match(raw) {
        return ValidationOutcome::Valid;
    }
    ValidationOutcome::invalid(FailureKind::InvalidEmailFormat, json!({ "value": raw }))
}

pub fn forbidden_chars(raw: &str) -> ValidationOutcome {
    if FORBIDDEN_RE.is_match(raw) {
        return ValidationOutcome::invalid(FailureKind::ForbiddenChars, json!({ "value": raw }));
    }
    ValidationOutcome::Valid
}

/// Length is counted in characters.
pub fn max_length(raw: &str) -> ValidationOutcome {
    let actual = raw.chars().count();
    if actual > MAX_LENGTH {
        return ValidationOutcome::invalid(
            FailureKind::EmailTooLong,
            json!({ "maxLength": MAX_LENGTH, "actualLength": actual }),
        );
    }
    ValidationOutcome::Valid
}

const FORM_RULES: &[Rule] = &[
    Rule::new("maxLength", max_length),
    Rule::new("forbiddenChars", forbidden_chars),
    Rule::new("format", format_check),
];

pub const FORM: Pipeline = Pipeline::new("email.form", FORM_RULES);

pub fn form_validation(raw: &str) -> ValidationOutcome {
    FORM.run(raw)
}
