//! Field validation engine.
//!
//! Three independent validator families (national ID, email, phone) built on a
//! shared [`outcome::ValidationOutcome`] contract and fail-fast
//! [`pipeline::Pipeline`]s. Every check is a pure `fn(&str) -> ValidationOutcome`
//! and treats an empty input as valid; presence is owned by the form layer.

use std::sync::LazyLock;

use regex::Regex;

pub mod email;
pub mod existence;
pub mod messages;
pub mod national_id;
pub mod outcome;
pub mod phone;
pub mod pipeline;

// ASCII digits only: `\d` in the regex crate matches any Unicode digit.
static NUMERIC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("valid regex"));

/// Whether `value` is a non-empty run of ASCII digits.
pub(crate) fn is_numeric(value: &str) -> bool {
    NUMERIC_RE.is_match(value)
}

/// Remove every character that is not an ASCII digit.
///
/// ```
/// use cadastro_core::validation::digits_only;
///
/// assert_eq!(digits_only("529.982.247-25"), "52998224725");
/// assert_eq!(digits_only("(11) 99999-9999"), "11999999999");
/// ```
pub fn digits_only(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}
