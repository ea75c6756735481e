//! User-facing message for each failure kind.

use super::outcome::{FailureKind, ValidationOutcome};

/// Shown for codes this build does not know about.
pub const FALLBACK_MESSAGE: &str = "Invalid format";

pub fn message_for(kind: FailureKind) -> &'static str {
    match kind {
        FailureKind::NonNumericId => "National ID must contain only digits",
        FailureKind::IdWrongLength => "National ID must have 11 digits",
        FailureKind::IdAllSameDigits => "National ID cannot have all digits equal",
        FailureKind::InvalidIdDigits => "Invalid national ID",
        FailureKind::IdAlreadyExists => "National ID is already registered",
        FailureKind::InvalidEmailFormat => "Invalid email",
        FailureKind::ForbiddenChars => "Email contains forbidden characters",
        FailureKind::EmailTooLong => "Email is too long",
        FailureKind::NonNumericPhone => "Phone must contain only digits",
        FailureKind::PhoneWrongLength => "Phone must have 10 or 11 digits",
        FailureKind::InvalidAreaCode => "Invalid area code",
        FailureKind::PhoneLeadingZero => "Phone cannot start with 0",
        FailureKind::InvalidPhoneFormat => "Invalid phone",
        FailureKind::MobileWrongLength => "Mobile number must have 11 digits",
        FailureKind::LandlineWrongLength => "Landline number must have 10 digits",
        FailureKind::Required => "This field is required",
        FailureKind::NameTooShort => "Name must have at least 3 characters",
        FailureKind::NameTooLong => "Name must have at most 100 characters",
        FailureKind::InvalidNameChars => "Name must contain only letters and spaces",
        FailureKind::InvalidSex => "Sex must be M, F or O",
    }
}

/// Message for a wire code, falling back to [`FALLBACK_MESSAGE`].
pub fn message_for_code(code: &str) -> &'static str {
    code.parse::<FailureKind>()
        .map(message_for)
        .unwrap_or(FALLBACK_MESSAGE)
}

/// Empty string for a valid outcome.
pub fn message_for_outcome(outcome: &ValidationOutcome) -> &'static str {
    outcome.kind().map(message_for).unwrap_or("")
}
