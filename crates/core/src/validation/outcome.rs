//! Validation outcome contract shared by every validator family.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Named fields attached to a failure, e.g. `{actualLength, expectedLength}`.
pub type Details = Map<String, Value>;

/// Closed set of failure tags, grouped by the family that emits them.
///
/// Serialized in camelCase so the wire code matches [`FailureKind::code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FailureKind {
    // National ID
    NonNumericId,
    IdWrongLength,
    IdAllSameDigits,
    InvalidIdDigits,
    IdAlreadyExists,

    // Email
    InvalidEmailFormat,
    ForbiddenChars,
    EmailTooLong,

    // Phone
    NonNumericPhone,
    PhoneWrongLength,
    InvalidAreaCode,
    PhoneLeadingZero,
    InvalidPhoneFormat,
    MobileWrongLength,
    LandlineWrongLength,

    // Person form
    Required,
    NameTooShort,
    NameTooLong,
    InvalidNameChars,
    InvalidSex,
}

impl FailureKind {
    pub const ALL: [FailureKind; 20] = [
        FailureKind::NonNumericId,
        FailureKind::IdWrongLength,
        FailureKind::IdAllSameDigits,
        FailureKind::InvalidIdDigits,
        FailureKind::IdAlreadyExists,
        FailureKind::InvalidEmailFormat,
        FailureKind::ForbiddenChars,
        FailureKind::EmailTooLong,
        FailureKind::NonNumericPhone,
        FailureKind::PhoneWrongLength,
        FailureKind::InvalidAreaCode,
        FailureKind::PhoneLeadingZero,
        FailureKind::InvalidPhoneFormat,
        FailureKind::MobileWrongLength,
        FailureKind::LandlineWrongLength,
        FailureKind::Required,
        FailureKind::NameTooShort,
        FailureKind::NameTooLong,
        FailureKind::InvalidNameChars,
        FailureKind::InvalidSex,
    ];

    /// Wire code for this kind.
    pub fn code(self) -> &'static str {
        match self {
            FailureKind::NonNumericId => "nonNumericId",
            FailureKind::IdWrongLength => "idWrongLength",
            FailureKind::IdAllSameDigits => "idAllSameDigits",
            FailureKind::InvalidIdDigits => "invalidIdDigits",
            FailureKind::IdAlreadyExists => "idAlreadyExists",
            FailureKind::InvalidEmailFormat => "invalidEmailFormat",
            FailureKind::ForbiddenChars => "forbiddenChars",
            FailureKind::EmailTooLong => "emailTooLong",
            FailureKind::NonNumericPhone => "nonNumericPhone",
            FailureKind::PhoneWrongLength => "phoneWrongLength",
            FailureKind::InvalidAreaCode => "invalidAreaCode",
            FailureKind::PhoneLeadingZero => "phoneLeadingZero",
            FailureKind::InvalidPhoneFormat => "invalidPhoneFormat",
            FailureKind::MobileWrongLength => "mobileWrongLength",
            FailureKind::LandlineWrongLength => "landlineWrongLength",
            FailureKind::Required => "required",
            FailureKind::NameTooShort => "nameTooShort",
            FailureKind::NameTooLong => "nameTooLong",
            FailureKind::InvalidNameChars => "invalidNameChars",
            FailureKind::InvalidSex => "invalidSex",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Returned when a wire code does not name any known [`FailureKind`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown failure kind: {0}")]
pub struct UnknownKind(pub String);

impl FromStr for FailureKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FailureKind::ALL
            .into_iter()
            .find(|kind| kind.code() == s)
            .ok_or_else(|| UnknownKind(s.to_string()))
    }
}

/// A single failed check: its tag plus the details needed to explain it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Failure {
    pub kind: FailureKind,
    pub details: Details,
}

impl Failure {
    pub fn detail(&self, name: &str) -> Option<&Value> {
        self.details.get(name)
    }
}

/// Result of running one check or one pipeline against a raw input.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationOutcome {
    Valid,
    Invalid(Failure),
}

impl ValidationOutcome {
    /// Build a failed outcome. `details` is expected to be a JSON object;
    /// anything else is recorded as an empty detail map.
    pub fn invalid(kind: FailureKind, details: Value) -> Self {
        let details = match details {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        ValidationOutcome::Invalid(Failure { kind, details })
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid)
    }

    pub fn kind(&self) -> Option<FailureKind> {
        self.failure().map(|f| f.kind)
    }

    pub fn failure(&self) -> Option<&Failure> {
        match self {
            ValidationOutcome::Valid => None,
            ValidationOutcome::Invalid(failure) => Some(failure),
        }
    }

    pub fn into_failure(self) -> Option<Failure> {
        match self {
            ValidationOutcome::Valid => None,
            ValidationOutcome::Invalid(failure) => Some(failure),
        }
    }
}
