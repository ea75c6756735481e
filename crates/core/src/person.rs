//! Person registration form model.
//!
//! Applies one pipeline per field and collects the outcome of each field,
//! first failure wins within a field. Also owns the normalization applied
//! before a record is stored.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::validation::outcome::{Failure, FailureKind, ValidationOutcome};
use crate::validation::pipeline::{Pipeline, Rule};
use crate::validation::{email, national_id, phone};

pub const NAME_MIN_LENGTH: usize = 3;
pub const NAME_MAX_LENGTH: usize = 100;

// Latin-1 letter block kept as-is, including its two symbols (× and ÷).
static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-ZÀ-ÿ\s]+$").expect("valid regex"));

/// Sex codes accepted by the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sex {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
    #[serde(rename = "O")]
    Other,
}

impl Sex {
    pub fn code(self) -> &'static str {
        match self {
            Sex::Male => "M",
            Sex::Female => "F",
            Sex::Other => "O",
        }
    }
}

impl FromStr for Sex {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "M" => Ok(Sex::Male),
            "F" => Ok(Sex::Female),
            "O" => Ok(Sex::Other),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Raw registration input. Missing JSON fields deserialize as empty strings
/// so they surface as `required` failures instead of parse errors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonForm {
    pub name: String,
    pub national_id: String,
    pub sex: String,
    pub email: String,
    pub phone: String,
}

impl PersonForm {
    /// Trim the name; trim and lower-case the email.
    pub fn normalized(mut self) -> Self {
        self.name = self.name.trim().to_string();
        self.email = self.email.trim().to_lowercase();
        self
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::NationalId => &self.national_id,
            Field::Sex => &self.sex,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
        }
    }
}

/// Form fields, in the order they are validated and reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Name,
    NationalId,
    Sex,
    Email,
    Phone,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::NationalId,
        Field::Sex,
        Field::Email,
        Field::Phone,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::NationalId => "nationalId",
            Field::Sex => "sex",
            Field::Email => "email",
            Field::Phone => "phone",
        }
    }

    pub fn pipeline(self) -> Pipeline {
        match self {
            Field::Name => NAME,
            Field::NationalId => national_id::COMPLETE,
            Field::Sex => SEX,
            Field::Email => email::FORM,
            Field::Phone => phone::COMPLETE,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn name_min_length(raw: &str) -> ValidationOutcome {
    let actual = raw.chars().count();
    if actual >= NAME_MIN_LENGTH {
        return ValidationOutcome::Valid;
    }
    ValidationOutcome::invalid(
        FailureKind::NameTooShort,
        json!({ "minLength": NAME_MIN_LENGTH, "actualLength": actual }),
    )
}

pub fn name_max_length(raw: &str) -> ValidationOutcome {
    let actual = raw.chars().count();
    if actual <= NAME_MAX_LENGTH {
        return ValidationOutcome::Valid;
    }
    ValidationOutcome::invalid(
        FailureKind::NameTooLong,
        json!({ "maxLength": NAME_MAX_LENGTH, "actualLength": actual }),
    )
}

pub fn name_chars(raw: &str) -> ValidationOutcome {
    if NAME_RE.is_match(raw) {
        return ValidationOutcome::Valid;
    }
    ValidationOutcome::invalid(FailureKind::InvalidNameChars, json!({ "value": raw }))
}

pub fn sex_code(raw: &str) -> ValidationOutcome {
    if raw.parse::<Sex>().is_ok() {
        return ValidationOutcome::Valid;
    }
    ValidationOutcome::invalid(FailureKind::InvalidSex, json!({ "value": raw }))
}

const NAME_RULES: &[Rule] = &[
    Rule::new("minLength", name_min_length),
    Rule::new("maxLength", name_max_length),
    Rule::new("letters", name_chars),
];

const SEX_RULES: &[Rule] = &[Rule::new("code", sex_code)];

pub const NAME: Pipeline = Pipeline::new("person.name", NAME_RULES);
pub const SEX: Pipeline = Pipeline::new("person.sex", SEX_RULES);

/// `required` first, then the field's pipeline.
///
/// Whitespace-only input counts as missing.
pub fn validate_field(field: Field, raw: &str) -> ValidationOutcome {
    if raw.trim().is_empty() {
        return ValidationOutcome::invalid(FailureKind::Required, json!({}));
    }
    field.pipeline().run(raw)
}

/// Per-field outcomes of a whole form, in [`Field::ALL`] order.
#[derive(Debug, Clone, PartialEq)]
pub struct FormReport {
    outcomes: Vec<(Field, ValidationOutcome)>,
}

impl FormReport {
    pub fn is_valid(&self) -> bool {
        self.outcomes.iter().all(|(_, outcome)| outcome.is_valid())
    }

    pub fn outcome(&self, field: Field) -> Option<&ValidationOutcome> {
        self.outcomes
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, outcome)| outcome)
    }

    pub fn failures(&self) -> impl Iterator<Item = (Field, &Failure)> + '_ {
        self.outcomes
            .iter()
            .filter_map(|(field, outcome)| outcome.failure().map(|failure| (*field, failure)))
    }

    pub fn first_failure(&self) -> Option<(Field, &Failure)> {
        self.failures().next()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &ValidationOutcome)> + '_ {
        self.outcomes.iter().map(|(field, outcome)| (*field, outcome))
    }
}

/// Validate only the given fields; used for partial updates.
pub fn validate_fields(form: &PersonForm, fields: &[Field]) -> FormReport {
    let outcomes = Field::ALL
        .into_iter()
        .filter(|field| fields.contains(field))
        .map(|field| (field, validate_field(field, form.value(field))))
        .collect();
    FormReport { outcomes }
}

pub fn validate_new_person(form: &PersonForm) -> FormReport {
    validate_fields(form, &Field::ALL)
}
