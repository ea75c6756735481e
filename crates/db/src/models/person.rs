//! Person record models and DTOs.

use cadastro_core::person::PersonForm;
use cadastro_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `persons` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: DbId,
    pub name: String,
    pub national_id: String,
    pub sex: String,
    pub email: String,
    pub phone: String,
}

impl Person {
    /// The record as form input, for re-validating a merged update.
    pub fn to_form(&self) -> PersonForm {
        PersonForm {
            name: self.name.clone(),
            national_id: self.national_id.clone(),
            sex: self.sex.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for inserting a person. Built from an already validated form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatePerson {
    pub name: String,
    pub national_id: String,
    pub sex: String,
    pub email: String,
    pub phone: String,
}

impl From<PersonForm> for CreatePerson {
    fn from(form: PersonForm) -> Self {
        let form = form.normalized();
        Self {
            name: form.name,
            national_id: form.national_id,
            sex: form.sex,
            email: form.email,
            phone: form.phone,
        }
    }
}

/// DTO for updating a person. Only non-`None` fields are applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePerson {
    pub name: Option<String>,
    pub national_id: Option<String>,
    pub sex: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl UpdatePerson {
    /// Overlay the present fields onto `form`.
    pub fn apply_to(&self, mut form: PersonForm) -> PersonForm {
        if let Some(name) = &self.name {
            form.name = name.clone();
        }
        if let Some(national_id) = &self.national_id {
            form.national_id = national_id.clone();
        }
        if let Some(sex) = &self.sex {
            form.sex = sex.clone();
        }
        if let Some(email) = &self.email {
            form.email = email.clone();
        }
        if let Some(phone) = &self.phone {
            form.phone = phone.clone();
        }
        form
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Same update with name and email normalized like a new record.
    pub fn normalized(self) -> Self {
        Self {
            name: self.name.map(|name| name.trim().to_string()),
            email: self.email.map(|email| email.trim().to_lowercase()),
            ..self
        }
    }
}
