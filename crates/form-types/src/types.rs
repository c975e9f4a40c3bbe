use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Registration form fields.
///
/// Keys serialize camelCase to match the names the UI layer gives its
/// inputs (`fullName`, `confirmPassword`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    FullName,
    BirthDate,
    TaxId,
    Landline,
    Mobile,
    FatherName,
    MotherName,
    PostalCode,
    Street,
    Number,
    Complement,
    City,
    State,
    Email,
    Password,
    ConfirmPassword,
}

impl FieldName {
    /// Every form field in display order. Drives the submit-time full sweep.
    pub const ALL: [FieldName; 16] = [
        FieldName::FullName,
        FieldName::BirthDate,
        FieldName::TaxId,
        FieldName::Landline,
        FieldName::Mobile,
        FieldName::FatherName,
        FieldName::MotherName,
        FieldName::PostalCode,
        FieldName::Street,
        FieldName::Number,
        FieldName::Complement,
        FieldName::City,
        FieldName::State,
        FieldName::Email,
        FieldName::Password,
        FieldName::ConfirmPassword,
    ];

    /// The UI-facing key for this field, identical to its serialized form.
    pub fn key(&self) -> &'static str {
        match self {
            FieldName::FullName => "fullName",
            FieldName::BirthDate => "birthDate",
            FieldName::TaxId => "taxId",
            FieldName::Landline => "landline",
            FieldName::Mobile => "mobile",
            FieldName::FatherName => "fatherName",
            FieldName::MotherName => "motherName",
            FieldName::PostalCode => "postalCode",
            FieldName::Street => "street",
            FieldName::Number => "number",
            FieldName::Complement => "complement",
            FieldName::City => "city",
            FieldName::State => "state",
            FieldName::Email => "email",
            FieldName::Password => "password",
            FieldName::ConfirmPassword => "confirmPassword",
        }
    }

    /// Human-readable label used inside error messages.
    pub fn label(&self) -> &'static str {
        match self {
            FieldName::FullName => "Full name",
            FieldName::BirthDate => "Birth date",
            FieldName::TaxId => "Tax ID",
            FieldName::Landline => "Landline",
            FieldName::Mobile => "Mobile",
            FieldName::FatherName => "Father's name",
            FieldName::MotherName => "Mother's name",
            FieldName::PostalCode => "Postal code",
            FieldName::Street => "Street",
            FieldName::Number => "Number",
            FieldName::Complement => "Complement",
            FieldName::City => "City",
            FieldName::State => "State",
            FieldName::Email => "Email",
            FieldName::Password => "Password",
            FieldName::ConfirmPassword => "Password confirmation",
        }
    }
}

/// Raw field values as typed by the user.
///
/// Owned exclusively by the UI layer; the validation engine only ever reads
/// from it. Unset fields read as the empty string.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormData {
    values: HashMap<FieldName, String>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the latest value for a field, replacing any previous one.
    pub fn set(&mut self, field: FieldName, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    /// The current value of a field; empty string when nothing was entered.
    pub fn value(&self, field: FieldName) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }
}

/// Per-field validation outcome.
///
/// An empty message means the field passed; a non-empty message is the text
/// the UI should display next to it. Entries are independent: recording a
/// verdict for one field never disturbs another field's entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrors {
    messages: HashMap<FieldName, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the latest verdict for a field, replacing any previous one.
    pub fn record(&mut self, field: FieldName, message: impl Into<String>) {
        self.messages.insert(field, message.into());
    }

    /// The current message for a field; empty string when it passed or was
    /// never validated.
    pub fn message(&self, field: FieldName) -> &str {
        self.messages.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn is_field_valid(&self, field: FieldName) -> bool {
        self.message(field).is_empty()
    }

    /// True when every recorded message is empty: the form is submittable.
    pub fn is_clear(&self) -> bool {
        self.messages.values().all(String::is_empty)
    }

    /// Fields that currently carry a non-empty message.
    pub fn failed_fields(&self) -> Vec<FieldName> {
        let mut fields: Vec<FieldName> = self
            .messages
            .iter()
            .filter(|(_, message)| !message.is_empty())
            .map(|(field, _)| *field)
            .collect();
        fields.sort_by_key(|field| field.key());
        fields
    }
}
