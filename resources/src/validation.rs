/*
 * Copyright (c) 2021 gematik GmbH
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *    http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 *
 */

use std::collections::BTreeMap;
use std::fmt::{Display, Formatter, Result as FmtResult};

use regex::Regex;

use super::patient::PatientForm;

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Field {
    Name,
    Email,
    Phone,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FieldError {
    Required,
    Format,
}

/// Outcome of validating a [`PatientForm`].
///
/// The error map is empty exactly when the form is valid.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormValidation {
    errors: BTreeMap<Field, FieldError>,
}

/// Checks the patient form field by field, without touching any
/// collaborator. The `reason` field is optional and never validated.
pub fn validate_patient_form(form: &PatientForm) -> FormValidation {
    lazy_static! {
        static ref EMAIL: Regex = Regex::new(r#"\S+@\S+\.\S+"#).unwrap();
        static ref PHONE: Regex = Regex::new(r#"^\+?[\d\s\-()]{10,}$"#).unwrap();
    }

    let mut validation = FormValidation::default();

    if form.name.trim().is_empty() {
        validation.add(Field::Name, FieldError::Required);
    }

    if form.email.trim().is_empty() {
        validation.add(Field::Email, FieldError::Required);
    } else if !EMAIL.is_match(&form.email) {
        validation.add(Field::Email, FieldError::Format);
    }

    if form.phone.trim().is_empty() {
        validation.add(Field::Phone, FieldError::Required);
    } else if !PHONE.is_match(&form.phone) {
        validation.add(Field::Phone, FieldError::Format);
    }

    validation
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
        }
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

impl FieldError {
    pub fn message(self, field: Field) -> &'static str {
        match (field, self) {
            (Field::Name, _) => "Full name is required",
            (Field::Email, Self::Required) => "Email is required",
            (Field::Email, Self::Format) => "Please enter a valid email address",
            (Field::Phone, Self::Required) => "Phone number is required",
            (Field::Phone, Self::Format) => "Please enter a valid phone number",
        }
    }
}

impl FormValidation {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error(&self, field: Field) -> Option<FieldError> {
        self.errors.get(&field).copied()
    }

    /// Field name to user-facing message, for the error response body.
    pub fn messages(&self) -> BTreeMap<&'static str, &'static str> {
        self.errors
            .iter()
            .map(|(field, error)| (field.as_str(), error.message(*field)))
            .collect()
    }

    fn add(&mut self, field: Field, error: FieldError) {
        self.errors.insert(field, error);
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;

    fn form(name: &str, email: &str, phone: &str) -> PatientForm {
        PatientForm {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            reason: String::new(),
        }
    }

    #[test]
    fn valid_form() {
        let validation = validate_patient_form(&form("Jane Doe", "jane@x.com", "+1 555 123 4567"));

        assert!(validation.is_valid());
        assert!(validation.messages().is_empty());
    }

    #[test]
    fn missing_fields() {
        let validation = validate_patient_form(&form("  ", "", ""));

        assert!(!validation.is_valid());
        assert_eq!(validation.error(Field::Name), Some(FieldError::Required));
        assert_eq!(validation.error(Field::Email), Some(FieldError::Required));
        assert_eq!(validation.error(Field::Phone), Some(FieldError::Required));
    }

    #[test]
    fn malformed_email() {
        let validation = validate_patient_form(&form("Jane Doe", "not-an-email", "+1 555 123 4567"));

        assert!(!validation.is_valid());
        assert_eq!(validation.error(Field::Email), Some(FieldError::Format));
        assert_eq!(validation.error(Field::Phone), None);
        assert_eq!(
            validation.messages().get("email"),
            Some(&"Please enter a valid email address")
        );
    }

    #[test]
    fn malformed_phone() {
        let validation = validate_patient_form(&form("Jane Doe", "jane@x.com", "12345"));

        assert!(!validation.is_valid());
        assert_eq!(validation.error(Field::Phone), Some(FieldError::Format));
    }

    #[test]
    fn reason_is_optional() {
        let mut form = form("Jane Doe", "jane@x.com", "+1 555 123 4567");
        form.reason = String::new();

        assert!(validate_patient_form(&form).is_valid());
    }
}
