//! Contact and demo form state.
//!
//! Submission is simulated: a valid form produces a success message and
//! resets; nothing leaves the browser.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Please fill in the required field: {0}")]
    MissingField(&'static str),
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please agree to terms: You must agree to the terms and conditions to proceed.")]
    TermsNotAccepted,
}

/// A required field: form key and human label.
#[derive(Clone, Copy, Debug)]
pub struct RequiredField {
    pub name: &'static str,
    pub label: &'static str,
}

/// Validation rules and copy for one form.
#[derive(Clone, Copy, Debug)]
pub struct FormSpec {
    pub required: &'static [RequiredField],
    /// Field whose non-empty value must look like an email address.
    pub email_field: Option<&'static str>,
    pub requires_terms: bool,
    pub success_message: &'static str,
}

pub const CONTACT_FORM: FormSpec = FormSpec {
    required: &[
        RequiredField { name: "name", label: "Full Name" },
        RequiredField { name: "email", label: "Email" },
        RequiredField { name: "message", label: "Message" },
    ],
    email_field: Some("email"),
    requires_terms: false,
    success_message: "Message sent successfully! We'll get back to you within 24 hours.",
};

pub const DEMO_FORM: FormSpec = FormSpec {
    required: &[
        RequiredField { name: "name", label: "Full Name" },
        RequiredField { name: "email", label: "Email" },
        RequiredField { name: "title", label: "Job Title" },
        RequiredField { name: "organization", label: "Organization" },
    ],
    email_field: Some("email"),
    requires_terms: true,
    success_message: "Demo request submitted! We'll contact you within 24 hours to schedule your personalized demo.",
};

/// Field values keyed by field name, plus the terms flag.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    values: BTreeMap<String, String>,
    pub terms_accepted: bool,
}

impl FormState {
    pub fn set(&mut self, field: &str, value: String) {
        self.values.insert(field.to_owned(), value);
    }

    #[must_use]
    pub fn get(&self, field: &str) -> &str {
        self.values.get(field).map_or("", String::as_str)
    }

    /// Required fields first, in declaration order, then the email format,
    /// then terms.
    ///
    /// # Errors
    ///
    /// The first rule the form breaks.
    pub fn validate(&self, spec: &FormSpec) -> Result<(), FormError> {
        if let Some(missing) = spec
            .required
            .iter()
            .find(|f| self.get(f.name).trim().is_empty())
        {
            return Err(FormError::MissingField(missing.label));
        }
        if let Some(field) = spec.email_field {
            let email = self.get(field).trim();
            if !email.is_empty() && !is_valid_email(email) {
                return Err(FormError::InvalidEmail);
            }
        }
        if spec.requires_terms && !self.terms_accepted {
            return Err(FormError::TermsNotAccepted);
        }
        Ok(())
    }

    /// Validate, then reset on success and return the success message.
    ///
    /// # Errors
    ///
    /// Same as [`FormState::validate`]; the form keeps its values.
    pub fn submit(&mut self, spec: &FormSpec) -> Result<&'static str, FormError> {
        self.validate(spec)?;
        *self = Self::default();
        Ok(spec.success_message)
    }
}

/// `local@domain.tld` shape: one `@`, no whitespace, and a domain with an
/// inner dot.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain.split('.').count() >= 2 && domain.split('.').all(|label| !label.is_empty())
}
