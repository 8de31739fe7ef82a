use super::*;

fn filled(pairs: &[(&str, &str)]) -> FormState {
    let mut form = FormState::default();
    for (k, v) in pairs {
        form.set(k, (*v).to_owned());
    }
    form
}

#[test]
fn get_missing_field_is_empty() {
    assert_eq!(FormState::default().get("name"), "");
}

#[test]
fn contact_requires_name_email_message() {
    let form = filled(&[("name", "Asha"), ("email", "a@example.org")]);
    assert_eq!(form.validate(&CONTACT_FORM), Err(FormError::MissingField("Message")));
}

#[test]
fn whitespace_does_not_satisfy_required() {
    let form = filled(&[("name", "   "), ("email", "a@example.org"), ("message", "hi")]);
    assert_eq!(form.validate(&CONTACT_FORM), Err(FormError::MissingField("Full Name")));
}

#[test]
fn contact_submit_resets_and_returns_message() {
    let mut form = filled(&[("name", "Asha"), ("email", "a@example.org"), ("message", "Hello"), ("organization", "")]);
    let msg = form.submit(&CONTACT_FORM).unwrap();
    assert_eq!(msg, "Message sent successfully! We'll get back to you within 24 hours.");
    assert_eq!(form, FormState::default());
}

#[test]
fn demo_requires_terms_after_fields() {
    let mut form = filled(&[("name", "A"), ("email", "e@nicu.in"), ("title", "Nurse"), ("organization", "City NICU")]);
    assert_eq!(form.validate(&DEMO_FORM), Err(FormError::TermsNotAccepted));
    form.terms_accepted = true;
    assert!(form.validate(&DEMO_FORM).is_ok());
}

#[test]
fn demo_missing_field_reported_before_terms() {
    let form = filled(&[("name", "A"), ("email", "e@nicu.in")]);
    assert_eq!(form.validate(&DEMO_FORM), Err(FormError::MissingField("Job Title")));
}

#[test]
fn demo_submit_resets_terms() {
    let mut form = filled(&[("name", "A"), ("email", "e@nicu.in"), ("title", "t"), ("organization", "o"), ("phone", "123")]);
    form.terms_accepted = true;
    assert!(form.submit(&DEMO_FORM).unwrap().starts_with("Demo request submitted!"));
    assert!(!form.terms_accepted);
    assert_eq!(form.get("phone"), "");
}

#[test]
fn failed_submit_keeps_values() {
    let mut form = filled(&[("name", "A")]);
    assert!(form.submit(&CONTACT_FORM).is_err());
    assert_eq!(form.get("name"), "A");
}

#[test]
fn terms_error_message_starts_with_prompt() {
    assert!(FormError::TermsNotAccepted.to_string().starts_with("Please agree to terms"));
}

#[test]
fn contact_rejects_malformed_email() {
    let form = filled(&[("name", "Asha"), ("email", "abc"), ("message", "hi")]);
    assert_eq!(form.validate(&CONTACT_FORM), Err(FormError::InvalidEmail));
}

#[test]
fn missing_field_reported_before_email_format() {
    let form = filled(&[("name", "Asha"), ("email", "abc")]);
    assert_eq!(form.validate(&CONTACT_FORM), Err(FormError::MissingField("Message")));
}

#[test]
fn demo_email_checked_before_terms() {
    let form = filled(&[("name", "A"), ("email", "a@b"), ("title", "t"), ("organization", "o")]);
    assert_eq!(form.validate(&DEMO_FORM), Err(FormError::InvalidEmail));
}

#[test]
fn email_with_surrounding_spaces_is_accepted() {
    let form = filled(&[("name", "Asha"), ("email", "  asha@example.org "), ("message", "hi")]);
    assert!(form.validate(&CONTACT_FORM).is_ok());
}

#[test]
fn email_shapes() {
    for ok in ["a@example.org", "first.last+nicu@mail.hospital.in"] {
        assert!(is_valid_email(ok), "{ok}");
    }
    for bad in ["abc", "@example.org", "a@", "a@example", "a@.org", "a@example.", "a@b@c.org", "a b@c.org", "a@exa..org"] {
        assert!(!is_valid_email(bad), "{bad}");
    }
}

#[test]
fn invalid_email_message() {
    assert_eq!(FormError::InvalidEmail.to_string(), "Please enter a valid email address");
}
