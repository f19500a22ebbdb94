//! Field validation rules for the contact form
//!
//! Pure predicates plus the whole-form pass that drives error annotations.
//! Every field is checked independently so the user sees all problems at
//! once, not just the first.

use crate::state::{ContactForm, FieldKind, FormField};
use once_cell::sync::Lazy;
use regex::Regex;

/// local@domain.tld with no whitespace and no second @ in the local part
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid")
});

/// Optional leading +, then at least 8 digits/spaces/hyphens/parentheses
static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+?[0-9\s()\-]{8,}$").expect("phone regex is valid")
});

/// Outcome of validating a single field. Ephemeral, recomputed on every
/// field-leave and submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub valid: bool,
    pub message: Option<String>,
}

impl ValidationResult {
    fn ok() -> Self {
        Self {
            valid: true,
            message: None,
        }
    }

    fn fail(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: Some(message.into()),
        }
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
}

/// Validate one field according to its kind
pub fn validate_field(field: &FormField) -> ValidationResult {
    let value = field.value.trim();

    match field.kind {
        FieldKind::Email => {
            if value.is_empty() {
                ValidationResult::fail("Email is required")
            } else if !is_valid_email(value) {
                ValidationResult::fail("Enter a valid email")
            } else {
                ValidationResult::ok()
            }
        }
        FieldKind::Tel => {
            // Phone is optional; only a non-empty malformed value fails
            if !value.is_empty() && !is_valid_phone(value) {
                ValidationResult::fail("Enter a valid phone number")
            } else {
                ValidationResult::ok()
            }
        }
        FieldKind::Select => {
            if field.required && value.is_empty() {
                ValidationResult::fail("Select a service")
            } else {
                ValidationResult::ok()
            }
        }
        FieldKind::Text | FieldKind::TextArea => {
            if field.required && value.is_empty() {
                ValidationResult::fail(format!("{} is required", field.label))
            } else {
                ValidationResult::ok()
            }
        }
    }
}

/// Validate one field and reflect the result in its annotation.
///
/// The prior annotation is always cleared first, so a field never carries
/// more than one.
pub fn apply_validation(field: &mut FormField) -> bool {
    field.clear_error();
    let result = validate_field(field);
    if let Some(message) = result.message {
        field.set_error(message);
    }
    result.valid
}

/// Validate the whole form, annotating every invalid field.
///
/// No short-circuit: all fields are evaluated even after a failure.
/// Returns true only if every field passed.
pub fn validate_form(form: &mut ContactForm) -> bool {
    let mut all_valid = true;
    for field in form.fields_mut() {
        if !apply_validation(field) {
            all_valid = false;
        }
    }
    all_valid
}

#[cfg(test)]
mod tests {
    use super::*;

    mod email {
        use super::*;

        #[test]
        fn test_accepts_plain_address() {
            assert!(is_valid_email("a@b.co"));
            assert!(is_valid_email("first.last@example.com"));
            assert!(is_valid_email("user+tag@mail.example.org"));
        }

        #[test]
        fn test_rejects_missing_tld() {
            assert!(!is_valid_email("a@b"));
        }

        #[test]
        fn test_rejects_empty() {
            assert!(!is_valid_email(""));
        }

        #[test]
        fn test_rejects_whitespace_and_double_at() {
            assert!(!is_valid_email("a b@c.co"));
            assert!(!is_valid_email("a@@b.co"));
            assert!(!is_valid_email("@b.co"));
            assert!(!is_valid_email("a@.co"));
        }
    }

    mod phone {
        use super::*;

        #[test]
        fn test_accepts_international_format() {
            assert!(is_valid_phone("+1 555-123-4567"));
            assert!(is_valid_phone("(020) 7946 0958"));
            assert!(is_valid_phone("12345678"));
        }

        #[test]
        fn test_rejects_too_short() {
            assert!(!is_valid_phone("12345"));
        }

        #[test]
        fn test_rejects_letters() {
            assert!(!is_valid_phone("555-CALL-NOW"));
        }

        #[test]
        fn test_plus_only_allowed_at_start() {
            assert!(!is_valid_phone("555+1234567"));
        }
    }

    mod field_rules {
        use super::*;
        use crate::state::FormField;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_required_text_rejects_whitespace_only() {
            let mut field = FormField::text("name", "Name");
            field.value = "   ".to_string();
            let result = validate_field(&field);
            assert!(!result.valid);
            assert_eq!(result.message, Some("Name is required".to_string()));
        }

        #[test]
        fn test_empty_email_reports_required_not_invalid() {
            let field = FormField::email("email", "Email");
            let result = validate_field(&field);
            assert_eq!(result.message, Some("Email is required".to_string()));
        }

        #[test]
        fn test_malformed_email_reports_invalid() {
            let mut field = FormField::email("email", "Email");
            field.value = "x".to_string();
            let result = validate_field(&field);
            assert_eq!(result.message, Some("Enter a valid email".to_string()));
        }

        #[test]
        fn test_empty_phone_is_valid() {
            let field = FormField::tel("phone", "Phone (optional)");
            assert!(validate_field(&field).valid);
        }

        #[test]
        fn test_nonempty_bad_phone_is_invalid() {
            let mut field = FormField::tel("phone", "Phone (optional)");
            field.value = "12345".to_string();
            let result = validate_field(&field);
            assert_eq!(
                result.message,
                Some("Enter a valid phone number".to_string())
            );
        }

        #[test]
        fn test_unselected_service_is_invalid() {
            let field = FormField::select("service", "Service");
            let result = validate_field(&field);
            assert_eq!(result.message, Some("Select a service".to_string()));
        }

        #[test]
        fn test_apply_validation_clears_stale_annotation() {
            let mut field = FormField::text("name", "Name");
            field.set_error("Name is required");
            field.value = "Ada".to_string();
            assert!(apply_validation(&mut field));
            assert!(!field.has_error());
        }
    }

    mod whole_form {
        use super::*;
        use crate::state::ContactForm;
        use pretty_assertions::assert_eq;

        fn valid_form() -> ContactForm {
            let mut form = ContactForm::new();
            form.name.value = "Ada Lovelace".to_string();
            form.email.value = "ada@example.com".to_string();
            form.next_service();
            form.message.value = "I'd like fiber at my house.".to_string();
            form
        }

        #[test]
        fn test_all_valid_returns_true_with_no_annotations() {
            let mut form = valid_form();
            assert!(validate_form(&mut form));
            assert_eq!(form.error_count(), 0);
        }

        #[test]
        fn test_four_invalid_fields_get_four_annotations() {
            // Empty name, bad email, no service, empty message
            let mut form = ContactForm::new();
            form.email.value = "x".to_string();

            assert!(!validate_form(&mut form));
            assert_eq!(form.error_count(), 4);
            assert!(form.name.has_error());
            assert!(form.email.has_error());
            assert!(form.service.has_error());
            assert!(form.message.has_error());
            assert!(!form.phone.has_error()); // optional, untouched
        }

        #[test]
        fn test_revalidation_does_not_stack_annotations() {
            let mut form = ContactForm::new();
            validate_form(&mut form);
            validate_form(&mut form);
            assert_eq!(form.error_count(), 4);
            // One message per field, not an accumulation
            assert_eq!(form.name.error(), Some("Name is required"));
        }

        #[test]
        fn test_correcting_a_field_clears_its_annotation() {
            let mut form = ContactForm::new();
            validate_form(&mut form);
            form.name.value = "Ada".to_string();
            form.email.value = "ada@example.com".to_string();
            form.next_service();
            form.message.value = "hi".to_string();
            assert!(validate_form(&mut form));
            assert_eq!(form.error_count(), 0);
        }

        #[test]
        fn test_optional_phone_failure_still_blocks_submit() {
            let mut form = valid_form();
            form.phone.value = "12345".to_string();
            assert!(!validate_form(&mut form));
            assert_eq!(form.error_count(), 1);
        }
    }
}
