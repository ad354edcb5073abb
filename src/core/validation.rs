//! Client-side validation for the student form
//!
//! Every rule is checked, so a form with several problems reports all of
//! them at once. Numeric rules follow the formats the backend accepts.

use email_address::{EmailAddress, Options};

use crate::core::student::StudentForm;

/// Minimum length for name and surname
pub const MIN_NAME_LENGTH: usize = 3;

/// Maximum length for name and surname
pub const MAX_NAME_LENGTH: usize = 50;

/// A single failed form rule
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error(
        "Name must be between {} and {} characters",
        MIN_NAME_LENGTH,
        MAX_NAME_LENGTH
    )]
    NameLength,

    #[error(
        "Surname must be between {} and {} characters",
        MIN_NAME_LENGTH,
        MAX_NAME_LENGTH
    )]
    SurnameLength,

    #[error("Invalid email")]
    InvalidEmail,

    #[error("Age must be a whole number")]
    AgeNotInteger,

    #[error("Weight must be an integer or decimal number")]
    WeightNotNumber,

    #[error("Height must be an integer or decimal number")]
    HeightNotNumber,
}

/// Outcome of validating a whole form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationResult {
    pub errors: Vec<FieldError>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    fn check(&mut self, ok: bool, error: FieldError) {
        if !ok {
            self.errors.push(error);
        }
    }

    /// User-facing messages, in rule order
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}

/// Run every rule against the form
pub fn validate_student(form: &StudentForm) -> ValidationResult {
    let mut result = ValidationResult::default();

    result.check(has_name_length(&form.name), FieldError::NameLength);
    result.check(has_name_length(&form.surname), FieldError::SurnameLength);
    result.check(is_email(&form.email), FieldError::InvalidEmail);
    result.check(is_int(&form.age), FieldError::AgeNotInteger);
    result.check(is_float(&form.weight), FieldError::WeightNotNumber);
    result.check(is_float(&form.height), FieldError::HeightNotNumber);

    result
}

/// Length in characters, not bytes
pub fn has_name_length(value: &str) -> bool {
    (MIN_NAME_LENGTH..=MAX_NAME_LENGTH).contains(&value.chars().count())
}

/// Bare `local@domain.tld` only: no display text, no bracketed IP domain
pub fn is_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }

    let options = Options::default()
        .without_display_text()
        .without_domain_literal()
        .with_required_tld();
    EmailAddress::parse_with_options(value, options).is_ok()
}

/// Optional sign, then `0` or digits without a leading zero
pub fn is_int(value: &str) -> bool {
    let digits = value.strip_prefix(['+', '-']).unwrap_or(value);

    match digits.as_bytes() {
        [] => false,
        [b'0'] => true,
        [b'0', ..] => false,
        bytes => bytes.iter().all(u8::is_ascii_digit),
    }
}

/// Optional sign, digits with an optional fraction and exponent
pub fn is_float(value: &str) -> bool {
    let rest = value.strip_prefix(['+', '-']).unwrap_or(value);

    let (mantissa, exponent) = match rest.find(['e', 'E']) {
        Some(pos) => (&rest[..pos], Some(&rest[pos + 1..])),
        None => (rest, None),
    };

    let (whole, fraction) = match mantissa.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (mantissa, ""),
    };

    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(whole) || !all_digits(fraction) {
        return false;
    }
    if whole.is_empty() && fraction.is_empty() {
        return false;
    }

    match exponent {
        None => true,
        Some(exp) => {
            let exp = exp.strip_prefix(['+', '-']).unwrap_or(exp);
            !exp.is_empty() && all_digits(exp)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> StudentForm {
        StudentForm {
            name: "Maria".into(),
            surname: "Silva".into(),
            email: "maria@example.com".into(),
            age: "21".into(),
            weight: "58.5".into(),
            height: "1.70".into(),
            photo_url: None,
        }
    }

    #[test]
    fn test_valid_form_passes() {
        let result = validate_student(&valid_form());
        assert!(result.is_valid());
        assert!(result.messages().is_empty());
    }

    #[test]
    fn test_name_length_bounds() {
        assert!(!has_name_length(""));
        assert!(!has_name_length("Al"));
        assert!(has_name_length("Ana"));
        assert!(has_name_length(&"a".repeat(50)));
        assert!(!has_name_length(&"a".repeat(51)));
    }

    #[test]
    fn test_name_length_counts_characters() {
        // 3 characters, 6 bytes
        assert!(has_name_length("ÉÇÃ"));
        assert!(has_name_length(&"é".repeat(50)));
        assert!(!has_name_length(&"é".repeat(51)));
    }

    #[test]
    fn test_surname_has_own_rule() {
        let mut form = valid_form();
        form.surname = "Li".into();

        let result = validate_student(&form);
        assert_eq!(result.errors, vec![FieldError::SurnameLength]);
        assert!(result.messages()[0].starts_with("Surname"));
    }

    #[test]
    fn test_every_failing_rule_is_reported_in_order() {
        let form = StudentForm {
            name: "Al".into(),
            surname: "x".repeat(60),
            email: "not-an-email".into(),
            age: "21.5".into(),
            weight: "heavy".into(),
            height: "".into(),
            photo_url: None,
        };

        let result = validate_student(&form);
        assert_eq!(
            result.errors,
            vec![
                FieldError::NameLength,
                FieldError::SurnameLength,
                FieldError::InvalidEmail,
                FieldError::AgeNotInteger,
                FieldError::WeightNotNumber,
                FieldError::HeightNotNumber,
            ]
        );
        assert_eq!(result.messages().len(), 6);
    }

    #[test]
    fn test_email_valid() {
        assert!(is_email("user@example.com"));
        assert!(is_email("user.name@example.com"));
        assert!(is_email("user+tag@example.co.uk"));
        assert!(is_email("a@b.co"));
    }

    #[test]
    fn test_email_invalid() {
        assert!(!is_email(""));
        assert!(!is_email("invalid"));
        assert!(!is_email("@example.com"));
        assert!(!is_email("user@"));
        assert!(!is_email("user@example"));
        assert!(!is_email("user@@example.com"));
        assert!(!is_email("user@.com"));
        assert!(!is_email("user@example."));
        assert!(!is_email(" user@example.com"));
        assert!(!is_email("Maria <maria@example.com>"));
        assert!(!is_email("<maria@example.com>"));
        assert!(!is_email("user@[127.0.0.1]"));
    }

    #[test]
    fn test_int_formats() {
        for ok in ["0", "7", "21", "-3", "+15", "1234567890"] {
            assert!(is_int(ok), "{ok} should be an integer");
        }
        for bad in ["", "-", "+", "007", "1.0", "1e3", " 1", "1 ", "abc", "12a"] {
            assert!(!is_int(bad), "{bad:?} should not be an integer");
        }
    }

    #[test]
    fn test_float_formats() {
        for ok in ["0", "58", "58.5", "1.70", ".5", "5.", "-2.5", "+3", "1e3", "2.5E-2"] {
            assert!(is_float(ok), "{ok} should be a float");
        }
        for bad in ["", ".", "-", "+", "e3", "1e", "1.2.3", "1,5", "abc", " 1.5", "1.5kg"] {
            assert!(!is_float(bad), "{bad:?} should not be a float");
        }
    }
}
