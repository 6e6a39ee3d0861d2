//! Field validation for the contact and checkout forms. The rules are
//! deliberately loose: they catch obvious typos, and the business
//! follows up over the phone anyway.

use thiserror::Error;

/// How a field's value should be checked, derived from the input's
/// `type` attribute. Anything unrecognised only gets the required
/// check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Phone,
}

impl FieldKind {
    pub fn from_input_type(input_type: &str) -> Self {
        match input_type {
            "email" => Self::Email,
            "tel" => Self::Phone,
            _ => Self::Text,
        }
    }
}

/// Why a field failed. The `Display` text is shown to the visitor
/// verbatim, so keep it plain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("This field is required")]
    Required,
    #[error("Please enter a valid email")]
    InvalidEmail,
    #[error("Please enter a valid phone number")]
    InvalidPhone,
}

/// Check one field. The value is trimmed once up front; whitespace
/// padding neither satisfies the required check nor breaks an
/// otherwise fine email.
pub fn validate_value(kind: FieldKind, raw: &str) -> Result<(), Violation> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(Violation::Required);
    }
    match kind {
        FieldKind::Email if !is_valid_email(value) => Err(Violation::InvalidEmail),
        FieldKind::Phone if !is_valid_phone(value) => Err(Violation::InvalidPhone),
        _ => Ok(()),
    }
}

/// Structural email check: one `@`, something on both sides, no
/// whitespace, and a dot somewhere inside the domain. Not RFC 5322 and
/// not trying to be.
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Phone numbers are valid when they carry 10 or 11 digits, which
/// covers local `021...` landlines and `03xx...` mobiles. Separators
/// are ignored; international `+92...` forms exceed the digit count
/// and fail.
pub fn is_valid_phone(value: &str) -> bool {
    let digits = value.chars().filter(|c| c.is_ascii_digit()).count();
    (10..=11).contains(&digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_type_mapping() {
        assert_eq!(FieldKind::from_input_type("email"), FieldKind::Email);
        assert_eq!(FieldKind::from_input_type("tel"), FieldKind::Phone);
        assert_eq!(FieldKind::from_input_type("text"), FieldKind::Text);
        assert_eq!(FieldKind::from_input_type("checkbox"), FieldKind::Text);
        assert_eq!(FieldKind::from_input_type(""), FieldKind::Text);
    }

    #[test]
    fn empty_and_whitespace_values_are_required_violations() {
        assert_eq!(
            validate_value(FieldKind::Text, ""),
            Err(Violation::Required)
        );
        assert_eq!(
            validate_value(FieldKind::Email, "   "),
            Err(Violation::Required)
        );
        assert_eq!(
            validate_value(FieldKind::Phone, "\t\n"),
            Err(Violation::Required)
        );
    }

    #[test]
    fn nonempty_text_passes() {
        assert_eq!(validate_value(FieldKind::Text, "hello"), Ok(()));
        assert_eq!(validate_value(FieldKind::Text, "  padded  "), Ok(()));
    }

    #[test]
    fn accepts_ordinary_emails() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("first.last@shop.example.pk"));
        assert!(is_valid_email("x+tag@sub.domain.org"));
    }

    #[test]
    fn rejects_structurally_broken_emails() {
        assert!(!is_valid_email("plainaddress"));
        assert!(!is_valid_email("@missing-local.com"));
        assert!(!is_valid_email("missing-domain@"));
        assert!(!is_valid_email("two@@signs.com"));
        assert!(!is_valid_email("spaces in@side.com"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a@nodot"));
        assert!(!is_valid_email("a@.leading"));
        assert!(!is_valid_email("a@trailing."));
    }

    #[test]
    fn consecutive_domain_dots_slip_through() {
        // Matches the loose shape check; the follow-up call catches it.
        assert!(is_valid_email("a@b..c"));
    }

    #[test]
    fn email_is_validated_after_trimming() {
        assert_eq!(validate_value(FieldKind::Email, " a@b.com "), Ok(()));
        assert_eq!(
            validate_value(FieldKind::Email, " not-an-email "),
            Err(Violation::InvalidEmail)
        );
    }

    #[test]
    fn accepts_local_phone_formats() {
        assert!(is_valid_phone("03001234567"));
        assert!(is_valid_phone("0300-1234567"));
        assert!(is_valid_phone("(021) 123-4567-8"));
        assert!(is_valid_phone("0211234567"));
    }

    #[test]
    fn rejects_short_and_long_numbers() {
        assert!(!is_valid_phone("123"));
        assert!(!is_valid_phone("123456789"));
        assert!(!is_valid_phone("123456789012"));
        // Country code makes it 12 digits
        assert!(!is_valid_phone("+92 300 1234567"));
        assert!(!is_valid_phone("no digits here"));
    }

    #[test]
    fn phone_violation_carries_the_visitor_message() {
        let err = validate_value(FieldKind::Phone, "123").unwrap_err();
        assert_eq!(err.to_string(), "Please enter a valid phone number");
    }

    #[test]
    fn violation_messages_read_as_shown() {
        assert_eq!(Violation::Required.to_string(), "This field is required");
        assert_eq!(
            Violation::InvalidEmail.to_string(),
            "Please enter a valid email"
        );
    }
}
