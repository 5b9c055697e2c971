//! Email address format check shared by registration and the contact form.

use super::ValidationError;

/// Loose address check: `local@domain.tld` with no whitespace and a single `@`.
pub fn is_valid_email(s: &str) -> bool {
    if s.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    // The domain needs a dot with something on both sides of at least one of them.
    match domain.rfind('.') {
        Some(dot) => {
            let (host, tld) = domain.split_at(dot);
            !host.is_empty() && tld.len() > 1
        }
        None => false,
    }
}

/// Validates `value` as a required email field.
pub fn require_email(field: &str, value: &str) -> Result<(), ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::empty_field(field));
    }
    if !is_valid_email(value) {
        return Err(ValidationError::invalid_format(field, "not a valid email address"));
    }
    Ok(())
}

/// Validates that a text field is present after trimming.
pub fn require_text(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::empty_field(field))
    } else {
        Ok(())
    }
}
