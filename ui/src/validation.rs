/// Core validation trait that all validators must implement.
///
/// Validators run on every change to a field ("on change" mode), so the
/// submit control's enabled state stays live. A field that fails
/// validation never reaches the network.
pub trait Validator<T: ?Sized> {
    type Error;

    /// Validate the input and return Ok(()) if valid, or Err with validation error
    fn validate(&self, input: &T) -> Result<(), Self::Error>;
}

/// Rejects empty (or whitespace-only) input.
pub struct RequiredValidator;

impl Validator<str> for RequiredValidator {
    type Error = String;

    fn validate(&self, input: &str) -> Result<(), Self::Error> {
        if input.trim().is_empty() {
            Err("Required".to_string())
        } else {
            Ok(())
        }
    }
}

/// Syntactic email check: non-empty local part, a single `@`, and a domain
/// with at least one dot that neither starts nor ends a label.
pub struct EmailValidator;

impl Validator<str> for EmailValidator {
    type Error = String;

    fn validate(&self, input: &str) -> Result<(), Self::Error> {
        RequiredValidator.validate(input)?;

        let invalid = || "Invalid email".to_string();

        let mut parts = input.split('@');
        let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
            (Some(local), Some(domain), None) => (local, domain),
            _ => return Err(invalid()),
        };

        if local.is_empty() || domain.is_empty() {
            return Err(invalid());
        }
        if input.chars().any(char::is_whitespace) {
            return Err(invalid());
        }
        if !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
            return Err(invalid());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_err, assert_ok};

    #[test]
    fn test_required_rejects_empty_and_blank() {
        assert_err!(RequiredValidator.validate(""));
        assert_err!(RequiredValidator.validate("   "));
        assert_ok!(RequiredValidator.validate("x"));
    }

    #[test]
    fn test_email_accepts_plain_addresses() {
        assert_ok!(EmailValidator.validate("admin@moivon.com"));
        assert_ok!(EmailValidator.validate("first.last@sub.example.co"));
    }

    #[test]
    fn test_email_rejects_malformed_addresses() {
        assert_err!(EmailValidator.validate(""));
        assert_err!(EmailValidator.validate("plainaddress"));
        assert_err!(EmailValidator.validate("@moivon.com"));
        assert_err!(EmailValidator.validate("user@"));
        assert_err!(EmailValidator.validate("user@nodot"));
        assert_err!(EmailValidator.validate("user@.com"));
        assert_err!(EmailValidator.validate("user@com."));
        assert_err!(EmailValidator.validate("a@b@c.com"));
        assert_err!(EmailValidator.validate("user name@moivon.com"));
    }

    #[test]
    fn test_email_error_messages_match_form_copy() {
        assert_eq!(EmailValidator.validate("").unwrap_err(), "Required");
        assert_eq!(EmailValidator.validate("nope").unwrap_err(), "Invalid email");
    }
}
