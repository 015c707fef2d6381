use super::ApiError;
use crate::constants::limits::{MAX_EMAIL_LEN, MAX_PASSWORD_LEN, MAX_USERNAME_LEN, MIN_EMAIL_LEN};

/// Checks that `value` has visible content and at most `max_len` characters.
/// The value itself is returned unmodified.
pub fn validate_required<'a>(
    field: &str,
    value: &'a str,
    max_len: Option<usize>,
) -> Result<&'a str, ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::validation(format!("{field} cannot be empty")));
    }

    if let Some(max) = max_len
        && value.chars().count() > max
    {
        return Err(ApiError::validation(format!(
            "{field} must be {max} characters or less"
        )));
    }

    Ok(value)
}

pub fn validate_optional<'a>(
    field: &str,
    value: Option<&'a str>,
    max_len: usize,
) -> Result<Option<&'a str>, ApiError> {
    match value {
        Some(v) if v.chars().count() > max_len => Err(ApiError::validation(format!(
            "{field} must be {max_len} characters or less"
        ))),
        other => Ok(other),
    }
}

pub fn validate_username(username: &str) -> Result<&str, ApiError> {
    validate_required("username", username, Some(MAX_USERNAME_LEN))
}

pub fn validate_email(email: &str) -> Result<&str, ApiError> {
    let email = validate_required("email", email, Some(MAX_EMAIL_LEN))?;

    if email.chars().count() < MIN_EMAIL_LEN {
        return Err(ApiError::validation(format!(
            "email must be at least {MIN_EMAIL_LEN} characters"
        )));
    }

    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(email),
        _ => Err(ApiError::validation(format!(
            "Invalid email address: {email}"
        ))),
    }
}

/// Passwords are never trimmed; only emptiness and length are checked.
pub fn validate_password(password: &str) -> Result<&str, ApiError> {
    if password.is_empty() {
        return Err(ApiError::validation("password cannot be empty"));
    }

    if password.chars().count() > MAX_PASSWORD_LEN {
        return Err(ApiError::validation(format!(
            "password must be {MAX_PASSWORD_LEN} characters or less"
        )));
    }

    Ok(password)
}

pub fn validate_id(field: &str, id: i32) -> Result<i32, ApiError> {
    if id <= 0 {
        return Err(ApiError::validation(format!(
            "Invalid {field}: {id}. ID must be a positive integer"
        )));
    }
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_required() {
        assert!(validate_required("title", "Engineer", Some(100)).is_ok());
        assert_eq!(
            validate_required("title", " padded ", Some(100)).unwrap(),
            " padded "
        );
        assert!(validate_required("title", "", Some(100)).is_err());
        assert!(validate_required("title", "   ", Some(100)).is_err());
        assert!(validate_required("title", &"a".repeat(101), Some(100)).is_err());
        assert!(validate_required("description", &"a".repeat(10_000), None).is_ok());
    }

    #[test]
    fn test_validate_optional() {
        assert_eq!(validate_optional("salary", None, 50).unwrap(), None);
        assert_eq!(
            validate_optional("salary", Some("100k"), 50).unwrap(),
            Some("100k")
        );
        assert!(validate_optional("salary", Some(&"9".repeat(51)), 50).is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("a@x.com").is_ok());
        assert!(validate_email("").is_err());
        assert!(validate_email("no-at-sign").is_err());
        assert!(validate_email("@x.com").is_err());
        assert!(validate_email("a@").is_err());
        assert!(validate_email(&format!("{}@x.com", "a".repeat(120))).is_err());
    }

    #[test]
    fn test_validate_username_and_password() {
        assert!(validate_username("a").is_ok());
        assert!(validate_username(" ").is_err());
        assert!(validate_username(&"u".repeat(81)).is_err());

        assert!(validate_password("pw").is_ok());
        assert!(validate_password("  ").is_ok());
        assert!(validate_password("").is_err());
        assert!(validate_password(&"p".repeat(129)).is_err());
    }

    #[test]
    fn test_validate_id() {
        assert!(validate_id("user_id", 1).is_ok());
        assert!(validate_id("user_id", 0).is_err());
        assert!(validate_id("job_id", -1).is_err());
    }
}
