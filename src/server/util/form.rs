//! Field checks and messages shared by the form validators.

use rust_decimal::Decimal;

pub static REQUIRED: &str = "This field is required.";
pub static INVALID_EMAIL: &str = "Enter a valid email address.";
pub static INVALID_USERNAME: &str =
    "Enter a valid username. This value may contain only letters, numbers, and @/./+/-/_ characters.";

pub static MAX_USERNAME_LENGTH: usize = 150;
pub static MAX_EMAIL_LENGTH: usize = 254;

pub fn max_length(max: usize, actual: usize) -> String {
    format!(
        "Ensure this value has at most {} characters (it has {}).",
        max, actual
    )
}

pub fn invalid_choice(value: &str) -> String {
    format!(
        "Select a valid choice. {} is not one of the available choices.",
        value
    )
}

/// Trims a value and maps blank strings to `None`
pub fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Checks a required text field, returning the trimmed value when it passes
pub fn required_text(value: &str, max: usize) -> Result<String, String> {
    let value = value.trim();
    let len = value.chars().count();

    if value.is_empty() {
        Err(REQUIRED.to_string())
    } else if len > max {
        Err(max_length(max, len))
    } else {
        Ok(value.to_string())
    }
}

/// Checks an optional text field against its maximum length
pub fn optional_text(value: Option<String>, max: usize) -> Result<Option<String>, String> {
    match non_blank(value) {
        Some(value) if value.chars().count() > max => {
            Err(max_length(max, value.chars().count()))
        }
        value => Ok(value),
    }
}

/// Checks a decimal against its column precision
///
/// `max_digits` counts every digit, `decimal_places` the fractional ones.
pub fn decimal_precision(value: Decimal, max_digits: u32, decimal_places: u32) -> Option<String> {
    let normalized = value.normalize();

    if normalized.scale() > decimal_places {
        let unit = if decimal_places == 1 { "place" } else { "places" };
        return Some(format!(
            "Ensure that there are no more than {} decimal {}.",
            decimal_places, unit
        ));
    }

    let whole_digits = normalized.trunc().abs().to_string().trim_start_matches('0').len() as u32;
    if whole_digits > max_digits - decimal_places {
        return Some(format!(
            "Ensure that there are no more than {} digits before the decimal point.",
            max_digits - decimal_places
        ));
    }

    None
}

pub fn is_valid_username(username: &str) -> bool {
    !username.is_empty()
        && username
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '@' | '.' | '+' | '-' | '_'))
}

/// Minimal address check: a single `@` between a non-empty local part and a dotted domain
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.contains('@')
        && !email.chars().any(char::is_whitespace)
        && domain
            .split('.')
            .filter(|label| !label.is_empty())
            .count()
            >= 2
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    /// Expect blank values to fail required checks
    #[test]
    fn required_text_rejects_blank() {
        assert_eq!(required_text("   ", 10), Err(REQUIRED.to_string()));
        assert_eq!(required_text(" Asia ", 10), Ok("Asia".to_string()));
        assert!(required_text("abcdef", 5).is_err());
    }

    /// Expect blank optional values to become None
    #[test]
    fn optional_text_maps_blank_to_none() {
        assert_eq!(optional_text(Some("  ".to_string()), 2), Ok(None));
        assert_eq!(optional_text(Some("JP".to_string()), 2), Ok(Some("JP".to_string())));
        assert!(optional_text(Some("JPN".to_string()), 2).is_err());
    }

    /// Expect decimals outside the column precision to be rejected
    #[test]
    fn decimal_precision_checks_scale_and_digits() {
        assert_eq!(decimal_precision(Decimal::new(45, 1), 3, 1), None);
        assert_eq!(decimal_precision(Decimal::new(4500, 3), 3, 1), None);
        assert!(decimal_precision(Decimal::new(455, 2), 3, 1).is_some());
        assert!(decimal_precision(Decimal::new(1000, 1), 3, 1).is_some());
        assert_eq!(decimal_precision(Decimal::new(9999999999, 2), 10, 2), None);
    }

    /// Expect usernames limited to letters, digits and @.+-_
    #[test]
    fn validates_usernames() {
        assert!(is_valid_username("owner.one+test@x_y-z"));
        assert!(!is_valid_username("with space"));
        assert!(!is_valid_username(""));
    }

    /// Expect addresses with a dotted domain to pass
    #[test]
    fn validates_emails() {
        assert!(is_valid_email("testuser@example.com"));
        assert!(!is_valid_email("testuser"));
        assert!(!is_valid_email("testuser@localhost"));
        assert!(!is_valid_email("a@b@example.com"));
        assert!(!is_valid_email("@example.com"));
    }
}
