use std::collections::HashMap;

use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
};

use crate::server::error::Error;

pub static MIN_PASSWORD_LENGTH: usize = 8;

/// Ratio at or above which a password counts as too similar to a user attribute
static MAX_SIMILARITY: f64 = 0.7;

static COMMON_PASSWORDS: &[&str] = &[
    "password",
    "password1",
    "password123",
    "12345678",
    "123456789",
    "1234567890",
    "qwerty123",
    "qwertyuiop",
    "iloveyou",
    "sunshine",
    "princess",
    "football",
    "baseball",
    "welcome1",
    "superman",
    "trustno1",
    "letmein1",
    "passw0rd",
    "abc12345",
    "11111111",
    "00000000",
    "1q2w3e4r",
    "zaq12wsx",
    "starwars",
    "whatever",
    "computer",
    "michelle",
    "jennifer",
    "corvette",
    "mercedes",
];

/// Hashes a password with Argon2id into a PHC string
pub fn hash_password(password: &str) -> Result<String, Error> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| Error::PasswordHashError(e.to_string()))
}

/// Checks a password against a stored PHC string
///
/// # Returns
/// - `Ok(true)`: password matches
/// - `Ok(false)`: password does not match
/// - `Err(Error::PasswordHashError)`: the stored hash is malformed
pub fn verify_password(password: &str, password_hash: &str) -> Result<bool, Error> {
    let parsed_hash =
        PasswordHash::new(password_hash).map_err(|e| Error::PasswordHashError(e.to_string()))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

/// Checks password strength, returning one message per failed rule
///
/// Rules: minimum length, not a common password, not entirely numeric, and not too similar to
/// the username or email address.
pub fn validate_password(password: &str, username: &str, email: &str) -> Vec<String> {
    let mut errors = Vec::new();

    if let Some(attribute) = similar_attribute(password, username, email) {
        errors.push(format!("The password is too similar to the {}.", attribute));
    }

    if password.chars().count() < MIN_PASSWORD_LENGTH {
        errors.push(format!(
            "This password is too short. It must contain at least {} characters.",
            MIN_PASSWORD_LENGTH
        ));
    }

    let lowered = password.to_lowercase();
    if COMMON_PASSWORDS.contains(&lowered.trim()) {
        errors.push("This password is too common.".to_string());
    }

    if !password.is_empty() && password.chars().all(|c| c.is_ascii_digit()) {
        errors.push("This password is entirely numeric.".to_string());
    }

    errors
}

fn similar_attribute(password: &str, username: &str, email: &str) -> Option<&'static str> {
    let password: Vec<char> = password.to_lowercase().chars().collect();

    let is_similar = |value: &str| {
        let value = value.to_lowercase();
        value
            .split(|c: char| !(c.is_alphanumeric() || c == '_'))
            .chain(std::iter::once(value.as_str()))
            .map(|part| part.chars().collect::<Vec<char>>())
            .filter(|part| !exceeds_length_ratio(&password, part))
            .any(|part| quick_ratio(&password, &part) >= MAX_SIMILARITY)
    };

    if is_similar(username) {
        Some("username")
    } else if is_similar(email) {
        Some("email address")
    } else {
        None
    }
}

/// Passwords at least ten times longer than a short attribute can't be similar to it
fn exceeds_length_ratio(password: &[char], value: &[char]) -> bool {
    let password_len = password.len() as f64;
    let value_len = value.len() as f64;

    password_len >= 10.0 * value_len && value_len < MAX_SIMILARITY / 2.0 * password_len
}

/// Upper bound of the sequence similarity: `2 * shared characters / total characters`
fn quick_ratio(a: &[char], b: &[char]) -> f64 {
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }

    let mut available: HashMap<char, usize> = HashMap::new();
    for c in b {
        *available.entry(*c).or_default() += 1;
    }

    let mut matches = 0;
    for c in a {
        if let Some(count) = available.get_mut(c) {
            if *count > 0 {
                *count -= 1;
                matches += 1;
            }
        }
    }

    2.0 * matches as f64 / total as f64
}
