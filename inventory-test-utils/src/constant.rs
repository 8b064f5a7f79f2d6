//! Standard values shared by fixtures and tests.

/// Password given to every fixture user.
///
/// Strong enough to pass signup validation so tests can reuse it for signup and login flows.
pub static TEST_PASSWORD: &str = "ComplexPassword123!";

/// Domain used to derive fixture email addresses from usernames.
pub static TEST_EMAIL_DOMAIN: &str = "example.com";

/// Name of the group self-registered accounts are placed into.
pub static TEST_OWNER_GROUP: &str = "Property Owners";
