use unicode_normalization::UnicodeNormalization;

/// Converts a display title into a URL-safe slug.
///
/// The title is NFKD-normalized and stripped of non-ASCII characters, lowercased, stripped of
/// anything that isn't a word character, whitespace or hyphen, and runs of whitespace/hyphens
/// are collapsed into a single hyphen. Leading and trailing hyphens and underscores are removed.
///
/// # Example
/// ```ignore
/// assert_eq!(slugify("São Paulo"), "sao-paulo");
/// assert_eq!(slugify("Rio de Janeiro (RJ)"), "rio-de-janeiro-rj");
/// ```
pub fn slugify(title: &str) -> String {
    let ascii = title
        .nfkd()
        .filter(char::is_ascii)
        .collect::<String>()
        .to_lowercase();

    let mut slug = String::with_capacity(ascii.len());
    let mut separator_pending = false;

    for c in ascii.chars() {
        if c.is_ascii_alphanumeric() || c == '_' {
            if separator_pending {
                slug.push('-');
                separator_pending = false;
            }
            slug.push(c);
        } else if c == '-' || c.is_ascii_whitespace() || matches!(c, '\x0b' | '\x1c'..='\x1f') {
            separator_pending = true;
        }
    }

    slug.trim_matches(|c| c == '-' || c == '_').to_string()
}
