use once_cell::sync::Lazy;
use regex::Regex;

// Character classes are spelled out in ASCII; `\w` and `\d` would be Unicode-aware.

/// Local part, `@`, domain, and an alphabetic suffix of at least two letters
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("Invalid email regex pattern")
});

/// Exactly ten digits, nothing else
static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("Invalid phone regex pattern"));

/// Optional http(s) scheme, host, lowercase TLD, then an optional path.
/// The path class admits spaces.
static WEBSITE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(https?://)?([a-zA-Z0-9_.-]+)\.([a-z]{2,})([/a-zA-Z0-9_ .-]*)/?$")
        .expect("Invalid website regex pattern")
});

/// Validate email format
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Validate a 10-digit phone number
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_REGEX.is_match(phone)
}

/// Validate website URL format
pub fn is_valid_website(url: &str) -> bool {
    WEBSITE_REGEX.is_match(url)
}
