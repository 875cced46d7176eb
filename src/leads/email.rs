use regex::Regex;
use std::sync::LazyLock;

pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address";

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap()
});

/// Loose email shape check: something, an `@`, a domain with a dot
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}
