//! Security-focused validation patterns shared by the request schemas.
//!
//! The pattern denylists are defense in depth: escape-on-output in the
//! sanitizer is the primary guarantee, these regexes catch the common
//! injection signatures before a payload reaches the handlers.

use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;

/// Signatures of script/markup injection attempts
pub static XSS_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)<script|javascript:|data:|vbscript:|<iframe|<img|onerror|onload|onclick|onmouseover|onfocus|onblur|onkeypress|onsubmit|document\.|window\.|eval\(|setTimeout\(|setInterval\(|Function\(|fetch\(|XMLHttpRequest|ActiveXObject",
    )
    .expect("Invalid XSS signature pattern")
});

/// Signatures of SQL injection attempts
pub static SQL_INJECTION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)(\b(select|insert|update|delete|drop|alter|create|union|into|load_file|outfile|from|where|database|table)\b.*(\b(from|into)\b|\*|--|;))",
    )
    .expect("Invalid SQL injection signature pattern")
});

/// Allow-list for free-text chat titles: alphanumerics, whitespace, and
/// common punctuation only
pub static SAFE_TITLE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^[A-Za-z0-9\s_\-.,!?&()\[\]:;'"+]{1,100}$"#)
        .expect("Invalid title allow-list pattern")
});

/// Terms never accepted in image-generation prompts
pub static FORBIDDEN_IMAGE_TERMS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(porn|nsfw|nude|deepfake|hentai|explicit)\b")
        .expect("Invalid forbidden-term pattern")
});

/// Reject values matching the XSS signature
pub fn reject_xss(value: &str) -> Result<(), ValidationError> {
    if XSS_PATTERN.is_match(value) {
        return Err(ValidationError::new("xss_signature")
            .with_message("contains a disallowed script pattern".into()));
    }
    Ok(())
}

/// Reject values matching the SQL injection signature
pub fn reject_sql_injection(value: &str) -> Result<(), ValidationError> {
    if SQL_INJECTION_PATTERN.is_match(value) {
        return Err(ValidationError::new("sql_signature")
            .with_message("contains a disallowed SQL pattern".into()));
    }
    Ok(())
}
