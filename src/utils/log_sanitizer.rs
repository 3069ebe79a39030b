//! Log sanitization for email addresses.
//!
//! Emails are the only personal data this service stores; they are masked
//! before they reach the log.

const VISIBLE_CHARS: usize = 3;

/// Mask an email address for safe logging.
///
/// Keeps at most the first three characters of the local part followed by
/// asterisks and the domain. Works on characters, not bytes, so multi-byte
/// input never splits a code point.
///
/// # Examples
/// ```ignore
/// assert_eq!(mask_email("user@example.com"), "use***@example.com");
/// assert_eq!(mask_email("ab@test.org"), "ab***@test.org");
/// ```
pub fn mask_email(email: &str) -> String {
    let (local, domain) = match email.rfind('@') {
        Some(at) => email.split_at(at),
        None => (email, ""),
    };
    let visible: String = local.chars().take(VISIBLE_CHARS).collect();
    format!("{}***{}", visible, domain)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_email_normal() {
        assert_eq!(mask_email("user@example.com"), "use***@example.com");
        assert_eq!(mask_email("a@x.com"), "a***@x.com");
    }

    #[test]
    fn test_mask_email_without_at() {
        assert_eq!(mask_email("notanemail"), "not***");
        assert_eq!(mask_email(""), "***");
    }

    #[test]
    fn test_mask_email_multibyte() {
        assert_eq!(mask_email("élodie@exemple.fr"), "élo***@exemple.fr");
    }
}
