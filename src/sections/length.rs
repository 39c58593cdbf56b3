//! Length section - checks password minimum length.

use super::SectionResult;
use secrecy::{ExposeSecret, SecretString};

pub const MIN_LENGTH: usize = 8;

/// Length in UTF-16 code units, the unit browser inputs report.
///
/// Characters outside the Basic Multilingual Plane (most emoji) count twice.
pub fn utf16_len(value: &str) -> usize {
    value.encode_utf16().count()
}

/// Checks if the password meets the minimum length.
///
/// # Returns
/// - `Some(reason)` if password is too short
/// - `None` if password has sufficient length
pub fn length_section(password: &SecretString) -> SectionResult {
    if utf16_len(password.expose_secret()) < MIN_LENGTH {
        return Some(format!(
            "Password must be at least {} characters",
            MIN_LENGTH
        ));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_seven_units_is_below_minimum() {
        let reason = length_section(&secret("abcdefg")).expect("7 units should fail");
        assert!(reason.ends_with("8 characters"));
    }

    #[test]
    fn test_eight_units_meets_minimum() {
        assert_eq!(length_section(&secret("abcdefgh")), None);
    }

    #[test]
    fn test_bmp_accents_count_once() {
        // 7 code units despite 14 bytes
        assert!(length_section(&secret("ééééééé")).is_some());
        assert_eq!(utf16_len("ééééééé"), 7);
    }

    #[test]
    fn test_astral_chars_count_twice() {
        assert_eq!(utf16_len("😀"), 2);
        assert_eq!(length_section(&secret("😀😀😀😀")), None);
        assert!(length_section(&secret("😀😀😀a")).is_some());
    }
}
