//! Character variety sections - case mix, digits, symbols.
//!
//! Classes are ASCII only: a symbol is anything outside `[A-Za-z0-9]`.

use super::SectionResult;
use secrecy::{ExposeSecret, SecretString};

/// Mixed case counts as a single criterion: both upper and lower are required.
pub fn case_mix_section(password: &SecretString) -> SectionResult {
    let pwd = password.expose_secret();
    let has_upper = pwd.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = pwd.chars().any(|c| c.is_ascii_lowercase());

    let missing: Vec<_> = [
        (!has_upper).then_some("uppercase"),
        (!has_lower).then_some("lowercase"),
    ]
    .into_iter()
    .flatten()
    .collect();

    if !missing.is_empty() {
        return Some(format!("Missing: {}", missing.join(", ")));
    }
    None
}

pub fn digit_section(password: &SecretString) -> SectionResult {
    if !password.expose_secret().chars().any(|c| c.is_ascii_digit()) {
        return Some("Missing: numbers".to_string());
    }
    None
}

pub fn symbol_section(password: &SecretString) -> SectionResult {
    if !password
        .expose_secret()
        .chars()
        .any(|c| !c.is_ascii_alphanumeric())
    {
        return Some("Missing: special characters".to_string());
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
    fn test_case_mix_missing_uppercase() {
        let reason = case_mix_section(&secret("lowercase123!")).unwrap();
        assert_eq!(reason, "Missing: uppercase");
    }

    #[test]
    fn test_case_mix_missing_both() {
        let reason = case_mix_section(&secret("12345678")).unwrap();
        assert_eq!(reason, "Missing: uppercase, lowercase");
    }

    #[test]
    fn test_case_mix_satisfied() {
        assert_eq!(case_mix_section(&secret("aB")), None);
    }

    #[test]
    fn test_non_ascii_letters_are_symbols() {
        // 'É' is not [A-Z], so it neither satisfies uppercase nor escapes the symbol class
        assert!(case_mix_section(&secret("Éabc")).is_some());
        assert_eq!(symbol_section(&secret("Éabc")), None);
    }

    #[test]
    fn test_digit_section() {
        assert!(digit_section(&secret("NoNumbers!")).unwrap().contains("numbers"));
        assert_eq!(digit_section(&secret("abc1")), None);
    }

    #[test]
    fn test_symbol_section() {
        assert!(symbol_section(&secret("NoSpecial123")).unwrap().contains("special"));
        assert_eq!(symbol_section(&secret("with space")), None);
    }
}
