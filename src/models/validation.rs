// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 Blockhaven contributors

//! Pure field validators shared by the login and registration forms.
//!
//! Checks run in a fixed order per field (required, then length, then
//! charset) and stop at the first failure, so each field surfaces at most one
//! message at a time.

/// Outcome of validating a single field. A message exists iff the check failed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    Fail(&'static str),
}

impl Verdict {
    pub fn is_pass(&self) -> bool {
        matches!(self, Verdict::Pass)
    }

    /// The human-readable failure reason, if any.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Verdict::Pass => None,
            Verdict::Fail(message) => Some(message),
        }
    }
}

/// Account names and in-game handles share one charset.
fn is_handle_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Account username: required, 3 to 16 characters, letters/digits/underscore
/// only.
pub fn validate_username(value: &str) -> Verdict {
    if value.is_empty() {
        return Verdict::Fail("Username is required");
    }
    let len = value.chars().count();
    if len < 3 {
        return Verdict::Fail("Minimum 3 characters required");
    }
    if len > 16 {
        return Verdict::Fail("Maximum 16 characters allowed");
    }
    if !value.chars().all(is_handle_char) {
        return Verdict::Fail("Only letters, digits and underscore are allowed");
    }
    Verdict::Pass
}

/// Email address: required, simple `local@domain.tld` shape.
///
/// Deliberately not RFC 5322; the accept set matches what the signup backend
/// will re-check anyway.
pub fn validate_email(value: &str) -> Verdict {
    if value.is_empty() {
        return Verdict::Fail("Email address is required");
    }
    if !looks_like_email(value) {
        return Verdict::Fail("Invalid email format");
    }
    Verdict::Pass
}

fn looks_like_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Password: required, at least 8 characters, with a lowercase letter, an
/// uppercase letter, and a digit. Symbols are not required here; they only
/// affect the strength score.
pub fn validate_password(value: &str) -> Verdict {
    if value.is_empty() {
        return Verdict::Fail("Password is required");
    }
    if value.chars().count() < 8 {
        return Verdict::Fail("Minimum 8 characters required");
    }
    let has_lower = value.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = value.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = value.chars().any(|c| c.is_ascii_digit());
    if !(has_lower && has_upper && has_digit) {
        return Verdict::Fail("Must contain lowercase and uppercase letters and a digit");
    }
    Verdict::Pass
}

/// Password confirmation: required, byte-for-byte equal to the password.
pub fn validate_password_confirm(password: &str, confirm: &str) -> Verdict {
    if confirm.is_empty() {
        return Verdict::Fail("Password confirmation is required");
    }
    if password != confirm {
        return Verdict::Fail("Passwords do not match");
    }
    Verdict::Pass
}

/// In-game handle reused on the game server: same rules as the username,
/// surfaced with its own wording.
pub fn validate_game_handle(value: &str) -> Verdict {
    if value.is_empty() {
        return Verdict::Fail("In-game name is required");
    }
    let len = value.chars().count();
    if !(3..=16).contains(&len) {
        return Verdict::Fail("Must be between 3 and 16 characters");
    }
    if !value.chars().all(is_handle_char) {
        return Verdict::Fail("Only letters, digits and underscore are allowed");
    }
    Verdict::Pass
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn username_boundaries() {
        assert!(validate_username("abc").is_pass());
        assert!(validate_username("a_b_c_0123456789").is_pass()); // 16 chars
        assert_eq!(
            validate_username("ab").message(),
            Some("Minimum 3 characters required")
        );
        assert_eq!(
            validate_username("abcdefghijklmnopq").message(),
            Some("Maximum 16 characters allowed")
        );
        assert_eq!(
            validate_username("").message(),
            Some("Username is required")
        );
    }

    #[test]
    fn username_charset_is_ascii_word_only() {
        assert!(validate_username("Steve_42").is_pass());
        assert!(!validate_username("no spaces").is_pass());
        assert!(!validate_username("dash-ed").is_pass());
        // Three characters, but outside the charset.
        assert_eq!(
            validate_username("ábc").message(),
            Some("Only letters, digits and underscore are allowed")
        );
    }

    #[test]
    fn username_first_failure_wins() {
        // Too short AND bad charset: the length message is reported.
        assert_eq!(
            validate_username("a!").message(),
            Some("Minimum 3 characters required")
        );
    }

    #[test]
    fn username_property_over_random_handles() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let pool: Vec<char> = ('a'..='z').chain('A'..='Z').chain('0'..='9').chain(['_']).collect();
        for _ in 0..300 {
            let len = rng.random_range(0..=24usize);
            let s: String = (0..len).map(|_| pool[rng.random_range(0..pool.len())]).collect();
            let expect_pass = (3..=16).contains(&len);
            assert_eq!(validate_username(&s).is_pass(), expect_pass, "input: {s:?}");
        }
    }

    #[test]
    fn email_simple_shape() {
        assert!(validate_email("player@example.com").is_pass());
        assert!(validate_email("a.b+c@mail.example.org").is_pass());
        assert!(!validate_email("").is_pass());
        assert!(!validate_email("plain").is_pass());
        assert!(!validate_email("a@b").is_pass()); // no tld
        assert!(!validate_email("a@.com").is_pass());
        assert!(!validate_email("a@b.").is_pass());
        assert!(!validate_email("@example.com").is_pass());
        assert!(!validate_email("a b@example.com").is_pass());
        assert!(!validate_email("a@b@example.com").is_pass());
    }

    #[test]
    fn password_rules() {
        assert!(validate_password("Abcdefg1").is_pass());
        assert_eq!(validate_password("").message(), Some("Password is required"));
        assert_eq!(
            validate_password("Ab1").message(),
            Some("Minimum 8 characters required")
        );
        assert_eq!(
            validate_password("abcdefg1").message(),
            Some("Must contain lowercase and uppercase letters and a digit")
        );
        assert!(!validate_password("ABCDEFG1").is_pass());
        assert!(!validate_password("Abcdefgh").is_pass());
    }

    #[test]
    fn password_property_over_fuzz_strings() {
        let mut rng = StdRng::seed_from_u64(42);
        let pool: Vec<char> = ('a'..='z')
            .chain('A'..='Z')
            .chain('0'..='9')
            .chain(['!', '#', '_', ' ', '.'])
            .collect();
        for _ in 0..500 {
            let len = rng.random_range(0..=14usize);
            let s: String = (0..len).map(|_| pool[rng.random_range(0..pool.len())]).collect();
            let expect = s.chars().count() >= 8
                && s.chars().any(|c| c.is_ascii_lowercase())
                && s.chars().any(|c| c.is_ascii_uppercase())
                && s.chars().any(|c| c.is_ascii_digit());
            assert_eq!(validate_password(&s).is_pass(), expect, "input: {s:?}");
        }
    }

    #[test]
    fn confirmation_is_exact_and_case_sensitive() {
        assert!(validate_password_confirm("Password1", "Password1").is_pass());
        assert_eq!(
            validate_password_confirm("Password1", "Password2").message(),
            Some("Passwords do not match")
        );
        assert!(!validate_password_confirm("Password1", "password1").is_pass());
        assert_eq!(
            validate_password_confirm("Password1", "").message(),
            Some("Password confirmation is required")
        );
    }

    #[test]
    fn game_handle_mirrors_username_rules() {
        assert!(validate_game_handle("Herobrine").is_pass());
        assert_eq!(
            validate_game_handle("").message(),
            Some("In-game name is required")
        );
        assert_eq!(
            validate_game_handle("ab").message(),
            Some("Must be between 3 and 16 characters")
        );
        assert!(!validate_game_handle("seventeen_chars__").is_pass());
        assert!(!validate_game_handle("bad name").is_pass());
    }
}
