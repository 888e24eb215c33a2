// src/core/strength.rs
use std::fmt;

/// Symbols that satisfy the special-character rule.
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*";

/// Passwords rejected outright, compared case-insensitively against the
/// whole password.
pub const COMMON_PASSWORDS: [&str; 5] = ["password", "123456", "123456789", "qwerty", "abc123"];

pub const MIN_LENGTH: usize = 8;

// Individual rules, in the order their feedback is reported
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    Length,
    MixedCase,
    Digit,
    SpecialCharacter,
    NoUsername,
    NotCommon,
}

impl Check {
    pub const ALL: [Check; 6] = [
        Check::Length,
        Check::MixedCase,
        Check::Digit,
        Check::SpecialCharacter,
        Check::NoUsername,
        Check::NotCommon,
    ];

    pub fn passes(&self, password: &str, username: &str) -> bool {
        match self {
            Check::Length => password.chars().count() >= MIN_LENGTH,
            Check::MixedCase => {
                password.chars().any(|c| c.is_ascii_uppercase())
                    && password.chars().any(|c| c.is_ascii_lowercase())
            }
            Check::Digit => password.chars().any(|c| c.is_ascii_digit()),
            Check::SpecialCharacter => password.chars().any(|c| SPECIAL_CHARACTERS.contains(c)),
            Check::NoUsername => {
                username.is_empty()
                    || !password.to_lowercase().contains(&username.to_lowercase())
            }
            Check::NotCommon => {
                let lowered = password.to_lowercase();
                !COMMON_PASSWORDS.contains(&lowered.as_str())
            }
        }
    }

    pub fn failure_message(&self) -> &'static str {
        match self {
            Check::Length => "❌ Password should be at least 8 characters long.",
            Check::MixedCase => "❌ Include both uppercase and lowercase letters.",
            Check::Digit => "❌ Add at least one number (0-9).",
            Check::SpecialCharacter => "❌ Include at least one special character (!@#$%^&*).",
            Check::NoUsername => "❌ Password should not contain your username.",
            Check::NotCommon => "❌ Avoid using common passwords.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Strength {
    Weak,
    Moderate,
    Strong,
    VeryStrong,
}

impl Strength {
    pub fn from_score(score: u8) -> Self {
        match score {
            6.. => Strength::VeryStrong,
            4 | 5 => Strength::Strong,
            3 => Strength::Moderate,
            _ => Strength::Weak,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Strength::VeryStrong => "✅ Very Strong Password!",
            Strength::Strong => "✅ Strong Password!",
            Strength::Moderate => "⚠️ Moderate Password - Consider adding more security features.",
            Strength::Weak => "❌ Weak Password - Improve it using the suggestions above.",
        }
    }

    /// Only strong verdicts are written to the credential store and history.
    pub fn should_persist(&self) -> bool {
        matches!(self, Strength::Strong | Strength::VeryStrong)
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strength::Weak => write!(f, "Weak"),
            Strength::Moderate => write!(f, "Moderate"),
            Strength::Strong => write!(f, "Strong"),
            Strength::VeryStrong => write!(f, "Very Strong"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthReport {
    pub score: u8,
    pub failed: Vec<Check>,
    pub strength: Strength,
}

impl StrengthReport {
    /// Failure lines in check order, then the classification line.
    pub fn feedback(&self) -> Vec<String> {
        self.failed
            .iter()
            .map(|check| check.failure_message().to_string())
            .chain(std::iter::once(self.strength.message().to_string()))
            .collect()
    }

    #[cfg(test)]
    pub fn has_failed(&self, check: Check) -> bool {
        self.failed.contains(&check)
    }
}

// Score a password against every rule
pub fn evaluate(password: &str, username: &str) -> StrengthReport {
    let failed: Vec<Check> = Check::ALL
        .iter()
        .copied()
        .filter(|check| !check.passes(password, username))
        .collect();

    let score = (Check::ALL.len() - failed.len()) as u8;

    StrengthReport {
        score,
        failed,
        strength: Strength::from_score(score),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_common_password_is_weak() {
        let report = evaluate("abc123", "bob");

        assert_eq!(report.score, 2);
        assert_eq!(
            report.failed,
            vec![Check::Length, Check::MixedCase, Check::SpecialCharacter, Check::NotCommon]
        );
        assert_eq!(report.strength, Strength::Weak);
        assert_eq!(
            report.feedback().last().map(String::as_str),
            Some("❌ Weak Password - Improve it using the suggestions above.")
        );
    }

    #[test]
    fn all_rules_pass_is_very_strong() {
        let report = evaluate("Str0ng!Pass", "alice");

        assert_eq!(report.score, 6);
        assert!(report.failed.is_empty());
        assert_eq!(report.strength, Strength::VeryStrong);
        assert!(report.strength.should_persist());
        assert_eq!(report.feedback(), vec!["✅ Very Strong Password!".to_string()]);
    }

    #[test]
    fn short_password_reports_length() {
        for password in ["", "a", "Ab1!", "Ab1!xyz"] {
            assert!(evaluate(password, "").has_failed(Check::Length), "{password}");
        }
        assert!(!evaluate("Ab1!xyzw", "").has_failed(Check::Length));
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // Four two-byte characters are still only four characters
        assert!(evaluate("éééé", "").has_failed(Check::Length));
        assert!(!evaluate("éééééééé", "").has_failed(Check::Length));
    }

    #[test]
    fn single_case_reports_mixed_case() {
        assert!(evaluate("alllowercase", "").has_failed(Check::MixedCase));
        assert!(evaluate("ALLUPPERCASE", "").has_failed(Check::MixedCase));
        assert!(!evaluate("MixedCase", "").has_failed(Check::MixedCase));
    }

    #[test]
    fn digit_and_symbol_checks() {
        let report = evaluate("NoDigitsHere", "");
        assert!(report.has_failed(Check::Digit));
        assert!(report.has_failed(Check::SpecialCharacter));

        // Symbols outside the fixed set do not count
        assert!(evaluate("Under_score-1", "").has_failed(Check::SpecialCharacter));
        for symbol in SPECIAL_CHARACTERS.chars() {
            let password = format!("abc{symbol}");
            assert!(!evaluate(&password, "").has_failed(Check::SpecialCharacter));
        }
    }

    #[test]
    fn username_containment_is_case_insensitive() {
        let report = evaluate("MyALICEpass1!", "alice");
        assert!(report.has_failed(Check::NoUsername));
        assert_eq!(report.strength, Strength::Strong);

        assert!(!evaluate("MyPass1!", "alice").has_failed(Check::NoUsername));
    }

    #[test]
    fn username_is_compared_verbatim() {
        // Surrounding whitespace is part of the username
        assert!(!evaluate("MyAlicePass1!", " alice").has_failed(Check::NoUsername));
        assert!(evaluate("My alicePass1!", " alice").has_failed(Check::NoUsername));
    }

    #[test]
    fn empty_username_passes_username_check() {
        assert!(!evaluate("anything", "").has_failed(Check::NoUsername));
    }

    #[test]
    fn common_passwords_match_exactly() {
        assert!(evaluate("PASSWORD", "").has_failed(Check::NotCommon));
        assert!(evaluate("Qwerty", "").has_failed(Check::NotCommon));
        assert!(evaluate("123456789", "").has_failed(Check::NotCommon));
        assert!(!evaluate("Password1", "").has_failed(Check::NotCommon));
        assert!(!evaluate("myqwerty", "").has_failed(Check::NotCommon));
    }

    #[test]
    fn score_counts_passed_checks() {
        let report = evaluate("lowercase", "");
        // passes length, username and common checks
        assert_eq!(report.score, 3);
        assert_eq!(report.strength, Strength::Moderate);
        assert_eq!(report.feedback().len(), report.failed.len() + 1);
    }

    #[test]
    fn classification_thresholds() {
        assert_eq!(Strength::from_score(0), Strength::Weak);
        assert_eq!(Strength::from_score(2), Strength::Weak);
        assert_eq!(Strength::from_score(3), Strength::Moderate);
        assert_eq!(Strength::from_score(4), Strength::Strong);
        assert_eq!(Strength::from_score(5), Strength::Strong);
        assert_eq!(Strength::from_score(6), Strength::VeryStrong);

        assert!(!Strength::Moderate.should_persist());
        assert!(Strength::Strong.should_persist());
    }
}
