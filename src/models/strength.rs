// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 Blockhaven contributors

//! Password strength scoring, kept separate from validity: a password can be
//! valid yet weak, and symbols raise the score without being required.

/// Coarse strength bucket derived from the score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum StrengthLevel {
    Weak,
    Fair,
    Good,
    Strong,
}

impl StrengthLevel {
    pub fn label(self) -> &'static str {
        match self {
            StrengthLevel::Weak => "Weak",
            StrengthLevel::Fair => "Fair",
            StrengthLevel::Good => "Good",
            StrengthLevel::Strong => "Strong",
        }
    }
}

/// Result of scoring one password.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StrengthReport {
    /// 0 to 100. Four required categories are worth 25 each; any symbol adds a
    /// 10-point bonus, capped at 100.
    pub score: u8,
    pub level: StrengthLevel,
    /// Required categories the password is still missing, in scoring order.
    pub missing: Vec<&'static str>,
}

impl StrengthReport {
    /// Gauge fill fraction for rendering.
    pub fn fraction(&self) -> f32 {
        f32::from(self.score) / 100.0
    }

    /// Text shown under the gauge: the level label, or the list of missing
    /// categories while any required one is absent.
    pub fn caption(&self) -> String {
        if self.missing.is_empty() {
            self.level.label().to_string()
        } else {
            format!("Missing: {}", self.missing.join(", "))
        }
    }
}

/// Score a password. Pure; renders nothing.
pub fn assess(password: &str) -> StrengthReport {
    let mut score = 0u16;
    let mut missing = Vec::new();

    if password.chars().count() >= 8 {
        score += 25;
    } else {
        missing.push("at least 8 characters");
    }
    if password.chars().any(|c| c.is_ascii_lowercase()) {
        score += 25;
    } else {
        missing.push("a lowercase letter");
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        score += 25;
    } else {
        missing.push("an uppercase letter");
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 25;
    } else {
        missing.push("a digit");
    }
    if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        score += 10;
    }

    let score = score.min(100) as u8;
    let level = match score {
        0..=24 => StrengthLevel::Weak,
        25..=49 => StrengthLevel::Fair,
        50..=74 => StrengthLevel::Good,
        _ => StrengthLevel::Strong,
    };

    StrengthReport {
        score,
        level,
        missing,
    }
}
