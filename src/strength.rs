//! Strength score and label types.

use std::fmt;

/// Highest reachable score.
pub const MAX_SCORE: u8 = 4;

/// Discrete password strength, `0..=4`.
///
/// `0` is reserved for empty input; any non-empty password scores at least `1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct StrengthScore(u8);

impl StrengthScore {
    pub const EMPTY: Self = Self(0);

    /// Builds a score, clamping anything above [`MAX_SCORE`].
    pub fn new(value: u8) -> Self {
        Self(value.min(MAX_SCORE))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn label(self) -> StrengthLabel {
        StrengthLabel::from(self)
    }

    /// Tailwind class for the filled bar segments.
    pub fn bar_class(self) -> &'static str {
        BAR_CLASSES[self.0 as usize]
    }

    /// Tailwind class for the label text.
    pub fn text_class(self) -> &'static str {
        TEXT_CLASSES[self.0 as usize]
    }
}

impl From<StrengthScore> for u8 {
    fn from(score: StrengthScore) -> Self {
        score.0
    }
}

impl fmt::Display for StrengthScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

const LABELS: [&str; 5] = ["", "Weak", "Medium", "Good", "Strong"];

const BAR_CLASSES: [&str; 5] = [
    "",
    "bg-red-500",
    "bg-yellow-500",
    "bg-blue-500",
    "bg-green-500",
];

const TEXT_CLASSES: [&str; 5] = [
    "",
    "text-red-500",
    "text-yellow-500",
    "text-blue-500",
    "text-green-500",
];

/// Human readable strength, one per score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrengthLabel {
    None,
    Weak,
    Medium,
    Good,
    Strong,
}

impl StrengthLabel {
    pub fn as_str(self) -> &'static str {
        LABELS[self as usize]
    }
}

impl From<StrengthScore> for StrengthLabel {
    fn from(score: StrengthScore) -> Self {
        match score.value() {
            0 => StrengthLabel::None,
            1 => StrengthLabel::Weak,
            2 => StrengthLabel::Medium,
            3 => StrengthLabel::Good,
            _ => StrengthLabel::Strong,
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a detailed evaluation: the score plus every unmet criterion.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StrengthEvaluation {
    pub score: StrengthScore,
    pub reasons: Vec<String>,
}

impl StrengthEvaluation {
    pub fn label(&self) -> StrengthLabel {
        self.score.label()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_by_score() {
        let labels: Vec<_> = (0..=4).map(|v| StrengthScore::new(v).label().as_str()).collect();
        assert_eq!(labels, ["", "Weak", "Medium", "Good", "Strong"]);
    }

    #[test]
    fn test_score_is_clamped() {
        assert_eq!(StrengthScore::new(9).value(), MAX_SCORE);
        assert_eq!(StrengthScore::new(9).label(), StrengthLabel::Strong);
    }

    #[test]
    fn test_color_tables() {
        assert_eq!(StrengthScore::EMPTY.bar_class(), "");
        assert_eq!(StrengthScore::new(1).bar_class(), "bg-red-500");
        assert_eq!(StrengthScore::new(3).text_class(), "text-blue-500");
        assert_eq!(StrengthScore::new(4).bar_class(), "bg-green-500");
    }
}
