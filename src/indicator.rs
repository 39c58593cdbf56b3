//! Render model for the four-segment strength bar.

use std::fmt;

use crate::strength::{MAX_SCORE, StrengthScore};

/// Class applied to segments above the current score.
pub const EMPTY_SEGMENT_CLASS: &str = "bg-gray-200 dark:bg-gray-700";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub filled: bool,
    pub class: &'static str,
}

/// What a UI needs to draw the strength bar and its label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrengthIndicator {
    score: StrengthScore,
}

impl StrengthIndicator {
    pub fn new(score: StrengthScore) -> Self {
        Self { score }
    }

    pub fn for_password(password: &str) -> Self {
        Self::new(crate::evaluate(password))
    }

    pub fn score(&self) -> StrengthScore {
        self.score
    }

    /// Segment `i` is filled when the score reaches level `i + 1`.
    /// Every filled segment takes the colour of the current score.
    pub fn segments(&self) -> [Segment; MAX_SCORE as usize] {
        std::array::from_fn(|index| {
            let filled = self.score.value() > index as u8;
            Segment {
                filled,
                class: if filled {
                    self.score.bar_class()
                } else {
                    EMPTY_SEGMENT_CLASS
                },
            }
        })
    }

    /// Hidden for an empty password.
    pub fn label(&self) -> Option<&'static str> {
        (self.score.value() > 0).then(|| self.score.label().as_str())
    }

    pub fn text_class(&self) -> &'static str {
        self.score.text_class()
    }

    pub fn aria_live(&self) -> &'static str {
        "polite"
    }
}

impl From<StrengthScore> for StrengthIndicator {
    fn from(score: StrengthScore) -> Self {
        Self::new(score)
    }
}

/// Terminal rendering, e.g. `[###-] Good`.
impl fmt::Display for StrengthIndicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for segment in self.segments() {
            f.write_str(if segment.filled { "#" } else { "-" })?;
        }
        f.write_str("]")?;
        if let Some(label) = self.label() {
            write!(f, " {}", label)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_indicator() {
        let indicator = StrengthIndicator::for_password("");
        assert!(indicator.segments().iter().all(|s| !s.filled && s.class == EMPTY_SEGMENT_CLASS));
        assert_eq!(indicator.label(), None);
        assert_eq!(indicator.to_string(), "[----]");
    }

    #[test]
    fn test_good_indicator() {
        let indicator = StrengthIndicator::for_password("Abcdefg1");
        let filled: Vec<_> = indicator.segments().iter().map(|s| s.filled).collect();
        assert_eq!(filled, [true, true, true, false]);
        assert_eq!(indicator.segments()[0].class, "bg-blue-500");
        assert_eq!(indicator.segments()[3].class, EMPTY_SEGMENT_CLASS);
        assert_eq!(indicator.label(), Some("Good"));
        assert_eq!(indicator.text_class(), "text-blue-500");
        assert_eq!(indicator.to_string(), "[###-] Good");
    }

    #[test]
    fn test_short_password_fills_one_segment() {
        let indicator = StrengthIndicator::for_password("Ab1!");
        assert_eq!(indicator.to_string(), "[#---] Weak");
        assert_eq!(indicator.segments()[0].class, "bg-red-500");
    }

    #[test]
    fn test_strong_indicator() {
        let indicator = StrengthIndicator::new(StrengthScore::new(4));
        assert!(indicator.segments().iter().all(|s| s.class == "bg-green-500"));
        assert_eq!(indicator.aria_live(), "polite");
    }
}
