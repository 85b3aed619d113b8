use std::fmt;

/// Discrete performance class derived from a 0–100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tier {
    EntryLevel,
    Budget,
    MidRange,
    HighEnd,
    Extreme,
}

impl Tier {
    /// Map a percentage to its tier: ≥90 Extreme, ≥75 High-End, ≥60 Mid-Range,
    /// ≥40 Budget, otherwise Entry-Level.
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= 90.0 {
            Tier::Extreme
        } else if score >= 75.0 {
            Tier::HighEnd
        } else if score >= 60.0 {
            Tier::MidRange
        } else if score >= 40.0 {
            Tier::Budget
        } else {
            Tier::EntryLevel
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Tier::EntryLevel => "Entry-Level",
            Tier::Budget => "Budget",
            Tier::MidRange => "Mid-Range",
            Tier::HighEnd => "High-End",
            Tier::Extreme => "Extreme",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A build's weighted performance percentage and tier.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use]
pub struct PerformanceScore {
    score: f64,
    tier: Tier,
}

impl PerformanceScore {
    pub(crate) fn new(score: f64) -> Self {
        let score = score.clamp(0.0, 100.0);
        Self {
            score,
            tier: Tier::from_score(score),
        }
    }

    /// Percentage in `0.0..=100.0`.
    #[must_use]
    pub fn score(&self) -> f64 {
        self.score
    }

    /// The percentage rounded to a whole number.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn rounded(&self) -> u8 {
        self.score.round() as u8
    }

    #[must_use]
    pub fn tier(&self) -> Tier {
        self.tier
    }
}

impl fmt::Display for PerformanceScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/100 ({})", self.rounded(), self.tier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_boundaries() {
        assert_eq!(Tier::from_score(100.0), Tier::Extreme);
        assert_eq!(Tier::from_score(90.0), Tier::Extreme);
        assert_eq!(Tier::from_score(89.9), Tier::HighEnd);
        assert_eq!(Tier::from_score(75.0), Tier::HighEnd);
        assert_eq!(Tier::from_score(60.0), Tier::MidRange);
        assert_eq!(Tier::from_score(40.0), Tier::Budget);
        assert_eq!(Tier::from_score(39.99), Tier::EntryLevel);
        assert_eq!(Tier::from_score(0.0), Tier::EntryLevel);
    }

    #[test]
    fn labels() {
        assert_eq!(Tier::HighEnd.to_string(), "High-End");
        assert_eq!(Tier::EntryLevel.label(), "Entry-Level");
    }

    #[test]
    fn score_is_clamped() {
        assert_eq!(PerformanceScore::new(120.0).score(), 100.0);
        assert_eq!(PerformanceScore::new(-1.0).score(), 0.0);
    }

    #[test]
    fn display() {
        assert_eq!(PerformanceScore::new(61.4).to_string(), "61/100 (Mid-Range)");
    }
}
