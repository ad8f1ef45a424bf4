//! Single source of truth for risk, score and similarity classification.
//!
//! Three different UI panels color-code the same thresholds; keeping the
//! mapping here prevents the copies from drifting apart. Two distinct scales
//! are in play and must never be conflated: plagiarism scores are 0..100
//! percentages, match similarities are 0..1 fractions.

use std::str::FromStr;

use strum_macros::{Display, EnumIter, EnumString};

/// Risk labels emitted by the detection backend (closed French set).
#[derive(Clone, Copy, PartialEq, Eq, Debug, Display, EnumString, EnumIter)]
pub enum RiskLevel {
    #[strum(serialize = "Aucun risque")]
    NoRisk,
    #[strum(serialize = "Très faible")]
    VeryLow,
    #[strum(serialize = "Faible")]
    Low,
    #[strum(serialize = "Modéré")]
    Moderate,
    #[strum(serialize = "Élevé")]
    High,
    #[strum(serialize = "Critique")]
    Critical,
}

impl RiskLevel {
    /// Parses a backend label. Unknown labels yield `None`, which callers
    /// must render as the neutral bucket rather than an error.
    pub fn parse(label: &str) -> Option<Self> {
        Self::from_str(label).ok()
    }

    pub fn severity(self) -> Severity {
        match self {
            RiskLevel::NoRisk | RiskLevel::VeryLow | RiskLevel::Low => Severity::Low,
            RiskLevel::Moderate => Severity::Medium,
            RiskLevel::High | RiskLevel::Critical => Severity::High,
        }
    }
}

/// Display bucket for risk labels and 0..100 scores.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// Buckets a 0..100 percentage score. Boundaries are inclusive upward:
/// 70 is `High`, 40 is `Medium`.
pub fn score_severity(score: f64) -> Severity {
    if score >= 70.0 {
        Severity::High
    } else if score >= 40.0 {
        Severity::Medium
    } else {
        Severity::Low
    }
}

/// Buckets a risk label, falling back to neutral (`None`) for anything
/// outside the known set. Never fails.
pub fn risk_severity(label: &str) -> Option<Severity> {
    RiskLevel::parse(label).map(RiskLevel::severity)
}

/// Display tier for a 0..1 match similarity.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SimilarityTier {
    /// >= 0.9
    High,
    /// >= 0.8
    Elevated,
    /// >= 0.7
    Moderate,
    /// everything below 0.7
    Neutral,
}

pub fn similarity_tier(similarity: f64) -> SimilarityTier {
    if similarity >= 0.9 {
        SimilarityTier::High
    } else if similarity >= 0.8 {
        SimilarityTier::Elevated
    } else if similarity >= 0.7 {
        SimilarityTier::Moderate
    } else {
        SimilarityTier::Neutral
    }
}

/// Match counts per similarity band, computed over a *whole* match list.
///
/// The image panel caps its detail list at ten entries but these counts
/// always cover every match, so `high + medium + low == list length`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct SimilarityBreakdown {
    /// similarity >= 0.8
    pub high: usize,
    /// 0.7 <= similarity < 0.8
    pub medium: usize,
    /// similarity < 0.7
    pub low: usize,
}

impl SimilarityBreakdown {
    pub fn from_similarities(values: impl IntoIterator<Item = f64>) -> Self {
        let mut breakdown = Self::default();
        for v in values {
            if v >= 0.8 {
                breakdown.high += 1;
            } else if v >= 0.7 {
                breakdown.medium += 1;
            } else {
                breakdown.low += 1;
            }
        }
        breakdown
    }

    pub fn from_matches(matches: &[crate::ImageMatch]) -> Self {
        Self::from_similarities(matches.iter().map(|m| m.similarity))
    }

    pub fn total(&self) -> usize {
        self.high + self.medium + self.low
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn every_known_risk_label_parses() {
        for level in RiskLevel::iter() {
            assert_eq!(RiskLevel::parse(&level.to_string()), Some(level));
        }
    }

    #[test]
    fn risk_labels_map_to_expected_buckets() {
        assert_eq!(risk_severity("Aucun risque"), Some(Severity::Low));
        assert_eq!(risk_severity("Très faible"), Some(Severity::Low));
        assert_eq!(risk_severity("Faible"), Some(Severity::Low));
        assert_eq!(risk_severity("Modéré"), Some(Severity::Medium));
        assert_eq!(risk_severity("Élevé"), Some(Severity::High));
        assert_eq!(risk_severity("Critique"), Some(Severity::High));
    }

    #[test]
    fn unknown_risk_label_is_neutral_not_an_error() {
        assert_eq!(risk_severity("banana"), None);
        assert_eq!(risk_severity(""), None);
        // case matters in the backend's labels
        assert_eq!(risk_severity("critique"), None);
    }

    #[test]
    fn score_boundaries_are_inclusive_upward() {
        assert_eq!(score_severity(0.0), Severity::Low);
        assert_eq!(score_severity(39.9), Severity::Low);
        assert_eq!(score_severity(40.0), Severity::Medium);
        assert_eq!(score_severity(69.9), Severity::Medium);
        assert_eq!(score_severity(70.0), Severity::High);
        assert_eq!(score_severity(100.0), Severity::High);
    }

    #[test]
    fn similarity_tiers_use_the_fractional_scale() {
        assert_eq!(similarity_tier(0.95), SimilarityTier::High);
        assert_eq!(similarity_tier(0.9), SimilarityTier::High);
        assert_eq!(similarity_tier(0.89), SimilarityTier::Elevated);
        assert_eq!(similarity_tier(0.8), SimilarityTier::Elevated);
        assert_eq!(similarity_tier(0.79), SimilarityTier::Moderate);
        assert_eq!(similarity_tier(0.7), SimilarityTier::Moderate);
        assert_eq!(similarity_tier(0.69), SimilarityTier::Neutral);
        assert_eq!(similarity_tier(0.0), SimilarityTier::Neutral);
    }

    #[test]
    fn breakdown_counts_sum_to_input_length() {
        let sims = vec![0.95, 0.85, 0.8, 0.75, 0.7, 0.65, 0.1, 0.99, 0.72, 0.81, 0.5, 0.88];
        let breakdown = SimilarityBreakdown::from_similarities(sims.iter().copied());
        assert_eq!(breakdown.total(), sims.len());
        assert_eq!(breakdown.high, 6);
        assert_eq!(breakdown.medium, 3);
        assert_eq!(breakdown.low, 3);
    }

    #[test]
    fn breakdown_of_empty_list_is_zero() {
        let breakdown = SimilarityBreakdown::from_similarities(std::iter::empty());
        assert_eq!(breakdown, SimilarityBreakdown::default());
    }
}
