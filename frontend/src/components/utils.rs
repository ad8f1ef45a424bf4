//! Presentation-side mapping from the shared classifier to CSS classes,
//! icons and formatted values. Thresholds live in `shared::classify`; this
//! module only decides how a bucket looks.

use shared::classify::{self, RiskLevel, Severity, SimilarityTier};

pub fn format_percent(value: f64) -> String {
    format!("{}%", value.round() as i64)
}

pub fn format_similarity(similarity: f64) -> String {
    format!("{}% similar", (similarity * 100.0).round() as i64)
}

pub fn severity_badge_class(severity: Option<Severity>) -> &'static str {
    match severity {
        Some(Severity::Low) => "badge-low",
        Some(Severity::Medium) => "badge-medium",
        Some(Severity::High) => "badge-high",
        None => "badge-neutral",
    }
}

/// Badge styling for a backend risk label; unknown labels get the neutral
/// badge rather than an error.
pub fn risk_badge_class(label: &str) -> &'static str {
    severity_badge_class(classify::risk_severity(label))
}

pub fn risk_icon_class(label: &str) -> &'static str {
    match RiskLevel::parse(label) {
        Some(RiskLevel::NoRisk | RiskLevel::VeryLow) => "fa-circle-check icon-low",
        Some(RiskLevel::Low) => "fa-circle-info icon-low",
        Some(RiskLevel::Moderate) => "fa-triangle-exclamation icon-medium",
        Some(RiskLevel::High | RiskLevel::Critical) => "fa-circle-exclamation icon-high",
        None => "fa-circle-info icon-neutral",
    }
}

/// Text color for a 0..100 score.
pub fn score_text_class(score: f64) -> &'static str {
    match classify::score_severity(score) {
        Severity::High => "score-high",
        Severity::Medium => "score-medium",
        Severity::Low => "score-low",
    }
}

/// Fill color for a 0..100 score progress bar.
pub fn score_bar_class(score: f64) -> &'static str {
    match classify::score_severity(score) {
        Severity::High => "bar-high",
        Severity::Medium => "bar-medium",
        Severity::Low => "bar-low",
    }
}

/// Badge styling for a 0..1 match similarity. This is the fractional scale;
/// it never goes through `score_severity`.
pub fn similarity_badge_class(similarity: f64) -> &'static str {
    match classify::similarity_tier(similarity) {
        SimilarityTier::High => "badge-high",
        SimilarityTier::Elevated => "badge-medium",
        SimilarityTier::Moderate => "badge-low",
        SimilarityTier::Neutral => "badge-neutral",
    }
}

pub fn similarity_icon_class(similarity: f64) -> &'static str {
    if similarity >= 0.8 {
        "fa-triangle-exclamation"
    } else {
        "fa-circle-info"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_formatting_rounds_to_whole_numbers() {
        assert_eq!(format_percent(23.0), "23%");
        assert_eq!(format_percent(66.6), "67%");
        assert_eq!(format_percent(0.0), "0%");
    }

    #[test]
    fn similarity_formatting_scales_the_fraction() {
        assert_eq!(format_similarity(0.92), "92% similar");
        assert_eq!(format_similarity(0.705), "71% similar");
    }

    #[test]
    fn the_two_scales_stay_distinct() {
        // 70 is a high *score*, but 0.70 is only the third similarity tier.
        assert_eq!(score_text_class(70.0), "score-high");
        assert_eq!(similarity_badge_class(0.70), "badge-low");
    }

    #[test]
    fn unknown_risk_label_gets_neutral_styling() {
        assert_eq!(risk_badge_class("???"), "badge-neutral");
        assert_eq!(risk_icon_class("???"), "fa-circle-info icon-neutral");
    }

    #[test]
    fn known_risk_labels_get_their_buckets() {
        assert_eq!(risk_badge_class("Critique"), "badge-high");
        assert_eq!(risk_badge_class("Modéré"), "badge-medium");
        assert_eq!(risk_badge_class("Aucun risque"), "badge-low");
    }

    #[test]
    fn warning_icon_starts_at_point_eight() {
        assert_eq!(similarity_icon_class(0.8), "fa-triangle-exclamation");
        assert_eq!(similarity_icon_class(0.79), "fa-circle-info");
    }
}
