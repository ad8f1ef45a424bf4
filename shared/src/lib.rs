use serde::{Deserialize, Serialize};

pub mod classify;

pub use classify::{RiskLevel, Severity, SimilarityBreakdown, SimilarityTier};

/// Full payload returned by the detection backend for one uploaded document.
///
/// Every field carries a default so that a partial or slightly off-shape
/// response still deserializes and renders as zeros/empties instead of
/// failing the whole upload.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug, Default)]
#[serde(default)]
pub struct DetectionResult {
    pub summary: String,
    pub recommendations: Vec<String>,
    pub key_findings: KeyFindings,
    pub plagiarism_score_text: f64,
    pub plagiarism_score_image: f64,
    pub plagiarism_score_combined: f64,
    pub risk_level: String,
    pub total_sentences: u32,
    pub total_images_checked: u32,
    pub documents_compared: u32,
    pub text_matches: Vec<TextMatch>,
    pub image_matches: Vec<ImageMatch>,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug, Default)]
#[serde(default)]
pub struct KeyFindings {
    pub overall_score: f64,
    pub text_score: f64,
    pub image_score: f64,
    pub text_matches_count: u32,
    pub image_matches_count: u32,
    pub risk_level: String,
    pub documents_compared: u32,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug, Default)]
#[serde(default)]
pub struct TextMatch {
    #[serde(rename = "type")]
    pub kind: String,
    pub sentence: String,
    /// Fraction in [0, 1]; distinct scale from the 0..100 percentage scores.
    pub similarity: f64,
    pub matched_with: String,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug, Default)]
#[serde(default)]
pub struct ImageMatch {
    pub image: String,
    pub matched_with: String,
    pub similarity: f64,
    pub image_index: Option<u32>,
    pub matched_with_index: Option<u32>,
}

/// Entry in the (mock, session-local) report history list.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: String,
    pub filename: String,
    pub upload_date: String,
    pub combined_score: f64,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct ReformulateRequest {
    pub sentence: String,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct ReformulateResponse {
    pub original: String,
    pub reformulations: Vec<String>,
}

/// Error body shared by every non-2xx response in the system.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug, Default)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detection_result_tolerates_missing_fields() {
        let result: DetectionResult =
            serde_json::from_str(r#"{"risk_level": "Faible"}"#).unwrap();
        assert_eq!(result.risk_level, "Faible");
        assert_eq!(result.plagiarism_score_combined, 0.0);
        assert!(result.text_matches.is_empty());
        assert!(result.recommendations.is_empty());
    }

    #[test]
    fn text_match_uses_type_on_the_wire() {
        let m: TextMatch = serde_json::from_str(
            r#"{"type":"exact","sentence":"a","similarity":0.92,"matched_with":"b"}"#,
        )
        .unwrap();
        assert_eq!(m.kind, "exact");
        assert_eq!(m.similarity, 0.92);
    }

    #[test]
    fn image_match_indices_are_optional() {
        let m: ImageMatch = serde_json::from_str(
            r#"{"image":"p3.png","matched_with":"ref.png","similarity":0.75}"#,
        )
        .unwrap();
        assert_eq!(m.image_index, None);
        assert_eq!(m.matched_with_index, None);
    }
}
