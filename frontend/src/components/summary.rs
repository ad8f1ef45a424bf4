use shared::DetectionResult;
use yew::prelude::*;

use super::utils::{format_percent, risk_badge_class, risk_icon_class};

#[derive(Properties, PartialEq)]
pub struct DetectionSummaryProps {
    pub data: DetectionResult,
}

/// Summary tab: overall score, AI summary, key findings and recommendations.
///
/// Recommendation strings come from the backend and are rendered as plain
/// text, never interpreted as markup.
#[function_component(DetectionSummary)]
pub fn detection_summary(props: &DetectionSummaryProps) -> Html {
    let findings = &props.data.key_findings;

    html! {
        <div class="panel">
            <div class="panel-header">
                <i class={classes!("fa-solid", risk_icon_class(&findings.risk_level))}></i>
                <div>
                    <h3>{"Detection Summary"}</h3>
                    <p>{"AI-powered analysis overview"}</p>
                </div>
            </div>

            <div class="overall-score">
                <div class="overall-score-value">{ format_percent(findings.overall_score) }</div>
                <span class={classes!("badge", risk_badge_class(&findings.risk_level))}>
                    { &findings.risk_level }
                </span>
                <div class="progress-track">
                    <div
                        class="progress-fill"
                        style={format!("width: {}%", findings.overall_score.clamp(0.0, 100.0))}
                    ></div>
                </div>
            </div>

            <div class="summary-box">
                <i class="fa-solid fa-circle-info"></i>
                <div>
                    <h4>{"AI Summary"}</h4>
                    <p>{ &props.data.summary }</p>
                </div>
            </div>

            <div class="stat-grid">
                <div class="stat-cell">
                    <div class="stat-value">{ format_percent(findings.text_score) }</div>
                    <div class="stat-label">{"Text Score"}</div>
                </div>
                <div class="stat-cell">
                    <div class="stat-value">{ format_percent(findings.image_score) }</div>
                    <div class="stat-label">{"Image Score"}</div>
                </div>
                <div class="stat-cell">
                    <div class="stat-value">{ findings.text_matches_count }</div>
                    <div class="stat-label">{"Text Matches"}</div>
                </div>
                <div class="stat-cell">
                    <div class="stat-value">{ findings.image_matches_count }</div>
                    <div class="stat-label">{"Image Matches"}</div>
                </div>
            </div>

            <div class="recommendations">
                <h4>{"Recommendations"}</h4>
                { for props.data.recommendations.iter().enumerate().map(|(index, rec)| html! {
                    <div class="recommendation-row" key={index}>
                        <span class="recommendation-number">{ index + 1 }</span>
                        <p>{ rec }</p>
                    </div>
                })}
            </div>
        </div>
    }
}
