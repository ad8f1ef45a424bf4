use yew::prelude::*;

use super::utils::{format_percent, risk_badge_class, score_bar_class, score_text_class};

const RING_RADIUS: f64 = 56.0;

#[derive(Properties, PartialEq)]
pub struct SimilarityScoresProps {
    pub text_score: f64,
    pub image_score: f64,
    pub combined_score: f64,
    pub risk_level: String,
    pub total_sentences: u32,
    pub total_images: u32,
    pub documents_compared: u32,
}

/// Scores tab: ring gauge for the combined score plus per-channel cards.
#[function_component(SimilarityScores)]
pub fn similarity_scores(props: &SimilarityScoresProps) -> Html {
    let circumference = 2.0 * std::f64::consts::PI * RING_RADIUS;
    let fraction = (props.combined_score / 100.0).clamp(0.0, 1.0);
    let dash_offset = circumference * (1.0 - fraction);

    html! {
        <div class="panel">
            <h3>{"Scores de Similarité Détaillés"}</h3>

            <div class="score-ring-section">
                <svg class="score-ring" viewBox="0 0 128 128">
                    <circle
                        cx="64" cy="64" r={RING_RADIUS.to_string()}
                        stroke-width="8" fill="none"
                        class="ring-track"
                    />
                    <circle
                        cx="64" cy="64" r={RING_RADIUS.to_string()}
                        stroke-width="8" fill="none" stroke-linecap="round"
                        class={classes!("ring-fill", score_text_class(props.combined_score))}
                        stroke-dasharray={format!("{circumference:.2}")}
                        stroke-dashoffset={format!("{dash_offset:.2}")}
                    />
                </svg>
                <div class="score-ring-center">
                    <div class="score-ring-value">{ format_percent(props.combined_score) }</div>
                    <div class="score-ring-label">{"Global"}</div>
                </div>

                if !props.risk_level.is_empty() {
                    <span class={classes!("badge", risk_badge_class(&props.risk_level))}>
                        <i class="fa-solid fa-shield-halved"></i>
                        { format!(" Niveau de risque: {}", props.risk_level) }
                    </span>
                }
            </div>

            <div class="score-card-grid">
                { render_score_card(
                    "fa-file-lines",
                    "Similarité Texte",
                    props.text_score,
                    format!("{} phrases analysées", props.total_sentences),
                )}
                { render_score_card(
                    "fa-image",
                    "Similarité Images",
                    props.image_score,
                    format!("{} images analysées", props.total_images),
                )}
            </div>

            <div class="score-meta">
                <div>
                    <span class="score-meta-label">{"Documents comparés:"}</span>
                    <span>{ props.documents_compared }</span>
                </div>
                <div>
                    <span class="score-meta-label">{"Score combiné:"}</span>
                    <span>{ format_percent(props.combined_score) }</span>
                </div>
            </div>
        </div>
    }
}

fn render_score_card(icon: &'static str, title: &str, score: f64, detail: String) -> Html {
    html! {
        <div class="score-card">
            <div class="score-card-header">
                <i class={classes!("fa-solid", icon)}></i>
                <h4>{ title }</h4>
            </div>
            <div class={classes!("score-card-value", score_text_class(score))}>
                { format_percent(score) }
            </div>
            <div class="progress-track">
                <div
                    class={classes!("progress-fill", score_bar_class(score))}
                    style={format!("width: {}%", score.clamp(0.0, 100.0))}
                ></div>
            </div>
            <div class="score-card-detail">{ detail }</div>
        </div>
    }
}
