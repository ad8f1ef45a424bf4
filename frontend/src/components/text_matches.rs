use shared::TextMatch;
use yew::prelude::*;

use super::utils::{format_similarity, similarity_badge_class, similarity_icon_class};

#[derive(Properties, PartialEq)]
pub struct TextMatchesPanelProps {
    pub matches: Vec<TextMatch>,
    pub total_sentences: u32,
}

#[function_component(TextMatchesPanel)]
pub fn text_matches_panel(props: &TextMatchesPanelProps) -> Html {
    if props.matches.is_empty() {
        return html! {
            <div class="panel panel-empty">
                <i class="fa-solid fa-circle-info"></i>
                <h3>{"No Text Matches Found"}</h3>
                <p>{"No similar text content was detected in your document."}</p>
            </div>
        };
    }

    html! {
        <div class="panel">
            <div class="panel-header spread">
                <div>
                    <h3>{"Text Similarity Analysis"}</h3>
                    <p>
                        { format!(
                            "{} matches found in {} sentences",
                            props.matches.len(),
                            props.total_sentences,
                        )}
                    </p>
                </div>
                <span class="badge badge-low">
                    { format!("{} matches", props.matches.len()) }
                </span>
            </div>

            <div class="match-list">
                { for props.matches.iter().enumerate().map(|(index, m)| render_match(index, m)) }
            </div>
        </div>
    }
}

fn render_match(index: usize, m: &TextMatch) -> Html {
    html! {
        <div class="match-card" key={index}>
            <div class="match-card-header">
                <div class="match-card-title">
                    <i class={classes!("fa-solid", similarity_icon_class(m.similarity))}></i>
                    <span>{ format!("Match #{}", index + 1) }</span>
                </div>
                <span class={classes!("badge", similarity_badge_class(m.similarity))}>
                    { format_similarity(m.similarity) }
                </span>
            </div>

            <div class="match-excerpt">
                <div class="match-excerpt-label">{"Original Text"}</div>
                <blockquote>{ format!("\"{}\"", m.sentence) }</blockquote>
            </div>
            <div class="match-excerpt">
                <div class="match-excerpt-label">{"Matched With"}</div>
                <blockquote>{ format!("\"{}\"", m.matched_with) }</blockquote>
            </div>
        </div>
    }
}
