use shared::{ImageMatch, SimilarityBreakdown};
use yew::prelude::*;

use super::utils::{format_similarity, similarity_badge_class};

/// Detail list cap. The bucket statistics above the list always cover the
/// whole match list, not just the visible slice.
pub const MAX_VISIBLE_MATCHES: usize = 10;

#[derive(Properties, PartialEq)]
pub struct ImageMatchesPanelProps {
    pub matches: Vec<ImageMatch>,
    pub total_images: u32,
}

#[function_component(ImageMatchesPanel)]
pub fn image_matches_panel(props: &ImageMatchesPanelProps) -> Html {
    if props.matches.is_empty() {
        return html! {
            <div class="panel panel-empty">
                <i class="fa-solid fa-image"></i>
                <h3>{"No Image Matches Found"}</h3>
                <p>{"No similar images were detected in your document."}</p>
            </div>
        };
    }

    let breakdown = SimilarityBreakdown::from_matches(&props.matches);
    let hidden = props.matches.len().saturating_sub(MAX_VISIBLE_MATCHES);

    html! {
        <div class="panel">
            <div class="panel-header spread">
                <div>
                    <h3>{"Image Similarity Analysis"}</h3>
                    <p>
                        { format!(
                            "{} matches found in {} images",
                            props.matches.len(),
                            props.total_images,
                        )}
                    </p>
                </div>
                <span class="badge badge-low">
                    { format!("{} matches", props.matches.len()) }
                </span>
            </div>

            <div class="bucket-grid">
                <div class="bucket-cell bucket-high">
                    <div class="bucket-count">{ breakdown.high }</div>
                    <div class="bucket-label">{"High Similarity"}</div>
                </div>
                <div class="bucket-cell bucket-medium">
                    <div class="bucket-count">{ breakdown.medium }</div>
                    <div class="bucket-label">{"Medium Similarity"}</div>
                </div>
                <div class="bucket-cell bucket-low">
                    <div class="bucket-count">{ breakdown.low }</div>
                    <div class="bucket-label">{"Low Similarity"}</div>
                </div>
            </div>

            <div class="match-list">
                { for props.matches.iter().take(MAX_VISIBLE_MATCHES).enumerate().map(|(index, m)| {
                    render_match(index, m)
                })}
            </div>

            if hidden > 0 {
                <div class="overflow-note">
                    { format!("+{hidden} more image matches not shown") }
                </div>
            }
        </div>
    }
}

fn render_match(index: usize, m: &ImageMatch) -> Html {
    html! {
        <div class="match-card" key={index}>
            <div class="match-card-header">
                <div class="match-card-title">
                    <i class="fa-solid fa-image"></i>
                    <span>{ format!("Image Match #{}", index + 1) }</span>
                </div>
                <span class={classes!("badge", similarity_badge_class(m.similarity))}>
                    { format_similarity(m.similarity) }
                </span>
            </div>

            <div class="image-pair">
                <div class="match-excerpt">
                    <div class="match-excerpt-label">{"Source Image"}</div>
                    <div class="image-cell">{ image_label(m.image_index, &m.image) }</div>
                </div>
                <div class="match-excerpt">
                    <div class="match-excerpt-label">{"Reference Image"}</div>
                    <div class="image-cell">{ image_label(m.matched_with_index, &m.matched_with) }</div>
                </div>
            </div>
        </div>
    }
}

/// Prefers the 1-based position when the backend supplied an index.
fn image_label(index: Option<u32>, path: &str) -> String {
    match index {
        Some(i) => format!("Image {}", i + 1),
        None => path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matches_with(sims: &[f64]) -> Vec<ImageMatch> {
        sims.iter()
            .map(|&similarity| ImageMatch {
                image: "page.png".to_string(),
                matched_with: "ref.png".to_string(),
                similarity,
                image_index: None,
                matched_with_index: None,
            })
            .collect()
    }

    #[test]
    fn bucket_counts_cover_the_whole_list_despite_the_display_cap() {
        let sims: Vec<f64> = (0..25).map(|i| (i as f64) / 25.0).collect();
        let matches = matches_with(&sims);
        let breakdown = SimilarityBreakdown::from_matches(&matches);
        assert_eq!(breakdown.total(), 25);
        assert!(matches.len() > MAX_VISIBLE_MATCHES);
    }

    #[test]
    fn overflow_count_is_exactly_the_excess() {
        let matches = matches_with(&[0.9; 13]);
        let hidden = matches.len().saturating_sub(MAX_VISIBLE_MATCHES);
        assert_eq!(hidden, 3);

        let few = matches_with(&[0.9; 4]);
        assert_eq!(few.len().saturating_sub(MAX_VISIBLE_MATCHES), 0);
    }

    #[test]
    fn index_takes_priority_over_the_path() {
        assert_eq!(image_label(Some(0), "page.png"), "Image 1");
        assert_eq!(image_label(Some(4), "page.png"), "Image 5");
        assert_eq!(image_label(None, "page.png"), "page.png");
    }
}
