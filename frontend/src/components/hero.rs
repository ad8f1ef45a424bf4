use yew::prelude::*;

/// Static hero banner and feature strip above the upload zone.
pub fn render_hero() -> Html {
    html! {
        <header class="hero">
            <div class="hero-badge">
                <i class="fa-solid fa-shield-halved"></i>
                <span>{"AI-Powered Detection"}</span>
            </div>
            <h1>{"Plagiarism Detector"}</h1>
            <p class="hero-subtitle">
                {"Advanced AI analysis for text and image similarity detection. \
                  Protect your academic integrity with cutting-edge technology."}
            </p>

            <div class="feature-grid">
                <div class="feature-card">
                    <i class="fa-solid fa-file-circle-check"></i>
                    <h3>{"Text Analysis"}</h3>
                    <p>{"Deep content comparison using advanced NLP algorithms"}</p>
                </div>
                <div class="feature-card">
                    <i class="fa-solid fa-shield-halved"></i>
                    <h3>{"Image Detection"}</h3>
                    <p>{"Visual similarity recognition with AI vision models"}</p>
                </div>
                <div class="feature-card">
                    <i class="fa-solid fa-bolt"></i>
                    <h3>{"Fast Results"}</h3>
                    <p>{"Get comprehensive reports in seconds, not hours"}</p>
                </div>
            </div>
        </header>
    }
}
