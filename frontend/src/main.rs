mod api;
mod components;

use gloo_file::File as GlooFile;
use gloo_timers::callback::Timeout;
use shared::{DetectionResult, Report};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use components::hero::render_hero;
use components::image_matches::ImageMatchesPanel;
use components::reformulate::ReformulatePanel;
use components::report_history::ReportHistory;
use components::scores::SimilarityScores;
use components::summary::DetectionSummary;
use components::text_matches::TextMatchesPanel;
use components::toast::{Notice, Toast, ToastStack};
use components::upload_zone::UploadZone;

const TOAST_LIFETIME_MS: u32 = 6_000;

/// The four fixed result tabs.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Tab {
    Summary,
    Scores,
    Text,
    Images,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Summary, Tab::Scores, Tab::Text, Tab::Images];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Summary => "Résumé",
            Tab::Scores => "Scores",
            Tab::Text => "Texte",
            Tab::Images => "Images",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Tab::Summary => "fa-chart-pie",
            Tab::Scores => "fa-bullseye",
            Tab::Text => "fa-file-lines",
            Tab::Images => "fa-images",
        }
    }
}

pub enum Msg {
    // Upload flow
    FileSelected(GlooFile),
    UploadFinished(Result<DetectionResult, String>),

    // UI state
    SetTab(Tab),
    Notify(Notice),
    DismissToast(u64),
    ViewReport(String),
}

/// Page controller: owns the upload flag, the latest detection payload and
/// the active tab; everything below it renders from that state.
pub struct App {
    is_uploading: bool,
    results: Option<DetectionResult>,
    active_tab: Tab,
    reports: Vec<Report>,
    toasts: Vec<Toast>,
    next_toast_id: u64,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            is_uploading: false,
            results: None,
            active_tab: Tab::Summary,
            reports: mock_reports(),
            toasts: Vec::new(),
            next_toast_id: 0,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::FileSelected(file) => self.handle_file_selected(ctx, file),
            Msg::UploadFinished(result) => self.handle_upload_finished(ctx, result),
            Msg::SetTab(tab) => {
                self.active_tab = tab;
                true
            }
            Msg::Notify(notice) => {
                self.push_toast(ctx, notice);
                true
            }
            Msg::DismissToast(id) => {
                self.toasts.retain(|toast| toast.id != id);
                true
            }
            Msg::ViewReport(report_id) => {
                self.push_toast(
                    ctx,
                    Notice::info(
                        "Opening report",
                        format!("Loading details for report {report_id}"),
                    ),
                );
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        html! {
            <div class="page">
                { render_hero() }

                <section class="section section-narrow">
                    <UploadZone
                        on_file_select={link.callback(Msg::FileSelected)}
                        on_reject={link.callback(|reason| Msg::Notify(Notice::error("Invalid file", reason)))}
                        is_uploading={self.is_uploading}
                    />
                </section>

                { self.render_results(ctx) }

                <section class="section section-narrow">
                    <ReformulatePanel
                        on_notify={link.callback(Msg::Notify)}
                    />
                </section>

                <section class="section">
                    <ReportHistory
                        reports={self.reports.clone()}
                        on_view={link.callback(Msg::ViewReport)}
                    />
                </section>

                <ToastStack
                    toasts={self.toasts.clone()}
                    on_dismiss={link.callback(Msg::DismissToast)}
                />
            </div>
        }
    }
}

impl App {
    fn handle_file_selected(&mut self, ctx: &Context<Self>, file: GlooFile) -> bool {
        // A new upload invalidates whatever was on screen.
        self.is_uploading = true;
        self.results = None;
        self.push_toast(
            ctx,
            Notice::info(
                "Processing document",
                "Analyzing your PDF for plagiarism and AI summary...",
            ),
        );

        let link = ctx.link().clone();
        spawn_local(async move {
            // Success, server error, network error and parse error all land
            // here, so the uploading flag is reset on every exit path.
            let result = api::detect(file).await;
            link.send_message(Msg::UploadFinished(result));
        });

        true
    }

    fn handle_upload_finished(
        &mut self,
        ctx: &Context<Self>,
        result: Result<DetectionResult, String>,
    ) -> bool {
        self.is_uploading = false;
        match result {
            Ok(data) => {
                self.results = Some(data);
                self.active_tab = Tab::Summary;
                self.push_toast(
                    ctx,
                    Notice::info(
                        "Analysis complete",
                        "Your plagiarism report and AI summary are ready",
                    ),
                );
            }
            Err(message) => {
                self.results = None;
                self.push_toast(ctx, Notice::error("Upload failed", message));
            }
        }
        true
    }

    fn push_toast(&mut self, ctx: &Context<Self>, notice: Notice) {
        let id = self.next_toast_id;
        self.next_toast_id += 1;
        self.toasts.push(Toast::new(id, notice));

        let link = ctx.link().clone();
        Timeout::new(TOAST_LIFETIME_MS, move || {
            link.send_message(Msg::DismissToast(id));
        })
        .forget();
    }

    fn render_results(&self, ctx: &Context<Self>) -> Html {
        let Some(results) = &self.results else {
            return html! {};
        };
        let link = ctx.link();

        html! {
            <section class="section">
                <div class="results-intro">
                    <h2>{"Analysis Results"}</h2>
                    <p>{"Comprehensive similarity analysis for your document"}</p>
                </div>

                <div class="results-card">
                    <nav class="tab-bar">
                        { for Tab::ALL.iter().map(|&tab| {
                            let active = self.active_tab == tab;
                            html! {
                                <button
                                    class={classes!("tab-button", active.then_some("active"))}
                                    onclick={link.callback(move |_| Msg::SetTab(tab))}
                                >
                                    <i class={classes!("fa-solid", tab.icon())}></i>
                                    <span>{ tab.label() }</span>
                                </button>
                            }
                        })}
                    </nav>

                    <div class="tab-content">
                        { self.render_active_panel(results) }
                    </div>
                </div>
            </section>
        }
    }

    fn render_active_panel(&self, results: &DetectionResult) -> Html {
        match self.active_tab {
            Tab::Summary => html! {
                <DetectionSummary data={results.clone()} />
            },
            Tab::Scores => html! {
                <SimilarityScores
                    text_score={results.plagiarism_score_text}
                    image_score={results.plagiarism_score_image}
                    combined_score={results.plagiarism_score_combined}
                    risk_level={results.risk_level.clone()}
                    total_sentences={results.total_sentences}
                    total_images={results.total_images_checked}
                    documents_compared={results.documents_compared}
                />
            },
            Tab::Text => html! {
                <TextMatchesPanel
                    matches={results.text_matches.clone()}
                    total_sentences={results.total_sentences}
                />
            },
            Tab::Images => html! {
                <ImageMatchesPanel
                    matches={results.image_matches.clone()}
                    total_images={results.total_images_checked}
                />
            },
        }
    }
}

// Report history is mock data for now; there is no persistence behind it.
fn mock_reports() -> Vec<Report> {
    vec![
        Report {
            id: "1".to_string(),
            filename: "research_paper_2024.pdf".to_string(),
            upload_date: "2 hours ago".to_string(),
            combined_score: 23.0,
        },
        Report {
            id: "2".to_string(),
            filename: "thesis_chapter_3.pdf".to_string(),
            upload_date: "1 day ago".to_string(),
            combined_score: 67.0,
        },
    ]
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("App starting...");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn there_are_exactly_four_fixed_tabs() {
        assert_eq!(Tab::ALL.len(), 4);
        assert_eq!(Tab::ALL[0], Tab::Summary);
    }

    #[test]
    fn tab_labels_are_stable() {
        assert_eq!(Tab::Summary.label(), "Résumé");
        assert_eq!(Tab::Images.label(), "Images");
    }
}
