use shared::Report;
use yew::prelude::*;

use super::utils::format_percent;

#[derive(Properties, PartialEq)]
pub struct ReportHistoryProps {
    pub reports: Vec<Report>,
    pub on_view: Callback<String>,
}

/// Past-report list. The data is session-local mock data and "View Details"
/// only raises a notification.
#[function_component(ReportHistory)]
pub fn report_history(props: &ReportHistoryProps) -> Html {
    if props.reports.is_empty() {
        return html! {
            <div class="panel panel-empty">
                <i class="fa-solid fa-file-lines"></i>
                <h3>{"No reports yet"}</h3>
                <p>{"Upload your first PDF to get started"}</p>
            </div>
        };
    }

    html! {
        <div class="history">
            <h2>{"Recent Reports"}</h2>
            { for props.reports.iter().map(|report| {
                let id = report.id.clone();
                let on_view = props.on_view.clone();
                html! {
                    <div class="history-card" key={report.id.clone()}>
                        <div class="history-card-body">
                            <div class="history-icon">
                                <i class="fa-solid fa-file-lines"></i>
                            </div>
                            <div>
                                <h3>{ &report.filename }</h3>
                                <div class="history-meta">
                                    <span>
                                        <i class="fa-solid fa-clock"></i>
                                        { format!(" {}", report.upload_date) }
                                    </span>
                                    <span>
                                        <i class="fa-solid fa-arrow-trend-up"></i>
                                        { format!(" {} similarity", format_percent(report.combined_score)) }
                                    </span>
                                </div>
                            </div>
                        </div>
                        <button
                            class="outline-button"
                            onclick={Callback::from(move |_| on_view.emit(id.clone()))}
                        >
                            {"View Details"}
                        </button>
                    </div>
                }
            })}
        </div>
    }
}
