use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

use super::toast::Notice;
use crate::api;

#[derive(Properties, PartialEq)]
pub struct ReformulatePanelProps {
    pub on_notify: Callback<Notice>,
}

/// Text reformulation widget. Blank input never reaches the network; a
/// request in flight disables the submit button, which is the only
/// serialization this needs.
#[function_component(ReformulatePanel)]
pub fn reformulate_panel(props: &ReformulatePanelProps) -> Html {
    let input = use_state(String::new);
    let reformulations = use_state(Vec::<String>::new);
    let is_loading = use_state(|| false);

    let oninput = {
        let input = input.clone();
        Callback::from(move |e: InputEvent| {
            let textarea: HtmlTextAreaElement = e.target_unchecked_into();
            input.set(textarea.value());
        })
    };

    let onclick = {
        let input = input.clone();
        let reformulations = reformulations.clone();
        let is_loading = is_loading.clone();
        let on_notify = props.on_notify.clone();

        Callback::from(move |_: MouseEvent| {
            let sentence = input.trim().to_string();
            if sentence.is_empty() {
                on_notify.emit(Notice::error(
                    "Empty text",
                    "Please enter some text to reformulate",
                ));
                return;
            }

            is_loading.set(true);
            reformulations.set(Vec::new());

            let reformulations = reformulations.clone();
            let is_loading = is_loading.clone();
            let on_notify = on_notify.clone();
            spawn_local(async move {
                match api::reformulate(sentence).await {
                    Ok(list) => {
                        reformulations.set(list);
                        on_notify.emit(Notice::info(
                            "Reformulation complete",
                            "The text was successfully reformulated.",
                        ));
                    }
                    Err(message) => {
                        log::error!("Reformulation error: {message}");
                        on_notify.emit(Notice::error("Reformulation failed", message));
                    }
                }
                // Both arms land here, so the button always re-enables.
                is_loading.set(false);
            });
        })
    };

    let blank = input.trim().is_empty();

    html! {
        <div class="panel">
            <div class="panel-header">
                <i class="fa-solid fa-wand-magic-sparkles"></i>
                <div>
                    <h3>{"Text Reformulation"}</h3>
                    <p>{"AI-powered text reformulation to help avoid plagiarism"}</p>
                </div>
            </div>

            <label class="field-label" for="reformulate-input">
                {"Enter text to reformulate"}
            </label>
            <textarea
                id="reformulate-input"
                class="reformulate-input"
                placeholder="Paste or type the text you want to reformulate..."
                value={(*input).clone()}
                {oninput}
            />

            <button
                class="primary-button"
                {onclick}
                disabled={*is_loading || blank}
            >
                if *is_loading {
                    <i class="fa-solid fa-spinner fa-spin"></i>
                    { " Reformulating..." }
                } else {
                    <i class="fa-solid fa-wand-magic-sparkles"></i>
                    { " Reformulate Text" }
                }
            </button>

            if !reformulations.is_empty() {
                <div class="reformulation-results">
                    <h4>{"Reformulated Versions:"}</h4>
                    { for reformulations.iter().enumerate().map(|(index, text)| html! {
                        <div class="reformulation-card" key={index}>
                            <p>{ text }</p>
                        </div>
                    })}
                </div>
            }
        </div>
    }
}
