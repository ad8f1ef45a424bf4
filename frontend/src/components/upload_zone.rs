use gloo_file::File as GlooFile;
use web_sys::{DragEvent, Event, HtmlInputElement};
use yew::prelude::*;

pub const MAX_UPLOAD_BYTES: u64 = 20 * 1024 * 1024;

/// One validation for both entry paths. Drag-drop and the file picker used
/// to disagree on type checking; they deliberately share this now, and the
/// advertised 20MB limit is actually enforced.
pub fn validate_upload(mime: &str, size: u64) -> Result<(), String> {
    if mime != "application/pdf" {
        return Err("Only PDF documents are supported.".to_string());
    }
    if size > MAX_UPLOAD_BYTES {
        return Err("File exceeds the 20MB size limit.".to_string());
    }
    Ok(())
}

#[derive(Properties, PartialEq)]
pub struct UploadZoneProps {
    pub on_file_select: Callback<GlooFile>,
    pub on_reject: Callback<String>,
    #[prop_or(false)]
    pub is_uploading: bool,
}

/// Drag-drop / file-picker zone. Exactly one file per gesture: when several
/// are dropped, only the first is considered.
#[function_component(UploadZone)]
pub fn upload_zone(props: &UploadZoneProps) -> Html {
    let is_dragging = use_state(|| false);

    let submit_file = {
        let on_file_select = props.on_file_select.clone();
        let on_reject = props.on_reject.clone();
        Callback::from(move |file: web_sys::File| {
            let file = GlooFile::from(file);
            match validate_upload(&file.raw_mime_type(), file.size()) {
                Ok(()) => on_file_select.emit(file),
                Err(reason) => on_reject.emit(reason),
            }
        })
    };

    let handle_drag_over = {
        let is_dragging = is_dragging.clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            is_dragging.set(true);
        })
    };

    let handle_drag_leave = {
        let is_dragging = is_dragging.clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            is_dragging.set(false);
        })
    };

    let handle_drop = {
        let is_dragging = is_dragging.clone();
        let submit_file = submit_file.clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            is_dragging.set(false);
            if let Some(file) = e
                .data_transfer()
                .and_then(|transfer| transfer.files())
                .and_then(|files| files.item(0))
            {
                submit_file.emit(file);
            }
        })
    };

    let handle_change = {
        let submit_file = submit_file.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Some(file) = input.files().and_then(|files| files.item(0)) {
                submit_file.emit(file);
            }
            // Allow re-selecting the same file later.
            input.set_value("");
        })
    };

    html! {
        <div
            class={classes!(
                "upload-zone",
                is_dragging.then_some("drag-over"),
                props.is_uploading.then_some("uploading"),
            )}
            ondragover={handle_drag_over}
            ondragleave={handle_drag_leave}
            ondrop={handle_drop}
        >
            <input
                type="file"
                id="file-upload"
                accept=".pdf"
                class="hidden-input"
                onchange={handle_change}
                disabled={props.is_uploading}
            />

            <label for="file-upload" class="upload-label">
                <div class="upload-icon-circle">
                    if props.is_uploading {
                        <i class="fa-solid fa-file-lines fa-fade"></i>
                    } else {
                        <i class="fa-solid fa-upload"></i>
                    }
                </div>

                <h3>
                    { if props.is_uploading { "Uploading..." } else { "Upload PDF Report" } }
                </h3>

                <p>{"Drag and drop your PDF file here, or click to browse"}</p>
                <p class="upload-hint">{"Maximum file size: 20MB"}</p>
            </label>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pdf_within_the_limit_is_accepted() {
        assert!(validate_upload("application/pdf", 1024).is_ok());
        assert!(validate_upload("application/pdf", MAX_UPLOAD_BYTES).is_ok());
    }

    #[test]
    fn non_pdf_is_rejected_on_every_path() {
        assert!(validate_upload("image/png", 1024).is_err());
        assert!(validate_upload("", 1024).is_err());
    }

    #[test]
    fn the_advertised_size_limit_is_enforced() {
        assert!(validate_upload("application/pdf", MAX_UPLOAD_BYTES + 1).is_err());
    }
}
