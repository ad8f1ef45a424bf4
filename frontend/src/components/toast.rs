use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ToastKind {
    Info,
    Error,
}

/// A notification before it has been assigned a toast id.
#[derive(Clone, PartialEq, Debug)]
pub struct Notice {
    pub kind: ToastKind,
    pub title: &'static str,
    pub message: String,
}

impl Notice {
    pub fn info(title: &'static str, message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Info,
            title,
            message: message.into(),
        }
    }

    pub fn error(title: &'static str, message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            title,
            message: message.into(),
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct Toast {
    pub id: u64,
    pub notice: Notice,
}

impl Toast {
    pub fn new(id: u64, notice: Notice) -> Self {
        Self { id, notice }
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastStackProps {
    pub toasts: Vec<Toast>,
    pub on_dismiss: Callback<u64>,
}

/// Transient, dismissible notification stack. Expiry is driven by the page
/// controller; clicking a toast dismisses it early.
#[function_component(ToastStack)]
pub fn toast_stack(props: &ToastStackProps) -> Html {
    if props.toasts.is_empty() {
        return html! {};
    }

    html! {
        <div class="toast-stack">
            { for props.toasts.iter().map(|toast| {
                let id = toast.id;
                let on_dismiss = props.on_dismiss.clone();
                let kind_class = match toast.notice.kind {
                    ToastKind::Info => "toast-info",
                    ToastKind::Error => "toast-error",
                };
                html! {
                    <div
                        class={classes!("toast", kind_class)}
                        key={id.to_string()}
                        onclick={Callback::from(move |_| on_dismiss.emit(id))}
                    >
                        <div class="toast-title">{ toast.notice.title }</div>
                        <div class="toast-message">{ &toast.notice.message }</div>
                    </div>
                }
            })}
        </div>
    }
}
