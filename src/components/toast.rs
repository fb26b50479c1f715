use leptos::*;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;

const TOAST_DURATION_MS: u32 = 4000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Destructive,
}

/// One transient notification. Replacing the signal value restarts the
/// display; the auto-dismiss only clears the toast it was started for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastMessage {
    pub title: String,
    pub body: String,
    pub kind: ToastKind,
}

impl ToastMessage {
    pub fn info(title: &str, body: &str) -> Self {
        Self {
            title: title.to_string(),
            body: body.to_string(),
            kind: ToastKind::Info,
        }
    }

    pub fn destructive(title: &str, body: &str) -> Self {
        Self {
            title: title.to_string(),
            body: body.to_string(),
            kind: ToastKind::Destructive,
        }
    }
}

/// Shows `message` and schedules its dismissal.
pub fn show_toast(toast: RwSignal<Option<ToastMessage>>, message: ToastMessage) {
    toast.set(Some(message.clone()));
    spawn_local(async move {
        TimeoutFuture::new(TOAST_DURATION_MS).await;
        // Another toast may have replaced this one in the meantime.
        toast.update(|current| {
            if current.as_ref() == Some(&message) {
                *current = None;
            }
        });
    });
}

#[component]
pub fn Toast(toast: RwSignal<Option<ToastMessage>>) -> impl IntoView {
    view! {
        {move || toast.get().map(|message| {
            let kind_class = match message.kind {
                ToastKind::Info => "toast toast-info",
                ToastKind::Destructive => "toast toast-destructive",
            };
            view! {
                <div class=kind_class role="status">
                    <strong class="toast-title">{message.title}</strong>
                    <span class="toast-body">{message.body}</span>
                </div>
            }
        })}
    }
}
