use dioxus::prelude::*;
use dioxus_primitives::toast as prim;
use shared_types::AppError;

pub use dioxus_primitives::toast::{use_toast, ToastOptions, Toasts};

#[component]
pub fn ToastProvider(props: prim::ToastProviderProps) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::ToastProvider { ..props }
    }
}

/// Report a failed API call to the user and the log.
pub fn toast_app_error(toasts: &Toasts, context: &str, err: &AppError) {
    tracing::error!(%err, context, "request failed");
    toasts.error(format!("{context}: {}", err.message), ToastOptions::new());
}
