use dioxus::prelude::*;
use dioxus_primitives::alert_dialog as prim;

/// A modal asking the user to confirm an action.
///
/// The body is passed as children. Cancelling or dismissing only closes the
/// dialog; `on_confirm` is left to close it once the action has run.
#[component]
pub fn ConfirmDialog(
    open: bool,
    on_open_change: EventHandler<bool>,
    title: String,
    on_confirm: EventHandler<()>,
    #[props(default = "Confirm".to_string())] confirm_label: String,
    #[props(default = "Cancel".to_string())] cancel_label: String,
    #[props(default = false)] busy: bool,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::AlertDialogRoot {
            class: "confirm-dialog-overlay",
            open: open,
            on_open_change: move |value: bool| on_open_change.call(value),
            prim::AlertDialogContent { class: "confirm-dialog-content",
                prim::AlertDialogTitle { class: "confirm-dialog-title", "{title}" }
                prim::AlertDialogDescription { class: "confirm-dialog-description",
                    {children}
                }
                prim::AlertDialogActions { class: "confirm-dialog-actions",
                    prim::AlertDialogCancel { class: "confirm-dialog-cancel", "{cancel_label}" }
                    prim::AlertDialogAction {
                        class: "confirm-dialog-action",
                        on_click: move |_| {
                            if !busy {
                                on_confirm.call(());
                            }
                        },
                        if busy { "Working..." } else { "{confirm_label}" }
                    }
                }
            }
        }
    }
}
