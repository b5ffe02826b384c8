//! Blocking notice dialog.

use dioxus::prelude::*;

use crate::context::{use_notice, Notice};

/// Shows the current [`Notice`] until it is dismissed.
///
/// Renders nothing while there is no message.
#[component]
pub fn NoticeModal() -> Element {
    let mut notice = use_notice();

    let Some(message) = notice.read().0.clone() else {
        return rsx! {};
    };

    let dismiss = move |_| notice.set(Notice::default());

    rsx! {
        div {
            class: "modal-overlay",
            onclick: dismiss,

            div {
                class: "notice-modal",
                role: "alertdialog",
                onclick: move |e| e.stop_propagation(),

                p { class: "modal-description", "{message}" }

                div { class: "modal-actions",
                    button {
                        class: "btn-primary",
                        autofocus: true,
                        onclick: dismiss,
                        "OK"
                    }
                }
            }
        }
    }
}
