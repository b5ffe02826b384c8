//! "Save All Answers" action, offered only while the completion gate is open.

use dioxus::prelude::*;

use crate::context::{get_app_config, use_gate, use_notice, use_session, Notice};

/// Save button for the whole questionnaire.
///
/// Renders nothing until every traveler has submitted (and the dates are
/// locked, when that is required).
#[component]
pub fn FinalizeButton() -> Element {
    let session = use_session();
    let gate = use_gate();
    let mut notice = use_notice();
    let mut saving = use_signal(|| false);

    if !gate.read().is_open() {
        return rsx! {};
    }

    let save = move |_| {
        if saving() {
            return;
        }
        saving.set(true);

        // Finalize works on a snapshot so edits during the save don't race it
        let snapshot = session.read().clone();
        let gate = *gate.read();
        spawn(async move {
            let sink = get_app_config().sink();
            match gate.finalize(&snapshot, &sink).await {
                Ok(receipt) => {
                    notice.set(Notice::show(format!("All answers saved to {}", receipt)));
                }
                Err(e) => {
                    notice.set(Notice::show(format!("Error saving answers: {}", e)));
                }
            }
            saving.set(false);
        });
    };

    rsx! {
        div { class: "finalize",
            button {
                class: "btn-enter",
                r#type: "button",
                disabled: saving(),
                onclick: save,
                if saving() { "Saving..." } else { "Save All Answers" }
            }
        }
    }
}
