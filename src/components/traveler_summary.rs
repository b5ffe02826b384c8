//! Read-only view of a submitted traveler's answers.

use dioxus::prelude::*;
use reunion_core::{TravelerAnswer, TravelerId};

/// Summary card for a frozen answer.
///
/// # Props
///
/// * `answer` - The submitted answer
/// * `budget_label` - Budget already formatted for display
/// * `on_modify` - Called when the traveler wants to edit again
#[component]
pub fn TravelerSummary(
    answer: TravelerAnswer,
    budget_label: String,
    on_modify: EventHandler<TravelerId>,
) -> Element {
    let traveler = answer.traveler;

    rsx! {
        div { class: "traveler-summary",
            h3 { "Traveler {traveler} - Submitted Answers" }
            p {
                strong { "Budget Range: " }
                "{budget_label}"
            }
            p { strong { "Preferred Vibes:" } }
            if answer.vibes.is_empty() {
                p { class: "empty-state", "none" }
            } else {
                ul {
                    for item in answer.vibes.list_items() {
                        li { key: "{item.tag}", "{item.number}. {item.label}" }
                    }
                }
            }
            p {
                strong { "Preferred Destination: " }
                "{answer.destination}"
            }
            p {
                strong { "Starting Point: " }
                "{answer.starting_point}"
            }
            button {
                class: "btn-tertiary",
                r#type: "button",
                onclick: move |_| on_modify.call(traveler),
                "Modify Answers"
            }
        }
    }
}
