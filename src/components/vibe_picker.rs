//! Vibe picker - dropdown plus numbered list of chosen vibes.

use dioxus::prelude::*;
use reunion_core::{SessionState, TravelerId, VIBES};

use crate::context::use_session;

/// Add the chosen vibe to `traveler`, clearing `choice` once it lands.
fn add_choice(session: &mut SessionState, traveler: TravelerId, choice: &mut String) -> bool {
    let added = session
        .form_mut(traveler)
        .map(|form| form.add_vibe(choice))
        .unwrap_or(false);
    if added {
        choice.clear();
    }
    added
}

/// Multi-select for one traveler's vibes.
///
/// Picking an option and pressing "Add" appends it unless it is already
/// listed; each listed vibe has its own remove button.
#[component]
pub fn VibePicker(traveler: TravelerId) -> Element {
    let mut session = use_session();
    let mut choice = use_signal(String::new);

    let (items, field) = match session.read().form(traveler) {
        Ok(form) => (form.vibes().list_items(), form.vibes().to_field_string()),
        Err(_) => return rsx! {},
    };

    let add = move |_| {
        let mut tag = choice.read().clone();
        if add_choice(&mut session.write(), traveler, &mut tag) {
            choice.set(tag);
        }
    };

    rsx! {
        div { class: "multi-select-container",
            select {
                value: "{choice}",
                onchange: move |e| choice.set(e.value()),
                option { value: "", " " }
                for vibe in VIBES.iter() {
                    option { key: "{vibe.tag}", value: "{vibe.tag}", "{vibe.label}" }
                }
            }
            button {
                class: "btn-secondary",
                r#type: "button",
                onclick: add,
                "Add"
            }
        }

        ul { class: "selected-vibes",
            for item in items {
                li { key: "{item.tag}",
                    "{item.number}. {item.label} "
                    button {
                        class: "vibe-remove",
                        r#type: "button",
                        "aria-label": "Remove {item.label}",
                        onclick: {
                            let tag = item.tag.clone();
                            move |_| {
                                if let Ok(form) = session.write().form_mut(traveler) {
                                    form.remove_vibe(&tag);
                                }
                            }
                        },
                        "\u{00D7}"
                    }
                }
            }
        }

        input { r#type: "hidden", name: "selected-features-{traveler}", value: "{field}" }
    }
}
