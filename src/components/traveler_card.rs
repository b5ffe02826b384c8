//! One traveler's questionnaire card.
//!
//! Shows the editable questions while the traveler is editing and the
//! summary once they have submitted.

use dioxus::prelude::*;
use reunion_core::{CoreError, TravelerId};

use crate::components::{BudgetSlider, CitySelect, TravelerSummary, VibePicker};
use crate::context::{use_notice, use_session, Notice};

/// Questionnaire card for `traveler`.
#[component]
pub fn TravelerCard(traveler: TravelerId) -> Element {
    let mut session = use_session();
    let mut notice = use_notice();

    let (answer, destination, starting_point, budget_label) = {
        let state = session.read();
        let Ok(form) = state.form(traveler) else {
            return rsx! {};
        };
        let label = form.answer().map(|a| {
            let config = state.config();
            format!(
                "{} - {}",
                config.euro_label(a.budget.min),
                config.euro_label(a.budget.max)
            )
        });
        (
            form.answer().cloned(),
            form.destination().to_string(),
            form.starting_point().to_string(),
            label.unwrap_or_default(),
        )
    };

    let submit = move |_| {
        let result = session.write().submit(traveler);
        match result {
            Ok(_) => {}
            Err(CoreError::Validation(e)) => notice.set(Notice::show(e.to_string())),
            Err(e) => {
                tracing::error!("Submit failed for traveler {}: {}", traveler, e);
                notice.set(Notice::show(e.to_string()));
            }
        }
    };

    let modify = move |id: TravelerId| {
        if let Err(e) = session.write().modify(id) {
            tracing::warn!("Modify failed for traveler {}: {}", id, e);
        }
    };

    if let Some(answer) = answer {
        return rsx! {
            TravelerSummary { answer, budget_label, on_modify: modify }
        };
    }

    rsx! {
        div { class: "traveler-form",
            h2 { "Traveler {traveler}" }

            div { class: "question",
                label { "1. What's your budget range?" }
                BudgetSlider { traveler }
            }

            div { class: "question",
                label { "2. Select your desired vibes (add multiple):" }
                VibePicker { traveler }
            }

            CitySelect {
                label: "3. What is your preferred destination?",
                value: destination,
                on_change: move |city: String| {
                    if let Ok(form) = session.write().form_mut(traveler) {
                        form.set_destination(city);
                    }
                },
            }

            CitySelect {
                label: "4. What's your starting point?",
                value: starting_point,
                on_change: move |city: String| {
                    if let Ok(form) = session.write().form_mut(traveler) {
                        form.set_starting_point(city);
                    }
                },
            }

            button {
                class: "btn-primary",
                r#type: "button",
                onclick: submit,
                "Submit Traveler {traveler}"
            }
        }
    }
}
