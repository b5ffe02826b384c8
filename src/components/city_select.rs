//! Searchable city dropdown.

use dioxus::prelude::*;
use reunion_core::{search_cities, CityEntry};

use crate::context::use_cities;

/// Matches shown at once; the full list can run to thousands of cities.
const MAX_MATCHES: usize = 50;

/// City picker backed by the shared city list.
///
/// Typing filters the list; clicking a match selects it and clears the
/// search.
///
/// # Props
///
/// * `label` - Question text shown above the input
/// * `value` - Currently selected city id (empty when none)
/// * `on_change` - Called with the chosen city id
#[component]
pub fn CitySelect(label: &'static str, value: String, on_change: EventHandler<String>) -> Element {
    let cities = use_cities();
    let mut query = use_signal(String::new);

    let matches: Vec<CityEntry> = {
        let list = cities.read();
        search_cities(&list.0, &query.read())
            .into_iter()
            .take(MAX_MATCHES)
            .cloned()
            .collect()
    };
    let loading = cities.read().0.is_empty();

    rsx! {
        div { class: "question city-select",
            label { "{label}" }
            input {
                class: "input-field",
                r#type: "text",
                placeholder: if loading { "loading cities..." } else { "type to search..." },
                disabled: loading,
                value: "{query}",
                oninput: move |e| query.set(e.value()),
            }

            if !value.is_empty() {
                p { class: "city-chosen", "Selected: {value}" }
            }

            if !matches.is_empty() {
                ul { class: "city-options",
                    for city in matches {
                        li {
                            key: "{city.id}",
                            class: if city.id == value {
                                "city-option selected"
                            } else {
                                "city-option"
                            },
                            onclick: {
                                let id = city.id.clone();
                                move |_| {
                                    on_change.call(id.clone());
                                    query.set(String::new());
                                }
                            },
                            "{city.text}"
                        }
                    }
                }
            }
        }
    }
}
