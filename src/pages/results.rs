//! Results page - ranked destinations for the group.

use dioxus::prelude::*;
use reunion_core::{load_results_from, ResultsStatus, SortColumn, SortState};

use crate::app::Route;
use crate::components::ResultsTable;
use crate::context::get_app_config;

/// Results page component.
///
/// Loads the ranking output on mount, trying each configured file in turn.
#[component]
pub fn Results() -> Element {
    let mut status: Signal<ResultsStatus> = use_signal(ResultsStatus::default);
    let mut sort: Signal<SortState> = use_signal(SortState::default);
    let mut reloads = use_signal(|| 0u32);

    // Load (and reload) the results file
    use_effect(move || {
        let attempt = reloads();
        status.set(ResultsStatus::Loading);
        spawn(async move {
            let paths = &get_app_config().results_paths;
            let result = load_results_from(paths).await;
            match &result {
                Ok(rows) => tracing::info!(attempt, "loaded {} result rows", rows.len()),
                Err(e) => tracing::error!("Failed to load results: {}", e),
            }
            status.set(result.into());
        });
    });

    let on_sort = move |column: SortColumn| sort.write().select(column);

    rsx! {
        main { class: "results",
            header { class: "page-header",
                h1 { class: "page-title", "Top Destinations" }
                Link { class: "nav-link", to: Route::Questionnaire {}, "Back to questionnaire" }
                button {
                    class: "btn-secondary",
                    r#type: "button",
                    onclick: move |_| reloads += 1,
                    "Reload"
                }
            }

            match status() {
                ResultsStatus::Loading => rsx! {
                    div { class: "loading-state",
                        p { class: "loading-message", "Loading results..." }
                    }
                },
                ResultsStatus::Error(message) => rsx! {
                    p { class: "error-text", "Error loading results: {message}" }
                },
                ResultsStatus::Empty => rsx! {
                    p { class: "empty-state", "No results available yet." }
                },
                ResultsStatus::Ready(rows) => rsx! {
                    ResultsTable { rows, sort: sort(), on_sort }
                },
            }
        }
    }
}
