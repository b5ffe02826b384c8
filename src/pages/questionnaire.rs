//! Questionnaire page - one card per traveler, shared trip dates, and the
//! final save once everyone is in.

use dioxus::prelude::*;

use crate::app::Route;
use crate::components::{DateRangePanel, FinalizeButton, NoticeModal, TravelerCard};
use crate::context::{use_notice, use_session, Notice};

/// Parse the traveler count field; zero and non-numbers are rejected.
fn parse_count(input: &str) -> Option<u32> {
    input.trim().parse::<u32>().ok().filter(|n| *n > 0)
}

/// Questionnaire page component.
///
/// Edits the session provided by the root component, so leaving the page
/// keeps every answer.
#[component]
pub fn Questionnaire() -> Element {
    let mut session = use_session();
    let mut notice = use_notice();

    let mut count_input = use_signal(|| session.peek().traveler_count().to_string());

    let generate = move |_| {
        let Some(count) = parse_count(&count_input.read()) else {
            notice.set(Notice::show("Please enter a number of travelers (at least 1)."));
            return;
        };
        let result = session.write().regenerate(count);
        if let Err(e) = result {
            notice.set(Notice::show(e.to_string()));
        }
    };

    let (travelers, submitted, total) = {
        let state = session.read();
        (
            state.travelers().collect::<Vec<_>>(),
            state.submitted_count(),
            state.traveler_count(),
        )
    };

    rsx! {
        main { class: "questionnaire",
            header { class: "page-header",
                h1 { class: "page-title", "Reunion Planner" }
                p { class: "tagline", "Tell us how each of you wants to travel" }
                Link { class: "nav-link", to: Route::Results {}, "View results" }
            }

            section { class: "traveler-count",
                label { r#for: "num-people", "How many travelers?" }
                input {
                    id: "num-people",
                    class: "input-field",
                    r#type: "number",
                    min: "1",
                    value: "{count_input}",
                    oninput: move |e| count_input.set(e.value()),
                }
                button {
                    class: "btn-primary",
                    r#type: "button",
                    onclick: generate,
                    "Generate Forms"
                }
            }

            DateRangePanel {}

            p { class: "progress", "{submitted} of {total} travelers submitted" }

            div { class: "forms-container",
                for traveler in travelers {
                    TravelerCard { key: "{traveler}", traveler }
                }
            }

            FinalizeButton {}
            NoticeModal {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("3"), Some(3));
        assert_eq!(parse_count(" 12 "), Some(12));
        assert_eq!(parse_count("0"), None);
        assert_eq!(parse_count("-1"), None);
        assert_eq!(parse_count("two"), None);
        assert_eq!(parse_count(""), None);
    }
}
