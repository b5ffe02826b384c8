//! Trip date range picker with lock/unlock.

use dioxus::prelude::*;
use reunion_core::{parse_date_input, DateRangeError, SessionState};

use crate::context::{use_notice, use_session, Notice};

#[derive(Clone, Copy, PartialEq)]
enum Edge {
    Start,
    End,
}

fn apply_date(
    mut session: Signal<SessionState>,
    edge: Edge,
    input: &str,
) -> Result<(), DateRangeError> {
    let date = parse_date_input(input)?;
    let mut state = session.write();
    let dates = state.dates_mut();
    match edge {
        Edge::Start => dates.set_start(date),
        Edge::End => dates.set_end(date),
    }
}

/// Start/end date inputs plus the lock toggle.
///
/// Locked dates are read-only until unlocked. Locking checks that both
/// dates are set and in order.
#[component]
pub fn DateRangePanel() -> Element {
    let mut session = use_session();
    let mut notice = use_notice();

    let (start, end, locked, nights) = {
        let state = session.read();
        let dates = state.dates();
        (
            dates.start().map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default(),
            dates.end().map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default(),
            dates.is_locked(),
            dates.locked_range().map(|r| r.nights()),
        )
    };

    let mut on_date = move |edge: Edge, value: String| {
        if let Err(e) = apply_date(session, edge, &value) {
            notice.set(Notice::show(e.to_string()));
        }
    };

    let toggle_lock = move |_| {
        if locked {
            session.write().dates_mut().unlock();
            return;
        }
        let result = session.write().dates_mut().lock();
        if let Err(e) = result {
            notice.set(Notice::show(e.to_string()));
        }
    };

    rsx! {
        section { class: "date-range-panel",
            h2 { class: "section-header", "Trip dates" }
            div { class: "date-inputs",
                label { "From "
                    input {
                        r#type: "date",
                        class: "start-date",
                        value: "{start}",
                        disabled: locked,
                        onchange: move |e| on_date(Edge::Start, e.value()),
                    }
                }
                label { "To "
                    input {
                        r#type: "date",
                        class: "end-date",
                        value: "{end}",
                        disabled: locked,
                        onchange: move |e| on_date(Edge::End, e.value()),
                    }
                }
                button {
                    class: if locked { "btn-secondary" } else { "btn-primary" },
                    r#type: "button",
                    onclick: toggle_lock,
                    if locked { "Unlock dates" } else { "Lock dates" }
                }
            }
            if let Some(nights) = nights {
                p { class: "date-locked", "Locked: {start} to {end} ({nights} nights)" }
            }
        }
    }
}
