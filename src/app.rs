use dioxus::prelude::*;
use reunion_core::{load_cities_or_fallback, CompletionGate, GateChange, SessionState};

use crate::context::{get_app_config, CityList, Notice};
use crate::pages::{Questionnaire, Results};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Traveler questionnaire
/// - `/results` - Ranked destinations table
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Questionnaire {},
    #[route("/results")]
    Results {},
}

/// Root application component.
///
/// Provides global styles, the shared city list, the questionnaire session
/// and routing. The session lives here so answers survive a visit to the
/// results page.
#[component]
pub fn App() -> Element {
    let mut cities: Signal<CityList> = use_signal(CityList::default);
    let (session, mut gate): (Signal<SessionState>, Signal<CompletionGate>) = use_hook(|| {
        let (session, gate) = get_app_config().root_state();
        (Signal::new(session), Signal::new(gate))
    });
    let notice: Signal<Notice> = use_signal(Notice::default);
    use_context_provider(|| cities);
    use_context_provider(|| session);
    use_context_provider(|| gate);
    use_context_provider(|| notice);

    // Re-check the gate after every session change
    use_effect(move || {
        let state = session.read();
        if gate.write().evaluate(&state) == GateChange::Closed {
            tracing::debug!("save hidden until every traveler submits");
        }
    });

    // Load the city list once per run
    use_effect(move || {
        spawn(async move {
            let path = &get_app_config().cities_path;
            let entries = load_cities_or_fallback(path).await;
            tracing::info!("{} cities available", entries.len());
            cities.set(CityList(entries));
        });
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
