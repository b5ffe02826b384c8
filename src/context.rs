//! Shared state for Reunion Planner components.
//!
//! The app configuration is global and read-only. The root component loads
//! the city list once and owns the questionnaire session, so answers
//! survive navigation between pages.
//!
//! ## Usage
//!
//! ```ignore
//! // In any component below the root
//! let mut session = use_session();
//! session.write().form_mut(id)?.add_vibe("beach");
//! ```

use std::path::PathBuf;

use dioxus::prelude::*;
use reunion_core::{AnswerSink, CityEntry, CompletionGate, HttpSink, JsonFileSink, SessionState};

/// Startup configuration resolved from the command line.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub cities_path: PathBuf,
    /// Tried in order until one loads
    pub results_paths: Vec<PathBuf>,
    pub answers_dir: PathBuf,
    pub save_endpoint: Option<String>,
    /// Session the questionnaire starts from and resets to
    pub initial_session: SessionState,
}

impl AppConfig {
    /// Defaults with every data file under `data_dir`.
    pub fn from_data_dir(data_dir: PathBuf) -> Self {
        Self {
            cities_path: data_dir.join("cities.csv"),
            results_paths: vec![data_dir.join("results.json")],
            answers_dir: data_dir.join("answers"),
            save_endpoint: None,
            initial_session: SessionState::default(),
            data_dir,
        }
    }

    /// Where finalized answers go: the endpoint if one is set, else files.
    pub fn sink(&self) -> AnswerSink {
        match &self.save_endpoint {
            Some(url) => AnswerSink::Http(HttpSink::new(url.clone())),
            None => AnswerSink::File(JsonFileSink::new(self.answers_dir.clone())),
        }
    }

    /// Fresh session plus a gate already evaluated against it.
    pub fn root_state(&self) -> (SessionState, CompletionGate) {
        let session = self.initial_session.clone();
        let mut gate = CompletionGate::new();
        gate.evaluate(&session);
        (session, gate)
    }

    pub fn sink_label(&self) -> String {
        match &self.save_endpoint {
            Some(url) => format!("POST {}", url),
            None => self.answers_dir.display().to_string(),
        }
    }
}

/// Get the configuration the app was started with.
pub fn get_app_config() -> &'static AppConfig {
    crate::get_app_config()
}

/// City list shared by every traveler's dropdowns.
///
/// Empty until the root component finishes loading it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CityList(pub Vec<CityEntry>);

/// Hook to access the loaded city list.
pub fn use_cities() -> Signal<CityList> {
    use_context::<Signal<CityList>>()
}

/// Hook to access the questionnaire session.
///
/// Provided by the root component for the lifetime of the window.
pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// Hook to access the completion gate tracking the session.
pub fn use_gate() -> Signal<CompletionGate> {
    use_context::<Signal<CompletionGate>>()
}

/// Blocking message shown in the notice modal.
///
/// Validation failures, date lock errors and save outcomes all go here;
/// the traveler must dismiss it before continuing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Notice(pub Option<String>);

impl Notice {
    pub fn show(message: impl Into<String>) -> Self {
        Self(Some(message.into()))
    }
}

/// Hook to access the notice modal state.
pub fn use_notice() -> Signal<Notice> {
    use_context::<Signal<Notice>>()
}
