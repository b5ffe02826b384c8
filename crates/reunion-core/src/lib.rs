//! Reunion Planner Core Library
//!
//! Questionnaire state for planning a group trip: each traveler sets a
//! budget range, picks vibes and chooses where they want to go and where
//! they leave from. Once everyone has submitted, the answers are saved as
//! one JSON document for the ranking pipeline.
//!
//! ## Overview
//!
//! - [`RangeSlider`]: two-thumb budget slider driven by pointer events
//! - [`VibeSelection`]: ordered, duplicate-free tag list
//! - [`TravelerForm`]: per-traveler `Editing` / `Submitted` state machine
//! - [`SessionState`]: all forms plus the shared [`DateRangeLock`]
//! - [`CompletionGate`]: offers finalize once everyone is in
//! - [`PayloadSink`]: where finalized answers go (file or HTTP)
//!
//! Nothing here touches a UI toolkit; the desktop app drives these types
//! from its event handlers.
//!
//! ## Quick Start
//!
//! ```ignore
//! use reunion_core::{CompletionGate, JsonFileSink, SessionConfig, SessionState, TravelerId};
//!
//! let mut session = SessionState::new(2, SessionConfig::default())?;
//! let mut gate = CompletionGate::new();
//!
//! for id in TravelerId::all(2) {
//!     let form = session.form_mut(id)?;
//!     form.add_vibe("beach");
//!     form.set_destination("Lisbon");
//!     form.set_starting_point("Madrid");
//!     session.submit(id)?;
//!     gate.evaluate(&session);
//! }
//!
//! let receipt = gate.finalize(&session, &JsonFileSink::new("./answers")).await?;
//! ```

pub mod cities;
pub mod config;
pub mod dates;
pub mod error;
pub mod form;
pub mod gate;
pub mod payload;
pub mod results;
pub mod session;
pub mod sink;
pub mod slider;
pub mod types;
pub mod vibes;

// Re-exports
pub use cities::{load_cities, load_cities_or_fallback, parse_cities, search_cities};
pub use config::{SessionConfig, SliderConfig};
pub use dates::{parse_date_input, DateRange, DateRangeLock};
pub use error::{CoreError, CoreResult, DateRangeError, ValidationError};
pub use form::{FormState, TravelerAnswer, TravelerDraft, TravelerForm};
pub use gate::{is_complete, CompletionGate, GateChange};
pub use payload::{PayloadDateRange, SubmissionPayload, TravelerRecord};
pub use results::{
    load_results, load_results_from, ResultRow, ResultsStatus, SortColumn, SortOrder, SortState,
};
pub use session::SessionState;
pub use sink::{AnswerSink, HttpSink, JsonFileSink, PayloadSink, SaveReceipt};
pub use slider::{RangeSlider, SliderView, Thumb};
pub use types::*;
pub use vibes::{VibeListItem, VibeSelection};
