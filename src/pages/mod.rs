//! Page components for Reunion Planner.

mod questionnaire;
mod results;

pub use questionnaire::Questionnaire;
pub use results::Results;
