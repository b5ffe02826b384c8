//! Per-traveler questionnaire form.
//!
//! A form is either being edited or has been submitted. Submitting freezes a
//! [`TravelerAnswer`] snapshot; modifying throws that snapshot away so the
//! traveler must submit again to count.
//!
//! ```text
//!   Editing --submit (valid)--> Submitted
//!      ^                            |
//!      +---------- modify ----------+
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::SessionConfig;
use crate::error::{CoreError, CoreResult, ValidationError};
use crate::slider::RangeSlider;
use crate::types::{BudgetRange, TravelerId};
use crate::vibes::VibeSelection;

/// A traveler's validated, frozen responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelerAnswer {
    pub traveler: TravelerId,
    /// Budget in slider units
    pub budget: BudgetRange,
    pub vibes: VibeSelection,
    pub destination: String,
    pub starting_point: String,
}

/// The values a form would submit right now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TravelerDraft {
    pub budget: BudgetRange,
    pub vibes: VibeSelection,
    pub destination: String,
    pub starting_point: String,
}

impl TravelerDraft {
    /// Run the submit checks in order; the first failure wins.
    pub fn validate(&self, traveler: TravelerId) -> Result<(), ValidationError> {
        if self.budget.min >= self.budget.max {
            return Err(ValidationError::BudgetOrder(traveler));
        }
        if self.destination.trim().is_empty() {
            return Err(ValidationError::MissingDestination(traveler));
        }
        if self.starting_point.trim().is_empty() {
            return Err(ValidationError::MissingStartingPoint(traveler));
        }
        Ok(())
    }

    /// Validate and turn the draft into a frozen answer.
    pub fn freeze(self, traveler: TravelerId) -> Result<TravelerAnswer, ValidationError> {
        self.validate(traveler)?;
        Ok(TravelerAnswer {
            traveler,
            budget: self.budget,
            vibes: self.vibes,
            destination: self.destination,
            starting_point: self.starting_point,
        })
    }
}

/// Lifecycle state of one form
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormState {
    #[default]
    Editing,
    Submitted(TravelerAnswer),
}

/// Live form for one traveler.
///
/// The live widgets stay editable in either state; only `submit` copies
/// them into the frozen answer.
#[derive(Debug, Clone, PartialEq)]
pub struct TravelerForm {
    id: TravelerId,
    slider: RangeSlider,
    vibes: VibeSelection,
    destination: String,
    starting_point: String,
    state: FormState,
}

impl TravelerForm {
    pub fn new(id: TravelerId, config: &SessionConfig) -> CoreResult<Self> {
        Ok(Self::blank(id, RangeSlider::new(config.slider)?))
    }

    pub(crate) fn blank(id: TravelerId, slider: RangeSlider) -> Self {
        Self {
            id,
            slider,
            vibes: VibeSelection::new(),
            destination: String::new(),
            starting_point: String::new(),
            state: FormState::Editing,
        }
    }

    pub fn id(&self) -> TravelerId {
        self.id
    }

    pub fn slider(&self) -> &RangeSlider {
        &self.slider
    }

    pub fn slider_mut(&mut self) -> &mut RangeSlider {
        &mut self.slider
    }

    pub fn vibes(&self) -> &VibeSelection {
        &self.vibes
    }

    pub fn add_vibe(&mut self, tag: &str) -> bool {
        let added = self.vibes.add(tag);
        if added {
            debug!(traveler = %self.id, tag, "vibe added");
        }
        added
    }

    pub fn remove_vibe(&mut self, tag: &str) -> bool {
        let removed = self.vibes.remove(tag);
        if removed {
            debug!(traveler = %self.id, tag, "vibe removed");
        }
        removed
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn set_destination(&mut self, destination: impl Into<String>) {
        self.destination = destination.into();
    }

    pub fn starting_point(&self) -> &str {
        &self.starting_point
    }

    pub fn set_starting_point(&mut self, starting_point: impl Into<String>) {
        self.starting_point = starting_point.into();
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn is_submitted(&self) -> bool {
        matches!(self.state, FormState::Submitted(_))
    }

    /// The frozen answer, if submitted
    pub fn answer(&self) -> Option<&TravelerAnswer> {
        match &self.state {
            FormState::Submitted(answer) => Some(answer),
            FormState::Editing => None,
        }
    }

    /// Snapshot of the live widgets
    pub fn draft(&self) -> TravelerDraft {
        TravelerDraft {
            budget: self.slider.range(),
            vibes: self.vibes.clone(),
            destination: self.destination.clone(),
            starting_point: self.starting_point.clone(),
        }
    }

    /// Validate and freeze the current values.
    ///
    /// On failure the form stays in `Editing` and nothing changes.
    pub fn submit(&mut self) -> CoreResult<TravelerAnswer> {
        if self.is_submitted() {
            return Err(CoreError::InvalidOperation(format!(
                "traveler {} has already submitted",
                self.id
            )));
        }

        let answer = self.draft().freeze(self.id)?;
        info!(
            traveler = %self.id,
            budget = %answer.budget.to_field_string(),
            vibes = answer.vibes.len(),
            "traveler submitted"
        );
        self.state = FormState::Submitted(answer.clone());
        Ok(answer)
    }

    /// Return to editing, discarding the frozen answer.
    pub fn modify(&mut self) -> CoreResult<TravelerAnswer> {
        match std::mem::take(&mut self.state) {
            FormState::Submitted(answer) => {
                info!(traveler = %self.id, "traveler reopened for editing");
                Ok(answer)
            }
            FormState::Editing => Err(CoreError::InvalidOperation(format!(
                "traveler {} has nothing to modify",
                self.id
            ))),
        }
    }
}
