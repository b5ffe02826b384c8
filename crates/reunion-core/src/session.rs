//! Questionnaire session: every traveler's form plus the shared date range.
//!
//! A session is created for a traveler count and thrown away wholesale when
//! the count changes; no traveler state survives a regeneration.

use std::collections::BTreeMap;

use tracing::info;

use crate::config::SessionConfig;
use crate::dates::DateRangeLock;
use crate::error::{CoreError, CoreResult};
use crate::form::{TravelerAnswer, TravelerForm};
use crate::slider::RangeSlider;
use crate::types::TravelerId;

/// All per-traveler state for one page session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    config: SessionConfig,
    forms: BTreeMap<TravelerId, TravelerForm>,
    dates: DateRangeLock,
}

impl Default for SessionState {
    /// A single traveler with the default configuration.
    fn default() -> Self {
        let id = TravelerId::FIRST;
        Self {
            config: SessionConfig::default(),
            forms: BTreeMap::from([(id, TravelerForm::blank(id, RangeSlider::default()))]),
            dates: DateRangeLock::new(),
        }
    }
}

impl SessionState {
    /// Create forms for travelers `1..=traveler_count`.
    pub fn new(traveler_count: u32, config: SessionConfig) -> CoreResult<Self> {
        config.validate()?;
        if traveler_count == 0 {
            return Err(CoreError::Config("at least one traveler is required".into()));
        }

        let forms = TravelerId::all(traveler_count)
            .map(|id| TravelerForm::new(id, &config).map(|form| (id, form)))
            .collect::<CoreResult<BTreeMap<_, _>>>()?;

        info!(travelers = traveler_count, "questionnaire forms generated");
        Ok(Self {
            config,
            forms,
            dates: DateRangeLock::new(),
        })
    }

    /// Replace every traveler form for a new count.
    ///
    /// The date range belongs to the trip rather than to any traveler and
    /// is carried over.
    pub fn regenerate(&mut self, traveler_count: u32) -> CoreResult<()> {
        let mut fresh = Self::new(traveler_count, self.config)?;
        fresh.dates = std::mem::take(&mut self.dates);
        *self = fresh;
        Ok(())
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn traveler_count(&self) -> u32 {
        self.forms.len() as u32
    }

    /// Traveler ids in ascending order
    pub fn travelers(&self) -> impl Iterator<Item = TravelerId> + '_ {
        self.forms.keys().copied()
    }

    pub fn form(&self, id: TravelerId) -> CoreResult<&TravelerForm> {
        self.forms.get(&id).ok_or(CoreError::TravelerNotFound(id))
    }

    pub fn form_mut(&mut self, id: TravelerId) -> CoreResult<&mut TravelerForm> {
        self.forms.get_mut(&id).ok_or(CoreError::TravelerNotFound(id))
    }

    /// Submit one traveler's form.
    pub fn submit(&mut self, id: TravelerId) -> CoreResult<TravelerAnswer> {
        self.form_mut(id)?.submit()
    }

    /// Reopen one traveler's form, dropping their frozen answer.
    pub fn modify(&mut self, id: TravelerId) -> CoreResult<TravelerAnswer> {
        self.form_mut(id)?.modify()
    }

    /// Frozen answers in ascending traveler order.
    pub fn answers(&self) -> impl Iterator<Item = &TravelerAnswer> + '_ {
        self.forms.values().filter_map(TravelerForm::answer)
    }

    pub fn submitted_count(&self) -> usize {
        self.answers().count()
    }

    /// Travelers that still need to submit, ascending
    pub fn pending(&self) -> Vec<TravelerId> {
        self.forms
            .values()
            .filter(|form| !form.is_submitted())
            .map(TravelerForm::id)
            .collect()
    }

    pub fn dates(&self) -> &DateRangeLock {
        &self.dates
    }

    pub fn dates_mut(&mut self) -> &mut DateRangeLock {
        &mut self.dates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(n: u32) -> TravelerId {
        TravelerId::new(n).unwrap()
    }

    fn fill(session: &mut SessionState, n: u32) {
        let form = session.form_mut(id(n)).unwrap();
        form.set_destination("Lisbon");
        form.set_starting_point("Madrid");
    }

    #[test]
    fn test_default_matches_single_traveler() {
        let built = SessionState::new(1, SessionConfig::default()).unwrap();
        assert_eq!(SessionState::default(), built);
    }

    #[test]
    fn test_new_creates_one_form_per_traveler() {
        let session = SessionState::new(3, SessionConfig::default()).unwrap();
        assert_eq!(session.traveler_count(), 3);
        let ids: Vec<u32> = session.travelers().map(|t| t.get()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(session.submitted_count(), 0);
    }

    #[test]
    fn test_zero_travelers_rejected() {
        assert!(matches!(
            SessionState::new(0, SessionConfig::default()),
            Err(CoreError::Config(_))
        ));
    }

    #[test]
    fn test_unknown_traveler() {
        let mut session = SessionState::new(2, SessionConfig::default()).unwrap();
        assert!(matches!(
            session.submit(id(3)),
            Err(CoreError::TravelerNotFound(t)) if t == id(3)
        ));
    }

    #[test]
    fn test_pending_tracks_submissions() {
        let mut session = SessionState::new(3, SessionConfig::default()).unwrap();
        fill(&mut session, 2);
        session.submit(id(2)).unwrap();
        assert_eq!(session.pending(), vec![id(1), id(3)]);
    }

    #[test]
    fn test_regenerate_discards_traveler_state() {
        let mut session = SessionState::new(2, SessionConfig::default()).unwrap();
        fill(&mut session, 1);
        session.form_mut(id(1)).unwrap().add_vibe("beach");
        session.submit(id(1)).unwrap();

        session.regenerate(4).unwrap();
        assert_eq!(session.traveler_count(), 4);
        assert_eq!(session.submitted_count(), 0);
        assert!(session.form(id(1)).unwrap().vibes().is_empty());
        assert_eq!(session.form(id(1)).unwrap().destination(), "");
    }

    #[test]
    fn test_regenerate_keeps_dates() {
        let mut session = SessionState::new(1, SessionConfig::default()).unwrap();
        let day = chrono::NaiveDate::from_ymd_opt(2026, 8, 1).unwrap();
        session.dates_mut().set_start(Some(day)).unwrap();
        session.regenerate(2).unwrap();
        assert_eq!(session.dates().start(), Some(day));
    }
}
