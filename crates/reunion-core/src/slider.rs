//! Dual-thumb budget slider.
//!
//! Pure model of the two-thumb drag control: pointer events go in, a
//! [`BudgetRange`] and a [`SliderView`] come out. The widget never lets the
//! thumbs get closer than `gap` units.
//!
//! ## Drag protocol
//!
//! ```text
//! pointer_down(thumb, x)  -> drag session starts (one thumb at a time)
//! pointer_move(x, width)  -> start% + (x - start_x) / width, mapped onto the
//!                            domain, rounded, clamped against the other thumb
//! pointer_up()            -> drag session ends (from anywhere)
//! ```

use crate::config::{SessionConfig, SliderConfig};
use crate::error::CoreResult;
use crate::types::BudgetRange;

/// Which handle of the slider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Thumb {
    Min,
    Max,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct DragSession {
    thumb: Thumb,
    start_x: f64,
    /// Thumb position in percent of the track when the drag began
    start_percent: f64,
}

/// Everything the slider renders, derived from its current values.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderView {
    pub min_percent: f64,
    pub max_percent: f64,
    /// Left edge of the filled bar, in percent
    pub range_left: f64,
    /// Width of the filled bar, in percent
    pub range_width: f64,
    pub min_label: String,
    pub max_label: String,
    pub min_field: u32,
    pub max_field: u32,
    /// Combined `"min-max"` field
    pub range_field: String,
}

/// Two-thumb constrained range slider.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeSlider {
    config: SliderConfig,
    min_val: u32,
    max_val: u32,
    drag: Option<DragSession>,
}

impl Default for RangeSlider {
    fn default() -> Self {
        let config = SliderConfig::default();
        Self {
            config,
            min_val: config.domain_min,
            max_val: config.domain_max,
            drag: None,
        }
    }
}

impl RangeSlider {
    /// Create a slider spanning its whole domain.
    pub fn new(config: SliderConfig) -> CoreResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            min_val: config.domain_min,
            max_val: config.domain_max,
            drag: None,
        })
    }

    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    /// Current (min, max) in slider units
    pub fn range(&self) -> BudgetRange {
        BudgetRange::new(self.min_val, self.max_val)
    }

    pub fn value(&self, thumb: Thumb) -> u32 {
        match thumb {
            Thumb::Min => self.min_val,
            Thumb::Max => self.max_val,
        }
    }

    /// Thumb currently being dragged, if any
    pub fn dragging(&self) -> Option<Thumb> {
        self.drag.map(|d| d.thumb)
    }

    /// Begin dragging `thumb`.
    ///
    /// Returns false (and changes nothing) if another drag is in progress.
    pub fn pointer_down(&mut self, thumb: Thumb, client_x: f64) -> bool {
        if self.drag.is_some() {
            return false;
        }
        self.drag = Some(DragSession {
            thumb,
            start_x: client_x,
            start_percent: self.percent_of(self.value(thumb)),
        });
        true
    }

    /// Move the dragged thumb to follow the pointer.
    ///
    /// Returns the new range, or `None` when no drag is active or the track
    /// has no measurable width.
    pub fn pointer_move(&mut self, client_x: f64, track_width: f64) -> Option<BudgetRange> {
        let drag = self.drag?;
        if !(track_width > 0.0) {
            return None;
        }

        let percent = drag.start_percent + (client_x - drag.start_x) / track_width * 100.0;
        let span = f64::from(self.config.domain_max - self.config.domain_min);
        let raw = (f64::from(self.config.domain_min) + percent / 100.0 * span).round();
        // f64 -> i64 saturates, so far-off pointers clamp instead of wrapping
        self.set_value(drag.thumb, raw as i64);
        Some(self.range())
    }

    /// End the drag session. Returns whether one was active.
    pub fn pointer_up(&mut self) -> bool {
        self.drag.take().is_some()
    }

    /// Set a thumb directly, applying the same clamps as dragging.
    pub fn set_value(&mut self, thumb: Thumb, value: i64) -> BudgetRange {
        let domain_min = i64::from(self.config.domain_min);
        let domain_max = i64::from(self.config.domain_max);
        let gap = i64::from(self.config.gap);

        match thumb {
            Thumb::Min => {
                let upper = i64::from(self.max_val) - gap;
                self.min_val = value.max(domain_min).min(upper) as u32;
            }
            Thumb::Max => {
                let lower = i64::from(self.min_val) + gap;
                self.max_val = value.min(domain_max).max(lower) as u32;
            }
        }
        self.range()
    }

    /// Nudge a thumb by `delta` units (keyboard arrows).
    pub fn step(&mut self, thumb: Thumb, delta: i64) -> BudgetRange {
        let current = i64::from(self.value(thumb));
        self.set_value(thumb, current + delta)
    }

    /// Position of a value along the track, in percent
    pub fn percent_of(&self, value: u32) -> f64 {
        let span = f64::from(self.config.domain_max - self.config.domain_min);
        f64::from(value.saturating_sub(self.config.domain_min)) / span * 100.0
    }

    /// Render state for the current values.
    pub fn view(&self, session: &SessionConfig) -> SliderView {
        let min_percent = self.percent_of(self.min_val);
        let max_percent = self.percent_of(self.max_val);
        SliderView {
            min_percent,
            max_percent,
            range_left: min_percent,
            range_width: max_percent - min_percent,
            min_label: session.euro_label(self.min_val),
            max_label: session.euro_label(self.max_val),
            min_field: self.min_val,
            max_field: self.max_val,
            range_field: self.range().to_field_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slider() -> RangeSlider {
        RangeSlider::new(SliderConfig::default()).unwrap()
    }

    #[test]
    fn test_starts_at_full_domain() {
        let s = slider();
        assert_eq!(s.range(), BudgetRange::new(0, 1000));
        assert_eq!(s.dragging(), None);
    }

    #[test]
    fn test_drag_min_thumb_maps_fraction() {
        let mut s = slider();
        assert!(s.pointer_down(Thumb::Min, 100.0));
        // 50px on a 200px track is a quarter of the domain
        let range = s.pointer_move(150.0, 200.0).unwrap();
        assert_eq!(range, BudgetRange::new(250, 1000));
        assert!(s.pointer_up());
        assert_eq!(s.dragging(), None);
    }

    #[test]
    fn test_drag_rounds_to_nearest_unit() {
        let mut s = slider();
        s.pointer_down(Thumb::Min, 0.0);
        // 1/3 of the track is 333.33.. units
        let range = s.pointer_move(100.0, 300.0).unwrap();
        assert_eq!(range.min, 333);
    }

    #[test]
    fn test_min_thumb_stops_gap_below_max() {
        let mut s = slider();
        s.set_value(Thumb::Max, 400);
        s.pointer_down(Thumb::Min, 0.0);
        let range = s.pointer_move(10_000.0, 100.0).unwrap();
        assert_eq!(range, BudgetRange::new(350, 400));
    }

    #[test]
    fn test_max_thumb_stops_gap_above_min() {
        let mut s = slider();
        s.set_value(Thumb::Min, 600);
        s.pointer_down(Thumb::Max, 500.0);
        let range = s.pointer_move(-10_000.0, 500.0).unwrap();
        assert_eq!(range, BudgetRange::new(600, 650));
    }

    #[test]
    fn test_thumbs_clamped_to_domain() {
        let mut s = slider();
        assert_eq!(s.set_value(Thumb::Min, -40).min, 0);
        assert_eq!(s.set_value(Thumb::Max, 4000).max, 1000);
    }

    #[test]
    fn test_second_pointer_down_ignored_while_dragging() {
        let mut s = slider();
        assert!(s.pointer_down(Thumb::Min, 0.0));
        assert!(!s.pointer_down(Thumb::Max, 0.0));
        assert_eq!(s.dragging(), Some(Thumb::Min));
    }

    #[test]
    fn test_move_without_drag_is_noop() {
        let mut s = slider();
        assert_eq!(s.pointer_move(50.0, 100.0), None);
        assert!(!s.pointer_up());
        assert_eq!(s.range(), BudgetRange::new(0, 1000));
    }

    #[test]
    fn test_zero_width_track_ignored() {
        let mut s = slider();
        s.pointer_down(Thumb::Max, 0.0);
        assert_eq!(s.pointer_move(20.0, 0.0), None);
        assert_eq!(s.range().max, 1000);
    }

    #[test]
    fn test_drag_is_relative_to_start_position() {
        let mut s = slider();
        s.set_value(Thumb::Max, 500);
        s.pointer_down(Thumb::Max, 300.0);
        // +10% of the track from 50%
        let range = s.pointer_move(340.0, 400.0).unwrap();
        assert_eq!(range.max, 600);
    }

    #[test]
    fn test_view_mirrors_values() {
        let mut s = slider();
        s.set_value(Thumb::Min, 250);
        s.set_value(Thumb::Max, 750);
        let view = s.view(&SessionConfig::default());
        assert_eq!(view.min_percent, 25.0);
        assert_eq!(view.max_percent, 75.0);
        assert_eq!(view.range_left, 25.0);
        assert_eq!(view.range_width, 50.0);
        assert_eq!(view.min_label, "250€");
        assert_eq!(view.max_label, "750€");
        assert_eq!(view.range_field, "250-750");
        assert_eq!((view.min_field, view.max_field), (250, 750));
    }

    #[test]
    fn test_view_is_idempotent() {
        let s = slider();
        let config = SessionConfig::default();
        assert_eq!(s.view(&config), s.view(&config));
    }

    #[test]
    fn test_step_respects_gap() {
        let mut s = slider();
        s.set_value(Thumb::Max, 100);
        assert_eq!(s.step(Thumb::Min, 80).min, 50);
        assert_eq!(s.step(Thumb::Min, -10).min, 40);
    }

    #[test]
    fn test_rejects_unusable_config() {
        let config = SliderConfig {
            domain_min: 0,
            domain_max: 10,
            gap: 50,
        };
        assert!(RangeSlider::new(config).is_err());
    }
}
