//! Property-based tests for the slider and vibe selection
//!
//! Uses proptest to verify the invariants that must hold for any sequence
//! of user input.

use proptest::prelude::*;
use reunion_core::{RangeSlider, SliderConfig, Thumb, VibeSelection, VIBES};

// ============================================================================
// Strategy Generators
// ============================================================================

/// Pointer events a user can produce on a slider
#[derive(Debug, Clone)]
enum PointerOp {
    Down(Thumb, f64),
    Move(f64, f64),
    Up,
}

fn thumb_strategy() -> impl Strategy<Value = Thumb> {
    prop_oneof![Just(Thumb::Min), Just(Thumb::Max)]
}

fn pointer_ops_strategy(max_ops: usize) -> impl Strategy<Value = Vec<PointerOp>> {
    prop::collection::vec(
        prop_oneof![
            1 => (thumb_strategy(), -2000.0..2000.0f64).prop_map(|(t, x)| PointerOp::Down(t, x)),
            4 => (-5000.0..5000.0f64, 0.0..1200.0f64).prop_map(|(x, w)| PointerOp::Move(x, w)),
            1 => Just(PointerOp::Up),
        ],
        0..max_ops,
    )
}

/// Slider configurations that satisfy the gap precondition
fn slider_config_strategy() -> impl Strategy<Value = SliderConfig> {
    (0u32..500, 1u32..5000).prop_flat_map(|(domain_min, span)| {
        (0..=span).prop_map(move |gap| SliderConfig {
            domain_min,
            domain_max: domain_min + span,
            gap,
        })
    })
}

/// Vibe operations: add or remove a catalog tag (or an empty tag)
#[derive(Debug, Clone)]
enum VibeOp {
    Add(String),
    Remove(String),
}

fn tag_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        5 => prop::sample::select(VIBES.iter().map(|v| v.tag.to_string()).collect::<Vec<_>>()),
        1 => Just(String::new()),
    ]
}

fn vibe_ops_strategy(max_ops: usize) -> impl Strategy<Value = Vec<VibeOp>> {
    prop::collection::vec(
        prop_oneof![
            3 => tag_strategy().prop_map(VibeOp::Add),
            1 => tag_strategy().prop_map(VibeOp::Remove),
        ],
        0..max_ops,
    )
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// The thumbs never get closer than the gap, whatever the pointer does
    #[test]
    fn drag_keeps_gap(config in slider_config_strategy(), ops in pointer_ops_strategy(60)) {
        let mut slider = RangeSlider::new(config).unwrap();

        for op in ops {
            match op {
                PointerOp::Down(thumb, x) => { slider.pointer_down(thumb, x); }
                PointerOp::Move(x, width) => { slider.pointer_move(x, width); }
                PointerOp::Up => { slider.pointer_up(); }
            }
            let range = slider.range();
            prop_assert!(range.max - range.min >= config.gap);
            prop_assert!(range.min >= config.domain_min);
            prop_assert!(range.max <= config.domain_max);
        }
    }

    /// Rendering is a pure function of the current values
    #[test]
    fn view_is_idempotent(ops in pointer_ops_strategy(20)) {
        let mut slider = RangeSlider::new(SliderConfig::default()).unwrap();
        for op in ops {
            match op {
                PointerOp::Down(thumb, x) => { slider.pointer_down(thumb, x); }
                PointerOp::Move(x, width) => { slider.pointer_move(x, width); }
                PointerOp::Up => { slider.pointer_up(); }
            }
        }
        let config = reunion_core::SessionConfig::default();
        prop_assert_eq!(slider.view(&config), slider.view(&config));
    }

    /// Selections never hold duplicates or empty tags
    #[test]
    fn selection_stays_unique(ops in vibe_ops_strategy(40)) {
        let mut vibes = VibeSelection::new();
        for op in ops {
            match op {
                VibeOp::Add(tag) => { vibes.add(&tag); }
                VibeOp::Remove(tag) => { vibes.remove(&tag); }
            }
            let tags = vibes.as_slice();
            for (i, tag) in tags.iter().enumerate() {
                prop_assert!(!tag.is_empty());
                prop_assert!(!tags[i + 1..].contains(tag));
            }
        }
    }

    /// Adding a tag that is already present changes nothing
    #[test]
    fn add_is_idempotent(ops in vibe_ops_strategy(20), tag in tag_strategy()) {
        let mut vibes = VibeSelection::new();
        for op in ops {
            match op {
                VibeOp::Add(t) => { vibes.add(&t); }
                VibeOp::Remove(t) => { vibes.remove(&t); }
            }
        }
        vibes.add(&tag);
        let before = vibes.clone();
        prop_assert!(!vibes.add(&tag));
        prop_assert_eq!(vibes, before);
    }

    /// Removing an absent tag changes nothing
    #[test]
    fn remove_absent_is_noop(ops in vibe_ops_strategy(20), tag in tag_strategy()) {
        let mut vibes = VibeSelection::new();
        for op in ops {
            match op {
                VibeOp::Add(t) => { vibes.add(&t); }
                VibeOp::Remove(t) => { vibes.remove(&t); }
            }
        }
        vibes.remove(&tag);
        let before = vibes.clone();
        prop_assert!(!vibes.remove(&tag));
        prop_assert_eq!(vibes, before);
    }
}
