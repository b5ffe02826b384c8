//! Budget slider component for one traveler.
//!
//! Renders the two-thumb [`reunion_core::RangeSlider`] held in the session
//! and feeds it pointer and keyboard events.
//!
//! ## Dragging
//!
//! The track measures itself when mounted and again on every pointer down,
//! so the slider keeps working after the window is resized. While a thumb
//! is held, a full-window capture layer receives the moves and the release,
//! which ends the drag wherever the pointer is let go.

use std::rc::Rc;

use dioxus::prelude::*;
use reunion_core::{SessionState, Thumb, TravelerId};

use crate::context::use_session;

/// Read the current track width into `width`.
fn measure(track: Option<Rc<MountedData>>, mut width: Signal<f64>) {
    if let Some(track) = track {
        spawn(async move {
            if let Ok(rect) = track.get_client_rect().await {
                width.set(rect.width());
            }
        });
    }
}

fn press(mut session: Signal<SessionState>, traveler: TravelerId, thumb: Thumb, x: f64) {
    if let Ok(form) = session.write().form_mut(traveler) {
        form.slider_mut().pointer_down(thumb, x);
    }
}

fn nudge(mut session: Signal<SessionState>, traveler: TravelerId, thumb: Thumb, key: Key) {
    let mut state = session.write();
    let Ok(form) = state.form_mut(traveler) else {
        return;
    };
    let slider = form.slider_mut();
    let page = i64::from(slider.config().gap.max(1));
    let delta = match key {
        Key::ArrowLeft | Key::ArrowDown => -1,
        Key::ArrowRight | Key::ArrowUp => 1,
        Key::PageDown => -page,
        Key::PageUp => page,
        _ => return,
    };
    slider.step(thumb, delta);
}

/// Two-thumb budget range control.
///
/// # Props
///
/// * `traveler` - Whose slider to render; renders nothing if the session
///   has no such traveler
#[component]
pub fn BudgetSlider(traveler: TravelerId) -> Element {
    let mut session = use_session();
    let mut track: Signal<Option<Rc<MountedData>>> = use_signal(|| None);
    let track_width = use_signal(|| 0.0_f64);

    let (view, dragging) = {
        let state = session.read();
        match state.form(traveler) {
            Ok(form) => (form.slider().view(state.config()), form.slider().dragging()),
            Err(_) => return rsx! {},
        }
    };

    let thumb_class = |thumb: Thumb| {
        let base = match thumb {
            Thumb::Min => "slider-thumb min",
            Thumb::Max => "slider-thumb max",
        };
        if dragging == Some(thumb) {
            format!("{} active", base)
        } else {
            base.to_string()
        }
    };

    rsx! {
        div { class: "budget-slider",
            div {
                class: "slider-track",
                onmounted: move |evt: MountedEvent| {
                    let el = evt.data();
                    track.set(Some(el.clone()));
                    measure(Some(el), track_width);
                },

                div {
                    class: "slider-range",
                    style: "left: {view.range_left}%; width: {view.range_width}%;",
                }
                div {
                    class: "{thumb_class(Thumb::Min)}",
                    style: "left: {view.min_percent}%;",
                    role: "slider",
                    tabindex: "0",
                    "aria-label": "Minimum budget",
                    "aria-valuenow": "{view.min_field}",
                    onmousedown: move |evt: MouseEvent| {
                        evt.prevent_default();
                        press(session, traveler, Thumb::Min, evt.client_coordinates().x);
                        measure(track(), track_width);
                    },
                    onkeydown: move |evt: KeyboardEvent| {
                        nudge(session, traveler, Thumb::Min, evt.key())
                    },
                }
                div {
                    class: "{thumb_class(Thumb::Max)}",
                    style: "left: {view.max_percent}%;",
                    role: "slider",
                    tabindex: "0",
                    "aria-label": "Maximum budget",
                    "aria-valuenow": "{view.max_field}",
                    onmousedown: move |evt: MouseEvent| {
                        evt.prevent_default();
                        press(session, traveler, Thumb::Max, evt.client_coordinates().x);
                        measure(track(), track_width);
                    },
                    onkeydown: move |evt: KeyboardEvent| {
                        nudge(session, traveler, Thumb::Max, evt.key())
                    },
                }
            }

            div { class: "range-values",
                span { class: "range-value", "{view.min_label}" }
                span { "to" }
                span { class: "range-value", "{view.max_label}" }
            }

            input { r#type: "hidden", name: "min-budget-{traveler}", value: "{view.min_field}" }
            input { r#type: "hidden", name: "max-budget-{traveler}", value: "{view.max_field}" }
            input { r#type: "hidden", name: "budget-range-{traveler}", value: "{view.range_field}" }

            if dragging.is_some() {
                div {
                    class: "drag-capture",
                    onmousemove: move |evt: MouseEvent| {
                        let x = evt.client_coordinates().x;
                        if let Ok(form) = session.write().form_mut(traveler) {
                            form.slider_mut().pointer_move(x, track_width());
                        }
                    },
                    onmouseup: move |_| {
                        if let Ok(form) = session.write().form_mut(traveler) {
                            form.slider_mut().pointer_up();
                        }
                    },
                }
            }
        }
    }
}
