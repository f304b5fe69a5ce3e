//! Panel widgets.
//!
//! - [`Knob`] — Stepped rotary control with wheel support
//! - [`SlideToggle`] — Animated on/off switch for the limiter
//! - [`SequenceList`] — Six-row list box for the control order
//!
//! [`interaction`] turns a widget's [`egui::Response`] into the toolkit-free
//! [`Interaction`] the core consumes.

mod knob;
mod sequence_list;
mod toggle;

pub use knob::Knob;
pub use sequence_list::SequenceList;
pub use toggle::SlideToggle;

use manglr_core::Interaction;

/// Summarize one frame of a widget's response.
///
/// Drags report activation on start and release on stop. Clicks, wheel
/// notches and other one-shot changes open and close within the frame.
pub fn interaction(response: &egui::Response, value: Option<f32>) -> Interaction {
    let one_shot = response.clicked()
        || response.double_clicked()
        || (response.changed() && !response.dragged());
    Interaction {
        activated: response.drag_started() || one_shot,
        double_clicked: response.double_clicked(),
        value: if response.changed() { value } else { None },
        released: response.drag_stopped() || one_shot,
    }
}
