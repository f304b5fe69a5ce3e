//! Edit transaction framing between user gestures and the engine.
//!
//! Hosts record automation only when a value change is bracketed by
//! begin/end notifications. [`EditSession`] guarantees that framing:
//!
//! ```text
//!           press on control            release
//!   Idle ─────────────────────► Editing ─────────► Idle
//!          begin_edit(id)  set_value(id, v)*   end_edit(every id)
//! ```
//!
//! `begin_edit` is sent at most once per parameter per gesture, and a value
//! change that arrives without a prior press begins the edit implicitly, so
//! the engine never sees an unframed `set_value`.
//!
//! On release the session closes *all* parameters of the panel, not only
//! the touched ones ([`ReleaseFraming::AllParameters`]). Engines that need
//! tighter framing can opt into [`ReleaseFraming::TouchedOnly`].

use crate::param::{ParamId, ParamIndex, Variant};

/// Outbound notifications to the processing engine.
///
/// All calls are fire-and-forget: there is no return value and no retry.
pub trait EngineLink {
    /// A gesture on `index` started.
    fn begin_edit(&self, index: ParamIndex);

    /// New value for `index`, already coerced to its range.
    fn set_value(&self, index: ParamIndex, value: f32);

    /// The gesture on `index` finished.
    fn end_edit(&self, index: ParamIndex);
}

/// Which parameters receive `end_edit` when a gesture is released.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ReleaseFraming {
    /// Every parameter of the panel, once each.
    #[default]
    AllParameters,
    /// Only parameters that received `begin_edit` during the gesture.
    TouchedOnly,
}

/// Gesture state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EditState {
    /// No gesture in progress.
    #[default]
    Idle,
    /// A control owns the pointer.
    Editing,
}

/// Per-gesture transaction tracker.
#[derive(Debug, Clone)]
pub struct EditSession {
    variant: Variant,
    framing: ReleaseFraming,
    state: EditState,
    touched: [bool; ParamId::COUNT],
}

impl EditSession {
    /// Create an idle session.
    pub fn new(variant: Variant, framing: ReleaseFraming) -> Self {
        Self {
            variant,
            framing,
            state: EditState::Idle,
            touched: [false; ParamId::COUNT],
        }
    }

    /// Current state.
    pub fn state(&self) -> EditState {
        self.state
    }

    /// Whether a gesture is in progress.
    pub fn is_editing(&self) -> bool {
        self.state == EditState::Editing
    }

    /// Whether `id` was begun during the current gesture.
    pub fn is_touched(&self, id: ParamId) -> bool {
        self.touched[id.slot()]
    }

    /// Release behavior.
    pub fn framing(&self) -> ReleaseFraming {
        self.framing
    }

    /// Start (or join) a gesture on `id`.
    ///
    /// Emits `begin_edit` the first time `id` is touched in this gesture.
    pub fn begin(&mut self, id: ParamId, link: &dyn EngineLink) {
        let Some(index) = self.variant.index_of(id) else {
            return;
        };
        self.state = EditState::Editing;
        if !self.touched[id.slot()] {
            self.touched[id.slot()] = true;
            #[cfg(feature = "tracing")]
            tracing::trace!(param = %id, %index, "begin_edit");
            link.begin_edit(index);
        }
    }

    /// Forward a value change, beginning the edit first if needed.
    pub fn set_value(&mut self, id: ParamId, value: f32, link: &dyn EngineLink) {
        let Some(index) = self.variant.index_of(id) else {
            return;
        };
        self.begin(id, link);
        link.set_value(index, value);
    }

    /// End the gesture.
    ///
    /// Returns the number of `end_edit` notifications sent; zero when idle,
    /// so a stray second release never closes anything twice.
    pub fn release(&mut self, link: &dyn EngineLink) -> usize {
        if self.state == EditState::Idle {
            return 0;
        }
        let mut sent = 0;
        for (wire, &id) in self.variant.params().iter().enumerate() {
            let close = match self.framing {
                ReleaseFraming::AllParameters => true,
                ReleaseFraming::TouchedOnly => self.touched[id.slot()],
            };
            if close {
                link.end_edit(ParamIndex(wire as u32));
                sent += 1;
            }
        }
        #[cfg(feature = "tracing")]
        tracing::trace!(sent, "gesture released");
        self.touched = [false; ParamId::COUNT];
        self.state = EditState::Idle;
        sent
    }
}
