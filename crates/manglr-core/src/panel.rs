//! The panel controller: one render entry point plus explicit gestures.
//!
//! [`Panel`] owns the parameter model and the edit session. Once per frame
//! the host calls [`Panel::render`], which
//!
//! 1. drains engine changes from the shared [`InboundSync`],
//! 2. derives step size, colors and control order from the model,
//! 3. asks the [`WidgetHost`] to draw each control and report what the
//!    user did with it,
//! 4. turns those reports into [`Gesture`]s and feeds them through the
//!    edit protocol.
//!
//! Controls are requested in a fixed slot order (selector, the three
//! reorderable knobs as the Sequence dictates, limiter, gain, mix). A knob's
//! request carries everything derived from its parameter, so moving it to a
//! different slot changes nothing but its [`Placement`].

use std::sync::Arc;

use crate::color::{ControlColors, PanelColors, SelectorColors, ToggleColors};
use crate::edit::{EditSession, EngineLink, ReleaseFraming};
use crate::error::ParamError;
use crate::inbound::InboundSync;
use crate::model::ParameterModel;
use crate::param::{ParamDescriptor, ParamId, Variant};
use crate::sequence::Sequence;
use crate::step::{StepMode, step_size};

/// Per-frame input from the windowing layer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameContext {
    /// Fine-step modifier (Shift) held this frame.
    pub fine_step: bool,
    /// Panel size in logical pixels.
    pub size: [f32; 2],
}

/// Where a control sits on the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placement {
    /// The sequence list, left edge.
    Selector,
    /// One of the three reorderable slots, 0 is leftmost.
    Chain(usize),
    /// Limiter switch.
    Limiter,
    /// Gain knob, only on the full panel.
    Gain,
    /// Mix knob, right edge.
    Mix,
}

/// Draw request for a knob.
#[derive(Debug, Clone, PartialEq)]
pub struct KnobRequest {
    /// Parameter the knob edits.
    pub descriptor: &'static ParamDescriptor,
    /// Current value.
    pub value: f32,
    /// Increment per drag unit this frame.
    pub step: f32,
    /// Formatted value for the tooltip/readout.
    pub text: String,
    /// Derived colors.
    pub colors: ControlColors,
    /// Slot on the panel.
    pub placement: Placement,
}

/// Draw request for the limiter switch.
#[derive(Debug, Clone, PartialEq)]
pub struct ToggleRequest {
    /// Parameter the switch edits.
    pub descriptor: &'static ParamDescriptor,
    /// Current state.
    pub on: bool,
    /// Derived colors.
    pub colors: ToggleColors,
    /// Slot on the panel.
    pub placement: Placement,
}

/// Draw request for the sequence list.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectorRequest {
    /// The Sequence parameter.
    pub descriptor: &'static ParamDescriptor,
    /// Highlighted row.
    pub selected: Sequence,
    /// Derived colors.
    pub colors: SelectorColors,
}

/// What the user did with one control during a frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Interaction {
    /// The control was grabbed this frame.
    pub activated: bool,
    /// A double-click landed on the control this frame.
    pub double_clicked: bool,
    /// New value chosen by the user, if any.
    pub value: Option<f32>,
    /// The control let go of the pointer this frame.
    pub released: bool,
}

/// The rendering collaborator.
///
/// Implementations draw the requested control and report the user's
/// interaction with it. They never talk to the engine themselves.
pub trait WidgetHost {
    /// Called before any control of a frame.
    fn begin_panel(&mut self, _frame: &FrameContext) {}

    /// Draw the sequence list.
    fn sequence_list(&mut self, request: &SelectorRequest) -> Interaction;

    /// Draw a knob.
    fn knob(&mut self, request: &KnobRequest) -> Interaction;

    /// Draw an on/off switch.
    fn toggle(&mut self, request: &ToggleRequest) -> Interaction;

    /// Called after the last control of a frame.
    fn end_panel(&mut self) {}
}

/// A user action, independent of any widget toolkit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    /// The pointer grabbed a control.
    Pressed(ParamId),
    /// The control produced a new value.
    Changed(ParamId, f32),
    /// Double-click on a control; resets it when an edit is in progress.
    DoubleClicked(ParamId),
    /// The pointer let go.
    Released,
}

/// Result of one [`Panel::render`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameSummary {
    /// Engine changes applied at the start of the frame.
    pub inbound: usize,
    /// Gestures handled after drawing.
    pub gestures: usize,
    /// `end_edit` notifications sent.
    pub end_edits: usize,
}

/// Editor panel state.
#[derive(Debug)]
pub struct Panel {
    model: ParameterModel,
    session: EditSession,
    inbound: Arc<InboundSync>,
}

impl Panel {
    /// Create a panel with its own inbound mailbox.
    pub fn new(variant: Variant, framing: ReleaseFraming) -> Self {
        Self::with_inbound(Arc::new(InboundSync::new(variant)), framing)
    }

    /// Create a panel around an existing mailbox, e.g. one with a repaint notifier.
    pub fn with_inbound(inbound: Arc<InboundSync>, framing: ReleaseFraming) -> Self {
        let variant = inbound.variant();
        Self {
            model: ParameterModel::new(variant),
            session: EditSession::new(variant, framing),
            inbound,
        }
    }

    /// Handle the engine uses to report changes.
    pub fn inbound(&self) -> Arc<InboundSync> {
        Arc::clone(&self.inbound)
    }

    /// Current parameter mirror.
    pub fn model(&self) -> &ParameterModel {
        &self.model
    }

    /// Current edit session.
    pub fn session(&self) -> &EditSession {
        &self.session
    }

    /// Layout of this panel.
    pub fn variant(&self) -> Variant {
        self.model.variant()
    }

    /// Pull pending engine changes into the model.
    pub fn sync(&mut self) -> usize {
        self.inbound.drain_into(&mut self.model)
    }

    /// Apply one gesture through the edit protocol.
    ///
    /// Returns the number of `end_edit` notifications sent, which is only
    /// non-zero for [`Gesture::Released`].
    pub fn handle(&mut self, gesture: Gesture, link: &dyn EngineLink) -> Result<usize, ParamError> {
        match gesture {
            Gesture::Pressed(id) => {
                if self.variant().contains(id) {
                    self.session.begin(id, link);
                } else {
                    return Err(self.unsupported(id));
                }
            }
            Gesture::Changed(id, value) => {
                let stored = self.model.set_local(id, value)?;
                self.session.set_value(id, stored, link);
            }
            Gesture::DoubleClicked(id) => {
                if !self.session.is_editing() || !id.descriptor().double_click_reset {
                    return Ok(0);
                }
                let value = self.model.reset_to_default(id)?;
                self.session.set_value(id, value, link);
            }
            Gesture::Released => return Ok(self.session.release(link)),
        }
        Ok(0)
    }

    fn unsupported(&self, id: ParamId) -> ParamError {
        let err = ParamError::Unsupported {
            id,
            variant: self.variant(),
        };
        crate::error::invalid_reference(&err);
        err
    }

    /// Draw one frame through `host` and forward the user's gestures to `link`.
    pub fn render(
        &mut self,
        frame: &FrameContext,
        host: &mut dyn WidgetHost,
        link: &dyn EngineLink,
    ) -> FrameSummary {
        let inbound = self.sync();
        let mode = StepMode::from_modifier(frame.fine_step);
        let colors = PanelColors::compute(&self.model);
        let mut reports: Vec<(ParamId, Interaction)> = Vec::with_capacity(ParamId::COUNT);

        host.begin_panel(frame);

        let sequence = self.model.sequence();
        let selector = SelectorRequest {
            descriptor: ParamId::Sequence.descriptor(),
            selected: sequence,
            colors: colors.selector,
        };
        reports.push((ParamId::Sequence, host.sequence_list(&selector)));

        for (slot, id) in sequence.order().into_iter().enumerate() {
            let request = self.knob_request(id, mode, &colors, Placement::Chain(slot));
            reports.push((id, host.knob(&request)));
        }

        let limiter = ToggleRequest {
            descriptor: ParamId::Limiter.descriptor(),
            on: self.model.limiter(),
            colors: colors.limiter,
            placement: Placement::Limiter,
        };
        reports.push((ParamId::Limiter, host.toggle(&limiter)));

        if self.variant().has_gain() {
            let request = self.knob_request(ParamId::Gain, mode, &colors, Placement::Gain);
            reports.push((ParamId::Gain, host.knob(&request)));
        }

        let request = self.knob_request(ParamId::Mix, mode, &colors, Placement::Mix);
        reports.push((ParamId::Mix, host.knob(&request)));

        host.end_panel();

        let mut summary = FrameSummary {
            inbound,
            ..FrameSummary::default()
        };
        let mut released = false;
        for (id, interaction) in reports {
            let gestures = [
                interaction.activated.then_some(Gesture::Pressed(id)),
                interaction.value.map(|v| Gesture::Changed(id, v)),
                interaction.double_clicked.then_some(Gesture::DoubleClicked(id)),
            ];
            for gesture in gestures.into_iter().flatten() {
                self.apply(gesture, link, &mut summary);
            }
            released |= interaction.released;
        }
        if released {
            self.apply(Gesture::Released, link, &mut summary);
        }
        summary
    }

    fn apply(&mut self, gesture: Gesture, link: &dyn EngineLink, summary: &mut FrameSummary) {
        summary.gestures += 1;
        match self.handle(gesture, link) {
            Ok(ends) => summary.end_edits += ends,
            Err(_err) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(?gesture, error = %_err, "gesture dropped");
            }
        }
    }

    fn knob_request(
        &self,
        id: ParamId,
        mode: StepMode,
        colors: &PanelColors,
        placement: Placement,
    ) -> KnobRequest {
        let descriptor = id.descriptor();
        let value = self.model.read(id);
        KnobRequest {
            descriptor,
            value,
            step: step_size(id, mode).unwrap_or(0.0),
            text: descriptor.format_value(value),
            colors: colors.knob(id).unwrap_or_default(),
            placement,
        }
    }
}
