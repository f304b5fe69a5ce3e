//! Core of the WSTD MANGLR editor panel.
//!
//! This crate holds everything about the panel that does not depend on a
//! widget toolkit: the parameter set and its mirror, the color mapping,
//! begin/set/end edit framing, Sequence-driven control ordering, fine/coarse
//! stepping and the thread-safe inbound path from the engine. A rendering
//! collaborator implements [`WidgetHost`]; the engine implements
//! [`EngineLink`] and calls [`InboundSync::parameter_changed`].
//!
//! ```text
//! engine ──► InboundSync ──► ParameterModel ──► PanelColors / Sequence
//!   ▲                                                  │
//!   │                                                  ▼
//!   └── EngineLink ◄── EditSession ◄── Gesture ◄── WidgetHost
//! ```
//!
//! # Modules
//!
//! - [`param`] — Parameter identities, wire indices and descriptors
//! - [`model`] — The editor's mirror of engine values
//! - [`color`] — Value-driven intensity and color derivation
//! - [`edit`] — Edit transaction framing toward the engine
//! - [`sequence`] — The six orderings of the reorderable controls
//! - [`step`] — Fine/coarse increment tables
//! - [`inbound`] — Lock-free engine-to-editor hand-off
//! - [`panel`] — The per-frame render entry point
//!
//! # Example
//!
//! ```rust
//! use manglr_core::{Gesture, ParamId, ParamIndex, Panel, ReleaseFraming, Variant, EngineLink};
//!
//! struct Quiet;
//! impl EngineLink for Quiet {
//!     fn begin_edit(&self, _: ParamIndex) {}
//!     fn set_value(&self, _: ParamIndex, _: f32) {}
//!     fn end_edit(&self, _: ParamIndex) {}
//! }
//!
//! let mut panel = Panel::new(Variant::WithGain, ReleaseFraming::default());
//! panel.inbound().parameter_changed(6, 3.0);
//! panel.sync();
//! assert_eq!(panel.model().sequence().order(), [ParamId::Folder, ParamId::Smoother, ParamId::Crusher]);
//!
//! panel.handle(Gesture::Changed(ParamId::Mix, 75.0), &Quiet).unwrap();
//! assert_eq!(panel.handle(Gesture::Released, &Quiet), Ok(7));
//! ```

pub mod color;
pub mod edit;
pub mod error;
pub mod inbound;
pub mod model;
pub mod panel;
pub mod param;
pub mod sequence;
pub mod step;

pub use color::{ControlColors, PanelColors, Rgba, SelectorColors, ToggleColors};
pub use edit::{EditSession, EditState, EngineLink, ReleaseFraming};
pub use error::ParamError;
pub use inbound::InboundSync;
pub use model::ParameterModel;
pub use panel::{
    FrameContext, FrameSummary, Gesture, Interaction, KnobRequest, Panel, Placement,
    SelectorRequest, ToggleRequest, WidgetHost,
};
pub use param::{ParamDescriptor, ParamId, ParamIndex, ParamKind, ParamScale, ParamUnit, Variant};
pub use sequence::Sequence;
pub use step::{StepMode, apply_steps, step_size};
