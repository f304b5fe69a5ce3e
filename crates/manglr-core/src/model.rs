//! The editor's mirror of the engine's parameter values.
//!
//! [`ParameterModel`] is owned by the panel and only touched from the render
//! pass. Values arrive from two directions:
//!
//! ```text
//! engine ──► apply_inbound(id, raw) ──► values ──► render
//!                                         ▲
//! user gesture ──► set_local(id, v) ──────┘ ──► edit protocol ──► engine
//! ```
//!
//! The inbound path never emits edit transactions; the engine is the source
//! of truth and an inbound value overwrites any local edit not yet echoed.

use crate::error::{ParamError, invalid_reference};
use crate::param::{ParamId, Variant};
use crate::sequence::Sequence;

/// Current value of every parameter in one panel variant.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterModel {
    variant: Variant,
    values: [f32; ParamId::COUNT],
    dirty: bool,
}

impl ParameterModel {
    /// Create a model with every parameter at its default.
    pub fn new(variant: Variant) -> Self {
        Self {
            variant,
            values: ParamId::ALL.map(|id| id.descriptor().default),
            dirty: true,
        }
    }

    /// Layout this model mirrors.
    pub fn variant(&self) -> Variant {
        self.variant
    }

    fn check(&self, id: ParamId) -> Result<(), ParamError> {
        if self.variant.contains(id) {
            Ok(())
        } else {
            Err(ParamError::Unsupported {
                id,
                variant: self.variant,
            })
        }
    }

    /// Apply an engine-originated change.
    ///
    /// The raw value is coerced to the parameter's type and range before it
    /// is stored, and the panel is marked for redraw. NaN is rejected and
    /// leaves the previous value in place.
    pub fn apply_inbound(&mut self, id: ParamId, raw: f32) -> Result<(), ParamError> {
        if let Err(err) = self.check(id) {
            invalid_reference(&err);
            return Err(err);
        }
        let value = id.descriptor().sanitize(raw)?;
        self.values[id.slot()] = value;
        self.dirty = true;
        Ok(())
    }

    /// Current mirrored value.
    ///
    /// Reading a parameter the variant lacks yields its default.
    pub fn read(&self, id: ParamId) -> f32 {
        if let Err(err) = self.check(id) {
            invalid_reference(&err);
            return id.descriptor().default;
        }
        self.values[id.slot()]
    }

    /// Store a UI-originated value, returning what was actually stored.
    pub fn set_local(&mut self, id: ParamId, value: f32) -> Result<f32, ParamError> {
        if let Err(err) = self.check(id) {
            invalid_reference(&err);
            return Err(err);
        }
        let value = id.descriptor().sanitize(value)?;
        self.values[id.slot()] = value;
        Ok(value)
    }

    /// Restore the default and return it.
    ///
    /// The caller forwards the value through the edit protocol like any
    /// other edit.
    pub fn reset_to_default(&mut self, id: ParamId) -> Result<f32, ParamError> {
        self.set_local(id, id.descriptor().default)
    }

    /// Whether an inbound change has arrived since the last [`take_dirty`](Self::take_dirty).
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Clear and return the redraw flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Crusher step count.
    pub fn crusher(&self) -> i32 {
        self.read(ParamId::Crusher) as i32
    }

    /// Folder amount.
    pub fn folder(&self) -> f32 {
        self.read(ParamId::Folder)
    }

    /// Gain in dB, or `None` on the compact panel.
    pub fn gain(&self) -> Option<f32> {
        self.variant
            .has_gain()
            .then(|| self.values[ParamId::Gain.slot()])
    }

    /// Limiter state.
    pub fn limiter(&self) -> bool {
        self.read(ParamId::Limiter) != 0.0
    }

    /// Mix in percent.
    pub fn mix(&self) -> f32 {
        self.read(ParamId::Mix)
    }

    /// Smoother amount.
    pub fn smoother(&self) -> f32 {
        self.read(ParamId::Smoother)
    }

    /// Current control ordering.
    pub fn sequence(&self) -> Sequence {
        Sequence::from_value(self.read(ParamId::Sequence))
    }
}

impl Default for ParameterModel {
    fn default() -> Self {
        Self::new(Variant::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_defaults() {
        let model = ParameterModel::new(Variant::WithGain);
        assert_eq!(model.crusher(), 512);
        assert_eq!(model.folder(), 1.0);
        assert_eq!(model.gain(), Some(0.0));
        assert!(model.limiter());
        assert_eq!(model.mix(), 50.0);
        assert_eq!(model.smoother(), 1.0);
        assert_eq!(model.sequence(), Sequence::new(0));
    }

    #[test]
    fn inbound_clamps_and_marks_dirty() {
        let mut model = ParameterModel::new(Variant::WithGain);
        assert!(model.take_dirty());
        assert!(!model.is_dirty());

        model.apply_inbound(ParamId::Crusher, 4096.0).unwrap();
        assert_eq!(model.read(ParamId::Crusher), 512.0);
        assert!(model.take_dirty());

        model.apply_inbound(ParamId::Gain, -40.0).unwrap();
        assert_eq!(model.gain(), Some(-20.0));

        model.apply_inbound(ParamId::Sequence, 9.0).unwrap();
        assert_eq!(model.sequence().index(), 5);

        model.apply_inbound(ParamId::Limiter, 0.0).unwrap();
        assert!(!model.limiter());
    }

    #[test]
    fn inbound_nan_keeps_previous_value() {
        let mut model = ParameterModel::new(Variant::WithGain);
        model.apply_inbound(ParamId::Mix, 75.0).unwrap();
        model.take_dirty();

        let err = model.apply_inbound(ParamId::Mix, f32::NAN).unwrap_err();
        assert_eq!(err, ParamError::NotANumber { id: ParamId::Mix });
        assert_eq!(model.mix(), 75.0);
        assert!(!model.is_dirty());
    }

    #[test]
    fn inbound_overwrites_local_edit() {
        let mut model = ParameterModel::new(Variant::WithGain);
        model.set_local(ParamId::Folder, 5.0).unwrap();
        model.apply_inbound(ParamId::Folder, 3.0).unwrap();
        assert_eq!(model.folder(), 3.0);
    }

    #[test]
    fn reset_returns_default() {
        let mut model = ParameterModel::new(Variant::WithGain);
        model.set_local(ParamId::Crusher, 16.0).unwrap();
        assert_eq!(model.reset_to_default(ParamId::Crusher), Ok(512.0));
        assert_eq!(model.crusher(), 512);
    }

    #[test]
    fn compact_variant_has_no_gain() {
        let model = ParameterModel::new(Variant::WithoutGain);
        assert_eq!(model.gain(), None);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "not part of the without-gain layout")]
    fn gain_on_compact_variant_is_a_bug() {
        let mut model = ParameterModel::new(Variant::WithoutGain);
        let _ = model.apply_inbound(ParamId::Gain, -6.0);
    }
}
