//! Parameter identities, wire indices and descriptors.
//!
//! The panel controls a fixed, closed set of parameters. Each one is named
//! by a [`ParamId`] inside the editor and by a [`ParamIndex`] on the wire to
//! the processing engine. The mapping between the two depends on the
//! [`Variant`]: the compact build drops the Gain control, which shifts the
//! wire indices of every parameter after it.
//!
//! # Parameter table
//!
//! | Param    | Kind       | Range        | Default | Display    |
//! |----------|------------|--------------|---------|------------|
//! | Crusher  | Integer    | 2 – 512      | 512     | `"512"`    |
//! | Folder   | Continuous | 1.0 – 13.37  | 1.0     | `"1.00"`   |
//! | Gain     | Continuous | -20.0 – 0.0  | 0.0     | `"0.00dB"` |
//! | Limiter  | Toggle     | off / on     | on      | `"On"`     |
//! | Mix      | Continuous | 0.0 – 100.0  | 50.0    | `"50.0%"`  |
//! | Smoother | Continuous | 1.0 – 13.37  | 1.0     | `"1.00"`   |
//! | Sequence | Selector   | 0 – 5        | 0       | `"C~F~S"`  |

use crate::error::ParamError;
use crate::sequence::Sequence;
use core::fmt;

/// Identity of one panel parameter.
///
/// Discriminants follow the full (Gain-bearing) wire layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ParamId {
    /// Bit crusher resolution, in quantization steps.
    Crusher,
    /// Wave folder amount.
    Folder,
    /// Output gain in dB.
    Gain,
    /// Output limiter on/off.
    Limiter,
    /// Dry/wet mix in percent.
    Mix,
    /// Slew smoother amount.
    Smoother,
    /// Processing order of crusher, folder and smoother.
    Sequence,
}

impl ParamId {
    /// Number of distinct parameter identities.
    pub const COUNT: usize = 7;

    /// Every parameter, in full wire order.
    pub const ALL: [ParamId; Self::COUNT] = [
        ParamId::Crusher,
        ParamId::Folder,
        ParamId::Gain,
        ParamId::Limiter,
        ParamId::Mix,
        ParamId::Smoother,
        ParamId::Sequence,
    ];

    /// Dense storage slot, independent of the variant.
    #[inline]
    pub(crate) const fn slot(self) -> usize {
        self as usize
    }

    /// Static metadata for this parameter.
    #[inline]
    pub fn descriptor(self) -> &'static ParamDescriptor {
        &DESCRIPTORS[self.slot()]
    }

    /// Whether the control's position is chosen by the [`Sequence`] parameter.
    pub const fn is_reorderable(self) -> bool {
        matches!(self, ParamId::Crusher | ParamId::Folder | ParamId::Smoother)
    }
}

impl fmt::Display for ParamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.descriptor().name)
    }
}

/// Wire index of a parameter, as exchanged with the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct ParamIndex(pub u32);

impl fmt::Display for ParamIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ParamIndex {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

const WITH_GAIN: [ParamId; 7] = ParamId::ALL;

const WITHOUT_GAIN: [ParamId; 6] = [
    ParamId::Crusher,
    ParamId::Folder,
    ParamId::Limiter,
    ParamId::Mix,
    ParamId::Smoother,
    ParamId::Sequence,
];

/// Which build of the panel is running.
///
/// Both builds share one core; the compact one simply lacks the Gain
/// capability, so ambient colors fall back to a constant intensity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Variant {
    /// Full panel with the output Gain knob.
    #[default]
    WithGain,
    /// Compact panel without Gain.
    WithoutGain,
}

impl Variant {
    /// Parameters present in this variant, in wire order.
    pub const fn params(self) -> &'static [ParamId] {
        match self {
            Variant::WithGain => &WITH_GAIN,
            Variant::WithoutGain => &WITHOUT_GAIN,
        }
    }

    /// Whether the Gain control exists.
    pub const fn has_gain(self) -> bool {
        matches!(self, Variant::WithGain)
    }

    /// Number of parameters on the wire.
    pub const fn param_count(self) -> usize {
        self.params().len()
    }

    /// Whether `id` belongs to this variant.
    pub fn contains(self, id: ParamId) -> bool {
        id != ParamId::Gain || self.has_gain()
    }

    /// Map a wire index to its parameter.
    pub fn resolve(self, index: ParamIndex) -> Result<ParamId, ParamError> {
        self.params()
            .get(index.0 as usize)
            .copied()
            .ok_or(ParamError::UnknownIndex {
                index,
                variant: self,
            })
    }

    /// Wire index of `id`, or `None` when the variant lacks it.
    pub fn index_of(self, id: ParamId) -> Option<ParamIndex> {
        self.params()
            .iter()
            .position(|&p| p == id)
            .map(|i| ParamIndex(i as u32))
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::WithGain => f.write_str("with-gain"),
            Variant::WithoutGain => f.write_str("without-gain"),
        }
    }
}

/// Semantic type of a parameter value.
///
/// Values always travel as `f32`; the kind decides how raw values are
/// coerced before they reach the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamKind {
    /// Whole numbers within the range.
    Integer,
    /// Any value within the range.
    Continuous,
    /// Off (`0.0`) or on (`1.0`); any non-zero raw value is on.
    Toggle,
    /// Index into a fixed list of choices.
    Selector,
}

/// Display unit for continuous values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamUnit {
    /// Decibels, shown as `"-3.50dB"`.
    Decibels,
    /// Percent of 0–100, shown as `"50.0%"`.
    Percent,
    /// Dimensionless.
    None,
}

/// Knob travel curve between plain value and knob position.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ParamScale {
    /// Equal resolution across the range.
    #[default]
    Linear,
    /// More resolution at low values. Requires `min > 0`.
    Logarithmic,
}

/// Static metadata for one parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamDescriptor {
    /// Parameter this describes.
    pub id: ParamId,
    /// Full name (`"Crusher"`).
    pub name: &'static str,
    /// Knob caption (`"Crshr"`).
    pub label: &'static str,
    /// Semantic type.
    pub kind: ParamKind,
    /// Display unit.
    pub unit: ParamUnit,
    /// Lowest valid value.
    pub min: f32,
    /// Highest valid value.
    pub max: f32,
    /// Value restored by a double-click reset.
    pub default: f32,
    /// Knob travel curve.
    pub scale: ParamScale,
    /// Number of tick marks drawn around the knob (`0` for non-knobs).
    pub ticks: u8,
    /// Whether a double-click mid-gesture snaps back to `default`.
    pub double_click_reset: bool,
}

static DESCRIPTORS: [ParamDescriptor; ParamId::COUNT] = [
    ParamDescriptor {
        id: ParamId::Crusher,
        name: "Crusher",
        label: "Crshr",
        kind: ParamKind::Integer,
        unit: ParamUnit::None,
        min: 2.0,
        max: 512.0,
        default: 512.0,
        scale: ParamScale::Logarithmic,
        ticks: 9,
        double_click_reset: true,
    },
    ParamDescriptor {
        id: ParamId::Folder,
        name: "Folder",
        label: "Fldr",
        kind: ParamKind::Continuous,
        unit: ParamUnit::None,
        min: 1.0,
        max: 13.37,
        default: 1.0,
        scale: ParamScale::Linear,
        ticks: 11,
        double_click_reset: true,
    },
    ParamDescriptor {
        id: ParamId::Gain,
        name: "Gain",
        label: "Gain",
        kind: ParamKind::Continuous,
        unit: ParamUnit::Decibels,
        min: -20.0,
        max: 0.0,
        default: 0.0,
        scale: ParamScale::Linear,
        ticks: 5,
        double_click_reset: true,
    },
    ParamDescriptor {
        id: ParamId::Limiter,
        name: "Limiter",
        label: "Lmtr",
        kind: ParamKind::Toggle,
        unit: ParamUnit::None,
        min: 0.0,
        max: 1.0,
        default: 1.0,
        scale: ParamScale::Linear,
        ticks: 0,
        double_click_reset: false,
    },
    ParamDescriptor {
        id: ParamId::Mix,
        name: "Mix",
        label: "Mix",
        kind: ParamKind::Continuous,
        unit: ParamUnit::Percent,
        min: 0.0,
        max: 100.0,
        default: 50.0,
        scale: ParamScale::Linear,
        ticks: 11,
        double_click_reset: true,
    },
    ParamDescriptor {
        id: ParamId::Smoother,
        name: "Smoother",
        label: "Smthr",
        kind: ParamKind::Continuous,
        unit: ParamUnit::None,
        min: 1.0,
        max: 13.37,
        default: 1.0,
        scale: ParamScale::Linear,
        ticks: 11,
        double_click_reset: true,
    },
    ParamDescriptor {
        id: ParamId::Sequence,
        name: "Sequence",
        label: "Sqnc",
        kind: ParamKind::Selector,
        unit: ParamUnit::None,
        min: 0.0,
        max: 5.0,
        default: 0.0,
        scale: ParamScale::Linear,
        ticks: 0,
        double_click_reset: false,
    },
];

impl ParamDescriptor {
    /// Coerce a value to this parameter's type and range.
    ///
    /// Integers and selectors round to the nearest whole number, toggles
    /// collapse to `0.0`/`1.0`, and everything is clamped to `[min, max]`.
    /// Infinities clamp to the nearest bound. NaN passes through unchanged;
    /// use [`sanitize`](Self::sanitize) to reject it.
    ///
    /// ```rust
    /// use manglr_core::ParamId;
    ///
    /// let crusher = ParamId::Crusher.descriptor();
    /// assert_eq!(crusher.clamp(1000.0), 512.0);
    /// assert_eq!(crusher.clamp(63.6), 64.0);
    /// assert_eq!(ParamId::Limiter.descriptor().clamp(0.3), 1.0);
    /// ```
    #[inline]
    pub fn clamp(&self, value: f32) -> f32 {
        let coerced = match self.kind {
            ParamKind::Integer | ParamKind::Selector => value.round(),
            ParamKind::Toggle => {
                if value == 0.0 {
                    0.0
                } else {
                    1.0
                }
            }
            ParamKind::Continuous => value,
        };
        coerced.clamp(self.min, self.max)
    }

    /// Like [`clamp`](Self::clamp), but rejects NaN.
    pub fn sanitize(&self, value: f32) -> Result<f32, ParamError> {
        if value.is_nan() {
            return Err(ParamError::NotANumber { id: self.id });
        }
        Ok(self.clamp(value))
    }

    /// Map a plain value to knob position in \[0, 1\].
    pub fn normalize(&self, value: f32) -> f32 {
        let range = self.max - self.min;
        if range == 0.0 {
            return 0.0;
        }
        let normalized = match self.scale {
            ParamScale::Linear => (value - self.min) / range,
            ParamScale::Logarithmic => {
                if self.min <= 0.0 || value <= 0.0 {
                    return 0.0;
                }
                (value / self.min).ln() / (self.max / self.min).ln()
            }
        };
        normalized.clamp(0.0, 1.0)
    }

    /// Inverse of [`normalize`](Self::normalize).
    pub fn denormalize(&self, normalized: f32) -> f32 {
        let n = normalized.clamp(0.0, 1.0);
        match self.scale {
            ParamScale::Linear => self.min + n * (self.max - self.min),
            ParamScale::Logarithmic => {
                if self.min <= 0.0 {
                    return self.min;
                }
                self.min * (self.max / self.min).powf(n)
            }
        }
    }

    /// Text shown in the value tooltip.
    pub fn format_value(&self, value: f32) -> String {
        match self.kind {
            ParamKind::Integer => format!("{}", value.round() as i32),
            ParamKind::Toggle => {
                if value == 0.0 {
                    "Off".to_owned()
                } else {
                    "On".to_owned()
                }
            }
            ParamKind::Selector => Sequence::from_value(value).label().to_owned(),
            ParamKind::Continuous => match self.unit {
                ParamUnit::Decibels => format!("{value:.2}dB"),
                ParamUnit::Percent => format!("{value:.1}%"),
                ParamUnit::None => format!("{value:.2}"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptors_are_indexed_by_id() {
        for id in ParamId::ALL {
            assert_eq!(id.descriptor().id, id);
        }
    }

    #[test]
    fn defaults_lie_within_range() {
        for id in ParamId::ALL {
            let d = id.descriptor();
            assert!(d.min <= d.default && d.default <= d.max, "{id}");
            assert_eq!(d.clamp(d.default), d.default, "{id}");
        }
    }

    #[test]
    fn full_variant_wire_indices() {
        let v = Variant::WithGain;
        assert_eq!(v.param_count(), 7);
        assert_eq!(v.index_of(ParamId::Crusher), Some(ParamIndex(0)));
        assert_eq!(v.index_of(ParamId::Gain), Some(ParamIndex(2)));
        assert_eq!(v.index_of(ParamId::Sequence), Some(ParamIndex(6)));
        assert_eq!(v.resolve(ParamIndex(3)), Ok(ParamId::Limiter));
    }

    #[test]
    fn compact_variant_shifts_indices_after_gain() {
        let v = Variant::WithoutGain;
        assert_eq!(v.param_count(), 6);
        assert!(!v.contains(ParamId::Gain));
        assert_eq!(v.index_of(ParamId::Gain), None);
        assert_eq!(v.resolve(ParamIndex(2)), Ok(ParamId::Limiter));
        assert_eq!(v.resolve(ParamIndex(5)), Ok(ParamId::Sequence));
        assert_eq!(
            v.resolve(ParamIndex(6)),
            Err(ParamError::UnknownIndex {
                index: ParamIndex(6),
                variant: v
            })
        );
    }

    #[test]
    fn resolve_and_index_of_agree() {
        for v in [Variant::WithGain, Variant::WithoutGain] {
            for &id in v.params() {
                let index = v.index_of(id).unwrap();
                assert_eq!(v.resolve(index), Ok(id));
            }
        }
    }

    #[test]
    fn clamp_coerces_by_kind() {
        assert_eq!(ParamId::Crusher.descriptor().clamp(-5.0), 2.0);
        assert_eq!(ParamId::Crusher.descriptor().clamp(f32::INFINITY), 512.0);
        assert_eq!(ParamId::Folder.descriptor().clamp(20.0), 13.37);
        assert_eq!(ParamId::Gain.descriptor().clamp(3.0), 0.0);
        assert_eq!(ParamId::Limiter.descriptor().clamp(0.0), 0.0);
        assert_eq!(ParamId::Limiter.descriptor().clamp(-1.0), 1.0);
        assert_eq!(ParamId::Sequence.descriptor().clamp(7.0), 5.0);
        assert_eq!(ParamId::Sequence.descriptor().clamp(2.4), 2.0);
    }

    #[test]
    fn sanitize_rejects_nan() {
        assert_eq!(
            ParamId::Mix.descriptor().sanitize(f32::NAN),
            Err(ParamError::NotANumber { id: ParamId::Mix })
        );
        assert_eq!(ParamId::Mix.descriptor().sanitize(150.0), Ok(100.0));
    }

    #[test]
    fn crusher_knob_is_logarithmic() {
        let d = ParamId::Crusher.descriptor();
        assert_eq!(d.normalize(2.0), 0.0);
        assert!((d.normalize(512.0) - 1.0).abs() < 1e-6);
        // Geometric mean sits at the visual midpoint.
        assert!((d.normalize(32.0) - 0.5).abs() < 1e-4);
        assert!((d.denormalize(0.5) - 32.0).abs() < 1e-2);
    }

    #[test]
    fn linear_knob_midpoint() {
        let d = ParamId::Mix.descriptor();
        assert_eq!(d.normalize(50.0), 0.5);
        assert_eq!(d.denormalize(0.25), 25.0);
    }

    #[test]
    fn format_matches_panel_style() {
        assert_eq!(ParamId::Crusher.descriptor().format_value(64.0), "64");
        assert_eq!(ParamId::Folder.descriptor().format_value(2.5), "2.50");
        assert_eq!(ParamId::Gain.descriptor().format_value(-3.5), "-3.50dB");
        assert_eq!(ParamId::Mix.descriptor().format_value(50.0), "50.0%");
        assert_eq!(ParamId::Limiter.descriptor().format_value(1.0), "On");
        assert_eq!(ParamId::Sequence.descriptor().format_value(3.0), "F~S~C");
    }
}
