//! Value-driven control colors.
//!
//! Every knob on the panel glows brighter or dimmer depending on how hard
//! the effect behind it is being pushed. These functions turn parameter
//! values into an *intensity* scalar and apply it to base palette colors.
//! They are pure: values come in as arguments and nothing here reads the
//! [`ParameterModel`] except [`PanelColors::compute`], which only gathers
//! arguments for the others.
//!
//! # Intensity curves
//!
//! | Curve              | Used by          | Formula                         |
//! |--------------------|------------------|---------------------------------|
//! | `InverseQuadratic` | Crusher          | `((514 - v)² / 2500 - 20) / 5`  |
//! | `Linear`           | Folder, Smoother | `(7.5 v - 20) / 5`              |
//! | `Ambient`          | Gain             | `(20 + 4 v) / 5`                |
//!
//! The Crusher curve has its vertex at 514, outside the 2–512 range, so it
//! decreases monotonically from about 16.97 at 2 to about -4.0 at 512:
//! fewer crusher steps means a harsher effect and a brighter knob.

use crate::model::ParameterModel;
use crate::param::ParamId;

/// Ambient intensity used when the panel has no Gain control.
///
/// Matches what the Gain curve yields at its 0 dB default.
pub const AMBIENT_FALLBACK: f32 = 4.0;

/// Value change per unit of intensity (HSV value channel).
const VALUE_PER_INTENSITY: f32 = 0.05;

/// Saturation change per unit of intensity.
const SATURATION_PER_INTENSITY: f32 = 0.02;

/// Linear RGBA color with channels in \[0, 1\].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgba {
    /// Red.
    pub r: f32,
    /// Green.
    pub g: f32,
    /// Blue.
    pub b: f32,
    /// Alpha.
    pub a: f32,
}

impl Rgba {
    /// Opaque color from 8-bit channels.
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: 1.0,
        }
    }

    /// Channels as 8-bit values, rounded.
    pub fn to_rgba8(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a].map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8)
    }

    /// Straight linear interpolation; `t` is clamped to \[0, 1\].
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: f32, b: f32| a + (b - a) * t;
        Self {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: mix(self.a, other.a),
        }
    }

    /// Hue (0–1), saturation and value.
    fn to_hsv(self) -> [f32; 3] {
        let max = self.r.max(self.g).max(self.b);
        let min = self.r.min(self.g).min(self.b);
        let delta = max - min;
        let s = if max > 0.0 { delta / max } else { 0.0 };
        if delta <= 0.0 {
            return [0.0, s, max];
        }
        let h = if max == self.r {
            ((self.g - self.b) / delta).rem_euclid(6.0)
        } else if max == self.g {
            (self.b - self.r) / delta + 2.0
        } else {
            (self.r - self.g) / delta + 4.0
        };
        [h / 6.0, s, max]
    }

    fn from_hsv([h, s, v]: [f32; 3], a: f32) -> Self {
        let h6 = (h.rem_euclid(1.0)) * 6.0;
        let c = v * s;
        let x = c * (1.0 - ((h6 % 2.0) - 1.0).abs());
        let m = v - c;
        let (r, g, b) = match h6 as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        Self {
            r: r + m,
            g: g + m,
            b: b + m,
            a,
        }
    }
}

/// Base colors of the panel.
pub mod palette {
    use super::Rgba;

    /// Panel background.
    pub const WINDOW_BG: Rgba = Rgba::from_rgb8(0x1c, 0x1d, 0x21);
    /// Active title bar.
    pub const TITLE_BG: Rgba = Rgba::from_rgb8(0x2a, 0x2d, 0x33);
    /// Caption text.
    pub const TEXT: Rgba = Rgba::from_rgb8(0xe6, 0xe6, 0xe6);

    /// Dark green.
    pub const GREEN_DR: Rgba = Rgba::from_rgb8(0x2e, 0x6b, 0x3a);
    /// Green.
    pub const GREEN: Rgba = Rgba::from_rgb8(0x3f, 0x9e, 0x4f);
    /// Bright green.
    pub const GREEN_BR: Rgba = Rgba::from_rgb8(0x5c, 0xc7, 0x6b);
    /// Red.
    pub const RED: Rgba = Rgba::from_rgb8(0xb3, 0x3b, 0x3b);
    /// Bright red.
    pub const RED_BR: Rgba = Rgba::from_rgb8(0xd9, 0x57, 0x57);
    /// Dark blue.
    pub const BLUE_DR: Rgba = Rgba::from_rgb8(0x24, 0x4a, 0x75);
    /// Blue.
    pub const BLUE: Rgba = Rgba::from_rgb8(0x35, 0x6b, 0xa8);
    /// Bright blue.
    pub const BLUE_BR: Rgba = Rgba::from_rgb8(0x52, 0x8f, 0xd4);
    /// Yellow.
    pub const YELLOW: Rgba = Rgba::from_rgb8(0xc9, 0xa8, 0x2c);
    /// Bright yellow.
    pub const YELLOW_BR: Rgba = Rgba::from_rgb8(0xe8, 0xc8, 0x4a);
    /// Grey.
    pub const GREY: Rgba = Rgba::from_rgb8(0x55, 0x58, 0x5e);
    /// Bright grey.
    pub const GREY_BR: Rgba = Rgba::from_rgb8(0x74, 0x78, 0x80);
    /// Dimmed white.
    pub const WHITE_DR: Rgba = Rgba::from_rgb8(0xc8, 0xc8, 0xc8);
}

/// Mapping from a parameter value to intensity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntensityCurve {
    /// Crusher: `((514 - v)² / 2500 - 20) / 5`.
    InverseQuadratic,
    /// Folder and Smoother: `(7.5 v - 20) / 5`.
    Linear,
    /// Gain: `(20 + 4 v) / 5`.
    Ambient,
}

/// Intensity for `value` under `curve`.
///
/// ```rust
/// use manglr_core::color::{IntensityCurve, intensity};
///
/// assert!(intensity(2.0, IntensityCurve::InverseQuadratic)
///     > intensity(512.0, IntensityCurve::InverseQuadratic));
/// assert_eq!(intensity(0.0, IntensityCurve::Ambient), 4.0);
/// ```
pub fn intensity(value: f32, curve: IntensityCurve) -> f32 {
    match curve {
        IntensityCurve::InverseQuadratic => ((514.0 - value).powi(2) / 2500.0 - 20.0) / 5.0,
        IntensityCurve::Linear => (value * 7.5 - 20.0) / 5.0,
        IntensityCurve::Ambient => (20.0 + 4.0 * value) / 5.0,
    }
}

/// Panel-wide intensity, driven by Gain when present.
pub fn ambient_intensity(gain: Option<f32>) -> f32 {
    gain.map_or(AMBIENT_FALLBACK, |g| intensity(g, IntensityCurve::Ambient))
}

/// Brighten (positive) or dim (negative) `base` by `intensity`.
///
/// Works in HSV: value scales up and saturation down as intensity grows,
/// both clamped to \[0, 1\]. Hue and alpha are preserved and an intensity of
/// zero returns the base color. The result is continuous in `intensity`.
pub fn brighten(base: Rgba, intensity: f32) -> Rgba {
    let [h, s, v] = base.to_hsv();
    let v = (v * (1.0 + intensity * VALUE_PER_INTENSITY)).clamp(0.0, 1.0);
    let s = (s * (1.0 - intensity * SATURATION_PER_INTENSITY)).clamp(0.0, 1.0);
    Rgba::from_hsv([h, s, v], base.a)
}

/// Brighten both endpoints by `intensity`, then mix them.
///
/// `mix_percent` runs 0–100 and selects how far toward `b` the result sits.
pub fn blend(a: Rgba, b: Rgba, intensity: f32, mix_percent: f32) -> Rgba {
    brighten(a, intensity).lerp(brighten(b, intensity), mix_percent / 100.0)
}

/// Colors of a knob while pressed and while hovered.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ControlColors {
    /// Fill while the knob is being dragged.
    pub active: Rgba,
    /// Fill while the pointer is over the knob.
    pub hovered: Rgba,
}

impl ControlColors {
    fn brightened(active: Rgba, hovered: Rgba, intensity: f32) -> Self {
        Self {
            active: brighten(active, intensity),
            hovered: brighten(hovered, intensity),
        }
    }
}

/// Colors of the limiter switch.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ToggleColors {
    /// The sliding knob.
    pub knob: Rgba,
    /// Track while off.
    pub off: Rgba,
    /// Track while off and hovered.
    pub off_hovered: Rgba,
    /// Track while on.
    pub on: Rgba,
    /// Track while on and hovered.
    pub on_hovered: Rgba,
}

/// Colors of the sequence list.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SelectorColors {
    /// List background.
    pub frame: Rgba,
    /// Selected row.
    pub selected: Rgba,
    /// Hovered row.
    pub hovered: Rgba,
    /// Row being clicked.
    pub active: Rgba,
}

/// Every derived color for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PanelColors {
    /// Crusher knob.
    pub crusher: ControlColors,
    /// Folder knob.
    pub folder: ControlColors,
    /// Smoother knob.
    pub smoother: ControlColors,
    /// Gain knob (unused on the compact panel).
    pub gain: ControlColors,
    /// Mix knob.
    pub mix: ControlColors,
    /// Limiter switch.
    pub limiter: ToggleColors,
    /// Sequence list.
    pub selector: SelectorColors,
}

impl PanelColors {
    /// Derive all colors from the current parameter values.
    pub fn compute(model: &ParameterModel) -> Self {
        use palette::*;

        let ambient = ambient_intensity(model.gain());
        let crusher = intensity(model.crusher() as f32, IntensityCurve::InverseQuadratic);
        let folder = intensity(model.folder(), IntensityCurve::Linear);
        let smoother = intensity(model.smoother(), IntensityCurve::Linear);
        let mix = model.mix();

        Self {
            crusher: ControlColors::brightened(GREEN, GREEN_BR, crusher),
            folder: ControlColors::brightened(RED, RED_BR, folder),
            smoother: ControlColors::brightened(BLUE, BLUE_BR, smoother),
            gain: ControlColors::brightened(GREEN, GREEN_BR, ambient),
            mix: ControlColors {
                active: blend(GREEN, YELLOW, ambient, mix),
                hovered: blend(GREEN_BR, YELLOW_BR, ambient, mix),
            },
            limiter: ToggleColors {
                knob: brighten(WHITE_DR, ambient),
                off: brighten(GREY, ambient),
                off_hovered: brighten(GREY_BR, ambient),
                on: brighten(GREEN_DR, ambient),
                on_hovered: brighten(GREEN, ambient),
            },
            selector: SelectorColors {
                frame: blend(WINDOW_BG, BLUE_DR, 0.5, 50.0),
                selected: BLUE_DR,
                hovered: BLUE,
                active: BLUE_BR,
            },
        }
    }

    /// Knob colors for `id`, if it is drawn as a knob.
    pub fn knob(&self, id: ParamId) -> Option<ControlColors> {
        match id {
            ParamId::Crusher => Some(self.crusher),
            ParamId::Folder => Some(self.folder),
            ParamId::Smoother => Some(self.smoother),
            ParamId::Gain => Some(self.gain),
            ParamId::Mix => Some(self.mix),
            ParamId::Limiter | ParamId::Sequence => None,
        }
    }
}
