//! Modifier-sensitive increment sizes for numeric controls.
//!
//! The host's fine-step modifier (Shift) is sampled once per frame and
//! selects between two fixed step tables:
//!
//! | Control          | Coarse | Fine |
//! |------------------|--------|------|
//! | Crusher          | 8      | 1    |
//! | Folder, Smoother | 0.1    | 0.01 |
//! | Mix              | 1.0    | 0.1  |
//! | Gain             | 0.1    | 0.01 |
//!
//! Steps only scale drag and scroll gestures. They never snap an existing
//! value to the grid and play no part in double-click resets.

use crate::param::{ParamDescriptor, ParamId, ParamKind};

/// Increment granularity for the current frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StepMode {
    /// Normal drag resolution.
    #[default]
    Coarse,
    /// Modifier held.
    Fine,
}

impl StepMode {
    /// Pick the mode from the live modifier state.
    pub const fn from_modifier(fine: bool) -> Self {
        if fine { StepMode::Fine } else { StepMode::Coarse }
    }
}

/// Increment per gesture unit for `id`, or `None` for non-numeric controls.
///
/// ```rust
/// use manglr_core::{ParamId, StepMode, step_size};
///
/// assert_eq!(step_size(ParamId::Crusher, StepMode::Coarse), Some(8.0));
/// assert_eq!(step_size(ParamId::Crusher, StepMode::Fine), Some(1.0));
/// assert_eq!(step_size(ParamId::Limiter, StepMode::Fine), None);
/// ```
pub const fn step_size(id: ParamId, mode: StepMode) -> Option<f32> {
    let (coarse, fine) = match id {
        ParamId::Crusher => (8.0, 1.0),
        ParamId::Folder | ParamId::Smoother | ParamId::Gain => (0.1, 0.01),
        ParamId::Mix => (1.0, 0.1),
        ParamId::Limiter | ParamId::Sequence => return None,
    };
    match mode {
        StepMode::Coarse => Some(coarse),
        StepMode::Fine => Some(fine),
    }
}

/// Move `value` by `units` increments of `step`.
///
/// The result is coerced to the parameter's type and range. Zero units
/// return `value` untouched, even when it sits off the step grid.
pub fn apply_steps(desc: &ParamDescriptor, value: f32, units: f32, step: f32) -> f32 {
    if units == 0.0 {
        return value;
    }
    let moved = value + units * step;
    match desc.kind {
        ParamKind::Integer | ParamKind::Selector => {
            // Sub-step movement must still register on whole-number controls.
            let whole = if moved > value {
                moved.ceil()
            } else {
                moved.floor()
            };
            whole.clamp(desc.min, desc.max)
        }
        _ => desc.clamp(moved),
    }
}
