//! Error types for parameter references and values.

use crate::param::{ParamId, ParamIndex, Variant};
use thiserror::Error;

/// Errors raised while resolving or coercing a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParamError {
    /// A wire index outside the variant's parameter list.
    #[error("unknown parameter index {index} for {variant} layout")]
    UnknownIndex {
        /// Index received.
        index: ParamIndex,
        /// Layout it was resolved against.
        variant: Variant,
    },

    /// A parameter that exists, but not in this variant (Gain on the compact panel).
    #[error("parameter {id} is not part of the {variant} layout")]
    Unsupported {
        /// Parameter referenced.
        id: ParamId,
        /// Layout it was checked against.
        variant: Variant,
    },

    /// A NaN value, which has no nearest bound to clamp to.
    #[error("parameter {id} received NaN")]
    NotANumber {
        /// Parameter the value was meant for.
        id: ParamId,
    },
}

impl ParamError {
    /// Whether the error means the caller referenced a parameter that cannot exist.
    ///
    /// The parameter set is fixed and closed, so these are bugs rather than
    /// runtime conditions.
    pub const fn is_invalid_reference(&self) -> bool {
        matches!(
            self,
            ParamError::UnknownIndex { .. } | ParamError::Unsupported { .. }
        )
    }
}

/// Handle a reference to a parameter outside the fixed set.
///
/// Panics when debug assertions are enabled; release builds log and carry on
/// so that a misbehaving engine cannot take the editor down.
pub(crate) fn invalid_reference(err: &ParamError) {
    #[cfg(feature = "tracing")]
    tracing::warn!(error = %err, "ignoring invalid parameter reference");
    if cfg!(debug_assertions) {
        panic!("invalid parameter reference: {err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_index_display() {
        let err = ParamError::UnknownIndex {
            index: ParamIndex(9),
            variant: Variant::WithGain,
        };
        assert_eq!(
            err.to_string(),
            "unknown parameter index 9 for with-gain layout"
        );
        assert!(err.is_invalid_reference());
    }

    #[test]
    fn unsupported_display() {
        let err = ParamError::Unsupported {
            id: ParamId::Gain,
            variant: Variant::WithoutGain,
        };
        assert_eq!(
            err.to_string(),
            "parameter Gain is not part of the without-gain layout"
        );
        assert!(err.is_invalid_reference());
    }

    #[test]
    fn nan_is_not_an_invalid_reference() {
        let err = ParamError::NotANumber { id: ParamId::Mix };
        assert_eq!(err.to_string(), "parameter Mix received NaN");
        assert!(!err.is_invalid_reference());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "invalid parameter reference")]
    fn invalid_reference_is_fatal_in_debug() {
        invalid_reference(&ParamError::UnknownIndex {
            index: ParamIndex(42),
            variant: Variant::WithGain,
        });
    }
}
