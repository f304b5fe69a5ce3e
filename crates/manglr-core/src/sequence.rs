//! Ordering of the three reorderable effect controls.
//!
//! The Sequence parameter picks one of the six permutations of
//! {Crusher, Folder, Smoother}. The order is derived from the parameter on
//! every frame and never stored on its own; reordering moves controls
//! without touching their values, ranges, steps or colors.

use crate::param::ParamId;
use crate::param::ParamId::{Crusher as C, Folder as F, Smoother as S};

/// Permutation table indexed by the Sequence value.
const ORDERS: [[ParamId; 3]; Sequence::COUNT] = [
    [C, F, S],
    [C, S, F],
    [F, C, S],
    [F, S, C],
    [S, C, F],
    [S, F, C],
];

/// List-selector labels, same indexing as [`ORDERS`].
const LABELS: [&str; Sequence::COUNT] = ["C~F~S", "C~S~F", "F~C~S", "F~S~C", "S~C~F", "S~F~C"];

/// A valid Sequence selection, always in `0..=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Sequence(u8);

impl Sequence {
    /// Number of orderings.
    pub const COUNT: usize = 6;

    /// Highest valid index.
    pub const MAX: u8 = 5;

    /// Build from an index, clamping to the nearest valid one.
    pub fn new(index: i64) -> Self {
        Self(index.clamp(0, i64::from(Self::MAX)) as u8)
    }

    /// Build from a raw parameter value.
    ///
    /// Rounds to the nearest index and clamps to `0..=5`; NaN maps to 0.
    ///
    /// ```rust
    /// use manglr_core::Sequence;
    ///
    /// assert_eq!(Sequence::from_value(3.0).index(), 3);
    /// assert_eq!(Sequence::from_value(-1.0).index(), 0);
    /// assert_eq!(Sequence::from_value(99.0).index(), 5);
    /// ```
    pub fn from_value(value: f32) -> Self {
        if value.is_nan() {
            return Self::default();
        }
        Self(value.round().clamp(0.0, f32::from(Self::MAX)) as u8)
    }

    /// All selections in list order.
    pub fn all() -> impl Iterator<Item = Sequence> {
        (0..=Self::MAX).map(Sequence)
    }

    /// Index into the ordering table.
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Parameter value for this selection.
    pub fn value(self) -> f32 {
        f32::from(self.0)
    }

    /// Left-to-right order of the reorderable controls.
    pub const fn order(self) -> [ParamId; 3] {
        ORDERS[self.0 as usize]
    }

    /// Short label shown in the list selector.
    pub const fn label(self) -> &'static str {
        LABELS[self.0 as usize]
    }

    /// Position of `id` in this ordering, or `None` if it is not reorderable.
    pub fn position_of(self, id: ParamId) -> Option<usize> {
        self.order().iter().position(|&p| p == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_order_is_a_permutation() {
        for seq in Sequence::all() {
            let order = seq.order();
            for id in [C, F, S] {
                assert_eq!(
                    order.iter().filter(|&&p| p == id).count(),
                    1,
                    "{id} in {}",
                    seq.label()
                );
            }
        }
    }

    #[test]
    fn orders_are_distinct() {
        let orders: Vec<_> = Sequence::all().map(Sequence::order).collect();
        for (i, a) in orders.iter().enumerate() {
            for b in &orders[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn labels_spell_out_orders() {
        for seq in Sequence::all() {
            let initials = seq
                .order()
                .iter()
                .map(|id| &id.descriptor().name[..1])
                .collect::<Vec<_>>()
                .join("~");
            assert_eq!(initials, seq.label());
        }
    }

    #[test]
    fn index_three_is_folder_smoother_crusher() {
        assert_eq!(Sequence::from_value(3.0).order(), [F, S, C]);
    }

    #[test]
    fn out_of_range_clamps() {
        assert_eq!(Sequence::new(-3), Sequence::new(0));
        assert_eq!(Sequence::new(6).index(), 5);
        assert_eq!(Sequence::from_value(f32::NAN).index(), 0);
        assert_eq!(Sequence::from_value(f32::INFINITY).index(), 5);
        assert_eq!(Sequence::from_value(4.6).index(), 5);
    }

    #[test]
    fn position_of_reorderable_only() {
        let seq = Sequence::new(4);
        assert_eq!(seq.position_of(S), Some(0));
        assert_eq!(seq.position_of(C), Some(1));
        assert_eq!(seq.position_of(F), Some(2));
        assert_eq!(seq.position_of(ParamId::Mix), None);
    }
}
