//! Engine-to-editor value delivery.
//!
//! The engine may report changes from any thread, including its audio
//! thread, while the panel is rendering. [`InboundSync`] is the only shared
//! state between the two: one atomic slot per parameter plus a pending
//! bitmask. The writer never blocks and never allocates.
//!
//! ```text
//! engine thread                       render thread
//! ─────────────                       ─────────────
//! parameter_changed(i, v)
//!   values[i].store(v)  ──┐
//!   pending |= 1 << i   ──┼──────►   drain_into(model)
//!   notify()              │            bits = pending.swap(0)
//!                         └──────►     model.apply_inbound(values[i])
//! ```
//!
//! Several changes to one parameter between two frames coalesce into the
//! latest value, which matches the editor's "engine is the source of truth"
//! rule.

use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

use crate::error::invalid_reference;
use crate::model::ParameterModel;
use crate::param::{ParamId, ParamIndex, Variant};

type Notifier = Box<dyn Fn() + Send + Sync>;

/// Lock-free mailbox for engine-originated parameter changes.
pub struct InboundSync {
    variant: Variant,
    values: [AtomicU32; ParamId::COUNT],
    pending: AtomicU32,
    notify: Option<Notifier>,
}

impl InboundSync {
    /// Create an empty mailbox for `variant`.
    pub fn new(variant: Variant) -> Self {
        Self {
            variant,
            values: std::array::from_fn(|slot| {
                AtomicU32::new(ParamId::ALL[slot].descriptor().default.to_bits())
            }),
            pending: AtomicU32::new(0),
            notify: None,
        }
    }

    /// Call `notify` after every accepted change, typically to request a repaint.
    ///
    /// The callback runs on the engine's thread and must not block.
    pub fn with_notifier(mut self, notify: impl Fn() + Send + Sync + 'static) -> Self {
        self.notify = Some(Box::new(notify));
        self
    }

    /// Layout used to resolve wire indices.
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Record a change reported by the engine.
    ///
    /// Safe to call from any thread, concurrently with rendering. Never
    /// produces outbound edit events. An index outside the variant is a
    /// programming error: it panics in debug builds and is dropped with a
    /// warning otherwise.
    pub fn parameter_changed(&self, index: u32, value: f32) {
        let id = match self.variant.resolve(ParamIndex(index)) {
            Ok(id) => id,
            Err(err) => {
                invalid_reference(&err);
                return;
            }
        };
        let slot = id.slot();
        self.values[slot].store(value.to_bits(), Ordering::Release);
        self.pending.fetch_or(1 << slot, Ordering::AcqRel);
        if let Some(notify) = &self.notify {
            notify();
        }
    }

    /// Whether changes are waiting to be drained.
    pub fn has_pending(&self) -> bool {
        self.pending.load(Ordering::Acquire) != 0
    }

    /// Move every pending change into `model`.
    ///
    /// Returns how many parameters were updated. Values the model rejects
    /// (NaN) are dropped.
    pub fn drain_into(&self, model: &mut ParameterModel) -> usize {
        let bits = self.pending.swap(0, Ordering::AcqRel);
        if bits == 0 {
            return 0;
        }
        let mut applied = 0;
        for id in ParamId::ALL {
            if bits & (1 << id.slot()) == 0 {
                continue;
            }
            let raw = f32::from_bits(self.values[id.slot()].load(Ordering::Acquire));
            match model.apply_inbound(id, raw) {
                Ok(()) => applied += 1,
                Err(_err) => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(param = %id, error = %_err, "dropped inbound value");
                }
            }
        }
        applied
    }
}

impl fmt::Debug for InboundSync {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InboundSync")
            .field("variant", &self.variant)
            .field(
                "pending",
                &format_args!("{:#09b}", self.pending.load(Ordering::Relaxed)),
            )
            .field("notify", &self.notify.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn changes_reach_the_model_on_drain() {
        let sync = InboundSync::new(Variant::WithGain);
        let mut model = ParameterModel::new(Variant::WithGain);
        model.take_dirty();

        assert!(!sync.has_pending());
        sync.parameter_changed(0, 64.0);
        sync.parameter_changed(6, 3.0);
        assert!(sync.has_pending());

        assert_eq!(sync.drain_into(&mut model), 2);
        assert_eq!(model.crusher(), 64);
        assert_eq!(model.sequence().index(), 3);
        assert!(model.is_dirty());
        assert!(!sync.has_pending());
        assert_eq!(sync.drain_into(&mut model), 0);
    }

    #[test]
    fn repeated_changes_coalesce_to_latest() {
        let sync = InboundSync::new(Variant::WithGain);
        let mut model = ParameterModel::new(Variant::WithGain);

        sync.parameter_changed(4, 10.0);
        sync.parameter_changed(4, 20.0);
        sync.parameter_changed(4, 30.0);

        assert_eq!(sync.drain_into(&mut model), 1);
        assert_eq!(model.mix(), 30.0);
    }

    #[test]
    fn compact_indices_resolve_past_gain() {
        let sync = InboundSync::new(Variant::WithoutGain);
        let mut model = ParameterModel::new(Variant::WithoutGain);

        // Index 3 is Mix on the compact panel.
        sync.parameter_changed(3, 80.0);
        sync.drain_into(&mut model);
        assert_eq!(model.mix(), 80.0);
        assert_eq!(model.gain(), None);
    }

    #[test]
    fn nan_is_dropped() {
        let sync = InboundSync::new(Variant::WithGain);
        let mut model = ParameterModel::new(Variant::WithGain);

        sync.parameter_changed(1, f32::NAN);
        assert_eq!(sync.drain_into(&mut model), 0);
        assert_eq!(model.folder(), 1.0);
    }

    #[test]
    fn notifier_fires_per_change() {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);
        let sync = InboundSync::new(Variant::WithGain).with_notifier(move || {
            counter.fetch_add(1, Ordering::Relaxed);
        });

        sync.parameter_changed(2, -6.0);
        sync.parameter_changed(3, 0.0);
        assert_eq!(hits.load(Ordering::Relaxed), 2);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "unknown parameter index 6 for without-gain layout")]
    fn out_of_range_index_is_a_bug() {
        InboundSync::new(Variant::WithoutGain).parameter_changed(6, 0.0);
    }
}
