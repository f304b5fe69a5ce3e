//! Standalone stand-in for the processing engine.
//!
//! The editor normally runs inside a plugin host that owns the DSP and the
//! authoritative parameter values. When the panel runs on its own,
//! [`DemoEngine`] plays that role: it receives edit events over a channel,
//! keeps its own copy of every value, and reports each accepted change back
//! through [`InboundSync`] exactly as a host would.
//!
//! ```text
//! GUI thread                         engine thread
//! ──────────                         ─────────────
//! EngineLink::set_value ──► tx ──►   EngineState::apply
//!                                       │ clamp + store
//! InboundSync ◄──────────────────── parameter_changed(index, value)
//! ```

use std::sync::Arc;
use std::thread::JoinHandle;

use crossbeam_channel::{Receiver, Sender, unbounded};
use manglr_core::{EngineLink, InboundSync, ParamIndex, Variant};

/// Edit traffic from the panel to the engine thread.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EngineEvent {
    /// `begin_edit`
    Begin(ParamIndex),
    /// `set_value`
    Set(ParamIndex, f32),
    /// `end_edit`
    End(ParamIndex),
    /// Stop the engine thread.
    Shutdown,
}

/// Parameter storage of the demo engine.
///
/// Kept separate from the thread so the bookkeeping can be tested on its own.
#[derive(Debug, Clone)]
pub struct EngineState {
    variant: Variant,
    values: Vec<f32>,
    editing: Vec<bool>,
}

impl EngineState {
    /// All parameters at their defaults.
    pub fn new(variant: Variant) -> Self {
        Self {
            variant,
            values: variant
                .params()
                .iter()
                .map(|id| id.descriptor().default)
                .collect(),
            editing: vec![false; variant.param_count()],
        }
    }

    /// Current value at `index`.
    pub fn value(&self, index: ParamIndex) -> Option<f32> {
        self.values.get(index.0 as usize).copied()
    }

    /// Whether `index` is between `begin_edit` and `end_edit`.
    pub fn is_editing(&self, index: ParamIndex) -> bool {
        self.editing.get(index.0 as usize).copied().unwrap_or(false)
    }

    /// Snapshot of every value, in wire order.
    pub fn values(&self) -> impl Iterator<Item = (ParamIndex, f32)> + '_ {
        self.values
            .iter()
            .enumerate()
            .map(|(i, &v)| (ParamIndex(i as u32), v))
    }

    /// Apply one event; returns the value to report back, if any.
    pub fn apply(&mut self, event: EngineEvent) -> Option<(ParamIndex, f32)> {
        match event {
            EngineEvent::Begin(index) => {
                let slot = self.slot(index)?;
                if std::mem::replace(&mut self.editing[slot], true) {
                    tracing::warn!(%index, "begin_edit while already editing");
                }
                None
            }
            EngineEvent::Set(index, value) => {
                let slot = self.slot(index)?;
                if !self.editing[slot] {
                    tracing::warn!(%index, "set_value outside an edit");
                }
                let id = self.variant.resolve(index).ok()?;
                let value = id.descriptor().clamp(value);
                self.values[slot] = value;
                tracing::debug!(param = %id, value, "engine value");
                Some((index, value))
            }
            EngineEvent::End(index) => {
                let slot = self.slot(index)?;
                self.editing[slot] = false;
                None
            }
            EngineEvent::Shutdown => None,
        }
    }

    fn slot(&self, index: ParamIndex) -> Option<usize> {
        let slot = index.0 as usize;
        if slot < self.values.len() {
            Some(slot)
        } else {
            tracing::warn!(%index, variant = %self.variant, "event for unknown parameter");
            None
        }
    }
}

/// Channel-backed engine running on its own thread.
pub struct DemoEngine {
    tx: Sender<EngineEvent>,
    handle: Option<JoinHandle<()>>,
}

impl DemoEngine {
    /// Start the engine thread, reporting values through `inbound`.
    ///
    /// The engine announces every initial value once, like a host does when
    /// an editor opens.
    pub fn spawn(inbound: Arc<InboundSync>) -> Self {
        let (tx, rx) = unbounded();
        let state = EngineState::new(inbound.variant());
        let handle = std::thread::Builder::new()
            .name("manglr-engine".into())
            .spawn(move || run(state, &rx, &inbound))
            .map_err(|e| tracing::error!(error = %e, "failed to start engine thread"))
            .ok();
        Self { tx, handle }
    }

    fn send(&self, event: EngineEvent) {
        if self.tx.send(event).is_err() {
            tracing::warn!(?event, "engine thread is gone");
        }
    }
}

fn run(mut state: EngineState, rx: &Receiver<EngineEvent>, inbound: &InboundSync) {
    for (index, value) in state.values() {
        inbound.parameter_changed(index.0, value);
    }
    tracing::info!(variant = %state.variant, "engine running");

    while let Ok(event) = rx.recv() {
        match event {
            EngineEvent::Shutdown => break,
            EngineEvent::Begin(index) => tracing::trace!(%index, "begin_edit"),
            EngineEvent::End(index) => tracing::trace!(%index, "end_edit"),
            EngineEvent::Set(..) => {}
        }
        if let Some((index, value)) = state.apply(event) {
            inbound.parameter_changed(index.0, value);
        }
    }
    tracing::info!("engine stopped");
}

impl EngineLink for DemoEngine {
    fn begin_edit(&self, index: ParamIndex) {
        self.send(EngineEvent::Begin(index));
    }

    fn set_value(&self, index: ParamIndex, value: f32) {
        self.send(EngineEvent::Set(index, value));
    }

    fn end_edit(&self, index: ParamIndex) {
        self.send(EngineEvent::End(index));
    }
}

impl Drop for DemoEngine {
    fn drop(&mut self) {
        let _ = self.tx.send(EngineEvent::Shutdown);
        if let Some(handle) = self.handle.take()
            && handle.join().is_err()
        {
            tracing::error!("engine thread panicked");
        }
    }
}
