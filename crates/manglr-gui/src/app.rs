//! Main application state and UI logic.

use std::sync::Arc;

use eframe::egui;
use egui::{CentralPanel, Context};
use manglr_core::{FrameContext, InboundSync, Panel};

use crate::config::EditorConfig;
use crate::engine::DemoEngine;
use crate::host::EguiHost;
use crate::theme::Theme;

/// Standalone editor: the panel, its egui host and a demo engine.
pub struct ManglrApp {
    panel: Panel,
    engine: DemoEngine,
    theme: Theme,
    config: EditorConfig,
}

impl ManglrApp {
    /// Create the application for an eframe context.
    pub fn new(cc: &eframe::CreationContext<'_>, config: EditorConfig) -> Self {
        let theme = Theme::default();
        theme.apply(&cc.egui_ctx);

        // Engine changes arrive off the GUI thread; wake the UI so they show.
        let ctx = cc.egui_ctx.clone();
        let inbound =
            Arc::new(InboundSync::new(config.variant).with_notifier(move || ctx.request_repaint()));
        let panel = Panel::with_inbound(Arc::clone(&inbound), config.release_framing);
        let engine = DemoEngine::spawn(inbound);

        tracing::info!(
            variant = %config.variant,
            framing = ?config.release_framing,
            "editor ready"
        );

        Self {
            panel,
            engine,
            theme,
            config,
        }
    }
}

impl eframe::App for ManglrApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let fine_step = ctx.input(|i| i.modifiers.shift);

        CentralPanel::default()
            .frame(egui::Frame::NONE.fill(self.theme.background))
            .show(ctx, |ui| {
                let size = ui.available_size();
                let frame = FrameContext {
                    fine_step,
                    size: [size.x, size.y],
                };
                let mut host =
                    EguiHost::new(ui, &self.theme, &self.config.title, self.config.variant);
                let summary = self.panel.render(&frame, &mut host, &self.engine);
                if summary.end_edits > 0 {
                    tracing::debug!(end_edits = summary.end_edits, "gesture released");
                }
            });

        // A drag in progress needs continuous frames.
        if self.panel.session().is_editing() {
            ctx.request_repaint();
        }
    }
}
