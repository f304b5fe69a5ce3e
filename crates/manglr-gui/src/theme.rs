//! Visual styling for the MANGLR panel.

use egui::{Color32, CornerRadius, Stroke, Style, Visuals};
use manglr_core::Rgba;
use manglr_core::color::palette;

/// Convert a core color to egui's representation.
pub fn color32(c: Rgba) -> Color32 {
    let [r, g, b, a] = c.to_rgba8();
    Color32::from_rgba_unmultiplied(r, g, b, a)
}

/// Theme colors for the panel chrome.
///
/// Control colors are not here: they are derived from parameter values
/// every frame by [`PanelColors`](manglr_core::PanelColors).
pub struct Theme {
    /// Window background color.
    pub background: Color32,
    /// Title bar fill.
    pub title_bg: Color32,
    /// Caption and label text.
    pub text_primary: Color32,
    /// Value readouts.
    pub text_secondary: Color32,
    /// Border of the effect chain frame.
    pub frame_stroke: Color32,
    /// Knob background track color.
    pub knob_track: Color32,
    /// Knob body.
    pub knob_body: Color32,
    /// Tick marks around a knob.
    pub knob_tick: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: color32(palette::WINDOW_BG),
            title_bg: color32(palette::TITLE_BG),
            text_primary: color32(palette::TEXT),
            text_secondary: Color32::from_rgb(150, 150, 160),
            frame_stroke: color32(palette::BLUE_DR),
            knob_track: Color32::from_rgb(50, 50, 60),
            knob_body: Color32::from_rgb(55, 55, 68),
            knob_tick: Color32::from_rgb(120, 120, 130),
        }
    }
}

impl Theme {
    /// Apply the theme to an egui context.
    pub fn apply(&self, ctx: &egui::Context) {
        let mut style = Style::default();
        let mut visuals = Visuals::dark();

        visuals.window_fill = self.background;
        visuals.panel_fill = self.background;
        visuals.extreme_bg_color = self.background;

        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, self.text_secondary);
        visuals.widgets.noninteractive.corner_radius = CornerRadius::same(4);
        visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, self.text_primary);
        visuals.widgets.inactive.corner_radius = CornerRadius::same(4);
        visuals.widgets.hovered.corner_radius = CornerRadius::same(4);
        visuals.widgets.active.corner_radius = CornerRadius::same(4);

        visuals.override_text_color = Some(self.text_primary);

        style.visuals = visuals;
        style.spacing.item_spacing = egui::vec2(0.0, 0.0);
        style.spacing.window_margin = egui::Margin::same(0);

        ctx.set_style(style);
    }
}
