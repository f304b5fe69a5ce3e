//! Sliding on/off switch.

use egui::{Color32, Id, Response, Sense, Ui, Widget, pos2, vec2};
use manglr_core::ToggleColors;

use crate::theme::color32;

/// A vertical slide switch, on at the top.
pub struct SlideToggle<'a> {
    on: &'a mut bool,
    label: &'a str,
    colors: ToggleColors,
    label_color: Color32,
    width: f32,
    id: Id,
}

impl<'a> SlideToggle<'a> {
    /// Create a switch bound to `on`.
    pub fn new(on: &'a mut bool, label: &'a str, colors: ToggleColors) -> Self {
        Self {
            on,
            label,
            colors,
            label_color: Color32::from_rgb(200, 200, 210),
            width: 20.0,
            id: Id::new(("manglr-toggle", label)),
        }
    }

    /// Track width in pixels; the track is twice as tall.
    pub fn width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    /// Caption color.
    pub fn label_color(mut self, color: Color32) -> Self {
        self.label_color = color;
        self
    }
}

impl Widget for SlideToggle<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let caption = self.width * 0.8;
        let size = vec2(self.width, caption + self.width * 2.0 + 4.0);
        let (rect, _) = ui.allocate_exact_size(size, Sense::hover());
        let track = egui::Rect::from_min_size(
            pos2(rect.left(), rect.bottom() - self.width * 2.0),
            vec2(self.width, self.width * 2.0),
        );
        let mut response = ui.interact(track, self.id, Sense::click());

        if response.clicked() {
            *self.on = !*self.on;
            response.mark_changed();
        }

        let how_on = ui.ctx().animate_bool(self.id, *self.on);

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();

            painter.text(
                pos2(rect.center().x, rect.top()),
                egui::Align2::CENTER_TOP,
                self.label,
                egui::FontId::proportional(caption.max(8.0)),
                self.label_color,
            );

            let fill = match (*self.on, response.hovered()) {
                (true, false) => self.colors.on,
                (true, true) => self.colors.on_hovered,
                (false, false) => self.colors.off,
                (false, true) => self.colors.off_hovered,
            };
            let radius = self.width / 2.0;
            painter.rect_filled(track, radius, color32(fill));

            let knob_y = egui::lerp((track.bottom() - radius)..=(track.top() + radius), how_on);
            painter.circle_filled(
                pos2(track.center().x, knob_y),
                radius - 2.0,
                color32(self.colors.knob),
            );
        }

        response
    }
}
