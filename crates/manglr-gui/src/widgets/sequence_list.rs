//! List box for picking the control sequence.

use egui::{Color32, Id, Rect, Response, Sense, Ui, Widget, pos2, vec2};
use manglr_core::{SelectorColors, Sequence};

use crate::theme::color32;

/// One selectable row per ordering, labelled like `"C~F~S"`.
pub struct SequenceList<'a> {
    selected: &'a mut Sequence,
    colors: SelectorColors,
    text_color: Color32,
    size: egui::Vec2,
}

impl<'a> SequenceList<'a> {
    /// Create a list bound to `selected`.
    pub fn new(selected: &'a mut Sequence, colors: SelectorColors) -> Self {
        Self {
            selected,
            colors,
            text_color: Color32::from_rgb(230, 230, 235),
            size: vec2(42.0, 101.0),
        }
    }

    /// Outer size of the list.
    pub fn size(mut self, size: egui::Vec2) -> Self {
        self.size = size;
        self
    }

    /// Row text color.
    pub fn text_color(mut self, color: Color32) -> Self {
        self.text_color = color;
        self
    }
}

impl Widget for SequenceList<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let (rect, mut response) = ui.allocate_exact_size(self.size, Sense::hover());
        let row_height = rect.height() / Sequence::COUNT as f32;
        let font = egui::FontId::monospace((row_height * 0.7).max(7.0));

        if ui.is_rect_visible(rect) {
            ui.painter()
                .rect_filled(rect, 2.0, color32(self.colors.frame));
        }

        for (row, seq) in Sequence::all().enumerate() {
            let row_rect = Rect::from_min_size(
                pos2(rect.left(), rect.top() + row as f32 * row_height),
                vec2(rect.width(), row_height),
            );
            let row_response = ui.interact(
                row_rect,
                Id::new(("manglr-sequence", seq.index())),
                Sense::click(),
            );
            if row_response.clicked() {
                *self.selected = seq;
                response.mark_changed();
            }

            let fill = if row_response.is_pointer_button_down_on() {
                Some(self.colors.active)
            } else if row_response.hovered() {
                Some(self.colors.hovered)
            } else if *self.selected == seq {
                Some(self.colors.selected)
            } else {
                None
            };

            if ui.is_rect_visible(row_rect) {
                let painter = ui.painter();
                if let Some(fill) = fill {
                    painter.rect_filled(row_rect, 0.0, color32(fill));
                }
                painter.text(
                    row_rect.center(),
                    egui::Align2::CENTER_CENTER,
                    seq.label(),
                    font.clone(),
                    self.text_color,
                );
            }
        }

        response
    }
}
