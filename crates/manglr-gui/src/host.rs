//! egui implementation of the panel's widget host.
//!
//! Layout is a fixed grid in *base units* scaled uniformly to the window:
//!
//! ```text
//! ┌──────────────────────────── title ────────────────────────────┐
//! │ ┌────┐ ╭──────── chain frame ────────╮ Lmtr                   │
//! │ │list│ │ (slot 0) (slot 1) (slot 2)  │  ▮   (Gain)   (Mix)    │
//! │ └────┘ ╰─────────────────────────────╯                        │
//! └───────────────────────────────────────────────────────────────┘
//! ```
//!
//! The compact variant closes the gap left by the missing Gain knob.

use egui::{Pos2, Rect, Stroke, StrokeKind, Ui, pos2, vec2};
use manglr_core::{
    FrameContext, Interaction, KnobRequest, Placement, SelectorRequest, ToggleRequest, Variant,
    WidgetHost,
};

use crate::theme::{Theme, color32};
use crate::widgets::{Knob, SequenceList, SlideToggle, interaction};

/// Height of the title strip, in base units.
const TITLE_HEIGHT: f32 = 26.0;
/// Knob cell size, in base units.
const KNOB: f32 = 100.0;
/// Outer spacing, in base units.
const GAP: f32 = 5.0;

/// Width of the full panel at scale 1.
pub const BASE_WIDTH: f32 = 640.0;
/// Width of the compact panel at scale 1.
pub const COMPACT_BASE_WIDTH: f32 = BASE_WIDTH - KNOB - 2.0 * GAP;
/// Height of either panel at scale 1.
pub const BASE_HEIGHT: f32 = 180.0;

const LIST: Rect = Rect::from_min_max(pos2(GAP, 15.0), pos2(GAP + 42.0, 116.0));
const CHAIN_FRAME: Rect = Rect::from_min_max(pos2(52.0, 6.0), pos2(385.0, 133.0));
const LIMITER: Rect = Rect::from_min_max(pos2(392.0, 10.0), pos2(418.0, 120.0));

/// Draws the panel into an egui [`Ui`].
///
/// Created fresh every frame around the frame's `Ui`.
pub struct EguiHost<'a> {
    ui: &'a mut Ui,
    theme: &'a Theme,
    title: &'a str,
    variant: Variant,
    origin: Pos2,
    scale: f32,
}

impl<'a> EguiHost<'a> {
    /// Wrap `ui` for one frame.
    pub fn new(ui: &'a mut Ui, theme: &'a Theme, title: &'a str, variant: Variant) -> Self {
        let origin = ui.max_rect().min;
        Self {
            ui,
            theme,
            title,
            variant,
            origin,
            scale: 1.0,
        }
    }

    /// Base-unit size of the panel for `variant`.
    pub fn base_size(variant: Variant) -> [f32; 2] {
        let width = if variant.has_gain() {
            BASE_WIDTH
        } else {
            COMPACT_BASE_WIDTH
        };
        [width, BASE_HEIGHT]
    }

    /// Uniform scale that fits the panel into `size`.
    pub fn fit_scale(variant: Variant, size: [f32; 2]) -> f32 {
        let [w, h] = Self::base_size(variant);
        (size[0] / w).min(size[1] / h).max(0.1)
    }

    /// Screen rect for a control slot.
    pub fn placement_rect(variant: Variant, placement: Placement) -> Rect {
        let knob_top = 16.0;
        let right_column = LIMITER.max.x + GAP + 3.0;
        match placement {
            Placement::Selector => LIST,
            Placement::Chain(slot) => Rect::from_min_size(
                pos2(CHAIN_FRAME.min.x + 8.0 + slot as f32 * (KNOB + 6.0), knob_top),
                vec2(KNOB, KNOB + 10.0),
            ),
            Placement::Limiter => LIMITER,
            Placement::Gain => {
                Rect::from_min_size(pos2(right_column, knob_top), vec2(KNOB, KNOB + 10.0))
            }
            Placement::Mix => {
                let x = if variant.has_gain() {
                    right_column + KNOB + 6.0
                } else {
                    right_column
                };
                Rect::from_min_size(pos2(x, knob_top), vec2(KNOB, KNOB + 10.0))
            }
        }
    }

    /// Map a base-unit rect below the title strip to the screen.
    fn to_screen(&self, rect: Rect) -> Rect {
        let offset = self.origin.to_vec2() + vec2(0.0, TITLE_HEIGHT * self.scale);
        Rect::from_min_max(
            (rect.min.to_vec2() * self.scale + offset).to_pos2(),
            (rect.max.to_vec2() * self.scale + offset).to_pos2(),
        )
    }
}

impl WidgetHost for EguiHost<'_> {
    fn begin_panel(&mut self, frame: &FrameContext) {
        self.scale = Self::fit_scale(self.variant, frame.size);
        let title = Rect::from_min_size(
            self.origin,
            vec2(frame.size[0], TITLE_HEIGHT * self.scale),
        );
        let chain = self.to_screen(CHAIN_FRAME);

        let painter = self.ui.painter();
        painter.rect_filled(title, 0.0, self.theme.title_bg);
        painter.text(
            title.center(),
            egui::Align2::CENTER_CENTER,
            self.title,
            egui::FontId::proportional(14.0 * self.scale),
            self.theme.text_primary,
        );
        painter.rect_stroke(
            chain,
            5.0 * self.scale,
            Stroke::new(1.0, self.theme.frame_stroke),
            StrokeKind::Inside,
        );
    }

    fn sequence_list(&mut self, request: &SelectorRequest) -> Interaction {
        let rect = self.to_screen(Self::placement_rect(self.variant, Placement::Selector));
        let mut selected = request.selected;
        let response = self.ui.put(
            rect,
            SequenceList::new(&mut selected, request.colors)
                .size(rect.size())
                .text_color(self.theme.text_primary),
        );
        interaction(&response, Some(selected.value()))
    }

    fn knob(&mut self, request: &KnobRequest) -> Interaction {
        let rect = self.to_screen(Self::placement_rect(self.variant, request.placement));
        let mut value = request.value;
        let response = self.ui.put(
            rect,
            Knob::new(&mut value, request.descriptor, request.step)
                .text(&request.text)
                .colors(color32(request.colors.active), color32(request.colors.hovered))
                .chrome(
                    self.theme.knob_track,
                    self.theme.knob_body,
                    self.theme.knob_tick,
                    self.theme.text_primary,
                )
                .diameter(rect.width() * 0.7),
        );
        let response = response.on_hover_text(&request.text);
        interaction(&response, Some(value))
    }

    fn toggle(&mut self, request: &ToggleRequest) -> Interaction {
        let rect = self.to_screen(Self::placement_rect(self.variant, request.placement));
        let mut on = request.on;
        let response = self.ui.put(
            rect,
            SlideToggle::new(&mut on, request.descriptor.label, request.colors)
                .width(rect.width())
                .label_color(self.theme.text_primary),
        );
        interaction(&response, Some(if on { 1.0 } else { 0.0 }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chain_slots_fit_inside_the_frame() {
        for slot in 0..3 {
            let rect = EguiHost::placement_rect(Variant::WithGain, Placement::Chain(slot));
            assert!(CHAIN_FRAME.contains_rect(rect), "slot {slot}: {rect:?}");
        }
    }

    #[test]
    fn controls_do_not_overlap() {
        for variant in [Variant::WithGain, Variant::WithoutGain] {
            let mut placements = vec![
                Placement::Selector,
                Placement::Chain(0),
                Placement::Chain(1),
                Placement::Chain(2),
                Placement::Limiter,
                Placement::Mix,
            ];
            if variant.has_gain() {
                placements.push(Placement::Gain);
            }
            let rects: Vec<_> = placements
                .iter()
                .map(|&p| EguiHost::placement_rect(variant, p))
                .collect();
            for (i, a) in rects.iter().enumerate() {
                for b in &rects[i + 1..] {
                    assert!(!a.intersects(*b), "{variant}: {a:?} overlaps {b:?}");
                }
            }
        }
    }

    #[test]
    fn panel_fits_base_size() {
        for variant in [Variant::WithGain, Variant::WithoutGain] {
            let [w, h] = EguiHost::base_size(variant);
            let mix = EguiHost::placement_rect(variant, Placement::Mix);
            assert!(mix.max.x <= w, "{variant}: mix ends at {}", mix.max.x);
            assert!(CHAIN_FRAME.max.y + TITLE_HEIGHT <= h);
        }
    }

    #[test]
    fn fit_scale_uses_the_tighter_axis() {
        let scale = EguiHost::fit_scale(Variant::WithGain, [BASE_WIDTH * 2.0, BASE_HEIGHT]);
        assert_eq!(scale, 1.0);
        let scale = EguiHost::fit_scale(Variant::WithGain, [BASE_WIDTH * 1.5, BASE_HEIGHT * 3.0]);
        assert_eq!(scale, 1.5);
    }
}
