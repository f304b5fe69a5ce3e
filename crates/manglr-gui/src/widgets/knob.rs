//! Rotary knob control widget.
//!
//! Stepped-tick knob with:
//! - Vertical drag in parameter steps (the caller picks coarse or fine)
//! - Mouse wheel, one step per notch
//! - Logarithmic travel when the parameter asks for it
//! - Label above, value readout below
//!
//! Double-click is only reported, never acted on: resetting belongs to the
//! edit protocol.

use egui::{Color32, Id, Pos2, Response, Sense, Stroke, Ui, Widget, pos2, vec2};
use manglr_core::{ParamDescriptor, apply_steps};
use std::f32::consts::PI;

/// Drag distance, in points, that moves the value by one step.
const POINTS_PER_STEP: f32 = 2.0;

/// Rotary knob parameters.
pub struct Knob<'a> {
    value: &'a mut f32,
    descriptor: &'a ParamDescriptor,
    step: f32,
    text: &'a str,
    active: Color32,
    hovered: Color32,
    track: Color32,
    body: Color32,
    tick: Color32,
    label_color: Color32,
    diameter: f32,
}

impl<'a> Knob<'a> {
    /// Create a new knob editing `value` within `descriptor`'s range.
    pub fn new(value: &'a mut f32, descriptor: &'a ParamDescriptor, step: f32) -> Self {
        Self {
            value,
            descriptor,
            step,
            text: "",
            active: Color32::from_rgb(120, 200, 255),
            hovered: Color32::from_rgb(100, 180, 255),
            track: Color32::from_rgb(50, 50, 60),
            body: Color32::from_rgb(55, 55, 68),
            tick: Color32::from_rgb(120, 120, 130),
            label_color: Color32::from_rgb(180, 180, 190),
            diameter: 60.0,
        }
    }

    /// Value readout.
    pub fn text(mut self, text: &'a str) -> Self {
        self.text = text;
        self
    }

    /// Fill while dragged and while hovered.
    pub fn colors(mut self, active: Color32, hovered: Color32) -> Self {
        self.active = active;
        self.hovered = hovered;
        self
    }

    /// Track, body, tick and label colors.
    pub fn chrome(mut self, track: Color32, body: Color32, tick: Color32, label: Color32) -> Self {
        self.track = track;
        self.body = body;
        self.tick = tick;
        self.label_color = label;
        self
    }

    /// Set knob diameter in pixels.
    pub fn diameter(mut self, diameter: f32) -> Self {
        self.diameter = diameter;
        self
    }

    /// Stable widget id, so a knob keeps its interaction state when the
    /// panel moves it to another slot.
    pub fn id(descriptor: &ParamDescriptor) -> Id {
        Id::new(("manglr-knob", descriptor.id))
    }
}

impl Widget for Knob<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let label_height = self.diameter * 0.18;
        let size = vec2(self.diameter, self.diameter + 2.0 * label_height);
        let (rect, _) = ui.allocate_exact_size(size, Sense::hover());
        let mut response = ui.interact(rect, Self::id(self.descriptor), Sense::click_and_drag());

        let center = pos2(rect.center().x, rect.top() + label_height + self.diameter / 2.0);
        let radius = self.diameter / 2.0 - 4.0;

        // Drag up = increase
        let mut units = 0.0;
        if response.dragged() {
            units = -response.drag_delta().y / POINTS_PER_STEP;
        } else if response.hovered() {
            let scroll = ui.input(|i| i.raw_scroll_delta.y);
            if scroll != 0.0 {
                units = scroll.signum();
            }
        }
        if units != 0.0 && self.step > 0.0 {
            let moved = apply_steps(self.descriptor, *self.value, units, self.step);
            if moved != *self.value {
                *self.value = moved;
                response.mark_changed();
            }
        }

        let is_active = response.dragged();
        let is_hovered = response.hovered();

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();

            // 270 degree sweep, starting from bottom-left
            let start_angle = PI * 0.75;
            let end_angle = PI * 2.25;
            let sweep = end_angle - start_angle;

            let normalized = self.descriptor.normalize(*self.value);
            let value_angle = start_angle + normalized * sweep;

            let ticks = self.descriptor.ticks;
            if ticks > 1 {
                for i in 0..ticks {
                    let angle = start_angle + sweep * f32::from(i) / f32::from(ticks - 1);
                    let (sin, cos) = angle.sin_cos();
                    let inner = pos2(center.x + cos * (radius + 1.0), center.y + sin * (radius + 1.0));
                    let outer = pos2(center.x + cos * (radius + 4.0), center.y + sin * (radius + 4.0));
                    painter.line_segment([inner, outer], Stroke::new(1.0, self.tick));
                }
            }

            draw_arc(painter, center, radius - 2.0, start_angle, end_angle, self.track, 6.0);

            let fill_color = if is_active {
                self.active
            } else if is_hovered {
                self.hovered
            } else {
                self.active.gamma_multiply(0.85)
            };
            if normalized > 0.001 {
                draw_arc(painter, center, radius - 2.0, start_angle, value_angle, fill_color, 6.0);
            }

            painter.circle_filled(center, radius - 8.0, self.body);

            let pointer_len = radius - 14.0;
            let pointer_end = pos2(
                center.x + value_angle.cos() * pointer_len,
                center.y + value_angle.sin() * pointer_len,
            );
            painter.line_segment([center, pointer_end], Stroke::new(3.0, fill_color));
            painter.circle_filled(center, 3.0, fill_color);

            let font = egui::FontId::proportional((label_height * 0.8).max(8.0));
            painter.text(
                pos2(rect.center().x, rect.top()),
                egui::Align2::CENTER_TOP,
                self.descriptor.label,
                font.clone(),
                self.label_color,
            );
            painter.text(
                pos2(rect.center().x, rect.bottom()),
                egui::Align2::CENTER_BOTTOM,
                self.text,
                font,
                fill_color,
            );
        }

        response
    }
}

/// Draw an arc using line segments.
fn draw_arc(
    painter: &egui::Painter,
    center: Pos2,
    radius: f32,
    start_angle: f32,
    end_angle: f32,
    color: Color32,
    stroke_width: f32,
) {
    let segments = 32;
    let sweep = end_angle - start_angle;

    let points: Vec<Pos2> = (0..=segments)
        .map(|i| {
            let t = i as f32 / segments as f32;
            let angle = start_angle + t * sweep;
            pos2(
                center.x + angle.cos() * radius,
                center.y + angle.sin() * radius,
            )
        })
        .collect();

    for window in points.windows(2) {
        painter.line_segment([window[0], window[1]], Stroke::new(stroke_width, color));
    }
}
