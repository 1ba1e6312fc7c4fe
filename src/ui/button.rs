// src/ui/button.rs

use egui::{vec2, Color32, FontId, Response, Rounding, Sense, Stroke, Ui, Widget};

use crate::{
    constants::{BUTTON_FONT_SIZE, BUTTON_PADDING_X, BUTTON_PADDING_Y, BUTTON_ROUNDING},
    theme::darken,
};

/// Filled action button: accent fill, white label, darkens while hovered
/// and again while pressed. Selector buttons mark the current choice with
/// a white stroke.
pub struct AccentButton {
    text: String,
    fill: Color32,
    selected: bool,
}

impl AccentButton {
    pub fn new(text: impl Into<String>, fill: Color32) -> Self {
        Self {
            text: text.into(),
            fill,
            selected: false,
        }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }
}

impl Widget for AccentButton {
    fn ui(self, ui: &mut Ui) -> Response {
        let galley = ui.painter().layout_no_wrap(
            self.text.clone(),
            FontId::proportional(BUTTON_FONT_SIZE),
            Color32::WHITE,
        );
        let desired = galley.size() + 2.0 * vec2(BUTTON_PADDING_X, BUTTON_PADDING_Y);
        let (rect, response) = ui.allocate_exact_size(desired, Sense::click());

        response.widget_info(|| {
            egui::WidgetInfo::labeled(egui::WidgetType::Button, ui.is_enabled(), &self.text)
        });

        if ui.is_rect_visible(rect) {
            let fill = if response.is_pointer_button_down_on() {
                darken(self.fill, 1.2)
            } else if response.hovered() {
                darken(self.fill, 1.1)
            } else {
                self.fill
            };

            ui.painter()
                .rect_filled(rect, Rounding::same(BUTTON_ROUNDING), fill);
            if self.selected {
                ui.painter().rect_stroke(
                    rect,
                    Rounding::same(BUTTON_ROUNDING),
                    Stroke::new(2.0, Color32::WHITE),
                );
            }

            let text_pos = rect.center() - galley.size() / 2.0;
            ui.painter().galley(text_pos, galley, Color32::WHITE);
        }

        response
    }
}
