// src/ui/nav.rs

use egui::{vec2, Align2, Color32, FontId, Response, Rounding, Sense, Ui, Widget};

use crate::{
    constants::{BUTTON_FONT_SIZE, BUTTON_ROUNDING, NAV_BUTTON_HEIGHT},
    theme::Palette,
};

/// Side-menu entry: transparent at rest, tinted on hover, accent-filled
/// with a white label when it is the active page.
pub struct NavButton<'a> {
    label: &'a str,
    active: bool,
    palette: &'static Palette,
}

impl<'a> NavButton<'a> {
    pub fn new(label: &'a str, active: bool, palette: &'static Palette) -> Self {
        Self {
            label,
            active,
            palette,
        }
    }
}

impl Widget for NavButton<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let desired = vec2(ui.available_width(), NAV_BUTTON_HEIGHT);
        let (rect, response) = ui.allocate_exact_size(desired, Sense::click());

        response.widget_info(|| {
            egui::WidgetInfo::labeled(egui::WidgetType::Button, ui.is_enabled(), self.label)
        });

        if ui.is_rect_visible(rect) {
            let fill = if self.active {
                self.palette.accent
            } else if response.hovered() {
                self.palette.nav_hover
            } else {
                Color32::TRANSPARENT
            };
            ui.painter()
                .rect_filled(rect, Rounding::same(BUTTON_ROUNDING), fill);

            let text_color = if self.active {
                Color32::WHITE
            } else {
                self.palette.label_primary
            };
            ui.painter().text(
                rect.left_center() + vec2(15.0, 0.0),
                Align2::LEFT_CENTER,
                self.label,
                FontId::proportional(BUTTON_FONT_SIZE),
                text_color,
            );
        }

        response
    }
}
