// src/ui/card.rs

use egui::{Margin, Rounding};

use crate::{
    constants::{CARD_PADDING, CARD_ROUNDING},
    prefs::Theme,
    theme::{surface_style, Surface},
};

/// Rounded card frame, styled by the `Card` surface of the given theme.
pub fn card_frame(theme: Theme) -> egui::Frame {
    let style = surface_style(theme, Surface::Card);
    egui::Frame::none()
        .fill(style.fill)
        .stroke(style.stroke)
        .rounding(Rounding::same(CARD_ROUNDING))
        .inner_margin(Margin::same(CARD_PADDING))
}
