// src/constants.rs

pub const WINDOW_WIDTH: f32 = 1000.0;
pub const WINDOW_HEIGHT: f32 = 650.0;
pub const MIN_WINDOW_WIDTH: f32 = 800.0;
pub const MIN_WINDOW_HEIGHT: f32 = 600.0;

pub const SIDE_MENU_WIDTH: f32 = 220.0;
pub const NAV_BUTTON_HEIGHT: f32 = 38.0;

// Spacing between the cards on a page and padding inside them.
pub const UI_SPACING: f32 = 15.0;
pub const CARD_PADDING: f32 = 15.0;
pub const CARD_ROUNDING: f32 = 8.0;

pub const BUTTON_ROUNDING: f32 = 5.0;
pub const BUTTON_FONT_SIZE: f32 = 14.0;
pub const BUTTON_PADDING_X: f32 = 15.0;
pub const BUTTON_PADDING_Y: f32 = 10.0;

pub const PAGE_TITLE_FONT_SIZE: f32 = 22.0;
pub const SECTION_FONT_SIZE: f32 = 16.0;
pub const LABEL_FONT_SIZE: f32 = 14.0;
pub const BODY_FONT_SIZE: f32 = 12.0;
