// src/theme.rs
//
// Static style table: one semantic palette per theme, plus the
// (theme, surface) -> style lookup the binder and widgets draw from.

use egui::{Color32, Stroke};

use crate::prefs::Theme;

/// Semantic color set for one theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub background_primary: Color32,
    pub background_secondary: Color32,
    pub card: Color32,

    pub label_primary: Color32,
    pub label_secondary: Color32,

    pub accent: Color32,
    pub success: Color32,
    pub danger: Color32,
    pub warning: Color32,

    pub separator: Color32,
    pub nav_hover: Color32,
}

pub const LIGHT_PALETTE: Palette = Palette {
    background_primary: Color32::from_rgb(255, 255, 255),
    background_secondary: Color32::from_rgb(240, 240, 240),
    card: Color32::from_rgb(248, 249, 250),

    label_primary: Color32::from_rgb(0, 0, 0),
    label_secondary: Color32::from_rgb(99, 99, 102),

    accent: Color32::from_rgb(0, 120, 212),
    success: Color32::from_rgb(76, 175, 80),
    danger: Color32::from_rgb(220, 53, 69),
    warning: Color32::from_rgb(255, 152, 0),

    separator: Color32::from_rgb(224, 224, 224),
    nav_hover: Color32::from_rgb(224, 224, 224),
};

pub const DARK_PALETTE: Palette = Palette {
    background_primary: Color32::from_rgb(32, 32, 32),
    background_secondary: Color32::from_rgb(30, 30, 30),
    card: Color32::from_rgb(51, 51, 51),

    label_primary: Color32::from_rgb(255, 255, 255),
    label_secondary: Color32::from_rgb(174, 174, 178),

    accent: Color32::from_rgb(0, 120, 212),
    success: Color32::from_rgb(76, 175, 80),
    danger: Color32::from_rgb(220, 53, 69),
    warning: Color32::from_rgb(255, 152, 0),

    separator: Color32::from_rgb(51, 51, 51),
    nav_hover: Color32::from_rgb(45, 45, 48),
};

impl Theme {
    pub fn palette(self) -> &'static Palette {
        match self {
            Theme::Light => &LIGHT_PALETTE,
            Theme::Dark => &DARK_PALETTE,
        }
    }
}

/// Themed surfaces of the widget tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Surface {
    Window,
    SideMenu,
    Card,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceStyle {
    pub fill: Color32,
    pub stroke: Stroke,
    pub text: Color32,
}

/// Style descriptor for a surface under the given theme. Pure lookup.
pub fn surface_style(theme: Theme, surface: Surface) -> SurfaceStyle {
    let palette = theme.palette();
    match surface {
        Surface::Window => SurfaceStyle {
            fill: palette.background_primary,
            stroke: Stroke::NONE,
            text: palette.label_primary,
        },
        Surface::SideMenu => SurfaceStyle {
            fill: palette.background_secondary,
            stroke: Stroke::new(1.0, palette.separator),
            text: palette.label_primary,
        },
        Surface::Card => SurfaceStyle {
            fill: palette.card,
            stroke: Stroke::new(1.0, palette.separator),
            text: palette.label_primary,
        },
    }
}

/// The accent role of a tool button, resolved against the palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccentRole {
    Primary,
    Success,
    Danger,
    Warning,
}

impl AccentRole {
    pub fn color(self, palette: &Palette) -> Color32 {
        match self {
            AccentRole::Primary => palette.accent,
            AccentRole::Success => palette.success,
            AccentRole::Danger => palette.danger,
            AccentRole::Warning => palette.warning,
        }
    }
}

/// Hover/pressed shading: divides each channel by `factor`.
pub fn darken(color: Color32, factor: f32) -> Color32 {
    let scale = |channel: u8| (channel as f32 / factor).clamp(0.0, 255.0) as u8;
    Color32::from_rgb(scale(color.r()), scale(color.g()), scale(color.b()))
}

/// Context-wide visuals derived from the theme's palette.
pub fn visuals(theme: Theme) -> egui::Visuals {
    let palette = theme.palette();
    let mut visuals = match theme {
        Theme::Light => egui::Visuals::light(),
        Theme::Dark => egui::Visuals::dark(),
    };
    visuals.panel_fill = palette.background_primary;
    visuals.window_fill = palette.card;
    visuals.extreme_bg_color = palette.background_secondary;
    visuals.override_text_color = Some(palette.label_primary);
    visuals.hyperlink_color = palette.accent;
    visuals.selection.bg_fill = palette.accent;
    visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, palette.separator);
    visuals
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    const ALL_SURFACES: [Surface; 3] = [Surface::Window, Surface::SideMenu, Surface::Card];

    #[test]
    fn surface_lookup_is_pure() {
        for theme in Theme::iter() {
            for surface in ALL_SURFACES {
                assert_eq!(
                    surface_style(theme, surface),
                    surface_style(theme, surface)
                );
            }
        }
    }

    #[test]
    fn themes_yield_distinct_surface_fills() {
        for surface in ALL_SURFACES {
            assert_ne!(
                surface_style(Theme::Light, surface).fill,
                surface_style(Theme::Dark, surface).fill,
                "{surface:?} has the same fill in both themes"
            );
        }
    }

    #[test]
    fn darken_never_brightens() {
        let color = Color32::from_rgb(0, 120, 212);
        let darker = darken(color, 1.1);
        assert!(darker.r() <= color.r());
        assert!(darker.g() <= color.g());
        assert!(darker.b() <= color.b());
    }

    #[test]
    fn darken_with_unit_factor_is_identity() {
        let color = Color32::from_rgb(220, 53, 69);
        assert_eq!(darken(color, 1.0), color);
    }

    #[test]
    fn visuals_track_the_palette() {
        for theme in Theme::iter() {
            let palette = theme.palette();
            let visuals = visuals(theme);
            assert_eq!(visuals.panel_fill, palette.background_primary);
            assert_eq!(visuals.window_fill, palette.card);
            assert_eq!(visuals.override_text_color, Some(palette.label_primary));
        }
    }
}
