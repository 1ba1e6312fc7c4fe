// src/binder.rs
//
// Presentation binder: re-applies the static style table to the egui
// context for a given preference. Text binding happens at draw time,
// where every label reads the text table with the current language, so a
// single `apply` plus the next frame re-binds the full current widget
// set. Binding never touches the preference store.

use anyhow::Context as _;
use egui::Context;

use crate::{prefs::Preference, theme};

/// Installs the theme-appropriate visuals for the given preference.
/// Idempotent: applying the same preference twice leaves the context
/// style unchanged.
pub fn apply(ctx: &Context, prefs: &Preference) {
    ctx.set_visuals(theme::visuals(prefs.theme));
}

// Candidate system fonts with CJK coverage, tried in order. Microsoft
// YaHei is the face the original tool used.
const CJK_FONT_CANDIDATES: &[&str] = &[
    r"C:\Windows\Fonts\msyh.ttc",
    r"C:\Windows\Fonts\msyh.ttf",
    r"C:\Windows\Fonts\simhei.ttf",
];

/// Loads a CJK-capable proportional font into the context. Called once at
/// startup; the default egui fonts cannot render the Chinese table.
pub fn install_cjk_font(ctx: &Context) {
    match load_cjk_font() {
        Ok((name, bytes)) => {
            let mut fonts = egui::FontDefinitions::default();
            fonts
                .font_data
                .insert(name.clone(), egui::FontData::from_owned(bytes));
            fonts
                .families
                .entry(egui::FontFamily::Proportional)
                .or_default()
                .insert(0, name.clone());
            fonts
                .families
                .entry(egui::FontFamily::Monospace)
                .or_default()
                .push(name);
            ctx.set_fonts(fonts);
        }
        Err(e) => {
            // Non-fatal: the en table still renders with the defaults.
            tracing::warn!("No CJK font installed: {e:#}");
        }
    }
}

fn load_cjk_font() -> anyhow::Result<(String, Vec<u8>)> {
    for path in CJK_FONT_CANDIDATES {
        if let Ok(bytes) = std::fs::read(path) {
            tracing::debug!("Loaded CJK font from {path}");
            return Ok(("cjk".to_owned(), bytes));
        }
    }
    Err(anyhow::anyhow!("none of the candidate fonts exist"))
        .context("looked in the system font directory")
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;
    use crate::prefs::{Language, Theme};

    fn visual_fingerprint(ctx: &Context) -> (egui::Color32, egui::Color32, Option<egui::Color32>) {
        let visuals = ctx.style().visuals.clone();
        (
            visuals.panel_fill,
            visuals.window_fill,
            visuals.override_text_color,
        )
    }

    #[test]
    fn apply_is_idempotent() {
        for language in Language::iter() {
            for theme in Theme::iter() {
                let prefs = Preference { language, theme };
                let ctx = Context::default();
                apply(&ctx, &prefs);
                let first = visual_fingerprint(&ctx);
                apply(&ctx, &prefs);
                assert_eq!(first, visual_fingerprint(&ctx), "{prefs:?}");
            }
        }
    }

    #[test]
    fn switching_back_to_light_restores_the_light_descriptors() {
        let ctx = Context::default();
        let mut prefs = Preference {
            theme: Theme::Dark,
            ..Preference::default()
        };
        apply(&ctx, &prefs);

        prefs.theme = Theme::Light;
        apply(&ctx, &prefs);

        let fresh = Context::default();
        apply(&fresh, &prefs);
        assert_eq!(visual_fingerprint(&ctx), visual_fingerprint(&fresh));
    }

    #[test]
    fn themes_produce_distinct_context_styles() {
        let light = Context::default();
        apply(&light, &Preference::default());

        let dark = Context::default();
        apply(
            &dark,
            &Preference {
                theme: Theme::Dark,
                ..Preference::default()
            },
        );

        assert_ne!(visual_fingerprint(&light), visual_fingerprint(&dark));
    }
}
