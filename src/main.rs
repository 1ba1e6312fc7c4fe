// src/main.rs
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::{egui, App, Frame, NativeOptions};
use egui::{FontId, Margin, RichText};
use egui_dialogs::{DialogDetails, Dialogs, StandardDialog, StandardReply};
use strum::IntoEnumIterator;
use tracing::Level;
use winoptimize::{
    binder,
    constants::{
        BODY_FONT_SIZE, LABEL_FONT_SIZE, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH,
        PAGE_TITLE_FONT_SIZE, SECTION_FONT_SIZE, SIDE_MENU_WIDTH, UI_SPACING, WINDOW_HEIGHT,
        WINDOW_WIDTH,
    },
    dispatch::{CommandDispatcher, DetachedDispatcher},
    locale::TextKey,
    prefs::{Language, Preference, PreferenceStore, Theme},
    theme::{self, Surface},
    tools::{ToolAction, ToolCard, DISK_CLEANUP_CARDS, OPTIMIZATION_CARDS},
    ui::{button::AccentButton, card, nav::NavButton, Page},
};

pub struct WinOptimizeApp {
    /// The current preference; the single piece of persistent state.
    prefs: Preference,
    store: PreferenceStore,
    dispatcher: Box<dyn CommandDispatcher>,
    page: Page,
    dialogs: Dialogs<'static>,
}

impl WinOptimizeApp {
    fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let store = PreferenceStore::default();
        let prefs = store.load();
        tracing::debug!("Loaded preference {:?} from {:?}", prefs, store.path());

        binder::install_cjk_font(&cc.egui_ctx);
        binder::apply(&cc.egui_ctx, &prefs);

        Self {
            prefs,
            store,
            dispatcher: Box::new(DetachedDispatcher),
            page: Page::default(),
            dialogs: Dialogs::new(),
        }
    }

    /// One toggle transition: set the value, re-bind the UI, persist. A
    /// failed save is logged and the switched in-memory preference stands.
    fn apply_and_save(&mut self, ctx: &egui::Context) {
        binder::apply(ctx, &self.prefs);
        if let Err(e) = self.store.save(&self.prefs) {
            tracing::warn!("Failed to persist preference: {e}");
        }
    }

    fn set_language(&mut self, ctx: &egui::Context, language: Language) {
        if self.prefs.language != language {
            self.prefs.language = language;
            self.apply_and_save(ctx);
        }
    }

    fn set_theme(&mut self, ctx: &egui::Context, theme: Theme) {
        if self.prefs.theme != theme {
            self.prefs.theme = theme;
            self.apply_and_save(ctx);
        }
    }

    /// Dispatches a tool command and notifies the user in the current
    /// language. Exit status is never inspected: the success dialog only
    /// states that the command was issued.
    fn run_tool(&mut self, action: &ToolAction) {
        let lang = self.prefs.language;
        match self.dispatcher.dispatch(&action.command) {
            Ok(()) => {
                tracing::debug!("{:?} dispatched", action.id);
                if let Some(done) = action.done {
                    self.dialogs.add(DialogDetails::new(
                        StandardDialog::info(
                            TextKey::DialogSuccess.localized(lang),
                            done.localized(lang),
                        )
                        .buttons(vec![("OK".into(), StandardReply::Ok)]),
                    ));
                }
            }
            Err(e) => {
                tracing::error!("{:?} dispatch failed: {e}", action.id);
                self.dialogs.add(DialogDetails::new(
                    StandardDialog::error(
                        TextKey::DialogError.localized(lang),
                        format!("{}: {e}", action.failed.localized(lang)),
                    )
                    .buttons(vec![("OK".into(), StandardReply::Ok)]),
                ));
            }
        }
    }

    fn draw_side_menu(&mut self, ctx: &egui::Context) {
        let lang = self.prefs.language;
        let style = theme::surface_style(self.prefs.theme, Surface::SideMenu);
        let palette = self.prefs.theme.palette();

        egui::SidePanel::left("side_menu")
            .exact_width(SIDE_MENU_WIDTH)
            .resizable(false)
            .frame(
                egui::Frame::none()
                    .fill(style.fill)
                    .inner_margin(Margin::symmetric(10.0, 20.0)),
            )
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new("WinOptimize")
                            .font(FontId::proportional(18.0))
                            .strong()
                            .color(palette.accent),
                    );
                });
                ui.add_space(25.0);

                for page in Page::iter() {
                    let label = page.title().localized(lang);
                    if ui
                        .add(NavButton::new(label, self.page == page, palette))
                        .clicked()
                    {
                        self.page = page;
                    }
                    ui.add_space(8.0);
                }
            });
    }

    fn draw_settings_page(&mut self, ui: &mut egui::Ui) {
        let lang = self.prefs.language;
        let theme = self.prefs.theme;
        let palette = theme.palette();
        let ctx = ui.ctx().clone();

        page_title(ui, TextKey::Settings.localized(lang));

        let mut new_language = None;
        let mut new_theme = None;

        card::card_frame(theme).show(ui, |ui| {
            section_title(ui, TextKey::LanguageSection.localized(lang));
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(TextKey::LanguageLabel.localized(lang))
                        .font(FontId::proportional(LABEL_FONT_SIZE)),
                );
                // The selector labels stay in their own language.
                if ui
                    .add(
                        AccentButton::new("中文", palette.accent)
                            .selected(lang == Language::Cn),
                    )
                    .clicked()
                {
                    new_language = Some(Language::Cn);
                }
                if ui
                    .add(
                        AccentButton::new("English", palette.accent)
                            .selected(lang == Language::En),
                    )
                    .clicked()
                {
                    new_language = Some(Language::En);
                }
            });
        });
        ui.add_space(UI_SPACING);

        card::card_frame(theme).show(ui, |ui| {
            section_title(ui, TextKey::ThemeSection.localized(lang));
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(TextKey::ThemeLabel.localized(lang))
                        .font(FontId::proportional(LABEL_FONT_SIZE)),
                );
                if ui
                    .add(
                        AccentButton::new(TextKey::ThemeLight.localized(lang), palette.accent)
                            .selected(theme == Theme::Light),
                    )
                    .clicked()
                {
                    new_theme = Some(Theme::Light);
                }
                if ui
                    .add(
                        AccentButton::new(TextKey::ThemeDark.localized(lang), palette.accent)
                            .selected(theme == Theme::Dark),
                    )
                    .clicked()
                {
                    new_theme = Some(Theme::Dark);
                }
            });
        });
        ui.add_space(UI_SPACING);

        card::card_frame(theme).show(ui, |ui| {
            section_title(ui, TextKey::AboutSection.localized(lang));
            ui.label(
                RichText::new(TextKey::AboutText.localized(lang))
                    .font(FontId::proportional(BODY_FONT_SIZE))
                    .color(palette.label_secondary),
            );
        });

        if let Some(language) = new_language {
            self.set_language(&ctx, language);
        }
        if let Some(theme) = new_theme {
            self.set_theme(&ctx, theme);
        }
    }

    fn draw_tool_page(&mut self, ui: &mut egui::Ui, title: TextKey, cards: &'static [ToolCard]) {
        let lang = self.prefs.language;
        let theme = self.prefs.theme;
        let palette = theme.palette();

        page_title(ui, title.localized(lang));

        let mut clicked: Option<&'static ToolAction> = None;
        for tool_card in cards {
            card::card_frame(theme).show(ui, |ui| {
                section_title(ui, tool_card.title.localized(lang));
                ui.label(
                    RichText::new(tool_card.description.localized(lang))
                        .font(FontId::proportional(BODY_FONT_SIZE))
                        .color(palette.label_secondary),
                );
                ui.add_space(UI_SPACING / 3.0);
                ui.horizontal(|ui| {
                    for action in tool_card.actions {
                        if ui
                            .add(AccentButton::new(
                                action.label.localized(lang),
                                action.role.color(palette),
                            ))
                            .clicked()
                        {
                            clicked = Some(action);
                        }
                    }
                });
            });
            ui.add_space(UI_SPACING);
        }

        if let Some(action) = clicked {
            self.run_tool(action);
        }
    }

    fn draw_software_page(&mut self, ui: &mut egui::Ui) {
        let lang = self.prefs.language;
        let palette = self.prefs.theme.palette();

        page_title(ui, TextKey::Software.localized(lang));
        card::card_frame(self.prefs.theme).show(ui, |ui| {
            ui.label(
                RichText::new(TextKey::SoftwareDesc.localized(lang))
                    .font(FontId::proportional(BODY_FONT_SIZE))
                    .color(palette.label_secondary),
            );
        });
    }
}

fn page_title(ui: &mut egui::Ui, text: &str) {
    ui.label(
        RichText::new(text)
            .font(FontId::proportional(PAGE_TITLE_FONT_SIZE))
            .strong(),
    );
    ui.add_space(UI_SPACING);
}

fn section_title(ui: &mut egui::Ui, text: &str) {
    ui.label(
        RichText::new(text)
            .font(FontId::proportional(SECTION_FONT_SIZE))
            .strong(),
    );
    ui.add_space(UI_SPACING / 3.0);
}

impl App for WinOptimizeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        self.draw_side_menu(ctx);

        let window = theme::surface_style(self.prefs.theme, Surface::Window);
        egui::CentralPanel::default()
            .frame(
                egui::Frame::none()
                    .fill(window.fill)
                    .inner_margin(Margin::same(20.0)),
            )
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false; 2])
                    .show(ui, |ui| match self.page {
                        Page::Settings => self.draw_settings_page(ui),
                        Page::Optimization => {
                            self.draw_tool_page(ui, TextKey::Optimization, OPTIMIZATION_CARDS)
                        }
                        Page::DiskCleanup => {
                            self.draw_tool_page(ui, TextKey::DiskCleanup, DISK_CLEANUP_CARDS)
                        }
                        Page::Software => self.draw_software_page(ui),
                    });
            });

        let _ = self.dialogs.show(ctx);
    }
}

fn main() -> eframe::Result<()> {
    // Initialize logging based on build mode
    #[cfg(debug_assertions)]
    {
        tracing_subscriber::fmt()
            .with_max_level(Level::DEBUG)
            .with_target(false)
            .init();
    }

    #[cfg(not(debug_assertions))]
    {
        // In release mode, set up a no-op subscriber to disable logging
        use tracing_subscriber::Registry;
        let noop_subscriber = Registry::default();
        tracing::subscriber::set_global_default(noop_subscriber)
            .expect("Failed to set global subscriber.");
    }

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([WINDOW_WIDTH, WINDOW_HEIGHT])
            .with_min_inner_size([MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT]),
        ..Default::default()
    };

    let run_span = tracing::span!(Level::INFO, "Run Native");
    run_span.in_scope(|| {
        eframe::run_native(
            "WinOptimize",
            options,
            Box::new(|cc| Ok(Box::new(WinOptimizeApp::new(cc)))),
        )
    })
}
