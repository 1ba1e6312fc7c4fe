// src/ui/mod.rs

pub mod button;
pub mod card;
pub mod nav;

use strum_macros::EnumIter;

use crate::locale::TextKey;

/// The pages reachable from the side menu. The nav label doubles as the
/// page title, as in the original layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, EnumIter)]
pub enum Page {
    Settings,
    #[default]
    Optimization,
    DiskCleanup,
    Software,
}

impl Page {
    pub fn title(self) -> TextKey {
        match self {
            Page::Settings => TextKey::Settings,
            Page::Optimization => TextKey::Optimization,
            Page::DiskCleanup => TextKey::DiskCleanup,
            Page::Software => TextKey::Software,
        }
    }
}
