// src/lib.rs

pub mod binder;
pub mod constants;
pub mod dispatch;
pub mod errors;
pub mod locale;
pub mod prefs;
pub mod theme;
pub mod tools;
pub mod ui;
