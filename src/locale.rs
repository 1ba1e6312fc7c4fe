// src/locale.rs
//
// Static bilingual text table. Every text-bearing control in the UI is
// keyed here, so switching the language re-binds the whole widget tree
// from a single lookup.

use strum_macros::EnumIter;

use crate::prefs::Language;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter)]
pub enum TextKey {
    // Navigation entries double as page titles.
    Settings,
    Optimization,
    DiskCleanup,
    Software,

    // Settings page
    LanguageSection,
    LanguageLabel,
    ThemeSection,
    ThemeLabel,
    ThemeLight,
    ThemeDark,
    AboutSection,
    AboutText,

    // Optimization page
    PerformanceSection,
    PerformanceDesc,
    EnablePerformance,
    OpenPowerOptions,
    GameModeSection,
    GameModeDesc,
    EnableGameMode,
    DisableGameMode,
    TcpSection,
    TcpDesc,
    OptimizeTcp,

    // Disk cleanup page
    CleanupSection,
    CleanupDesc,
    RunCleanup,
    TempSection,
    TempDesc,
    CleanTemp,

    // Software page
    SoftwareDesc,

    // Dialog titles
    DialogSuccess,
    DialogError,

    // Post-dispatch notifications
    PerformanceApplied,
    GameModeEnabledDone,
    GameModeDisabledDone,
    TcpOptimizedDone,
    CleanupLaunchedDone,
    TempCleanDone,

    // Dispatch failure prefixes, completed with the spawn error.
    PerformanceFailed,
    PowerOptionsFailed,
    GameModeEnableFailed,
    GameModeDisableFailed,
    TcpFailed,
    CleanupFailed,
    TempCleanFailed,
}

impl TextKey {
    pub fn localized(self, language: Language) -> &'static str {
        match language {
            Language::Cn => self.cn(),
            Language::En => self.en(),
        }
    }

    fn cn(self) -> &'static str {
        match self {
            TextKey::Settings => "设置",
            TextKey::Optimization => "系统优化",
            TextKey::DiskCleanup => "磁盘清理",
            TextKey::Software => "软件管理",

            TextKey::LanguageSection => "语言设置",
            TextKey::LanguageLabel => "选择语言：",
            TextKey::ThemeSection => "主题设置",
            TextKey::ThemeLabel => "选择主题：",
            TextKey::ThemeLight => "浅色",
            TextKey::ThemeDark => "深色",
            TextKey::AboutSection => "关于",
            TextKey::AboutText => {
                "WinOptimize 是一款功能强大的 Windows 系统优化工具，提供系统优化、磁盘清理等功能，帮助您提升系统性能。"
            }

            TextKey::PerformanceSection => "卓越性能模式",
            TextKey::PerformanceDesc => {
                "启用 Windows 隐藏的卓越性能电源计划，提高系统响应速度和性能。"
            }
            TextKey::EnablePerformance => "开启卓越性能",
            TextKey::OpenPowerOptions => "打开电源管理",
            TextKey::GameModeSection => "游戏模式",
            TextKey::GameModeDesc => {
                "开启或关闭 Windows 游戏模式，优化游戏性能，提供更好的游戏体验。"
            }
            TextKey::EnableGameMode => "开启游戏模式",
            TextKey::DisableGameMode => "关闭游戏模式",
            TextKey::TcpSection => "优化 TCP/IP 协议栈",
            TextKey::TcpDesc => "通过优化 TCP/IP 协议栈提升网络性能。",
            TextKey::OptimizeTcp => "优化 TCP/IP 协议栈",

            TextKey::CleanupSection => "Windows 磁盘清理",
            TextKey::CleanupDesc => {
                "使用 Windows 内置的磁盘清理工具清理系统垃圾文件，释放磁盘空间。"
            }
            TextKey::RunCleanup => "运行磁盘清理",
            TextKey::TempSection => "清理临时文件",
            TextKey::TempDesc => {
                "清理系统临时文件夹中的文件，释放磁盘空间并提高系统性能。"
            }
            TextKey::CleanTemp => "清理临时文件",

            TextKey::SoftwareDesc => {
                "这里是软件管理页面，可以添加软件安装、卸载和管理功能。"
            }

            TextKey::DialogSuccess => "成功",
            TextKey::DialogError => "错误",

            TextKey::PerformanceApplied => "已尝试开启卓越性能模式，请检查电源选项中是否已添加。",
            TextKey::GameModeEnabledDone => "已开启Windows游戏模式。",
            TextKey::GameModeDisabledDone => "已关闭Windows游戏模式。",
            TextKey::TcpOptimizedDone => "已执行TCP/IP协议栈优化命令，重启电脑后生效。",
            TextKey::CleanupLaunchedDone => "已启动磁盘清理实用工具。",
            TextKey::TempCleanDone => "已启动临时文件清理进程。",

            TextKey::PerformanceFailed => "无法开启卓越性能模式",
            TextKey::PowerOptionsFailed => "无法打开电源选项",
            TextKey::GameModeEnableFailed => "无法开启游戏模式",
            TextKey::GameModeDisableFailed => "无法关闭游戏模式",
            TextKey::TcpFailed => "无法优化TCP/IP协议栈",
            TextKey::CleanupFailed => "无法启动磁盘清理",
            TextKey::TempCleanFailed => "无法清理临时文件",
        }
    }

    fn en(self) -> &'static str {
        match self {
            TextKey::Settings => "Settings",
            TextKey::Optimization => "System Optimization",
            TextKey::DiskCleanup => "Disk Cleanup",
            TextKey::Software => "Software Manager",

            TextKey::LanguageSection => "Language Settings",
            TextKey::LanguageLabel => "Select Language:",
            TextKey::ThemeSection => "Theme Settings",
            TextKey::ThemeLabel => "Select Theme:",
            TextKey::ThemeLight => "Light",
            TextKey::ThemeDark => "Dark",
            TextKey::AboutSection => "About",
            TextKey::AboutText => {
                "WinOptimize is a powerful Windows system optimization tool that provides system optimization, disk cleanup and other features to help you improve system performance."
            }

            TextKey::PerformanceSection => "Ultimate Performance Mode",
            TextKey::PerformanceDesc => {
                "Enable Windows hidden Ultimate Performance power plan to improve system responsiveness and performance."
            }
            TextKey::EnablePerformance => "Enable Ultimate Performance",
            TextKey::OpenPowerOptions => "Open Power Options",
            TextKey::GameModeSection => "Game Mode",
            TextKey::GameModeDesc => {
                "Enable or disable Windows Game Mode for better gaming experience."
            }
            TextKey::EnableGameMode => "Enable Game Mode",
            TextKey::DisableGameMode => "Disable Game Mode",
            TextKey::TcpSection => "Optimize TCP/IP Stack",
            TextKey::TcpDesc => "Optimize the TCP/IP stack to improve network performance.",
            TextKey::OptimizeTcp => "Optimize TCP/IP Stack",

            TextKey::CleanupSection => "Windows Disk Cleanup",
            TextKey::CleanupDesc => {
                "Use Windows built-in disk cleanup tool to clean up system junk files and free up disk space."
            }
            TextKey::RunCleanup => "Run Disk Cleanup",
            TextKey::TempSection => "Clean Temporary Files",
            TextKey::TempDesc => {
                "Clean files in system temporary folders to free up disk space and improve system performance."
            }
            TextKey::CleanTemp => "Clean Temp Files",

            TextKey::SoftwareDesc => {
                "This is the software management page. You can add software install, uninstall, and management features."
            }

            TextKey::DialogSuccess => "Success",
            TextKey::DialogError => "Error",

            TextKey::PerformanceApplied => {
                "Ultimate Performance mode has been enabled. Please check your power options."
            }
            TextKey::GameModeEnabledDone => "Windows Game Mode has been enabled.",
            TextKey::GameModeDisabledDone => "Windows Game Mode has been disabled.",
            TextKey::TcpOptimizedDone => {
                "TCP/IP stack optimization command executed. Please restart your computer for changes to take effect."
            }
            TextKey::CleanupLaunchedDone => "Disk Cleanup utility has been launched.",
            TextKey::TempCleanDone => "Temporary files cleanup process has been initiated.",

            TextKey::PerformanceFailed => "Failed to enable Ultimate Performance mode",
            TextKey::PowerOptionsFailed => "Failed to open power options",
            TextKey::GameModeEnableFailed => "Failed to enable Game Mode",
            TextKey::GameModeDisableFailed => "Failed to disable Game Mode",
            TextKey::TcpFailed => "Failed to optimize TCP/IP stack",
            TextKey::CleanupFailed => "Failed to launch Disk Cleanup",
            TextKey::TempCleanFailed => "Failed to clean temporary files",
        }
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn every_key_is_covered_in_both_languages() {
        for key in TextKey::iter() {
            assert!(!key.localized(Language::Cn).is_empty(), "{key:?} cn empty");
            assert!(!key.localized(Language::En).is_empty(), "{key:?} en empty");
        }
    }

    #[test]
    fn language_switch_changes_every_string() {
        // A control re-bound to the en table must never keep its cn string.
        for key in TextKey::iter() {
            assert_ne!(
                key.localized(Language::Cn),
                key.localized(Language::En),
                "{key:?} is identical in both languages"
            );
        }
    }

    #[test]
    fn english_table_is_ascii() {
        for key in TextKey::iter() {
            assert!(
                key.localized(Language::En).is_ascii(),
                "{key:?} en contains non-ASCII text"
            );
        }
    }

    #[test]
    fn lookup_is_stable() {
        for key in TextKey::iter() {
            assert_eq!(key.localized(Language::Cn), key.localized(Language::Cn));
            assert_eq!(key.localized(Language::En), key.localized(Language::En));
        }
    }
}
