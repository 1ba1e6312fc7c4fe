// src/tools.rs
//
// Static catalog of the optimization tools, grouped into the cards shown
// on each page. Every action is a literal OS command plus the text keys
// for its button label and notifications.

use strum_macros::EnumIter;

use crate::{dispatch::ToolCommand, locale::TextKey, theme::AccentRole};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter)]
pub enum ToolId {
    UltimatePerformance,
    OpenPowerOptions,
    EnableGameMode,
    DisableGameMode,
    OptimizeTcp,
    DiskCleanup,
    CleanTempFiles,
}

/// One button on a tool card.
#[derive(Clone, Copy, Debug)]
pub struct ToolAction {
    pub id: ToolId,
    pub label: TextKey,
    pub role: AccentRole,
    pub command: ToolCommand,
    /// Notification shown after a successful dispatch. `None` for tools
    /// that open an interactive window of their own.
    pub done: Option<TextKey>,
    /// Prefix of the error notification, completed with the spawn error.
    pub failed: TextKey,
}

/// One rounded card: a titled description plus its action buttons.
#[derive(Clone, Copy, Debug)]
pub struct ToolCard {
    pub title: TextKey,
    pub description: TextKey,
    pub actions: &'static [ToolAction],
}

pub const OPTIMIZATION_CARDS: &[ToolCard] = &[
    ToolCard {
        title: TextKey::PerformanceSection,
        description: TextKey::PerformanceDesc,
        actions: &[
            ToolAction {
                id: ToolId::UltimatePerformance,
                label: TextKey::EnablePerformance,
                role: AccentRole::Primary,
                command: ToolCommand {
                    program: "powershell",
                    args: &[
                        "-Command",
                        r#"Start-Process powershell -ArgumentList '-NoProfile -ExecutionPolicy Bypass -Command "powercfg -duplicatescheme e9a42b02-d5df-448d-aa00-03f14749eb61"' -Verb RunAs"#,
                    ],
                },
                done: Some(TextKey::PerformanceApplied),
                failed: TextKey::PerformanceFailed,
            },
            ToolAction {
                id: ToolId::OpenPowerOptions,
                label: TextKey::OpenPowerOptions,
                role: AccentRole::Success,
                command: ToolCommand {
                    program: "control.exe",
                    args: &["powercfg.cpl"],
                },
                done: None,
                failed: TextKey::PowerOptionsFailed,
            },
        ],
    },
    ToolCard {
        title: TextKey::GameModeSection,
        description: TextKey::GameModeDesc,
        actions: &[
            ToolAction {
                id: ToolId::EnableGameMode,
                label: TextKey::EnableGameMode,
                role: AccentRole::Primary,
                command: ToolCommand {
                    program: "powershell",
                    args: &[
                        "-Command",
                        r"Set-ItemProperty -Path 'HKCU:\Software\Microsoft\GameBar' -Name 'AutoGameModeEnabled' -Value 1",
                    ],
                },
                done: Some(TextKey::GameModeEnabledDone),
                failed: TextKey::GameModeEnableFailed,
            },
            ToolAction {
                id: ToolId::DisableGameMode,
                label: TextKey::DisableGameMode,
                role: AccentRole::Danger,
                command: ToolCommand {
                    program: "powershell",
                    args: &[
                        "-Command",
                        r"Set-ItemProperty -Path 'HKCU:\Software\Microsoft\GameBar' -Name 'AutoGameModeEnabled' -Value 0",
                    ],
                },
                done: Some(TextKey::GameModeDisabledDone),
                failed: TextKey::GameModeDisableFailed,
            },
        ],
    },
    ToolCard {
        title: TextKey::TcpSection,
        description: TextKey::TcpDesc,
        actions: &[ToolAction {
            id: ToolId::OptimizeTcp,
            label: TextKey::OptimizeTcp,
            role: AccentRole::Warning,
            command: ToolCommand {
                program: "netsh",
                args: &["int", "tcp", "set", "global", "autotuninglevel=disabled"],
            },
            done: Some(TextKey::TcpOptimizedDone),
            failed: TextKey::TcpFailed,
        }],
    },
];

pub const DISK_CLEANUP_CARDS: &[ToolCard] = &[
    ToolCard {
        title: TextKey::CleanupSection,
        description: TextKey::CleanupDesc,
        actions: &[ToolAction {
            id: ToolId::DiskCleanup,
            label: TextKey::RunCleanup,
            role: AccentRole::Primary,
            command: ToolCommand {
                program: "cleanmgr",
                args: &[],
            },
            done: Some(TextKey::CleanupLaunchedDone),
            failed: TextKey::CleanupFailed,
        }],
    },
    ToolCard {
        title: TextKey::TempSection,
        description: TextKey::TempDesc,
        actions: &[ToolAction {
            id: ToolId::CleanTempFiles,
            label: TextKey::CleanTemp,
            role: AccentRole::Primary,
            command: ToolCommand {
                program: "powershell",
                args: &[
                    "-Command",
                    r#"Start-Process powershell -ArgumentList '-NoProfile -ExecutionPolicy Bypass -Command "Remove-Item -Path $env:TEMP\* -Recurse -Force -ErrorAction SilentlyContinue"' -Verb RunAs"#,
                ],
            },
            done: Some(TextKey::TempCleanDone),
            failed: TextKey::TempCleanFailed,
        }],
    },
];

/// All cards across all pages, in display order.
pub fn all_cards() -> impl Iterator<Item = &'static ToolCard> {
    OPTIMIZATION_CARDS.iter().chain(DISK_CLEANUP_CARDS.iter())
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;
    use crate::dispatch::{testing::RecordingDispatcher, CommandDispatcher};

    #[test]
    fn catalog_covers_every_tool_exactly_once() {
        let mut seen: Vec<ToolId> = all_cards()
            .flat_map(|card| card.actions.iter().map(|action| action.id))
            .collect();
        for id in ToolId::iter() {
            assert_eq!(
                seen.iter().filter(|seen_id| **seen_id == id).count(),
                1,
                "{id:?} should appear exactly once"
            );
        }
        seen.dedup();
        assert_eq!(seen.len(), ToolId::iter().count());
    }

    #[test]
    fn every_card_has_actions_and_programs() {
        for card in all_cards() {
            assert!(!card.actions.is_empty());
            for action in card.actions {
                assert!(!action.command.program.is_empty());
            }
        }
    }

    #[test]
    fn every_action_dispatches_through_the_capability_seam() {
        let dispatcher = RecordingDispatcher::default();
        let total: usize = all_cards().map(|card| card.actions.len()).sum();
        for card in all_cards() {
            for action in card.actions {
                dispatcher.dispatch(&action.command).unwrap();
            }
        }
        assert_eq!(dispatcher.dispatched.borrow().len(), total);
        assert!(dispatcher
            .dispatched
            .borrow()
            .iter()
            .any(|line| line.starts_with("netsh int tcp")));
    }

    #[test]
    fn failure_prefixes_are_distinct_from_success_messages() {
        for card in all_cards() {
            for action in card.actions {
                if let Some(done) = action.done {
                    assert_ne!(done, action.failed, "{:?}", action.id);
                }
            }
        }
    }
}
