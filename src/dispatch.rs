// src/dispatch.rs
//
// Fire-and-forget dispatch of OS utility commands. The spawned child is
// never waited on and its exit status is never inspected, so the success
// notifications shown to the user only state that the command was issued.

use std::{fmt, process::Command};

pub use crate::errors::DispatchError;

/// A literal command line handed to the operating system.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToolCommand {
    pub program: &'static str,
    pub args: &'static [&'static str],
}

impl fmt::Display for ToolCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// The capability the UI depends on to run external commands. A trait so
/// tests can substitute a recording mock.
pub trait CommandDispatcher {
    fn dispatch(&self, command: &ToolCommand) -> Result<(), DispatchError>;
}

/// Spawns the command as a detached process.
#[derive(Clone, Copy, Debug, Default)]
pub struct DetachedDispatcher;

#[cfg(windows)]
const CREATE_NO_WINDOW: u32 = 0x0800_0000;

impl CommandDispatcher for DetachedDispatcher {
    fn dispatch(&self, command: &ToolCommand) -> Result<(), DispatchError> {
        let mut cmd = Command::new(command.program);
        cmd.args(command.args);

        #[cfg(windows)]
        {
            use std::os::windows::process::CommandExt;
            cmd.creation_flags(CREATE_NO_WINDOW);
        }

        match cmd.spawn() {
            Ok(child) => {
                tracing::debug!("Dispatched `{}` (pid {})", command, child.id());
                // Detached: the child is dropped, not waited on.
                drop(child);
                Ok(())
            }
            Err(source) => Err(DispatchError::Spawn {
                program: command.program,
                source,
            }),
        }
    }
}

#[cfg(test)]
pub mod testing {
    use std::cell::RefCell;

    use super::*;

    /// Records dispatched command lines; fails on demand.
    #[derive(Default)]
    pub struct RecordingDispatcher {
        pub dispatched: RefCell<Vec<String>>,
        pub fail: bool,
    }

    impl CommandDispatcher for RecordingDispatcher {
        fn dispatch(&self, command: &ToolCommand) -> Result<(), DispatchError> {
            if self.fail {
                return Err(DispatchError::Spawn {
                    program: command.program,
                    source: std::io::Error::new(std::io::ErrorKind::NotFound, "mock"),
                });
            }
            self.dispatched.borrow_mut().push(command.to_string());
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{testing::RecordingDispatcher, *};

    #[test]
    fn command_line_formatting() {
        let command = ToolCommand {
            program: "netsh",
            args: &["int", "tcp", "set", "global", "autotuninglevel=disabled"],
        };
        assert_eq!(
            command.to_string(),
            "netsh int tcp set global autotuninglevel=disabled"
        );
    }

    #[test]
    fn spawning_a_nonexistent_program_fails() {
        let command = ToolCommand {
            program: "winoptimize-no-such-program",
            args: &[],
        };
        let err = DetachedDispatcher.dispatch(&command).unwrap_err();
        assert!(matches!(
            err,
            DispatchError::Spawn {
                program: "winoptimize-no-such-program",
                ..
            }
        ));
    }

    #[test]
    fn recording_dispatcher_observes_the_command() {
        let dispatcher = RecordingDispatcher::default();
        let command = ToolCommand {
            program: "cleanmgr",
            args: &[],
        };
        dispatcher.dispatch(&command).unwrap();
        assert_eq!(*dispatcher.dispatched.borrow(), vec!["cleanmgr".to_string()]);
    }
}
