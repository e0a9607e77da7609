use std::time::Duration;

/// The state of the virtual machine, as reported by the execution engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExecutionStatus {
    Stopped,

    /// The virtual machine is running `shreds` shreds, and has been for `elapsed`.
    Running { shreds: usize, elapsed: Duration },

    Error(String),
}

/// What a player view shows, reduced from an [ExecutionStatus].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerState {
    Stopped,
    Running,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusProjection {
    pub state: PlayerState,
    pub label: String,
}

impl StatusProjection {
    pub fn project(title: &str, status: &ExecutionStatus) -> StatusProjection {
        match status {
            ExecutionStatus::Stopped => StatusProjection {
                state: PlayerState::Stopped,
                label: format!("{title} (stopped)"),
            },
            ExecutionStatus::Running { shreds, elapsed } => {
                let noun = if *shreds == 1 { "shred" } else { "shreds" };
                StatusProjection {
                    state: PlayerState::Running,
                    label: format!("{title} ({shreds} {noun}, {})", format_elapsed(*elapsed)),
                }
            }
            ExecutionStatus::Error(reason) => StatusProjection {
                state: PlayerState::Error,
                label: format!("{title} (error: {reason})"),
            },
        }
    }
}

// Minutes and seconds, as a transport display would show them.
fn format_elapsed(elapsed: Duration) -> String {
    let seconds = elapsed.as_secs();
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
