//! Error kinds surfaced by the workspace tool.

use thiserror::Error;

/// Everything that can go wrong during one invocation.
///
/// Nothing is retried: each variant is reported to the user as-is.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A required external program could not be found
    #[error("missing dependency: {0}")]
    MissingDependency(String),

    /// Bad combination of command-line arguments
    #[error("usage error: {0}")]
    Usage(String),

    /// Action identifier outside the known set
    #[error("invalid action: {0:?}")]
    InvalidAction(String),

    /// The snapshot has no focused workspace to act on
    #[error("no workspace is focused")]
    NoFocusedWorkspace,

    /// The window manager connection failed or rejected a command
    #[error("window manager IPC failed: {0}")]
    Ipc(String),

    /// The launcher ran but did not produce a usable answer
    #[error("launcher failed: {0}")]
    Launcher(String),
}

impl From<swayipc::Error> for Error {
    fn from(e: swayipc::Error) -> Self {
        Error::Ipc(e.to_string())
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
