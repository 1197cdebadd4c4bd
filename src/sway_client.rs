//! Sway IPC abstraction for testability.
//!
//! This module provides a trait that abstracts the handful of Sway IPC
//! operations the tool needs, allowing for mock implementations in tests.

use swayipc::Connection;
use tracing::{debug, info};

use crate::error::Result;
use crate::workspace_state::{Output, Workspace};

/// Trait for Sway IPC operations.
pub trait SwayClient {
    /// Get the list of workspaces
    fn get_workspaces(&mut self) -> Result<Vec<Workspace>>;

    /// Get the list of outputs
    fn get_outputs(&mut self) -> Result<Vec<Output>>;

    /// Run a command payload, failing if any of its commands is rejected
    fn run_command(&mut self, command: &str) -> Result<()>;
}

/// Real implementation using swayipc
pub struct RealSwayClient {
    connection: Connection,
}

impl RealSwayClient {
    /// Create a new connection to Sway
    pub fn new() -> Result<Self> {
        let connection = Connection::new()?;
        Ok(RealSwayClient { connection })
    }
}

impl SwayClient for RealSwayClient {
    fn get_workspaces(&mut self) -> Result<Vec<Workspace>> {
        let workspaces = self.connection.get_workspaces()?;
        Ok(workspaces
            .into_iter()
            .map(|w| Workspace {
                name: w.name,
                num: w.num,
                focused: w.focused,
                output: w.output,
            })
            .collect())
    }

    fn get_outputs(&mut self) -> Result<Vec<Output>> {
        let outputs = self.connection.get_outputs()?;
        Ok(outputs
            .into_iter()
            .map(|o| Output {
                name: o.name,
                active: o.active,
            })
            .collect())
    }

    fn run_command(&mut self, command: &str) -> Result<()> {
        info!("Running: {}", command);
        // One outcome per command in a ';'-separated payload
        for outcome in self.connection.run_command(command)? {
            outcome?;
        }
        Ok(())
    }
}

/// Forwards queries to the wrapped client but only logs commands
pub struct DryRunClient<C: SwayClient> {
    inner: C,
}

impl<C: SwayClient> DryRunClient<C> {
    pub fn new(inner: C) -> Self {
        DryRunClient { inner }
    }
}

impl<C: SwayClient> SwayClient for DryRunClient<C> {
    fn get_workspaces(&mut self) -> Result<Vec<Workspace>> {
        self.inner.get_workspaces()
    }

    fn get_outputs(&mut self) -> Result<Vec<Output>> {
        self.inner.get_outputs()
    }

    fn run_command(&mut self, command: &str) -> Result<()> {
        info!("Dry run, not sending: {}", command);
        debug!("Command skipped, window manager state unchanged");
        Ok(())
    }
}

impl<C: SwayClient + ?Sized> SwayClient for Box<C> {
    fn get_workspaces(&mut self) -> Result<Vec<Workspace>> {
        (**self).get_workspaces()
    }

    fn get_outputs(&mut self) -> Result<Vec<Output>> {
        (**self).get_outputs()
    }

    fn run_command(&mut self, command: &str) -> Result<()> {
        (**self).run_command(command)
    }
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use crate::error::Error;

    /// In-memory window manager that records every command it receives
    #[derive(Debug, Default)]
    pub struct MockSwayClient {
        pub workspaces: Vec<Workspace>,
        pub outputs: Vec<Output>,
        pub commands: Vec<String>,
        pub queries: usize,
        /// Reject any command containing this text
        pub reject: Option<String>,
    }

    impl MockSwayClient {
        pub fn new(workspaces: Vec<Workspace>, outputs: Vec<Output>) -> Self {
            MockSwayClient {
                workspaces,
                outputs,
                ..Default::default()
            }
        }
    }

    impl SwayClient for MockSwayClient {
        fn get_workspaces(&mut self) -> Result<Vec<Workspace>> {
            self.queries += 1;
            Ok(self.workspaces.clone())
        }

        fn get_outputs(&mut self) -> Result<Vec<Output>> {
            self.queries += 1;
            Ok(self.outputs.clone())
        }

        fn run_command(&mut self, command: &str) -> Result<()> {
            if let Some(ref needle) = self.reject
                && command.contains(needle.as_str())
            {
                return Err(Error::Ipc(format!("rejected: {}", command)));
            }
            self.commands.push(command.to_string());
            Ok(())
        }
    }
}
