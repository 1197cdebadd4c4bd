//! Point-in-time view of the window manager's workspaces and outputs.
//!
//! A [`WorkspaceState`] is fetched once per action and never refreshed;
//! all queries are answered from that snapshot.

use std::collections::BTreeSet;
use tracing::debug;

use crate::error::Result;
use crate::sway_client::SwayClient;

/// A workspace as reported by the window manager
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    pub name: String,
    /// Leading number of the name, or -1 for unnumbered workspaces
    pub num: i32,
    pub focused: bool,
    /// Name of the output the workspace is assigned to
    pub output: String,
}

/// A display output as reported by the window manager
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Output {
    pub name: String,
    pub active: bool,
}

#[derive(Debug, Clone, Default)]
pub struct WorkspaceState {
    workspaces: Vec<Workspace>,
    outputs: Vec<Output>,
}

impl WorkspaceState {
    pub fn new(workspaces: Vec<Workspace>, outputs: Vec<Output>) -> Self {
        WorkspaceState {
            workspaces,
            outputs,
        }
    }

    /// Query workspaces and outputs from the window manager
    pub fn fetch<C: SwayClient + ?Sized>(client: &mut C) -> Result<Self> {
        let workspaces = client.get_workspaces()?;
        let outputs = client.get_outputs()?;
        debug!(
            "Fetched {} workspaces and {} outputs",
            workspaces.len(),
            outputs.len()
        );
        Ok(Self::new(workspaces, outputs))
    }

    pub fn workspaces(&self) -> &[Workspace] {
        &self.workspaces
    }

    /// All workspace names in the order the window manager reported them
    pub fn workspace_names(&self) -> Vec<String> {
        self.workspaces.iter().map(|w| w.name.clone()).collect()
    }

    pub fn focused_workspace(&self) -> Option<&Workspace> {
        self.workspaces.iter().find(|w| w.focused)
    }

    pub fn numbered_workspace_nums(&self) -> BTreeSet<i32> {
        self.workspaces
            .iter()
            .map(|w| w.num)
            .filter(|num| *num >= 0)
            .collect()
    }

    /// Lowest workspace number not taken by a numbered workspace.
    ///
    /// Walks the sorted numbers against 1, 2, 3, ... and returns the first
    /// position that does not match.
    pub fn next_empty_workspace_num(&self) -> i32 {
        let nums = self.numbered_workspace_nums();
        for (expected, num) in (1..).zip(nums.iter()) {
            if *num != expected {
                return expected;
            }
        }
        nums.len() as i32 + 1
    }

    pub fn workspaces_on_output(&self, output: &str) -> Vec<&Workspace> {
        self.workspaces
            .iter()
            .filter(|w| w.output == output)
            .collect()
    }

    pub fn active_output_names(&self) -> Vec<String> {
        self.outputs
            .iter()
            .filter(|o| o.active)
            .map(|o| o.name.clone())
            .collect()
    }

    pub fn focused_output_name(&self) -> Option<&str> {
        self.focused_workspace().map(|w| w.output.as_str())
    }
}
