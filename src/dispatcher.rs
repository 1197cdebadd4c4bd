//! Maps an [`Action`] to its prompts and window manager commands.
//!
//! Every run is a single pass: fetch a [`WorkspaceState`], optionally ask the
//! launcher for a choice, then send one or more commands. Nothing is retried
//! and commands already sent are never rolled back.

use tracing::{debug, info};

use crate::action::Action;
use crate::error::{Error, Result};
use crate::launcher::{Launcher, MenuOptions};
use crate::sway_client::SwayClient;
use crate::workspace_state::WorkspaceState;

/// A validated request: the action plus its optional destination output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub action: Action,
    pub destination: Option<String>,
}

impl Invocation {
    /// Parse and validate the command-line arguments.
    ///
    /// Runs before the window manager connection is opened, so a bad
    /// combination never touches workspace state.
    pub fn new(action: &str, destination: Option<String>) -> Result<Self> {
        let action: Action = action.parse()?;
        if destination.is_some() && !action.accepts_destination() {
            return Err(Error::Usage(format!(
                "a destination output is only accepted by {}, not {}",
                Action::MoveToSingleOutput,
                action
            )));
        }
        Ok(Invocation {
            action,
            destination,
        })
    }
}

/// Quote a workspace or output name for the sway command parser
fn quote(name: &str) -> String {
    format!("\"{}\"", name.replace('\\', "\\\\").replace('"', "\\\""))
}

/// Focus `workspace` and send it to `output` in one payload
fn relocate_command(workspace: &str, output: &str) -> String {
    format!(
        "workspace --no-auto-back-and-forth {}; move workspace to output {}",
        quote(workspace),
        quote(output)
    )
}

pub struct Dispatcher<C: SwayClient, L: Launcher> {
    client: C,
    launcher: L,
}

impl<C: SwayClient, L: Launcher> Dispatcher<C, L> {
    pub fn new(client: C, launcher: L) -> Self {
        Dispatcher { client, launcher }
    }

    /// Run the requested action, resolving `menu` until a concrete action is picked
    pub fn run(&mut self, invocation: Invocation) -> Result<()> {
        let mut action = invocation.action;
        loop {
            debug!("Dispatching {}", action);
            match action {
                Action::Menu => action = self.choose_action()?,
                Action::Switch => return self.switch(),
                Action::Move => return self.move_container(),
                Action::NextEmpty => return self.next_empty(),
                Action::MoveNextEmpty => return self.move_next_empty(),
                Action::Rename => return self.rename(),
                Action::ClearOutput => return self.clear_output(),
                Action::MoveToSingleOutput => {
                    return self.move_to_single_output(invocation.destination.as_deref());
                }
            }
        }
    }

    fn choose_action(&mut self) -> Result<Action> {
        let entries: Vec<String> = Action::menu_entries().map(|a| a.to_string()).collect();
        let options = MenuOptions::new("action:")
            .selected(Some(Action::Switch.to_string()))
            .no_custom();
        self.launcher.select(&entries, &options)?.trim().parse()
    }

    fn switch(&mut self) -> Result<()> {
        let state = WorkspaceState::fetch(&mut self.client)?;
        let focused = state.focused_workspace().map(|w| w.name.as_str());
        let options = MenuOptions::new("Switch to workspace:").selected(focused);
        let target = self.launcher.select(&state.workspace_names(), &options)?;
        self.client.run_command(&format!("workspace {}", quote(&target)))
    }

    fn move_container(&mut self) -> Result<()> {
        let state = WorkspaceState::fetch(&mut self.client)?;
        let options = MenuOptions::new("Move container to workspace:");
        let target = self.launcher.select(&state.workspace_names(), &options)?;
        self.client
            .run_command(&format!("move container to workspace {}", quote(&target)))
    }

    fn next_empty(&mut self) -> Result<()> {
        let state = WorkspaceState::fetch(&mut self.client)?;
        let num = state.next_empty_workspace_num();
        info!("Next empty workspace is {}", num);
        self.client
            .run_command(&format!("workspace {}", quote(&num.to_string())))
    }

    fn move_next_empty(&mut self) -> Result<()> {
        let state = WorkspaceState::fetch(&mut self.client)?;
        let num = state.next_empty_workspace_num();
        info!("Next empty workspace is {}", num);
        self.client.run_command(&format!(
            "move container to workspace {}",
            quote(&num.to_string())
        ))
    }

    fn rename(&mut self) -> Result<()> {
        let state = WorkspaceState::fetch(&mut self.client)?;
        let current = state.focused_workspace().map(|w| w.name.as_str());
        let options = MenuOptions::new("Rename workspace to:").filter(current);
        let new_name = self.launcher.select(&[], &options)?;
        self.client
            .run_command(&format!("rename workspace to {}", quote(&new_name)))
    }

    fn clear_output(&mut self) -> Result<()> {
        let state = WorkspaceState::fetch(&mut self.client)?;
        let source = state
            .focused_output_name()
            .ok_or(Error::NoFocusedWorkspace)?;

        let options = MenuOptions::new("Move workspaces to output:")
            .selected(Some(source))
            .message(format!("Moving workspaces off {}", source))
            .no_custom();
        let destination = self
            .launcher
            .select(&state.active_output_names(), &options)?;

        for workspace in state.workspaces_on_output(source) {
            self.client
                .run_command(&relocate_command(&workspace.name, &destination))?;
        }
        Ok(())
    }

    fn move_to_single_output(&mut self, destination: Option<&str>) -> Result<()> {
        let state = WorkspaceState::fetch(&mut self.client)?;
        let destination = match destination {
            Some(output) => output.to_string(),
            None => {
                let options = MenuOptions::new("Move workspaces to output:")
                    .selected(state.focused_output_name())
                    .no_custom();
                self.launcher
                    .select(&state.active_output_names(), &options)?
            }
        };

        for workspace in state.workspaces() {
            self.client
                .run_command(&relocate_command(&workspace.name, &destination))?;
        }

        // Moving workspaces shifts focus around; put it back where it started
        if let Some(focused) = state.focused_workspace() {
            self.client.run_command(&format!(
                "workspace --no-auto-back-and-forth {}",
                quote(&focused.name)
            ))?;
        }
        Ok(())
    }
}
