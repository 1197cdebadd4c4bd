use crate::error::Error;
use std::fmt;
use std::str::FromStr;

/// Actions the tool can perform on the workspace layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Ask the user which action to run
    Menu,
    /// Switch to a workspace picked from the list
    Switch,
    /// Move the focused container to a workspace picked from the list
    Move,
    /// Switch to the lowest unused workspace number
    NextEmpty,
    /// Move the focused container to the lowest unused workspace number
    MoveNextEmpty,
    /// Rename the focused workspace
    Rename,
    /// Move every workspace off the focused output
    ClearOutput,
    /// Gather every workspace onto one output
    MoveToSingleOutput,
}

impl Action {
    /// Every action in menu order
    pub const ALL: [Action; 8] = [
        Action::Menu,
        Action::Switch,
        Action::Move,
        Action::NextEmpty,
        Action::MoveNextEmpty,
        Action::Rename,
        Action::ClearOutput,
        Action::MoveToSingleOutput,
    ];

    /// Concrete actions offered by the action menu
    pub fn menu_entries() -> impl Iterator<Item = Action> {
        Self::ALL.into_iter().filter(|a| *a != Action::Menu)
    }

    /// Whether the optional destination argument makes sense for this action
    pub fn accepts_destination(self) -> bool {
        self == Action::MoveToSingleOutput
    }
}

impl FromStr for Action {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "menu" => Ok(Action::Menu),
            "switch" => Ok(Action::Switch),
            "move" => Ok(Action::Move),
            "next-empty" => Ok(Action::NextEmpty),
            "move-next-empty" => Ok(Action::MoveNextEmpty),
            "rename" => Ok(Action::Rename),
            "clear-output" => Ok(Action::ClearOutput),
            "move-to-single-output" => Ok(Action::MoveToSingleOutput),
            other => Err(Error::InvalidAction(other.to_string())),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Action::Menu => "menu",
            Action::Switch => "switch",
            Action::Move => "move",
            Action::NextEmpty => "next-empty",
            Action::MoveNextEmpty => "move-next-empty",
            Action::Rename => "rename",
            Action::ClearOutput => "clear-output",
            Action::MoveToSingleOutput => "move-to-single-output",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_from_str() {
        assert_eq!("menu".parse(), Ok(Action::Menu));
        assert_eq!("switch".parse(), Ok(Action::Switch));
        assert_eq!("next-empty".parse(), Ok(Action::NextEmpty));
        assert_eq!("move-next-empty".parse(), Ok(Action::MoveNextEmpty));
        assert_eq!("clear-output".parse(), Ok(Action::ClearOutput));
        assert_eq!(
            "move-to-single-output".parse(),
            Ok(Action::MoveToSingleOutput)
        );
    }

    #[test]
    fn test_action_from_str_is_exact() {
        assert_eq!(
            " switch".parse::<Action>(),
            Err(Error::InvalidAction(" switch".to_string()))
        );
        assert!("rename\n".parse::<Action>().is_err());
    }

    #[test]
    fn test_action_from_str_unknown() {
        assert_eq!(
            "teleport".parse::<Action>(),
            Err(Error::InvalidAction("teleport".to_string()))
        );
        // Identifiers are case-sensitive
        assert!("Switch".parse::<Action>().is_err());
    }

    #[test]
    fn test_display_matches_parse() {
        for action in Action::ALL {
            assert_eq!(action.to_string().parse(), Ok(action));
        }
    }

    #[test]
    fn test_menu_entries_exclude_menu() {
        let entries: Vec<_> = Action::menu_entries().collect();
        assert_eq!(entries.len(), Action::ALL.len() - 1);
        assert!(!entries.contains(&Action::Menu));
        assert_eq!(entries[0], Action::Switch);
    }

    #[test]
    fn test_only_single_output_accepts_destination() {
        for action in Action::ALL {
            assert_eq!(
                action.accepts_destination(),
                action == Action::MoveToSingleOutput
            );
        }
    }
}
