//! Interactive selection through an external dmenu-style launcher.

use std::io::{ErrorKind, Write};
use std::process::{Command, Stdio};
use tracing::debug;

use crate::error::{Error, Result};

/// How a single prompt should be presented
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuOptions {
    pub prompt: String,
    /// Only accept one of the candidates, no free text
    pub no_custom: bool,
    /// Text pre-filled into the input field
    pub filter: Option<String>,
    /// Candidate highlighted when the menu opens
    pub selected: Option<String>,
    /// Message shown below the input field
    pub message: Option<String>,
}

impl MenuOptions {
    pub fn new(prompt: impl Into<String>) -> Self {
        MenuOptions {
            prompt: prompt.into(),
            ..Default::default()
        }
    }

    pub fn no_custom(mut self) -> Self {
        self.no_custom = true;
        self
    }

    pub fn filter(mut self, filter: Option<impl Into<String>>) -> Self {
        self.filter = filter.map(Into::into);
        self
    }

    pub fn selected(mut self, selected: Option<impl Into<String>>) -> Self {
        self.selected = selected.map(Into::into);
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

/// Something that can ask the user to pick or type a value.
pub trait Launcher {
    /// Show `candidates` and return the trimmed answer
    fn select(&mut self, candidates: &[String], options: &MenuOptions) -> Result<String>;
}

/// Launcher backed by `rofi -dmenu` (or anything accepting its flags)
pub struct RofiLauncher {
    program: String,
}

impl RofiLauncher {
    pub fn new(program: impl Into<String>) -> Self {
        RofiLauncher {
            program: program.into(),
        }
    }

    /// Decode and trim the launcher's stdout, rejecting empty or non UTF-8 answers
    fn parse_answer(&self, stdout: Vec<u8>) -> Result<String> {
        let answer = String::from_utf8(stdout)
            .map_err(|e| Error::Launcher(format!("non UTF-8 answer: {}", e)))?;
        let choice = answer.trim();
        if choice.is_empty() {
            return Err(Error::Launcher(format!("{} returned nothing", self.program)));
        }
        Ok(choice.to_string())
    }

    fn arguments(options: &MenuOptions) -> Vec<String> {
        let mut args = vec!["-dmenu".to_string()];
        if let Some(ref filter) = options.filter {
            args.extend(["-filter".to_string(), filter.clone()]);
        }
        if let Some(ref message) = options.message {
            args.extend(["-mesg".to_string(), message.clone()]);
        }
        if options.no_custom {
            args.push("-no-custom".to_string());
        }
        if let Some(ref selected) = options.selected {
            args.extend(["-select".to_string(), selected.clone()]);
        }
        args.extend(["-p".to_string(), options.prompt.clone()]);
        args
    }
}

impl Launcher for RofiLauncher {
    fn select(&mut self, candidates: &[String], options: &MenuOptions) -> Result<String> {
        let args = Self::arguments(options);
        debug!("Launching {} {:?}", self.program, args);

        let mut child = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .spawn()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => {
                    Error::MissingDependency(format!("launcher '{}' not found", self.program))
                }
                _ => Error::Launcher(format!("failed to spawn {}: {}", self.program, e)),
            })?;

        // Closing stdin tells the launcher the candidate list is complete
        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(candidates.join("\n").as_bytes())
                .map_err(|e| Error::Launcher(format!("failed to write candidates: {}", e)))?;
        }

        let output = child
            .wait_with_output()
            .map_err(|e| Error::Launcher(format!("failed to wait for {}: {}", self.program, e)))?;

        if !output.status.success() {
            return Err(Error::Launcher(format!(
                "{} exited with {}",
                self.program, output.status
            )));
        }

        let choice = self.parse_answer(output.stdout)?;

        debug!("Launcher answered {:?}", choice);
        Ok(choice)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arguments_minimal() {
        let args = RofiLauncher::arguments(&MenuOptions::new("input:"));
        assert_eq!(args, vec!["-dmenu", "-p", "input:"]);
    }

    #[test]
    fn test_arguments_full() {
        let options = MenuOptions::new("action:")
            .no_custom()
            .filter(Some("ren"))
            .selected(Some("switch"))
            .message("pick one");
        let args = RofiLauncher::arguments(&options);
        assert_eq!(
            args,
            vec![
                "-dmenu",
                "-filter",
                "ren",
                "-mesg",
                "pick one",
                "-no-custom",
                "-select",
                "switch",
                "-p",
                "action:",
            ]
        );
    }

    #[test]
    fn test_absent_options_are_omitted() {
        let options = MenuOptions::new("Move container to workspace:")
            .filter(None::<String>)
            .selected(None::<String>);
        assert_eq!(options.filter, None);
        assert_eq!(options.selected, None);
        assert!(!RofiLauncher::arguments(&options).contains(&"-select".to_string()));
    }

    #[test]
    fn test_missing_program_is_missing_dependency() {
        let mut launcher = RofiLauncher::new("sway-ws-tool-no-such-launcher");
        let err = launcher
            .select(&["1".to_string()], &MenuOptions::new("input:"))
            .unwrap_err();
        assert!(matches!(err, Error::MissingDependency(_)));
    }

    #[test]
    fn test_nonzero_exit_is_launcher_error() {
        let mut launcher = RofiLauncher::new("false");
        let err = launcher
            .select(&["1".to_string()], &MenuOptions::new("input:"))
            .unwrap_err();
        assert!(matches!(err, Error::Launcher(_)));
    }

    #[test]
    fn test_empty_answer_is_launcher_error() {
        let mut launcher = RofiLauncher::new("true");
        let err = launcher
            .select(&["1".to_string()], &MenuOptions::new("input:"))
            .unwrap_err();
        assert!(matches!(err, Error::Launcher(_)));
    }

    #[test]
    fn test_parse_answer_trims() {
        let launcher = RofiLauncher::new("rofi");
        assert_eq!(launcher.parse_answer(b"  3:web\n".to_vec()), Ok("3:web".to_string()));
    }

    #[test]
    fn test_parse_answer_rejects_invalid_utf8() {
        let launcher = RofiLauncher::new("rofi");
        let err = launcher.parse_answer(vec![0xFF, b'\n']).unwrap_err();
        assert!(matches!(err, Error::Launcher(ref msg) if msg.contains("UTF-8")));
    }

    #[test]
    fn test_parse_answer_rejects_whitespace_only() {
        let launcher = RofiLauncher::new("rofi");
        assert!(matches!(
            launcher.parse_answer(b" \n".to_vec()),
            Err(Error::Launcher(_))
        ));
    }
}
