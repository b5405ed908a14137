use std::process::{Command, Stdio};

use log::info;

use crate::error::{Error, Result};

/// Wraps `command_line` into `<shell> -c <command_line>`.
#[must_use]
pub fn shell_command(shell: &str, command_line: &str) -> Command {
    let mut command = Command::new(shell);
    command.args(["-c", command_line]);
    command
}

/// Executes a command with the terminal's stdio, streaming its output.
///
/// # Errors
///
/// Returns an error if command execution fails or exits with non-zero status.
pub fn execute_command(mut command: Command) -> Result<()> {
    let command = command
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());

    info!("Executing {:?}", command);

    let status = command
        .spawn()
        .and_then(|mut child| child.wait())
        .map_err(Error::SubProcess)?;

    if status.success() {
        Ok(())
    } else {
        Err(Error::SubProcessExit(status.code()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_command_arguments() {
        let command = shell_command("/bin/sh", "pbpaste | fabric --pattern summarize");

        assert_eq!(command.get_program(), "/bin/sh");
        let args: Vec<_> = command.get_args().collect();
        assert_eq!(args, vec!["-c", "pbpaste | fabric --pattern summarize"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_execute_command_success() {
        assert!(execute_command(shell_command("/bin/sh", "true")).is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn test_execute_command_non_zero_exit() {
        let result = execute_command(shell_command("/bin/sh", "exit 3"));
        assert!(matches!(result, Err(Error::SubProcessExit(Some(3)))));
    }

    #[test]
    fn test_execute_command_missing_program() {
        let result = execute_command(shell_command("/definitely/not/a/shell", "true"));
        assert!(matches!(result, Err(Error::SubProcess(_))));
    }
}
