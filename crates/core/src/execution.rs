use std::process::{Command, Stdio};

use log::{debug, info};

use crate::error::{Error, Result};

/// Runs a command with the terminal attached, for its side effect.
///
/// # Errors
///
/// Returns [`Error::ActionFailure`] naming `action` if the command cannot be
/// started or exits with non-zero status.
pub fn execute_command(mut command: Command, action: &str) -> Result<()> {
    let command = command
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());

    info!("Executing {:?}", command);

    let subprocess_exit_success = match command.spawn().and_then(|mut child| child.wait()) {
        Ok(status) => status.success(),
        Err(e) => {
            debug!("Could not run {:?}: {e}", command);
            false
        }
    };

    if subprocess_exit_success {
        Ok(())
    } else {
        Err(Error::action_failure(action))
    }
}

/// Runs a command and captures its standard output.
///
/// # Errors
///
/// Returns [`Error::QueryFailure`] if the command cannot be started, exits
/// with non-zero status, or prints something that is not UTF-8.
pub fn query_command(mut command: Command) -> Result<String> {
    let description = format!("{:?}", command);
    debug!("Querying {description}");

    let output = command
        .stdin(Stdio::null())
        .stderr(Stdio::piped())
        .output()
        .map_err(|e| Error::query_failure(&description, e))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::query_failure(
            description,
            format!("{} {}", output.status, stderr.trim()),
        ));
    }

    String::from_utf8(output.stdout).map_err(|e| Error::query_failure(description, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn test_query_command_captures_stdout() {
        let mut command = Command::new("sh");
        command.args(["-c", "printf 'one\\ntwo'"]);
        assert_eq!(query_command(command).unwrap(), "one\ntwo");
    }

    #[cfg(unix)]
    #[test]
    fn test_query_command_non_zero_exit() {
        let mut command = Command::new("sh");
        command.args(["-c", "exit 3"]);
        assert!(matches!(query_command(command), Err(Error::QueryFailure { .. })));
    }

    #[test]
    fn test_query_command_missing_program() {
        let command = Command::new("quickpick-no-such-program");
        assert!(matches!(query_command(command), Err(Error::QueryFailure { .. })));
    }

    #[test]
    fn test_execute_command_missing_program() {
        let command = Command::new("quickpick-no-such-program");
        let result = execute_command(command, "run nothing");
        assert!(
            matches!(result, Err(Error::ActionFailure { ref action }) if action == "run nothing")
        );
    }
}
