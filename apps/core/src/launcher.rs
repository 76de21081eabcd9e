use std::fmt::{Display, Formatter};
use std::process::{Command, Stdio};

#[derive(Debug)]
pub enum LaunchError {
    EmptyCommand,
    Spawn(std::io::Error),
}

impl Display for LaunchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyCommand => write!(f, "launch command is empty"),
            Self::Spawn(error) => write!(f, "failed to spawn: {error}"),
        }
    }
}

impl std::error::Error for LaunchError {}

/// Spawns the command detached and returns without waiting. The child keeps
/// running after this process answers the host; its exit status is never
/// collected.
pub fn spawn_detached(command: &[String]) -> Result<(), LaunchError> {
    let (program, args) = command.split_first().ok_or(LaunchError::EmptyCommand)?;
    if program.trim().is_empty() {
        return Err(LaunchError::EmptyCommand);
    }

    Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|_| ())
        .map_err(LaunchError::Spawn)
}

/// Builds the start-VM invocation: the configured command with the result id
/// appended as the final argument.
pub fn start_vm_command(start_command: &[String], id: &str) -> Vec<String> {
    let mut command = start_command.to_vec();
    command.push(id.to_string());
    command
}
