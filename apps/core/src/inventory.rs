use std::fmt::{Display, Formatter};
use std::process::Command;

#[derive(Debug)]
pub enum InventoryError {
    EmptyCommand,
    Spawn(std::io::Error),
    Failed { status: String, stderr: String },
    Output(std::string::FromUtf8Error),
}

impl Display for InventoryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyCommand => write!(f, "list command is empty"),
            Self::Spawn(error) => write!(f, "failed to run list command: {error}"),
            Self::Failed { status, stderr } => {
                write!(f, "list command failed ({status}): {}", stderr.trim())
            }
            Self::Output(error) => write!(f, "list command output is not utf-8: {error}"),
        }
    }
}

impl std::error::Error for InventoryError {}

/// Source of the raw VM inventory text. One fetch per query; nothing is
/// cached between calls.
pub trait InventorySource {
    fn fetch(&self) -> Result<String, InventoryError>;
}

/// Runs the configured list command synchronously and captures stdout.
pub struct CommandInventory {
    command: Vec<String>,
}

impl CommandInventory {
    pub fn new(command: Vec<String>) -> Self {
        Self { command }
    }
}

impl InventorySource for CommandInventory {
    fn fetch(&self) -> Result<String, InventoryError> {
        let (program, args) = self
            .command
            .split_first()
            .ok_or(InventoryError::EmptyCommand)?;

        let output = Command::new(program)
            .args(args)
            .output()
            .map_err(InventoryError::Spawn)?;

        if !output.status.success() {
            return Err(InventoryError::Failed {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        String::from_utf8(output.stdout).map_err(InventoryError::Output)
    }
}

/// Fixed inventory text, for tests and offline runs.
pub struct StaticInventory {
    raw: String,
}

impl StaticInventory {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    pub fn deterministic_fixture() -> Self {
        Self::new("\"Win10\" {abc-123}\n\"Ubuntu-Dev\" {def-456}\n")
    }
}

impl InventorySource for StaticInventory {
    fn fetch(&self) -> Result<String, InventoryError> {
        Ok(self.raw.clone())
    }
}
