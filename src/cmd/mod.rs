pub mod explain;
pub mod verify;

use std::fs::File;
use std::path::Path;

use serde::Serialize;
use serde_json::{Value, json};

use crate::domain::rules::CheckRules;
use crate::io::{self, Format, IoError};

/// Structured command response that carries exit-code mapping and JSON payload.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CommandResponse {
    pub exit_code: i32,
    pub payload: Value,
}

impl CommandResponse {
    fn from_error(error: CommandError) -> Self {
        match error {
            CommandError::InputUsage(message) => Self {
                exit_code: 3,
                payload: json!({
                    "error": "input_usage_error",
                    "message": message,
                }),
            },
            CommandError::Internal(message) => Self {
                exit_code: 1,
                payload: json!({
                    "error": "internal_error",
                    "message": message,
                }),
            },
        }
    }
}

enum CommandError {
    InputUsage(String),
    Internal(String),
}

fn load_rules(path: &Path, explicit: Option<Format>) -> Result<CheckRules, CommandError> {
    let format = io::resolve_rules_format(explicit, Some(path)).map_err(|err| {
        CommandError::InputUsage(format!(
            "unable to resolve rules format from `{}`: {err}",
            path.display()
        ))
    })?;
    let file = File::open(path).map_err(|err| {
        CommandError::InputUsage(format!(
            "failed to open rules file `{}`: {err}",
            path.display()
        ))
    })?;
    io::reader::read_document(file, format)
        .map_err(|err| CommandError::InputUsage(format!("invalid rules file: {err}")))
}

fn map_io_as_input_usage(error: IoError) -> CommandError {
    CommandError::InputUsage(error.to_string())
}
