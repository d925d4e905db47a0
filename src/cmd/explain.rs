use std::path::PathBuf;

use serde_json::json;

use crate::cmd::{CommandError, CommandResponse, load_rules};
use crate::engine::CheckVerify;
use crate::io::Format;

/// Input arguments for explain command execution API.
#[derive(Debug, Clone)]
pub struct ExplainCommandArgs {
    pub rules: PathBuf,
    pub rules_format: Option<Format>,
}

/// Loads the rules file through the engine and prints the finalized check list.
pub fn run(args: &ExplainCommandArgs) -> CommandResponse {
    match execute(args) {
        Ok(payload) => CommandResponse {
            exit_code: 0,
            payload,
        },
        Err(error) => CommandResponse::from_error(error),
    }
}

fn execute(args: &ExplainCommandArgs) -> Result<serde_json::Value, CommandError> {
    let rules = load_rules(&args.rules, args.rules_format)?;
    let mut engine = CheckVerify::with_checks(rules.mode, rules.checks)
        .map_err(|err| CommandError::InputUsage(format!("invalid rules file: {err}")))?;

    let checks = serde_json::to_value(engine.explain())
        .map_err(|err| CommandError::Internal(format!("failed to serialize checks: {err}")))?;
    Ok(json!({
        "mode": engine.mode(),
        "checks": checks,
    }))
}
