use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

use serde_json::Value;

use crate::cmd::{CommandError, CommandResponse, load_rules, map_io_as_input_usage};
use crate::domain::error::CheckVerifyError;
use crate::domain::report::VerifyReport;
use crate::domain::value::Variable;
use crate::engine::CheckVerify;
use crate::io::{self, Format};

/// Input arguments for verify command execution API.
#[derive(Debug, Clone)]
pub struct VerifyCommandArgs {
    pub rules: PathBuf,
    pub rules_format: Option<Format>,
    pub input: Option<PathBuf>,
    pub input_format: Option<Format>,
    pub parse_dates: bool,
}

/// Verifies the input document against the rules file.
///
/// Exit codes: `0` every check passed, `2` a check failed, `3` unusable rules or input,
/// `1` internal failure.
pub fn run_with_stdin<R: Read>(args: &VerifyCommandArgs, stdin: R) -> CommandResponse {
    match execute(args, stdin) {
        Ok(report) => report_response(report),
        Err(error) => CommandResponse::from_error(error),
    }
}

fn report_response(report: VerifyReport) -> CommandResponse {
    let exit_code = if report.matched { 0 } else { 2 };
    match serde_json::to_value(&report) {
        Ok(payload) => CommandResponse { exit_code, payload },
        Err(_) => CommandResponse::from_error(CommandError::Internal(
            "failed to serialize verify report".to_string(),
        )),
    }
}

fn execute<R: Read>(args: &VerifyCommandArgs, stdin: R) -> Result<VerifyReport, CommandError> {
    let rules = load_rules(&args.rules, args.rules_format)?;
    let mut engine = CheckVerify::with_checks(rules.mode, rules.checks)
        .map_err(|err| CommandError::InputUsage(format!("invalid rules file: {err}")))?;

    let mut source = Variable::from(load_input(args, stdin)?);
    if args.parse_dates {
        source = source.promote_dates();
    }

    let check_count = engine.explain().len();
    match engine.verify(&source) {
        Ok(()) => Ok(VerifyReport::passed(check_count)),
        Err(CheckVerifyError::Validation(message)) => {
            Ok(VerifyReport::failed(check_count, message))
        }
        Err(other) => Err(CommandError::InputUsage(other.to_string())),
    }
}

fn load_input<R: Read>(args: &VerifyCommandArgs, stdin: R) -> Result<Value, CommandError> {
    let format = match (&args.input, args.input_format) {
        (None, None) => Format::Json,
        (path, explicit) => io::resolve_input_format(explicit, path.as_deref())
            .map_err(map_io_as_input_usage)?,
    };

    if let Some(path) = &args.input {
        let file = File::open(path).map_err(|err| {
            CommandError::InputUsage(format!(
                "failed to open input file `{}`: {err}",
                path.display()
            ))
        })?;
        io::reader::read_document(file, format).map_err(map_io_as_input_usage)
    } else {
        io::reader::read_document(stdin, format).map_err(map_io_as_input_usage)
    }
}
