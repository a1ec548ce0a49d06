use std::process::{Command, Stdio};
use crate::error::LaunchError;
use crate::model::LauncherRecord;
use log::info;

/// Turns an Exec value into argv: quoting is resolved shell-style, `%f`,
/// `%U` and friends are dropped, `%%` becomes a literal `%`. `None` when the
/// quoting is broken.
pub fn command_line(exec: &str) -> Option<Vec<String>> {
    let args = shlex::split(exec)?;
    Some(
        args.into_iter()
            .filter(|arg| !(arg.len() == 2 && arg.starts_with('%') && arg != "%%"))
            .map(|arg| arg.replace("%%", "%"))
            .collect(),
    )
}

pub fn execute(record: &LauncherRecord) -> Result<(), LaunchError> {
    let source_path = record.source_path().to_path_buf();
    let parts = command_line(record.exec_command()).ok_or_else(|| LaunchError::Unparsable(source_path.clone()))?;
    let Some((program, args)) = parts.split_first() else {
        return Err(LaunchError::EmptyCommand(source_path));
    };

    info!("Launching {:?}: {} {:?}", record.name(), program, args);
    Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|source| LaunchError::Spawn {
            program: program.clone(),
            source,
        })?;

    Ok(())
}
