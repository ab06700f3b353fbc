use std::path::PathBuf;

use chrono::Local;

use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::CommandEntry;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "report",
        "Write a text report of totals and transactions",
        "report [dir]",
        cmd_report,
    )]
}

fn cmd_report(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let dir = match args {
        [] => context.report_dir.clone(),
        [dir] => PathBuf::from(dir),
        _ => {
            return Err(CommandError::InvalidArguments(
                "usage: report [dir]".into(),
            ))
        }
    };
    let path = context
        .manager
        .generate_report(&dir, Local::now().date_naive())?;
    output::success(format!("Report written to {}", path.display()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::cli::shell_context::script_context;

    #[test]
    fn report_is_written_to_the_given_directory() {
        let dir = tempfile::tempdir().unwrap();
        let mut context = script_context();
        context.process_line("add Salary 100 Income 2024-01-01").unwrap();

        let line = format!("report \"{}\"", dir.path().display());
        context.process_line(&line).unwrap();

        let written: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(written.len(), 1);
    }
}
