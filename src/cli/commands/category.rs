use tally_domain::FALLBACK_CATEGORY;

use crate::cli::core::{take_yes_flag, CommandError, CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::CommandEntry;

const CATEGORY_USAGE: &str = "category <add <name>|delete <name> [--yes]>";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "categories",
            "List the available categories",
            "categories",
            cmd_categories,
        ),
        CommandEntry::new(
            "category",
            "Add or delete a category",
            CATEGORY_USAGE,
            cmd_category,
        ),
    ]
}

fn cmd_categories(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output::section("Categories");
    for name in context.manager.categories() {
        if name == FALLBACK_CATEGORY {
            output::info(format!("  {name} (default)"));
        } else {
            output::info(format!("  {name}"));
        }
    }
    Ok(())
}

fn cmd_category(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some((action, rest)) = args.split_first() else {
        return Err(CommandError::InvalidArguments(format!(
            "usage: {CATEGORY_USAGE}"
        )));
    };
    match action.to_lowercase().as_str() {
        "add" => handle_add(context, rest),
        "delete" | "remove" => handle_delete(context, rest),
        other => Err(CommandError::InvalidArguments(format!(
            "unknown category subcommand `{other}`"
        ))),
    }
}

fn handle_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.is_empty() {
        return Err(CommandError::InvalidArguments(
            "usage: category add <name>".into(),
        ));
    }
    let name = args.join(" ");
    let added = context.manager.add_category(&name)?;
    output::success(format!("Category `{added}` added."));
    Ok(())
}

fn handle_delete(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let (yes, names) = take_yes_flag(args);
    if names.is_empty() {
        return Err(CommandError::InvalidArguments(
            "usage: category delete <name> [--yes]".into(),
        ));
    }
    let name = names.join(" ");
    context.manager.check_category_removable(&name)?;

    let prompt = format!(
        "Delete `{name}`? Its transactions will be moved to `{FALLBACK_CATEGORY}`."
    );
    if !yes && !context.confirm(&prompt)? {
        output::info("Deletion cancelled.");
        return Ok(());
    }

    let moved = context.manager.delete_category(&name)?;
    output::success(format!("Category `{name}` deleted."));
    if moved > 0 {
        output::info(format!(
            "{moved} transaction(s) moved to `{FALLBACK_CATEGORY}`."
        ));
    }
    Ok(())
}
