use anyhow::{Result, bail};
use tracing::warn;

use super::super::args::LookupCommand;
use super::{CommandResult, CommandSummary, LookupSummary, helper::resolve_requested};
use crate::core::{PlaceholderArgs, ProjectContext, Translator};

pub fn lookup(cmd: LookupCommand) -> Result<CommandResult> {
    let args = parse_placeholder_args(&cmd.args)?;
    let mut ctx = ProjectContext::with_modules(&cmd.common, std::slice::from_ref(&cmd.module))?;
    let (label, dictionary) = resolve_requested(&mut ctx)?;

    let translator = Translator::new(&dictionary, ctx.primary_locale());
    let locale = cmd.locale.as_deref().unwrap_or(ctx.primary_locale());

    if translator.get(&cmd.key, locale).is_none() {
        warn!(module = %label, key = %cmd.key, "key not found in any locale");
    }

    Ok(CommandResult::output(CommandSummary::Lookup(LookupSummary {
        text: translator.translate(&cmd.key, locale, &args),
    })))
}

/// Parse `name=value` pairs given with `--arg`.
fn parse_placeholder_args(raw: &[String]) -> Result<PlaceholderArgs> {
    let mut args = PlaceholderArgs::new();
    for item in raw {
        let Some((name, value)) = item.split_once('=') else {
            bail!("Invalid --arg '{}': expected NAME=VALUE", item);
        };
        if name.is_empty() {
            bail!("Invalid --arg '{}': placeholder name is empty", item);
        }
        args.insert(name.to_string(), value.to_string());
    }
    Ok(args)
}
