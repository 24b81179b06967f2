// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod util;

use std::io::{self, Write};

use anyhow::{anyhow, Context, Result};
use application::{Notifier, PromptManager, PromptRepository};
use domain::{DomainError, Prompt, PromptDraft, PromptFields, PromptId};
use infrastructure::{Config, HttpPromptRepository};
use ports::{ConsoleNotifier, TablePresenter};
use tracing::{debug, info, warn};
use crate::cli::args::{Args, Command};

pub fn run(args: Args) -> Result<()> {
    debug!(?args, "Starting prompt-admin with arguments");

    // Resolve configuration
    let config = Config::discover(args.config.as_deref())?;
    let base_url = config.resolve_base_url(args.api_url.as_deref())?;
    info!(%base_url, "Using prompt API");

    // Initialize infrastructure
    let repository = HttpPromptRepository::new(&base_url)?;

    // Initialize application
    let mut manager = PromptManager::new(repository, ConsoleNotifier::stderr());

    // Initialize presentation
    let presenter = TablePresenter::new();

    let stdout = io::stdout();
    execute(&mut manager, &presenter, args.command, &mut stdout.lock())
}

/// Load the prompt list, apply the command and print the resulting list.
pub fn execute<R, N, W>(
    manager: &mut PromptManager<R, N>,
    presenter: &TablePresenter,
    command: Command,
    out: &mut W,
) -> Result<()>
where
    R: PromptRepository,
    N: Notifier,
    W: Write,
{
    manager.load().context("Failed to load prompts")?;

    match command {
        Command::List { json } => {
            if json {
                let rendered = presenter
                    .render_json(manager.prompts())
                    .context("Failed to serialize prompts")?;
                writeln!(out, "{}", rendered)?;
                return Ok(());
            }
        }
        Command::Add { fields } => {
            let fields = PromptDraft::from(fields).into_fields();
            let created = submit(manager, None, &fields)?;
            info!(prompt_id = %created.id, "Added prompt");
        }
        Command::Edit { prompt_id, fields } => {
            let draft = PromptDraft::from(fields);
            if draft.is_empty() {
                warn!(%prompt_id, "No fields given, resubmitting current values");
            }
            let current = manager
                .find(&prompt_id)
                .ok_or_else(|| DomainError::PromptNotFound(prompt_id.clone()))?
                .fields
                .clone();
            submit(manager, Some(&prompt_id), &draft.apply_to(current))?;
        }
        Command::Delete { prompt_id } => {
            if manager.find(&prompt_id).is_none() {
                return Err(DomainError::PromptNotFound(prompt_id).into());
            }
            manager
                .delete(&prompt_id)
                .with_context(|| format!("Failed to delete prompt {}", prompt_id))?;
        }
    }

    write!(out, "{}", presenter.render(manager.prompts()))?;
    Ok(())
}

fn submit<R: PromptRepository, N: Notifier>(
    manager: &mut PromptManager<R, N>,
    selected: Option<&PromptId>,
    fields: &PromptFields,
) -> Result<Prompt> {
    manager.submit(selected, fields).map_err(|e| match e {
        DomainError::Validation(errors) => anyhow!(
            "Form is incomplete:\n{}",
            errors
                .iter()
                .map(|e| format!("  {}", e))
                .collect::<Vec<_>>()
                .join("\n")
        ),
        other => anyhow::Error::new(other).context("Failed to save prompt"),
    })
}

