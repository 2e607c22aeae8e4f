//! `studreg` - CLI for the student registry
//!
//! Each subcommand opens the registry database, drives the controller
//! through the terminal display, and exits.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::io::{self, StdinLock, Stdout};

use anyhow::{bail, Context};
use clap::Parser;

use student_registry::cli::{
    AddCommand, Cli, Command, ConfigCommand, DeleteCommand, EditCommand, ListCommand,
};
use student_registry::storage::RECORDS_SLOT;
use student_registry::terminal::run_session;
use student_registry::{
    init_logging, Config, Controller, Event, Field, FormPort, Outcome, Persistence,
    SqliteSlotStore, TerminalUi,
};

type Registry = Controller<SqliteSlotStore, TerminalUi<StdinLock<'static>, Stdout>>;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Load configuration
    let config = Config::load_from(cli.config.clone()).context("loading configuration")?;

    match cli.command {
        Command::List(cmd) => handle_list(&config, &cmd),
        Command::Add(cmd) => handle_add(&config, &cmd),
        Command::Edit(cmd) => handle_edit(&config, &cmd),
        Command::Delete(cmd) => handle_delete(&config, &cmd),
        Command::Session => {
            let mut registry = open_registry(&config, false)?;
            run_session(&mut registry)?;
            Ok(())
        }
        Command::Status(cmd) => handle_status(&config, cmd.json),
        Command::Config(cmd) => handle_config(&config, cmd),
    }
}

fn open_registry(config: &Config, assume_yes: bool) -> anyhow::Result<Registry> {
    let path = config.database_path();
    let store = SqliteSlotStore::open(&path)
        .with_context(|| format!("opening registry at {}", path.display()))?;
    let persistence = Persistence::new(store).with_quota(config.quota());
    let ui = TerminalUi::new(io::stdin().lock(), io::stdout(), config.display.visible_rows)
        .assume_yes(assume_yes);
    Ok(Controller::start(persistence, ui))
}

fn handle_list(config: &Config, cmd: &ListCommand) -> anyhow::Result<()> {
    let mut registry = open_registry(config, false)?;
    if cmd.json {
        println!("{}", serde_json::to_string_pretty(registry.records())?);
    } else {
        registry.ui_mut().print_table()?;
    }
    Ok(())
}

fn handle_add(config: &Config, cmd: &AddCommand) -> anyhow::Result<()> {
    let mut registry = open_registry(config, false)?;
    for field in Field::ALL {
        registry.ui_mut().set_value(field, cmd.value(field));
    }
    submit(&mut registry)
}

fn handle_edit(config: &Config, cmd: &EditCommand) -> anyhow::Result<()> {
    let mut registry = open_registry(config, false)?;
    if registry.handle(Event::Edit(cmd.index)) == Outcome::Ignored {
        bail!("no student at index {}", cmd.index);
    }
    for field in Field::ALL {
        if let Some(value) = cmd.value(field) {
            registry.ui_mut().set_value(field, value);
        }
    }
    submit(&mut registry)
}

fn submit(registry: &mut Registry) -> anyhow::Result<()> {
    match registry.handle(Event::Submit) {
        Outcome::Added { .. } | Outcome::Updated { .. } => {
            registry.ui_mut().print_table()?;
            Ok(())
        }
        Outcome::Rejected(errors) => {
            bail!("{} field(s) failed validation", errors.len())
        }
        Outcome::StaleEdit { index } => bail!("no student at index {index}"),
        other => bail!("unexpected submit outcome: {other:?}"),
    }
}

fn handle_delete(config: &Config, cmd: &DeleteCommand) -> anyhow::Result<()> {
    let mut registry = open_registry(config, cmd.yes)?;
    match registry.handle(Event::Delete(cmd.index)) {
        Outcome::Deleted { .. } => registry.ui_mut().print_table()?,
        Outcome::DeleteDeclined { .. } => registry.ui_mut().println("Nothing deleted.")?,
        _ => bail!("no student at index {}", cmd.index),
    }
    Ok(())
}

fn handle_status(config: &Config, json: bool) -> anyhow::Result<()> {
    let path = config.database_path();
    let store = SqliteSlotStore::open(&path)
        .with_context(|| format!("opening registry at {}", path.display()))?;
    let stats = store.stats()?;
    let updated = store.updated_at(RECORDS_SLOT)?;
    let persistence = Persistence::new(store);
    let records = persistence.load().len();

    if json {
        let status = serde_json::json!({
            "database_path": path,
            "slot": RECORDS_SLOT,
            "records": records,
            "slots": stats.slot_count,
            "db_size_bytes": stats.db_size_bytes,
            "last_write": updated.map(|t| t.to_rfc3339()),
        });
        println!("{}", serde_json::to_string_pretty(&status)?);
    } else {
        println!("studreg status");
        println!("--------------");
        println!("Database:      {}", path.display());
        println!("Slot:          {RECORDS_SLOT}");
        println!("Students:      {records}");
        println!("Database size: {} bytes", stats.db_size_bytes);
        match updated {
            Some(time) => println!("Last saved:    {}", time.to_rfc3339()),
            None => println!("Last saved:    never"),
        }
    }
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Storage]");
                println!("  Database path:      {}", config.database_path().display());
                match config.quota() {
                    Some(bytes) => println!("  Quota (bytes):      {bytes}"),
                    None => println!("  Quota (bytes):      unlimited"),
                }
                println!();
                println!("[Display]");
                println!("  Visible rows:       {}", config.display.visible_rows);
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}
