use std::io::{BufRead, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use ticket_table::cli::{CliArgs, Command};
use ticket_table::config::AppConfig;
use ticket_table::scan::{ScanSession, Tone};
use ticket_table::table::{Table, TableError};
use ticket_table::tracing::TicketTally;

fn main() -> Result<ExitCode> {
    let args = CliArgs::parse();
    ticket_table::tracing::init();

    let config = args.load_config();
    let path = args.table_path(&config).map_err(anyhow::Error::msg)?;

    let table =
        Table::load(&path).with_context(|| format!("Failed to load {}", path.display()))?;

    run(&args, config, table)
}

fn run(args: &CliArgs, config: AppConfig, mut table: Table) -> Result<ExitCode> {
    let json = args.json;

    match &args.command {
        Command::Show => print!("{}", table.render()),
        Command::Info => {
            let tally = TicketTally::from_table(&table);
            if json {
                println!("{}", serde_json::to_string_pretty(&tally)?);
            } else {
                println!("{}", table);
                println!(
                    "tickets = {}  purchased = {}  entered = {}",
                    tally.total, tally.purchased, tally.entered
                );
                for (code, rows) in table.duplicate_codes() {
                    println!("duplicate code {:?} on rows {:?}", code, rows);
                }
                if let Some(config_file) = args.config_path() {
                    println!("config = {}", config_file.display());
                }
                if let Some(logs) = ticket_table::config_paths::logs_dir() {
                    println!("logs = {}", logs.display());
                }
            }
        }
        Command::Lookup { key } => match table.lookup(key) {
            Some(row) if json => println!("{}", serde_json::to_string(row)?),
            Some(row) => println!("{}", row.join("\t")),
            None => {
                println!("Key not found.");
                return Ok(ExitCode::FAILURE);
            }
        },
        Command::Search { value } => {
            let found = table.search(value);
            if json {
                println!("{}", serde_json::to_string(&found)?);
            } else {
                for pos in &found {
                    println!("Found at {}", pos);
                }
            }
            if found.is_empty() {
                if !json {
                    println!("Value not found.");
                }
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Get { row, col } => match table.get_cell(*row, *col) {
            Ok(value) => println!("{}", value),
            Err(e) => return report_invalid_index(e),
        },
        Command::Set {
            row,
            col,
            value,
            no_save,
        } => {
            if let Err(e) = table.change(*row, *col, value) {
                return report_invalid_index(e);
            }
            if !*no_save {
                table.save()?;
            }
        }
        Command::Check { code } => {
            let status = table.check_ticket_status(code)?;
            if json {
                println!("{}", serde_json::to_string(&status)?);
            } else {
                println!("{}", status);
            }
        }
        Command::Reset => {
            let count = table.reset_statuses()?;
            println!("Reset {} tickets.", count);
        }
        Command::Scan => scan_stdin(ScanSession::new(table, config), json)?,
    }

    Ok(ExitCode::SUCCESS)
}

fn report_invalid_index(err: TableError) -> Result<ExitCode> {
    match err {
        TableError::InvalidIndex { .. } => {
            println!("Invalid row or column.");
            tracing::debug!("{}", err);
            Ok(ExitCode::FAILURE)
        }
        other => Err(other.into()),
    }
}

fn scan_stdin(mut session: ScanSession, json: bool) -> Result<()> {
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout().lock();

    for line in stdin.lock().lines() {
        let line = line.context("Failed to read scanner input")?;
        match session.handle(&line) {
            Ok(Some(feedback)) if json => {
                writeln!(stdout, "{}", serde_json::to_string(&feedback)?)?
            }
            Ok(Some(feedback)) => {
                writeln!(stdout, "{} {}", feedback.tone.marker(), feedback.message)?
            }
            Ok(None) => {}
            Err(e) => {
                tracing::error!("{}", e);
                writeln!(stdout, "{} {}", Tone::Reject.marker(), e)?;
            }
        }
        stdout.flush()?;
    }

    tracing::info!("Scan session ended: {}", session.table());
    Ok(())
}
