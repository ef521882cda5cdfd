use std::fs;
use std::path::Path;

use anyhow::Context;
use colored::Colorize;

use wdl_dispatch::{dispatch, DispatchOutcome, INIT_KEY};
use wdl_store::FileStateStore;

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let store = FileStateStore::open(Path::new(&cli.store))
        .with_context(|| format!("failed to open state log at {}", cli.store))?;

    match cli.command {
        Command::Init(args) => run_op(&store, "init", vec![args.value]),
        Command::Ingest(args) => cmd_ingest(&store, args),
        Command::Write(args) => run_op(&store, "write", vec![args.key, args.value]),
        Command::Read(args) => run_op(&store, "read", vec![args.key]),
        Command::Keys(_) => cmd_keys(&store),
        Command::Compact(_) => cmd_compact(&store),
    }
}

fn cmd_ingest(store: &FileStateStore, args: IngestArgs) -> anyhow::Result<()> {
    let payload = match (args.payload, args.file) {
        (Some(inline), None) => inline,
        (None, Some(path)) => fs::read_to_string(&path)
            .with_context(|| format!("failed to read ledger payload from {path}"))?,
        _ => anyhow::bail!("provide the ledger payload inline or via --file"),
    };
    run_op(store, "ingest", vec![args.key, payload])
}

/// Route one named operation through the dispatch layer and print the outcome.
fn run_op(store: &FileStateStore, name: &str, args: Vec<String>) -> anyhow::Result<()> {
    match dispatch(store, name, &args)? {
        DispatchOutcome::Written => {
            println!("{} {}", "✓".green().bold(), describe_write(name, &args));
        }
        DispatchOutcome::Value(bytes) => {
            println!("{}", String::from_utf8_lossy(&bytes));
        }
        DispatchOutcome::Ingested(record) => {
            println!("{} Warehouse record committed under {}", "✓".green().bold(), args[0].bold());
            println!("  Vendor: {}", record.vendor.cyan());
            println!("  Item: {} ({})", record.name.bold(), record.desc);
            println!("  Scanned: {}  Defects: {}", record.scanned_item, record.defect);
        }
    }
    Ok(())
}

fn describe_write(name: &str, args: &[String]) -> String {
    match name {
        "init" => format!("Initialized {}", INIT_KEY.bold()),
        _ => format!("Wrote {}", args[0].bold()),
    }
}

fn cmd_keys(store: &FileStateStore) -> anyhow::Result<()> {
    let keys = store.keys();
    if keys.is_empty() {
        println!("No keys stored.");
    } else {
        for key in keys {
            println!("{key}");
        }
    }
    Ok(())
}

fn cmd_compact(store: &FileStateStore) -> anyhow::Result<()> {
    store.compact()?;
    println!("{} Compacted state log ({} keys).", "✓".green(), store.len());
    Ok(())
}
