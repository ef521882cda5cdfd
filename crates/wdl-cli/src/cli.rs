use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "wdl",
    about = "Warehouse Dock Ledger — key/value ledger state over a durable store",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to the state log file.
    #[arg(long, global = true, default_value = ".wdl/state.log")]
    pub store: String,
}

#[derive(Subcommand)]
pub enum Command {
    /// Store an initial value under the well-known init key
    Init(InitArgs),
    /// Ingest a ledger payload and commit the reconciled warehouse record
    Ingest(IngestArgs),
    /// Write a value under a key
    Write(WriteArgs),
    /// Read the value stored under a key
    Read(ReadArgs),
    /// List all keys with stored values
    Keys(KeysArgs),
    /// Rewrite the state log with one entry per live key
    Compact(CompactArgs),
}

#[derive(Args)]
pub struct InitArgs {
    pub value: String,
}

#[derive(Args)]
pub struct IngestArgs {
    /// Key the reconciled record is committed under.
    pub key: String,
    /// Ledger payload as an inline JSON string.
    pub payload: Option<String>,
    /// Read the ledger payload from a file instead.
    #[arg(short, long, conflicts_with = "payload")]
    pub file: Option<String>,
}

#[derive(Args)]
pub struct WriteArgs {
    pub key: String,
    pub value: String,
}

#[derive(Args)]
pub struct ReadArgs {
    pub key: String,
}

#[derive(Args)]
pub struct KeysArgs {}

#[derive(Args)]
pub struct CompactArgs {}
