//! Subcommands.

use std::io::Write;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, info};
use ulidgen_codec::{codec, UlidValue};
use ulidgen_generator::{GeneratorConfig, IdGenerator, RepresentationKind};

/// Generate and inspect ULID identifiers.
#[derive(Debug, Parser)]
#[command(name = "ulidgen", version, about)]
pub struct Cli {
    /// Log level used when RUST_LOG is not set.
    #[arg(long, global = true, env = "ULIDGEN_LOG_LEVEL", default_value = "warn")]
    pub log_level: String,

    /// Emit logs as JSON.
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate fresh identifiers.
    New(NewArgs),

    /// Decode a canonical ULID string and show its parts.
    Inspect(InspectArgs),

    /// Convert a 16-byte hex buffer to the canonical string.
    FromHex(FromHexArgs),
}

/// Defaults come from `ULIDGEN_REPRESENTATION` and `ULIDGEN_MONOTONIC`;
/// flags override them.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Representation to print (native, string, bytes).
    #[arg(long)]
    pub kind: Option<String>,

    /// Number of identifiers to generate.
    #[arg(long, short = 'n', default_value_t = 1)]
    pub count: usize,

    /// Generate strictly increasing identifiers.
    #[arg(long)]
    pub monotonic: bool,
}

#[derive(Debug, Args)]
pub struct InspectArgs {
    /// ULID string (case-insensitive).
    pub ulid: String,

    /// Output as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct FromHexArgs {
    /// 32 hex digits, optionally prefixed with `0x`.
    pub hex: String,
}

impl Cli {
    pub fn run(&self, out: &mut impl Write) -> Result<()> {
        match &self.command {
            Command::New(args) => run_new(args, out),
            Command::Inspect(args) => run_inspect(args, out),
            Command::FromHex(args) => run_from_hex(args, out),
        }
    }
}

fn run_new(args: &NewArgs, out: &mut impl Write) -> Result<()> {
    let mut config = GeneratorConfig::from_env().context("invalid environment configuration")?;
    if let Some(kind) = &args.kind {
        config.representation = kind.parse::<RepresentationKind>().context("invalid --kind")?;
    }
    if args.monotonic {
        config.monotonic = true;
    }
    let generator = IdGenerator::from_config(&config);

    info!(
        kind = %config.representation,
        monotonic = config.monotonic,
        count = args.count,
        "generating identifiers"
    );
    for id in generator.generate_batch(args.count)? {
        writeln!(out, "{}", id)?;
    }
    Ok(())
}

/// Parts of a decoded ULID.
#[derive(Debug, Serialize)]
struct Inspection {
    canonical: String,
    high: String,
    low: String,
    timestamp_ms: u64,
    timestamp: Option<DateTime<Utc>>,
    random: String,
    bytes: String,
}

impl Inspection {
    fn of(value: UlidValue) -> Self {
        let timestamp_ms = value.timestamp_ms();
        Self {
            canonical: value.to_string(),
            high: format!("{:#018x}", value.high()),
            low: format!("{:#018x}", value.low()),
            timestamp_ms,
            timestamp: i64::try_from(timestamp_ms)
                .ok()
                .and_then(DateTime::<Utc>::from_timestamp_millis),
            random: format!("{:#022x}", value.random()),
            bytes: hex::encode(codec::encode_bytes(value)),
        }
    }
}

fn run_inspect(args: &InspectArgs, out: &mut impl Write) -> Result<()> {
    let value = codec::decode_string(&args.ulid)?;
    let inspection = Inspection::of(value);
    debug!(ulid = %value, "decoded");

    if args.json {
        serde_json::to_writer_pretty(&mut *out, &inspection)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "canonical:  {}", inspection.canonical)?;
    writeln!(out, "high:       {}", inspection.high)?;
    writeln!(out, "low:        {}", inspection.low)?;
    match inspection.timestamp {
        Some(ts) => writeln!(
            out,
            "timestamp:  {} ({})",
            inspection.timestamp_ms,
            ts.to_rfc3339()
        )?,
        None => writeln!(out, "timestamp:  {}", inspection.timestamp_ms)?,
    }
    writeln!(out, "random:     {}", inspection.random)?;
    writeln!(out, "bytes:      {}", inspection.bytes)?;
    Ok(())
}

fn run_from_hex(args: &FromHexArgs, out: &mut impl Write) -> Result<()> {
    let digits = args.hex.trim();
    let digits = digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
        .unwrap_or(digits);

    let bytes = hex::decode(digits).context("invalid hex")?;
    let value = codec::decode_bytes(&bytes)?;
    writeln!(out, "{}", value)?;
    Ok(())
}
