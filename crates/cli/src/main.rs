//! MAX77620 dry-run CLI.
//!
//! This binary runs driver operations against the register-file model and prints the bus
//! transactions they would issue. It provides:
//! 1. **Listing:** The rail table, as text or JSON.
//! 2. **Single operations:** Status, set-voltage, enable, and disable on one rail.
//! 3. **Boot defaults:** The full bulk initialization sequence.
//!
//! Rails are named (`sd1`, `ldo4`) or given by table index. Logging goes to stderr and is
//! controlled with `RUST_LOG`.

use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::{fs, process};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use max77620_core::sim::{RecordingTimer, SimulatedPmic, Transaction};
use max77620_core::{DefaultsReport, Max77620, PmicConfig, PmicError, REGULATORS, RegulatorId};

#[derive(Parser, Debug)]
#[command(
    name = "pmicctl",
    author,
    version,
    about = "MAX77620 PMIC driver dry-run tool",
    long_about = "Run MAX77620 driver operations against a simulated register file and print the resulting I2C transactions.\n\nExamples:\n  pmicctl list\n  pmicctl set-voltage ldo2 3300000\n  pmicctl --regs dump.json enable sd1\n  pmicctl defaults"
)]
struct Cli {
    /// Bus location as JSON (`{"bus": 5, "address": 60}`); defaults to I2C5 / 0x3C.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Initial register contents as a JSON object (`{"0x16": 32}`).
    #[arg(long, global = true)]
    regs: Option<PathBuf>,

    /// Print output as JSON.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the rail table.
    List,

    /// Report whether a rail is up.
    Status {
        /// Rail name or index.
        rail: RegulatorId,
    },

    /// Program a rail's output voltage.
    SetVoltage {
        /// Rail name or index.
        rail: RegulatorId,

        /// Output in microvolts.
        uv: u32,
    },

    /// Enable a rail.
    Enable {
        /// Rail name or index.
        rail: RegulatorId,
    },

    /// Disable a rail.
    Disable {
        /// Rail name or index.
        rail: RegulatorId,
    },

    /// Apply the boot defaults to every rail except SD0.
    Defaults,
}

/// Register dump keyed by register address (`"0x16"` or `"22"`).
#[derive(Debug, Deserialize)]
#[serde(transparent)]
struct RegisterDump(BTreeMap<String, u8>);

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

/// Simulated driver used by every dry-run command.
type DryRunDriver = Max77620<SimulatedPmic, RecordingTimer>;

/// Executes one CLI command.
fn run(cli: Cli) -> Result<(), PmicError> {
    let Cli {
        config,
        regs,
        json,
        command,
    } = cli;
    let (config, regs) = (config.as_deref(), regs.as_deref());

    match command {
        Commands::List => list(json),
        Commands::Status { rail } => execute(config, regs, json, |driver| {
            let active = driver.status(rail)?;
            println!("{rail}: {}", if active { "active" } else { "inactive" });
            Ok(())
        }),
        Commands::SetVoltage { rail, uv } => execute(config, regs, json, |driver| {
            driver.set_voltage(rail, uv)?;
            let programmed = driver.voltage(rail)?;
            println!("{rail}: requested {uv} uV, programmed {programmed} uV");
            Ok(())
        }),
        Commands::Enable { rail } => execute(config, regs, json, |driver| {
            driver.set_enabled(rail, true)?;
            println!("{rail}: enabled");
            Ok(())
        }),
        Commands::Disable { rail } => execute(config, regs, json, |driver| {
            driver.set_enabled(rail, false)?;
            println!("{rail}: disabled");
            Ok(())
        }),
        Commands::Defaults => execute(config, regs, json, |driver| {
            print_report(&driver.apply_defaults());
            Ok(())
        }),
    }
}

/// Runs `op` against a simulated PMIC, then prints the issued transactions and settle time.
fn execute(
    config: Option<&Path>,
    regs: Option<&Path>,
    json: bool,
    op: impl FnOnce(&mut DryRunDriver) -> Result<(), PmicError>,
) -> Result<(), PmicError> {
    let mut driver = dry_run_driver(config, regs)?;
    op(&mut driver)?;

    let (pmic, timer) = driver.release();
    print_transactions(pmic.transactions(), json)?;
    println!("settle time: {} us", timer.total_us());
    Ok(())
}

/// Prints the outcome of a boot-defaults run.
fn print_report(report: &DefaultsReport) {
    let names = |ids: &[RegulatorId]| {
        ids.iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    };
    println!("configured: {}", names(&report.configured));
    println!("enabled:    {}", names(&report.enabled));
    for failure in &report.failures {
        println!(
            "failed:     {} ({:?}): {}",
            failure.id, failure.step, failure.error
        );
    }
    if let Some(e) = &report.sd_cfg2_error {
        println!("SD_CFG2:    {e}");
    }
}

/// Builds a driver over a simulated PMIC at the configured location.
///
/// # Arguments
///
/// * `config` - Optional bus location file; defaults to I2C5 / 0x3C.
/// * `regs` - Optional register dump to preload.
fn dry_run_driver(
    config: Option<&Path>,
    regs: Option<&Path>,
) -> Result<DryRunDriver, PmicError> {
    let config = config
        .map(|path| PmicConfig::from_file(path))
        .transpose()?
        .unwrap_or_default();
    debug!(bus = config.bus, address = config.address, "Using bus location");

    let mut pmic = SimulatedPmic::at(config.bus, config.address);
    if let Some(path) = regs {
        pmic = pmic.with_registers(load_register_dump(path)?);
    }
    Ok(Max77620::with_config(pmic, RecordingTimer::new(), config))
}

/// Prints the rail table.
fn list(json: bool) -> Result<(), PmicError> {
    if json {
        println!("{}", serde_json::to_string_pretty(&REGULATORS)?);
        return Ok(());
    }

    println!(
        "{:>2}  {:<5} {:<4} {:>8} {:>8} {:>8} {:>8}  {:>4} {:>4} {:>4}  {}",
        "id", "name", "kind", "step", "min", "default", "max", "volt", "cfg", "fps", "src"
    );
    for id in RegulatorId::all() {
        let r = id.descriptor();
        println!(
            "{:>2}  {:<5} {:<4} {:>8} {:>8} {:>8} {:>8}  {:#04x} {:#04x} {:#04x}  {:?}",
            id.index(),
            r.name,
            r.kind.to_string(),
            r.step_uv,
            r.min_uv,
            r.default_uv,
            r.max_uv,
            r.volt_reg,
            r.cfg_reg,
            r.fps_reg,
            r.fps_src
        );
    }
    Ok(())
}

/// Prints a transaction log, one transaction per line or as a JSON array.
fn print_transactions(log: &[Transaction], json: bool) -> Result<(), PmicError> {
    if json {
        println!("{}", serde_json::to_string_pretty(log)?);
        return Ok(());
    }
    println!("{} transactions:", log.len());
    for t in log {
        println!("  {t}");
    }
    Ok(())
}

/// Reads a register dump file.
fn load_register_dump(path: &Path) -> Result<Vec<(u8, u8)>, PmicError> {
    parse_register_dump(&fs::read_to_string(path)?)
}

/// Parses a register dump into `(reg, value)` pairs.
fn parse_register_dump(json: &str) -> Result<Vec<(u8, u8)>, PmicError> {
    let RegisterDump(entries) = serde_json::from_str(json)?;
    entries
        .into_iter()
        .map(|(key, value)| parse_register(&key).map(|reg| (reg, value)))
        .collect()
}

/// Parses a register address written as hex (`0x16`) or decimal (`22`).
fn parse_register(key: &str) -> Result<u8, PmicError> {
    let parsed = match key.strip_prefix("0x").or_else(|| key.strip_prefix("0X")) {
        Some(hex) => u8::from_str_radix(hex, 16),
        None => key.parse(),
    };
    parsed.map_err(|_| PmicError::Config(format!("invalid register address {key:?}")))
}
