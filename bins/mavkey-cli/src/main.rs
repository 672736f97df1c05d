//! mavkey-cli — batch Mavryk wallet derivation from BIP-39 mnemonics.
//!
//! Two modes: generate fresh mnemonics and derive a wallet for each, or
//! derive wallets for the phrases listed in an existing file. Results are
//! written as role-named text files plus a combined `wallet.json`.
//! All output files are plaintext; treat the output directory accordingly.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use mavkey_core::{generate_mnemonic, WalletDeriver, WalletRecord, WordCount};

/// Mavryk wallet derivation tool.
#[derive(Parser)]
#[command(name = "mavkey-cli")]
#[command(version, about = "Derive Mavryk wallets from BIP-39 mnemonics.")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate fresh mnemonics and derive a wallet for each.
    Generate(GenerateArgs),
    /// Derive wallets from a line-delimited mnemonic file.
    FromFile(FromFileArgs),
}

#[derive(Args)]
struct GenerateArgs {
    /// Number of wallets to generate.
    #[arg(short, long)]
    count: u32,

    /// Mnemonic length in words (12 or 24).
    #[arg(short, long, default_value = "12")]
    words: usize,

    /// Output directory for the wallet files.
    #[arg(short, long, default_value = "new")]
    out_dir: PathBuf,
}

#[derive(Args)]
struct FromFileArgs {
    /// Path to the mnemonic file (one phrase per line).
    #[arg(default_value = "mnemonic.txt")]
    file: PathBuf,

    /// Output directory for the wallet files.
    #[arg(short, long, default_value = "imported")]
    out_dir: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate(args) => generate(args),
        Commands::FromFile(args) => from_file(args),
    }
}

/// Generate `count` fresh wallets and save them.
fn generate(args: GenerateArgs) -> Result<()> {
    if args.count == 0 {
        bail!("count must be greater than zero");
    }
    let words = parse_word_count(args.words)?;

    let deriver = WalletDeriver::new();
    let mut records = Vec::with_capacity(args.count as usize);
    for i in 0..args.count {
        let mnemonic = generate_mnemonic(words);
        let record = deriver
            .derive(&mnemonic)
            .context("freshly generated mnemonic failed to derive")?;
        println!("[{}] {}", i + 1, record.address);
        records.push(record);
    }

    save_wallets(&records, &args.out_dir)?;
    println!(
        "\n{} wallet(s) saved to {}",
        records.len(),
        args.out_dir.display()
    );
    Ok(())
}

/// Derive wallets for every mnemonic listed in a file and save them.
fn from_file(args: FromFileArgs) -> Result<()> {
    let data = fs::read_to_string(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;
    let mnemonics: Vec<&str> = data
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    if mnemonics.is_empty() {
        bail!("{} contains no mnemonics", args.file.display());
    }

    let outcome = WalletDeriver::new().derive_batch(mnemonics);
    for (i, record) in outcome.records.iter().enumerate() {
        println!("[{}] {}", i + 1, record.address);
    }
    if !outcome.skipped.is_empty() {
        println!("\nskipped {} invalid mnemonic(s)", outcome.skipped.len());
    }
    if outcome.records.is_empty() {
        bail!("no valid mnemonics in {}", args.file.display());
    }

    save_wallets(&outcome.records, &args.out_dir)?;
    println!(
        "\n{} wallet(s) saved to {}",
        outcome.records.len(),
        args.out_dir.display()
    );
    Ok(())
}

/// Write role-named output files: one value per line in the text files,
/// plus `wallet.json` keyed `wallet1…walletN`.
fn save_wallets(records: &[WalletRecord], dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;

    let addresses = records
        .iter()
        .map(|r| r.address.as_str())
        .collect::<Vec<_>>()
        .join("\n");
    let private_keys = records
        .iter()
        .map(|r| r.private_key.as_str())
        .collect::<Vec<_>>()
        .join("\n");
    let mnemonics = records
        .iter()
        .map(|r| r.mnemonic.as_str())
        .collect::<Vec<_>>()
        .join("\n");

    fs::write(dir.join("address.txt"), addresses)?;
    fs::write(dir.join("privatekey.txt"), private_keys)?;
    fs::write(dir.join("mnemonic.txt"), mnemonics)?;

    let mut wallets = serde_json::Map::new();
    for (i, record) in records.iter().enumerate() {
        wallets.insert(
            format!("wallet{}", i + 1),
            serde_json::json!({
                "address": record.address,
                "privateKey": record.private_key,
                "mnemonic": record.mnemonic,
            }),
        );
    }
    let json = serde_json::to_string_pretty(&serde_json::Value::Object(wallets))?;
    fs::write(dir.join("wallet.json"), json)?;
    Ok(())
}

/// Map the word-count argument onto the supported mnemonic lengths.
fn parse_word_count(words: usize) -> Result<WordCount> {
    WordCount::from_words(words)
        .with_context(|| format!("unsupported word count {words} (expected 12 or 24)"))
}
