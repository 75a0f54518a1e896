mod brute_force;
mod dictionary;
mod rainbow;
mod report;

use std::{path::PathBuf, str::FromStr};

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use tracing::{warn, Level};

use unhash_core::{
    HashFunction, DEFAULT_MAX_ATTEMPTS, DEFAULT_MAX_PASSWORD_LENGTH, DIGITS, DIGITS_LOWERCASE,
    LOWERCASE,
};

use brute_force::brute_force;
use dictionary::dictionary;
use rainbow::rainbow;

/// Recovers the plaintext producing an unsalted digest.
/// For educational or authorized use only.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase logging verbosity (-v for info, -vv for debug).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    commands: Commands,
}

#[derive(Subcommand)]
enum Commands {
    Dictionary(Dictionary),
    BruteForce(BruteForce),
    Rainbow(Rainbow),
}

/// The digest to recover and the hash function that produced it.
#[derive(Args)]
pub struct Target {
    /// The digest to attack, in hexadecimal.
    #[arg(value_parser = check_hex)]
    digest: String,

    /// The hash function: md5, sha1, sha256 or sha512.
    #[arg(short, long, value_parser = HashFunction::from_str)]
    algorithm: HashFunction,
}

/// Test every line of a word list.
#[derive(Args)]
pub struct Dictionary {
    #[command(flatten)]
    target: Target,

    /// The word list to use, one candidate per line.
    wordlist: PathBuf,

    /// Pause after each tested candidate, in milliseconds.
    #[arg(short, long, default_value_t = 0)]
    delay_ms: u64,
}

/// Charsets available for a brute force attack.
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum CharsetPreset {
    Digits,
    Lowercase,
    DigitsLowercase,
}

impl CharsetPreset {
    fn chars(self) -> &'static str {
        match self {
            Self::Digits => DIGITS,
            Self::Lowercase => LOWERCASE,
            Self::DigitsLowercase => DIGITS_LOWERCASE,
        }
    }
}

/// Try every string over a charset, shortest first.
#[derive(Args)]
pub struct BruteForce {
    #[command(flatten)]
    target: Target,

    /// The charset to use.
    #[arg(short, long, value_enum, default_value_t = CharsetPreset::DigitsLowercase)]
    charset: CharsetPreset,

    /// Use these characters instead of a preset, in this order.
    #[arg(long, conflicts_with = "charset")]
    custom_charset: Option<String>,

    /// The maximum password length.
    #[arg(short = 'l', long, value_parser = clap::value_parser!(u64).range(1..), default_value_t = DEFAULT_MAX_PASSWORD_LENGTH as u64)]
    max_length: u64,

    /// Stop after this many attempts, across all lengths.
    #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..), default_value_t = DEFAULT_MAX_ATTEMPTS)]
    max_attempts: u64,
}

impl BruteForce {
    fn charset(&self) -> &str {
        self.custom_charset
            .as_deref()
            .unwrap_or_else(|| self.charset.chars())
    }
}

/// Look the digest up in a rainbow table built on the fly.
#[derive(Args)]
pub struct Rainbow {
    #[command(flatten)]
    target: Target,

    /// Build the table from this word list instead of the built-in common passwords.
    #[arg(short, long)]
    wordlist: Option<PathBuf>,
}

/// Checks if the digest is valid hexadecimal.
fn check_hex(hex: &str) -> Result<String> {
    hex::decode(hex).context("The digest is not valid hexadecimal")?;
    Ok(hex.to_owned())
}

/// Warns when the digest width doesn't match the hash function, since it can never be found.
fn check_digest_width(target: &Target) {
    if target.digest.len() != target.algorithm.hex_len() {
        warn!(
            expected = target.algorithm.hex_len(),
            actual = target.digest.len(),
            "The digest length doesn't match {}",
            target.algorithm
        );
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.commands {
        Commands::Dictionary(dict) => dictionary(dict)?,
        Commands::BruteForce(brute) => brute_force(brute)?,
        Commands::Rainbow(rb) => rainbow(rb)?,
    }

    Ok(())
}

/// Helper function to read the non-blank lines of a word list.
/// An empty word list is refused here: the table would be empty and every lookup would miss.
fn read_word_list(path: &std::path::Path) -> Result<Vec<String>> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("Unable to read the word list at {}", path.display()))?;

    let words: Vec<String> = String::from_utf8_lossy(&bytes)
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect();

    if words.is_empty() {
        bail!("The word list at {} is empty", path.display());
    }

    Ok(words)
}
