//! Minimal `zpak` command-line front-end.
//!
//! Wraps the library's file façade ([`zpak::file`]) for manual
//! smoke-testing: compress a file to a `.zpak` container, or decompress one
//! back. Not a specified deliverable in its own right — deep argument
//! surfaces (recursive directory walks, extended metadata preservation,
//! scheduling) are out of scope.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use zpak::config::Level;
use zpak::container::Algorithm;

#[derive(Parser)]
#[command(name = "zpak", version, about = "A small LZ77/RLE compression tool")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compress a file into a zpak container.
    Compress {
        input: PathBuf,
        output: PathBuf,
        #[arg(short, long, value_enum, default_value_t = AlgoArg::Lz77)]
        algorithm: AlgoArg,
        #[arg(short, long, value_enum, default_value_t = LevelArg::Balanced)]
        level: LevelArg,
    },
    /// Decompress a zpak container back to its original bytes.
    Decompress { input: PathBuf, output: PathBuf },
}

#[derive(Clone, Copy, ValueEnum)]
enum AlgoArg {
    Lz77,
    Rle,
    Store,
}

impl From<AlgoArg> for Algorithm {
    fn from(a: AlgoArg) -> Self {
        match a {
            AlgoArg::Lz77 => Algorithm::Lz77,
            AlgoArg::Rle => Algorithm::Rle,
            AlgoArg::Store => Algorithm::Store,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum LevelArg {
    Fast,
    Balanced,
    Best,
}

impl From<LevelArg> for Level {
    fn from(l: LevelArg) -> Self {
        match l {
            LevelArg::Fast => Level::Fast,
            LevelArg::Balanced => Level::Balanced,
            LevelArg::Best => Level::Best,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Compress {
            input,
            output,
            algorithm,
            level,
        } => {
            let bytes = fs::read(&input)
                .with_context(|| format!("reading {}", input.display()))?;
            let framed = zpak::compress_file(&bytes, algorithm.into(), level.into())
                .context("compressing")?;
            fs::write(&output, framed)
                .with_context(|| format!("writing {}", output.display()))?;
            eprintln!(
                "{}: {} bytes -> {}: {} bytes",
                input.display(),
                bytes.len(),
                output.display(),
                fs::metadata(&output)?.len()
            );
            Ok(())
        }
        Command::Decompress { input, output } => {
            let bytes = fs::read(&input)
                .with_context(|| format!("reading {}", input.display()))?;
            let restored = zpak::decompress_file(&bytes).context("decompressing")?;
            fs::write(&output, &restored)
                .with_context(|| format!("writing {}", output.display()))?;
            eprintln!(
                "{}: {} bytes -> {}: {} bytes",
                input.display(),
                bytes.len(),
                output.display(),
                restored.len()
            );
            Ok(())
        }
    }
}
