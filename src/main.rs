//! vizgen - prepare wafer-map JSON and chunked model files for the visualizer.

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};

use vizgen::config::{ChunkConfig, WaferMapConfig};

#[derive(Parser)]
#[command(name = "vizgen")]
#[command(about = "Data-preparation jobs for the transformer visualizer")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Aggregate a raw wafer bin file into grouped JSON
    WaferMap {
        /// Path to the raw wafer bin file
        #[arg(short, long)]
        input: Option<String>,

        /// Output path for the grouped JSON
        #[arg(short, long)]
        output: Option<String>,

        /// Path to a job config JSON (optional; flags override its values)
        #[arg(short, long)]
        config: Option<String>,
    },

    /// Split a binary model file into fixed-size chunks for static hosting
    Chunk {
        /// Path to the binary model file
        #[arg(short, long)]
        input: Option<String>,

        /// Chunk path; parts are written as <path>.part0, .part1, ...
        #[arg(short, long)]
        output: Option<String>,

        /// Chunk size in bytes (default 10 MiB)
        #[arg(long)]
        chunk_size: Option<usize>,

        /// Path to a job config JSON (optional; flags override its values)
        #[arg(short, long)]
        config: Option<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::WaferMap {
            input,
            output,
            config,
        } => {
            let config = wafer_map_config(input, output, config)?;
            vizgen::run_wafer_map(&config).map_err(anyhow::Error::msg)?;
        }
        Commands::Chunk {
            input,
            output,
            chunk_size,
            config,
        } => {
            let config = chunk_config(input, output, chunk_size, config)?;
            let report = vizgen::run_chunk(&config).map_err(anyhow::Error::msg)?;
            println!(
                "Wrote {} part(s), {} bytes total",
                report.parts.len(),
                report.total_bytes
            );
        }
    }

    Ok(())
}

/// Resolve the wafer-map job config from flags and the optional config file.
fn wafer_map_config(
    input: Option<String>,
    output: Option<String>,
    config_path: Option<String>,
) -> Result<WaferMapConfig> {
    let base = match config_path {
        Some(path) => Some(WaferMapConfig::from_json_file(&path).map_err(anyhow::Error::msg)?),
        None => None,
    };

    let input_path = match (input, &base) {
        (Some(path), _) => path,
        (None, Some(base)) => base.input_path.clone(),
        (None, None) => bail!("Missing --input (or a --config providing input_path)"),
    };
    let output_path = match (output, &base) {
        (Some(path), _) => path,
        (None, Some(base)) => base.output_path.clone(),
        (None, None) => bail!("Missing --output (or a --config providing output_path)"),
    };

    Ok(WaferMapConfig {
        input_path,
        output_path,
    })
}

/// Resolve the chunk job config from flags and the optional config file.
fn chunk_config(
    input: Option<String>,
    output: Option<String>,
    chunk_size: Option<usize>,
    config_path: Option<String>,
) -> Result<ChunkConfig> {
    let base = match config_path {
        Some(path) => Some(ChunkConfig::from_json_file(&path).map_err(anyhow::Error::msg)?),
        None => None,
    };

    let input_path = match (input, &base) {
        (Some(path), _) => path,
        (None, Some(base)) => base.input_path.clone(),
        (None, None) => bail!("Missing --input (or a --config providing input_path)"),
    };
    let chunk_path = match (output, &base) {
        (Some(path), _) => path,
        (None, Some(base)) => base.chunk_path.clone(),
        (None, None) => bail!("Missing --output (or a --config providing chunk_path)"),
    };
    let chunk_size = chunk_size
        .or_else(|| base.as_ref().map(|b| b.chunk_size))
        .unwrap_or(vizgen::chunk::DEFAULT_CHUNK_SIZE);

    Ok(ChunkConfig {
        input_path,
        chunk_path,
        chunk_size,
    })
}
