//! # sprig
//!
//! Generates UI components from a saved design-tool nodes response.
//!
//! ```text
//! sprig --input nodes.json --ids 1:2,1:3 --platform wechat --out generated
//! ```

mod config;

use clap::Parser;
use serde::Serialize;
use sprig_codegen::{
    generate_batch, ArtifactWriter, CodegenError, ComponentResult, FormatterKind, FsWriter,
    Platform,
};
use sprig_core::{parse_node_ids, NodesResponse};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "sprig")]
#[command(about = "Generate UI components from design-tool nodes", long_about = None)]
#[command(version)]
struct Cli {
    /// Saved `GET /v1/files/:key/nodes` response
    #[arg(short, long)]
    input: PathBuf,

    /// Comma-separated node ids (default: every node in the input)
    #[arg(long)]
    ids: Option<String>,

    /// Target platform: pc, mobile or wechat
    #[arg(short, long)]
    platform: Option<String>,

    /// Output directory
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Print results without writing files
    #[arg(long)]
    dry_run: bool,

    /// Format output with prettier
    #[arg(long)]
    prettier: bool,

    /// Config file (default: ./sprig.config.json)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Serialize)]
struct Output {
    success: bool,
    data: OutputData,
}

#[derive(Serialize)]
struct OutputData {
    components: Vec<ComponentResult>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "generation failed");
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn run(cli: Cli) -> sprig_codegen::Result<()> {
    let config = config::load_config(cli.config.as_deref());

    let mut options = config.generate;
    if let Some(platform) = &cli.platform {
        options.platform = platform.parse::<Platform>()?;
    }
    if cli.prettier {
        options.formatter = FormatterKind::Prettier;
    }

    let input = std::fs::read_to_string(&cli.input)?;
    let response = NodesResponse::from_json(&input)?;

    let ids = match &cli.ids {
        Some(list) => parse_node_ids(list),
        None => response.ids().map(str::to_string).collect(),
    };
    if ids.is_empty() {
        return Err(CodegenError::Other("no node ids provided".to_string()));
    }

    let out = cli
        .out
        .or(config.out_dir)
        .unwrap_or_else(|| PathBuf::from("generated"));
    let fs_writer = FsWriter::new(out);
    let writer: Option<&dyn ArtifactWriter> = if cli.dry_run {
        None
    } else {
        Some(&fs_writer as &dyn ArtifactWriter)
    };

    tracing::info!(platform = %options.platform, count = ids.len(), "generating components");
    let components = generate_batch(&response, &ids, &options, writer)?;

    let output = Output {
        success: true,
        data: OutputData { components },
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
