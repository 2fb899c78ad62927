use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use cos_core::{CosConfig, StatusRecord};
use cos_scout::{Report, ScoutEngine};

#[derive(Parser)]
#[command(name = "cos", version, about = "Context OS scout, ULTP codec and directive compressor")]
struct Cli {
    /// JSON config file overriding the default layout
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose debug output
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect a project and report its context OS state
    Scout(ScoutArgs),

    /// Compress a markdown file into a directive line
    Compress {
        /// File to compress, or `-` for stdin
        input: PathBuf,

        /// Print a size summary to stderr
        #[arg(long)]
        stats: bool,
    },

    /// Validate or decode ULTP frames
    Ultp {
        #[command(subcommand)]
        action: UltpAction,
    },
}

#[derive(Args)]
struct ScoutArgs {
    /// Project directory
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Print the ULTP frame instead of the report
    #[arg(long, conflicts_with = "json")]
    ultp: bool,

    /// Print the status record as JSON
    #[arg(long)]
    json: bool,

    /// Print the ULTP frame, a `---` line, then the compressed kernel
    #[arg(long, conflicts_with_all = ["ultp", "json"])]
    ready: bool,
}

#[derive(Subcommand)]
enum UltpAction {
    /// Check a frame against the grammar
    Validate { frame: String },
    /// Decode a frame to JSON
    Decode { frame: String },
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn load_config(cli: &Cli) -> Result<CosConfig> {
    match &cli.config {
        Some(path) => CosConfig::load(path).with_context(|| format!("failed to load config {}", path.display())),
        None => Ok(CosConfig::default()),
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Commands::Scout(args) => cmd_scout(&cli, args),
        Commands::Compress { input, stats } => cmd_compress(input, *stats),
        Commands::Ultp { action } => match action {
            UltpAction::Validate { frame } => Ok(cmd_validate(frame)),
            UltpAction::Decode { frame } => cmd_decode(frame),
        },
    }
}

fn cmd_scout(cli: &Cli, args: &ScoutArgs) -> Result<ExitCode> {
    let config = load_config(cli)?;
    let engine = ScoutEngine::new(&args.path, config.layout);
    let record = engine
        .scan()
        .with_context(|| format!("failed to scan {}", args.path.display()))?;

    if args.ready {
        print_ready(&args.path, &record)?;
    } else if args.ultp {
        println!("{}", cos_ultp::encode(&record));
    } else if args.json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        print!("{}", Report(&record));
    }
    Ok(ExitCode::SUCCESS)
}

fn print_ready(root: &Path, record: &StatusRecord) -> Result<()> {
    println!("{}", cos_ultp::encode(record));
    println!("---");
    if let (true, Some(rel)) = (record.kernel.found, &record.kernel.path) {
        let path = root.join(rel);
        let kernel = std::fs::read_to_string(&path).with_context(|| format!("failed to read {}", path.display()))?;
        println!("{}", cos_compactor::compress(&kernel));
    }
    Ok(())
}

fn read_input(input: &Path) -> Result<String> {
    if input == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf).context("failed to read stdin")?;
        return Ok(buf);
    }
    std::fs::read_to_string(input).with_context(|| format!("failed to read {}", input.display()))
}

fn cmd_compress(input: &Path, stats: bool) -> Result<ExitCode> {
    let content = read_input(input)?;
    let result = cos_compactor::compress_with_stats(&content);
    println!("{}", result.output);
    if stats {
        eprintln!(
            "{} -> {} bytes ({:.1}% smaller, {} lines kept, {} dropped)",
            result.original_len, result.compressed_len, result.reduction_pct, result.lines_kept, result.lines_dropped
        );
    }
    Ok(ExitCode::SUCCESS)
}

fn cmd_validate(frame: &str) -> ExitCode {
    if cos_ultp::validate(frame) {
        println!("valid");
        ExitCode::SUCCESS
    } else {
        println!("invalid");
        ExitCode::FAILURE
    }
}

fn cmd_decode(frame: &str) -> Result<ExitCode> {
    match cos_ultp::decode(frame) {
        Some(state) => {
            println!("{}", serde_json::to_string_pretty(&state)?);
            Ok(ExitCode::SUCCESS)
        }
        None => {
            eprintln!("error: not a valid ULTP frame");
            Ok(ExitCode::FAILURE)
        }
    }
}
