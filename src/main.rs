//! xmind2md - XMind to Markdown converter

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use xmind2md::{ConvertConfig, convert_file, read_xmind};

#[derive(Parser)]
#[command(name = "xmind2md")]
#[command(version, about = "Convert XMind mind maps to Markdown", long_about = None)]
#[command(after_help = "EXAMPLES:
    xmind2md plan.xmind             Write one .md per sheet next to plan.xmind
    xmind2md plan.xmind -o notes    Write into ./notes
    xmind2md -i plan.xmind          List the sheets without converting")]
struct Cli {
    /// Input file (.xmind)
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output directory (defaults to the input's directory)
    #[arg(short, long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Show sheets without converting
    #[arg(short, long)]
    info: bool,

    /// Stop at the first file that cannot be written
    #[arg(long)]
    fail_fast: bool,

    /// Suppress output messages
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Log each step
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.quiet, cli.verbose);

    let result = if cli.info {
        show_info(&cli)
    } else {
        convert(&cli)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// `RUST_LOG` takes precedence over the flags.
fn init_logging(quiet: bool, verbose: bool) {
    let level = if quiet {
        "warn"
    } else if verbose {
        "debug"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn show_info(cli: &Cli) -> Result<(), String> {
    let sheets = read_xmind(&cli.input).map_err(|e| e.to_string())?;

    println!("File: {}", cli.input.display());
    println!("Sheets: {}", sheets.len());
    for (index, sheet) in sheets.iter().enumerate() {
        let root = &sheet.root_topic;
        println!(
            "  [{index}] {} (root: {}, attached: {}, detached: {}, topics: {}, relationships: {})",
            sheet.title,
            root.title,
            root.attached().len(),
            root.detached().len(),
            root.subtree_len(),
            sheet.relationships.len(),
        );
    }

    Ok(())
}

fn convert(cli: &Cli) -> Result<(), String> {
    let mut config = ConvertConfig::new().with_fail_fast(cli.fail_fast);
    if let Some(dir) = &cli.output_dir {
        config = config.with_output_dir(dir);
    }

    let report = convert_file(&cli.input, &config).map_err(|e| e.to_string())?;

    if !cli.quiet {
        for path in &report.written {
            println!("{}", path.display());
        }
    }

    if report.is_success() {
        Ok(())
    } else {
        let messages: Vec<String> = report.failures.iter().map(ToString::to_string).collect();
        Err(messages.join("\n"))
    }
}
