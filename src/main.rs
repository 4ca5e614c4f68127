mod convert;
mod error;
mod format;
mod output;
mod parser;
mod render;
mod source;

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use convert::ConvertOptions;
use format::OutputMode;

#[derive(Parser)]
#[command(
    name = "md2json",
    about = "Convert Markdown to hierarchical JSON or a flat notebook",
    after_help = "Examples:\n  md2json document.md output.json      # hierarchical, from extension\n  md2json notes.md notebook.ipynb      # flat notebook, from extension\n  md2json notes.md out.txt             # prompted for format"
)]
struct Cli {
    /// Input Markdown file
    input: PathBuf,
    /// Output file (.json or .ipynb)
    output: PathBuf,
    /// Output format; inferred from the output extension when omitted
    #[arg(short, long, value_enum)]
    format: Option<OutputMode>,
    /// Notebook metadata key that records the output file name
    #[arg(long, default_value = render::DEFAULT_PLATFORM)]
    platform: String,
    /// Log debug detail to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_level.into()),
        )
        .init();

    let message = run(cli)?;
    println!("{message}");
    Ok(())
}

fn run(cli: Cli) -> anyhow::Result<String> {
    let mode = format::resolve_mode(
        cli.format,
        &cli.output,
        &mut io::stdin().lock(),
        &mut io::stdout(),
    )?;

    let opts = ConvertOptions {
        input: cli.input,
        output: cli.output,
        mode,
        platform: cli.platform,
    };
    let done = convert::convert(&opts)
        .with_context(|| format!("{mode} conversion of '{}' failed", opts.input.display()))?;
    tracing::debug!(sections = done.sections, cells = done.cells, "conversion finished");
    Ok(done.message())
}
