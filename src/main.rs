use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{info, warn};
use std::path::PathBuf;
use std::time::Instant;

use usingmap::core::{CodebaseAnalyzer, ScanConfig};
use usingmap::formatters::{DotFormatter, JsonCompactFormatter, ReportFormatter};

#[derive(Debug, Clone, Parser)]
#[command(
    name = "usingmap",
    version = "0.1.0",
    author = "usingmap developers",
    about = "Maps C# using-directive dependencies and writes a Graphviz graph"
)]
struct Cli {
    /// Root directory to scan (defaults to the config file value, then ".")
    #[arg(short, long, value_name = "PATH")]
    input: Option<PathBuf>,

    /// TOML config file with root, exclude, extension, project_prefix, parallel
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Comma-separated directory basenames to skip at any depth
    #[arg(short, long, value_name = "DIRS", value_delimiter = ',')]
    exclude: Option<Vec<String>>,

    /// Source file extension to scan
    #[arg(long, value_name = "EXT")]
    extension: Option<String>,

    /// Namespace prefix of first-party imports
    #[arg(short, long, value_name = "NAME")]
    prefix: Option<String>,

    /// Graph output file path
    #[arg(short, long, value_name = "FILE", default_value = "dependencies.dot")]
    output: PathBuf,

    /// Graph output format: dot, json
    #[arg(short, long, value_name = "FORMAT", value_enum, default_value_t = OutputFormat::Dot)]
    format: OutputFormat,

    /// Read files sequentially instead of on the thread pool
    #[arg(long)]
    no_parallel: bool,

    /// Do not print the per-file report
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
#[value(rename_all = "kebab-case")]
enum OutputFormat {
    Dot,
    Json,
}

impl OutputFormat {
    fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Dot => "dot",
            OutputFormat::Json => "json",
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();
    run(cli)
}

fn resolve_config(cli: &Cli) -> Result<ScanConfig> {
    let mut config = match &cli.config {
        Some(path) => ScanConfig::from_file(path)?,
        None => ScanConfig::default(),
    };

    if let Some(input) = &cli.input {
        config.root = input.clone();
    }
    if let Some(exclude) = &cli.exclude {
        config.exclude = exclude
            .iter()
            .map(|dir| dir.trim().to_string())
            .filter(|dir| !dir.is_empty())
            .collect();
    }
    if let Some(extension) = &cli.extension {
        config.extension = extension.clone();
    }
    if let Some(prefix) = &cli.prefix {
        config.project_prefix = prefix.clone();
    }
    if cli.no_parallel {
        config.parallel = false;
    }
    Ok(config)
}

fn run(cli: Cli) -> Result<()> {
    let start_time = Instant::now();
    let config = resolve_config(&cli)?;

    info!("Root: {}", config.root.display());
    info!("Project prefix: {}", config.project_prefix);
    info!("Excluding: {:?}", config.exclude);

    let analyzer = CodebaseAnalyzer::new(config);
    let analysis = analyzer.analyze()?;

    if !cli.quiet {
        print!("{}", ReportFormatter::new().format(&analysis));
    }

    let mut generated_output = cli.output.clone();
    match cli.format {
        OutputFormat::Dot => {
            DotFormatter::new()
                .format_to_file(&analysis.edges, &generated_output)
                .with_context(|| format!("writing {}", generated_output.display()))?;
        }
        OutputFormat::Json => {
            generated_output = cli.output.with_extension("json");
            JsonCompactFormatter::new()
                .format_to_file(&analysis, &generated_output)
                .with_context(|| format!("writing {}", generated_output.display()))?;
        }
    }

    let skipped = analysis.skipped_files.len() + analysis.skipped_dirs.len();
    if skipped > 0 {
        warn!("{skipped} files or directories were skipped");
    }
    info!(
        "Wrote {} graph with {} edges to {} in {:.2}s",
        cli.format.as_str(),
        analysis.edges.len(),
        generated_output.display(),
        start_time.elapsed().as_secs_f64()
    );

    Ok(())
}
