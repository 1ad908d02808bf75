use anyhow::{Context, Result};
use clap::Parser;
use csvplot::logging::{init_logging, ENV_LOG_LEVEL};
use csvplot::{csv_reader, tool, CanvasConfig, Dataset};
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "csvplot")]
#[command(about = "Render CSV data as a line, bar, pie or world map PNG", long_about = None)]
struct Args {
    /// CSV file to read (stdin when omitted)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Plot kind: line, bar, pie or worldmap
    #[arg(short, long, default_value = "line")]
    kind: String,

    /// Render parameters as a JSON object (e.g. '{"x": "month", "y": "sales", "title": "Sales"}')
    #[arg(short, long)]
    params: Option<String>,

    /// Output file (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write a data URI instead of raw PNG bytes
    #[arg(long)]
    data_uri: bool,

    /// Figure width in inches
    #[arg(long)]
    width: Option<f64>,

    /// Figure height in inches
    #[arg(long)]
    height: Option<f64>,

    /// Resolution in dots per inch
    #[arg(long)]
    dpi: Option<u32>,

    /// Log level for csvplot (RUST_LOG takes precedence)
    #[arg(long, env = ENV_LOG_LEVEL, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log_level);

    let mut config = CanvasConfig::from_env();
    if let Some(width) = args.width {
        config.width = width;
    }
    if let Some(height) = args.height {
        config.height = height;
    }
    if let Some(dpi) = args.dpi {
        config.dpi = dpi;
    }

    let dataset = match &args.input {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read CSV from {}", path.display()))?;
            Dataset::from_csv_str(&text)
                .with_context(|| format!("Failed to parse CSV from {}", path.display()))?
        }
        None => csv_reader::read_csv_from_stdin().context("Failed to read CSV from stdin")?,
    };

    let image = tool::render_plot(&dataset, &args.kind, args.params.as_deref(), &config)
        .context("Failed to render plot")?;

    let payload = if args.data_uri {
        image.to_data_uri().into_bytes()
    } else {
        image.into_bytes()
    };

    match &args.output {
        Some(path) => std::fs::write(path, &payload)
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            handle
                .write_all(&payload)
                .context("Failed to write to stdout")?;
            handle.flush().context("Failed to flush stdout")?;
        }
    }

    Ok(())
}
