//! fishbone CLI entry point.

use std::fs;
use std::io::{self, Read, Write};
use std::process;

use clap::Parser;

use fishbone_layout::{LayoutConfig, OutputFormat, render_outline, render_tree, seed};

/// Lay out a cause outline as a fishbone diagram (JSON or SVG).
#[derive(Parser, Debug)]
#[command(
    name = "fishbone",
    version = env!("FISHBONE_VERSION"),
    about = "Lay out a cause outline as a fishbone diagram"
)]
struct Cli {
    /// Outline file (reads from stdin if not provided)
    input: Option<String>,

    /// Render the built-in 6M dataset instead of reading an outline
    #[arg(long = "seed", conflicts_with = "input")]
    seed: bool,

    /// Output format (json, svg)
    #[arg(short = 'f', long = "format", default_value = "json")]
    format: String,

    /// JSON file overriding layout geometry
    #[arg(short = 'c', long = "config")]
    config: Option<String>,

    /// Write output to this file instead of stdout
    #[arg(short = 'o', long = "output")]
    output: Option<String>,
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("error: {}", message);
    process::exit(1);
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let format: OutputFormat = cli.format.parse().unwrap_or_else(|e| fail(e));

    let config = match cli.config {
        Some(ref path) => LayoutConfig::from_json_file(path)
            .unwrap_or_else(|e| fail(format!("cannot load config '{}': {}", path, e))),
        None => LayoutConfig::default(),
    };

    let rendered = if cli.seed {
        render_tree(&seed::default_tree(), format, &config)
    } else {
        // Read input from file or stdin
        let text = if let Some(ref path) = cli.input {
            fs::read_to_string(path)
                .unwrap_or_else(|e| fail(format!("cannot read '{}': {}", path, e)))
        } else {
            let mut buf = String::new();
            if let Err(e) = io::stdin().read_to_string(&mut buf) {
                fail(format!("cannot read stdin: {}", e));
            }
            buf
        };
        render_outline(&text, format, &config)
    };
    let rendered = rendered.unwrap_or_else(|e| fail(e));

    // Write output to file or stdout
    if let Some(ref path) = cli.output {
        if let Err(e) = fs::write(path, rendered) {
            fail(format!("cannot write '{}': {}", path, e));
        }
    } else {
        println!("{}", rendered);
        if let Err(e) = io::stdout().flush() {
            fail(format!("cannot flush stdout: {}", e));
        }
    }
}
