//! Blueprint CLI
//!
//! Usage:
//!   blueprint [OPTIONS] [FILE]
//!
//! Options:
//!   -j, --json                Print the cell report as JSON
//!   -l, --lint                Print layout warnings to stderr
//!   -t, --tree                Build the layout and print the component tree
//!   -c, --config <FILE>       Builder configuration (TOML format)
//!   -L, --layout <NAME=FILE>  Embed FILE as a sub-layout wherever NAME appears
//!   -h, --help                Print help

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use blueprint_grid::{
    grid::lint, tree_outline, BuilderConfig, ComponentBuilder, GridReport, LayoutGrid,
};

#[derive(Parser)]
#[command(name = "blueprint")]
#[command(about = "Inspect ASCII-art grid layouts")]
struct Cli {
    /// Layout file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Print the cell report as JSON
    #[arg(short, long)]
    json: bool,

    /// Print layout warnings to stderr
    #[arg(short, long)]
    lint: bool,

    /// Build the layout and print the component tree
    #[arg(short, long)]
    tree: bool,

    /// Builder configuration file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Sub-layout to embed wherever NAME appears, as NAME=FILE
    #[arg(short = 'L', long = "layout", value_name = "NAME=FILE")]
    layouts: Vec<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let (source, filename) = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => (content, path.display().to_string()),
            Err(e) => fail(&format!("Error reading file '{}': {}", path.display(), e)),
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => (buffer, "<stdin>".to_string()),
                Err(e) => fail(&format!("Error reading from stdin: {}", e)),
            }
        }
    };

    let grid = LayoutGrid::parse(&source);

    if cli.lint {
        for warning in lint::check(&grid) {
            eprint!("{}", warning.format(&source, &filename));
        }
    }

    if cli.tree {
        let config = match &cli.config {
            Some(path) => match BuilderConfig::from_file(path) {
                Ok(config) => config,
                Err(e) => fail(&format!("Error loading config '{}': {}", path.display(), e)),
            },
            None => BuilderConfig::default(),
        };

        let mut builder: ComponentBuilder<()> = ComponentBuilder::with_config(config);
        for spec in &cli.layouts {
            let Some((name, path)) = spec.split_once('=') else {
                fail(&format!("Invalid --layout '{}': expected NAME=FILE", spec));
            };
            match fs::read_to_string(path) {
                Ok(text) => builder = builder.layout(name, text),
                Err(e) => fail(&format!("Error reading layout '{}': {}", path, e)),
            }
        }

        match builder.build(&grid) {
            Ok(tree) => print!("{}", tree_outline(&tree)),
            Err(e) => fail(&format!("Error: {}", e)),
        }
        return;
    }

    let report = GridReport::new(&grid);
    if cli.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => fail(&format!("Error: {}", e)),
        }
    } else {
        print!("{}", report.to_text());
    }
}

fn fail(message: &str) -> ! {
    eprintln!("{}", message);
    process::exit(1);
}
