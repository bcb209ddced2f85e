//! Portfolio Gen CLI
//!
//! Usage:
//!   portfolio-gen [OPTIONS]
//!
//! Options:
//!   -d, --data <FILE>        Profile data (JSON) [default: cv.json]
//!   -s, --stylesheet <FILE>  Stylesheet to inline [default: css/styles.css]
//!   -o, --output <FILE>      Output page [default: index.html]
//!   -c, --config <FILE>      Config file (TOML) [default: portfolio.toml if present]
//!   -h, --help               Print help

use std::path::PathBuf;

use clap::Parser;

use portfolio_gen::{generate, GenerateError, GeneratorConfig};

#[derive(Parser)]
#[command(name = "portfolio-gen")]
#[command(about = "Generate a static portfolio page from cv.json and a stylesheet")]
struct Cli {
    /// Profile data file (JSON)
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Stylesheet file inlined into the page
    #[arg(short, long)]
    stylesheet: Option<PathBuf>,

    /// Output HTML file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Config file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn setup_logging() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}

fn main() {
    setup_logging();
    let cli = Cli::parse();

    let mut config = match GeneratorConfig::load(cli.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    if let Some(path) = cli.data {
        config = config.with_data_path(path);
    }
    if let Some(path) = cli.stylesheet {
        config = config.with_stylesheet_path(path);
    }
    if let Some(path) = cli.output {
        config = config.with_output_path(path);
    }

    match generate(&config) {
        Ok(generated) => {
            if generated.stylesheet_missing {
                eprintln!(
                    "Warning: {} not found. The output might look unstyled.",
                    config.stylesheet_path.display()
                );
            }
            println!(
                "Success! Generated static portfolio at: {}",
                generated.output_path.display()
            );
        }
        Err(e @ GenerateError::MalformedData { .. }) => {
            eprint!("{}", e.format());
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
