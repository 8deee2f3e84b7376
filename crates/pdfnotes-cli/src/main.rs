mod commands;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use pdfnotes_core::extraction::Backend;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "pdfnotes",
    version,
    about = "Extract chapter text from academic PDFs for study notes"
)]
struct Cli {
    /// Increase log output on stderr (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract text from a page range, optionally split into sections
    Extract(ExtractArgs),
    /// Manage and inspect heading rule sets
    Rules {
        #[command(subcommand)]
        action: RulesAction,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Markdown,
    Json,
}

#[derive(clap::Args)]
pub struct ExtractArgs {
    /// Path to the PDF file
    pub pdf_file: PathBuf,

    /// First page to extract (1-indexed, inclusive)
    #[arg(long)]
    pub start: Option<usize>,

    /// Last page to extract (1-indexed, inclusive)
    #[arg(long)]
    pub end: Option<usize>,

    /// Split the text into sections at detected headings
    #[arg(long)]
    pub sections: bool,

    /// Locate a section by its heading (e.g. "14.1") and extract only its pages
    #[arg(long, value_name = "PATTERN", conflicts_with_all = ["start", "end"])]
    pub section: Option<String>,

    /// First page searched for --section
    #[arg(long, requires = "section")]
    pub search_start: Option<usize>,

    /// Last page searched for --section
    #[arg(long, requires = "section")]
    pub search_end: Option<usize>,

    /// Predefined heading rule set(s): academic, numbered, chapter, cjk (default: academic)
    #[arg(short, long = "preset", value_name = "NAME")]
    pub preset: Vec<String>,

    /// Custom JSON heading rule file(s)
    #[arg(short, long = "rules", value_name = "FILE")]
    pub rules: Vec<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Don't print page banners in text output
    #[arg(long)]
    pub no_page_numbers: bool,

    /// Extraction backend: auto, lopdf or pdftotext
    #[arg(long, default_value = "auto", value_parser = parse_backend)]
    pub backend: Backend,

    /// Keep column layout (pdftotext backend only)
    #[arg(long)]
    pub layout: bool,

    /// Write output to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

#[derive(Subcommand)]
enum RulesAction {
    /// List predefined heading rule sets
    List,
    /// Show the patterns of a predefined rule set
    Explain {
        /// Preset name (e.g., "academic")
        preset: String,
    },
    /// Print the JSON schema with field descriptions and example
    Schema,
    /// Validate a custom rule file
    Validate {
        /// Path to JSON rule file
        file: PathBuf,
    },
    /// Show which rule, if any, classifies a line as a heading
    Match {
        /// Line of text to classify
        line: String,

        /// Predefined rule set(s) (default: academic)
        #[arg(short, long = "preset", value_name = "NAME")]
        preset: Vec<String>,

        /// Custom JSON rule file(s)
        #[arg(short, long = "rules", value_name = "FILE")]
        rules: Vec<PathBuf>,
    },
}

fn parse_backend(s: &str) -> Result<Backend, String> {
    Backend::from_str_loose(s)
        .ok_or_else(|| format!("unknown backend '{s}' (expected auto, lopdf or pdftotext)"))
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Extract(args) => commands::extract::run(args),
        Commands::Rules { action } => match action {
            RulesAction::List => commands::rules::list(),
            RulesAction::Explain { preset } => commands::rules::explain(&preset),
            RulesAction::Schema => commands::rules::schema(),
            RulesAction::Validate { file } => commands::rules::validate(&file),
            RulesAction::Match {
                line,
                preset,
                rules,
            } => commands::rules::match_line(&line, &preset, &rules),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
