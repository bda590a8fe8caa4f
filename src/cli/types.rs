use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Main CLI parser structure
#[derive(Parser)]
#[command(name = "tocify")]
#[command(about = "Table-of-contents generator for HTML pages", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Input HTML file (defaults to stdin)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output file (defaults to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Custom configuration file
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Show the full backtrace when an error occurs
    #[arg(short, long, default_value_t = false)]
    pub trace: bool,

    /// Enable verbose debugging
    #[arg(short = 'g', long, default_value_t = false)]
    pub debug: bool,
}

/// Output formats for the generated table of contents
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Nested HTML list of anchor links
    Html,
    /// Indented Markdown bullet list
    Markdown,
    /// JSON outline tree
    Json,
}

/// Subcommands for the CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Generate a table of contents from the input document
    #[command(alias = "g")]
    Generate {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Html)]
        format: OutputFormat,

        /// Minimum heading level to include (h1 = 1)
        #[arg(long, value_name = "LEVEL")]
        min_level: Option<usize>,

        /// Maximum heading level to include
        #[arg(long, value_name = "LEVEL")]
        max_level: Option<usize>,

        /// Only include headings whose id starts with this prefix
        #[arg(long, value_name = "PREFIX")]
        id_prefix: Option<String>,

        /// Render an ordered list instead of an unordered one
        #[arg(long, default_value_t = false)]
        ordered: bool,

        /// Print verbose output
        #[arg(short, long, default_value_t = false)]
        verbose: bool,

        /// Silence all output except errors
        #[arg(short, long, default_value_t = false)]
        quiet: bool,
    },

    /// List the extracted headings without nesting them
    Headings {
        /// Emit the flat sequence as JSON instead of plain text
        #[arg(long, default_value_t = false)]
        json: bool,

        /// Only include headings whose id starts with this prefix
        #[arg(long, value_name = "PREFIX")]
        id_prefix: Option<String>,
    },
}
