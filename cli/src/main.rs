//! outliner CLI - PDF title and outline extraction tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use outliner::{
    analysis, BatchOptions, HeadingLevel, JsonFormat, ParseOptions, PdfParser,
};

#[derive(Parser)]
#[command(name = "outliner")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Extract a document title and heading outline from PDFs", long_about = None)]
struct Cli {
    /// Input PDF file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output JSON file (stdout if not specified)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Output compact JSON
    #[arg(long)]
    compact: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract the outline of one PDF as JSON
    Extract {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Extract the outline of one PDF as Markdown
    #[command(alias = "md")]
    Markdown {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Process every PDF in a directory, one JSON per input
    Batch {
        /// Input directory
        #[arg(value_name = "DIR")]
        input: PathBuf,

        /// Output directory
        #[arg(short, long, value_name = "DIR", default_value = "output")]
        output: PathBuf,

        /// Disable parallel processing
        #[arg(long)]
        sequential: bool,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show extraction diagnostics for one PDF
    Info {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Extract {
            input,
            output,
            compact,
        }) => cmd_extract(&input, output.as_deref(), compact),
        Some(Commands::Markdown { input, output }) => cmd_markdown(&input, output.as_deref()),
        Some(Commands::Batch {
            input,
            output,
            sequential,
            compact,
        }) => cmd_batch(&input, &output, sequential, compact),
        Some(Commands::Info { input }) => cmd_info(&input),
        None => {
            if let Some(input) = cli.input {
                cmd_extract(&input, cli.output.as_deref(), cli.compact)
            } else {
                println!("{}", "Usage: outliner <FILE> [-o FILE]".yellow());
                println!("       outliner --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_extract(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    // Lenient mode: a page that fails to parse should not cost us the outline.
    let options = ParseOptions::new().lenient();
    let result = outliner::extract_file_with_options(input, options)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };
    let json = outliner::render::to_json(&result, format)?;

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_markdown(input: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let options = ParseOptions::new().lenient();
    let result = outliner::extract_file_with_options(input, options)?;
    let markdown = outliner::render::to_markdown(&result);

    if let Some(path) = output {
        fs::write(path, &markdown)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", markdown);
    }

    Ok(())
}

fn cmd_batch(
    input: &Path,
    output: &Path,
    sequential: bool,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut options = BatchOptions::new().lenient();
    if sequential {
        options = options.sequential();
    }
    if compact {
        options = options.with_format(JsonFormat::Compact);
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.set_message(format!("Processing {}...", input.display()));

    let report = outliner::batch::process_dir(input, output, &options)?;
    pb.finish_and_clear();

    for path in &report.succeeded {
        println!("{} {}", "Processed".green(), path.display());
    }
    for (path, message) in &report.failed {
        eprintln!(
            "{} {}: {}",
            "Failed".red().bold(),
            path.display(),
            message
        );
    }

    println!(
        "\n{} {} of {} files -> {}",
        "Done!".green().bold(),
        report.succeeded.len(),
        report.total(),
        output.display()
    );

    Ok(())
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let options = ParseOptions::new().lenient();
    let parser = PdfParser::open_with_options(input, options)?;
    let document = parser.parse()?;

    let stats = analysis::FontStatistics::scan(&document);
    let result = analysis::extract_structure(&document);

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "File".bold(), input.display());
    println!("{}: PDF {}", "Format".bold(), parser.version());
    println!("{}: {}", "Pages".bold(), document.page_count());
    println!("{}: {}pt", "Body size".bold(), stats.body_size());

    println!();
    println!("{}", "Extracted Structure".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "Title".bold(), result.title);

    for level in [HeadingLevel::H1, HeadingLevel::H2, HeadingLevel::H3] {
        let count = result.outline.iter().filter(|e| e.level == level).count();
        if count > 0 {
            println!("{}: {}", level.to_string().bold(), count);
        }
    }
    if result.outline.is_empty() {
        println!("{}", "No headings detected".dimmed());
    }

    Ok(())
}
