//! Shadowfist MSE CLI
//!
//! Command-line tool for converting Shadowfist card sheets (CSV) into Magic
//! Set Editor set files.

use chrono::Local;
use clap::{Args, Parser, Subcommand};
use mse_core::{
    convert_lines, parse_cards, read_source, ConverterConfig, MalformedPolicy, RenderContext,
    CARD_COLUMNS,
};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "mse-cli")]
#[command(about = "Shadowfist card sheet to Magic Set Editor converter", long_about = None)]
#[command(version)]
struct Cli {
    /// Log each converted card
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Settings shared by commands that read a sheet
#[derive(Args)]
struct SheetArgs {
    /// Card sheet to read (path, file:// URL, or - for stdin)
    #[arg(short, long)]
    input: Option<String>,

    /// JSON config file with converter defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Field separator (defaults to ',')
    #[arg(long)]
    separator: Option<String>,

    /// Quote character (defaults to '"')
    #[arg(long)]
    quote: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a card sheet into an MSE set file
    Convert {
        #[command(flatten)]
        sheet: SheetArgs,

        /// Directory to write the set file to (defaults to the current directory)
        #[arg(short, long)]
        directory: Option<PathBuf>,

        /// Set file name
        #[arg(short, long)]
        filename: Option<String>,

        /// Copyright text for every card
        #[arg(long)]
        copyright: Option<String>,

        /// Print the set file instead of writing it
        #[arg(long)]
        stdout: bool,

        /// Leave out malformed cards instead of failing
        #[arg(long)]
        skip_invalid: bool,
    },

    /// Parse a card sheet and display its cards
    Parse {
        #[command(flatten)]
        sheet: SheetArgs,

        /// Print cards as JSON
        #[arg(long)]
        json: bool,

        /// Maximum number of cards to display
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Create a converter config file
    CreateConfig {
        /// Output path for the config file
        #[arg(short, long)]
        output: PathBuf,

        /// Card sheet to read by default
        #[arg(short, long)]
        source: Option<String>,

        /// Directory to write set files to
        #[arg(short, long)]
        directory: Option<PathBuf>,

        /// Copyright text for every card
        #[arg(long)]
        copyright: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();
}

fn run(command: Commands) -> mse_core::Result<()> {
    match command {
        Commands::Convert {
            sheet,
            directory,
            filename,
            copyright,
            stdout,
            skip_invalid,
        } => {
            let mut config = load_config(&sheet)?;
            if directory.is_some() {
                config.directory = directory;
            }
            if filename.is_some() {
                config.filename = filename;
            }
            if copyright.is_some() {
                config.copyright = copyright;
            }
            let policy = if skip_invalid {
                MalformedPolicy::Skip
            } else {
                MalformedPolicy::Abort
            };
            cmd_convert(&config, stdout, policy)
        }
        Commands::Parse { sheet, json, limit } => {
            let config = load_config(&sheet)?;
            cmd_parse(&config, json, limit)
        }
        Commands::CreateConfig {
            output,
            source,
            directory,
            copyright,
        } => cmd_create_config(&output, source, directory, copyright),
    }
}

/// Load the config file (if any) and layer command-line values on top
fn load_config(sheet: &SheetArgs) -> mse_core::Result<ConverterConfig> {
    let mut config = match &sheet.config {
        Some(path) => {
            let config = ConverterConfig::load(path)?;
            info!(path = %path.display(), "loaded config");
            config
        }
        None => ConverterConfig::default(),
    };

    if sheet.input.is_some() {
        config.source = sheet.input.clone();
    }
    if sheet.separator.is_some() {
        config.separator = sheet.separator.clone();
    }
    if sheet.quote.is_some() {
        config.quote = sheet.quote.clone();
    }

    Ok(config)
}

fn read_sheet(config: &ConverterConfig) -> mse_core::Result<Vec<String>> {
    let source = config.source.as_deref().unwrap_or("-");
    let lines = read_source(source)?;
    info!(source, lines = lines.len(), "read card sheet");
    Ok(lines)
}

fn cmd_convert(
    config: &ConverterConfig,
    to_stdout: bool,
    policy: MalformedPolicy,
) -> mse_core::Result<()> {
    // Validate separator/quote before touching the sheet
    let parser = config.parser_config()?;
    let lines = read_sheet(config)?;

    let context = RenderContext::new(
        Local::now().naive_local(),
        config.copyright.clone().unwrap_or_default(),
    );
    let conversion = convert_lines(&lines, &parser, &context, policy)?;
    let document = conversion.to_set_document();

    if to_stdout {
        print!("{}", document);
    } else {
        let cwd = std::env::current_dir()?;
        let output = config.output_path(&cwd);
        fs::write(&output, document)?;
        println!(
            "Converted {} cards to {}",
            conversion.card_count(),
            output.display()
        );
    }

    if !conversion.skipped.is_empty() {
        eprintln!("\nSkipped {} malformed records:", conversion.skipped.len());
        for skipped in &conversion.skipped {
            eprintln!(
                "  - Line {}: {} fields",
                skipped.line, skipped.field_count
            );
        }
    }

    Ok(())
}

fn cmd_parse(config: &ConverterConfig, json: bool, limit: Option<usize>) -> mse_core::Result<()> {
    let parser = config.parser_config()?;
    let lines = read_sheet(config)?;
    let cards = parse_cards(&lines, &parser)?;
    let card_limit = limit.unwrap_or(cards.len());

    if json {
        let shown: Vec<_> = cards.iter().take(card_limit).collect();
        println!("{}", serde_json::to_string_pretty(&shown)?);
        return Ok(());
    }

    println!("Cards: {}", cards.len());
    println!();
    println!("{}", CARD_COLUMNS.join("\t"));
    println!("{}", "-".repeat(CARD_COLUMNS.len() * 12));

    for card in cards.iter().take(card_limit) {
        let values = [
            &card.title,
            &card.subtitle,
            &card.faction,
            &card.card_type,
            &card.cost,
            &card.provides,
            &card.fighting,
            &card.power,
            &card.body,
            &card.text,
            &card.artist,
            &card.designer,
        ];
        let values: Vec<&str> = values.iter().map(|v| v.as_str()).collect();
        println!("{}", values.join("\t"));
    }

    if cards.len() > card_limit {
        println!("... ({} more cards)", cards.len() - card_limit);
    }

    Ok(())
}

fn cmd_create_config(
    output: &Path,
    source: Option<String>,
    directory: Option<PathBuf>,
    copyright: Option<String>,
) -> mse_core::Result<()> {
    let config = ConverterConfig {
        source,
        directory,
        copyright,
        ..Default::default()
    };

    config.save(output)?;
    println!("Created config file: {}", output.display());
    println!();
    println!("Edit the file to set your defaults, then run:");
    println!("  mse-cli convert --config {}", output.display());

    Ok(())
}
