use anyhow::{Context, Result};
use board::{Board, Card};
use clap::{Parser, Subcommand};
use colored::Colorize;
use filters::builtin::BUILTIN_SCAN_ROOT;
use filters::{
    Console, FilterPipeline, FilterRegistry, FilterSelector, InventorySource, StreamConsole,
};
use std::io;
use std::path::{Path, PathBuf};

/// card-filter - pick, configure and apply filters to a board's cards
#[derive(Parser)]
#[command(name = "card-filter")]
#[command(about = "Interactively build card filters and apply them to a board", long_about = None)]
struct Cli {
    /// Path to the board's JSON export
    #[arg(short, long, default_value = "board.json")]
    board_file: PathBuf,

    /// Module path to discover filters under
    #[arg(long, default_value = BUILTIN_SCAN_ROOT)]
    scan_root: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the available filters
    List,

    /// Build a filter pipeline and print the cards it keeps
    Filter {
        /// Filter to add by name instead of picking from the menu (repeatable)
        #[arg(long = "filter", value_name = "NAME")]
        names: Vec<String>,

        /// Also consider archived cards
        #[arg(long)]
        include_closed: bool,
    },
}

fn main() -> Result<()> {
    // Logs go to stderr so prompts on stdout stay readable
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let registry = FilterRegistry::new(&InventorySource, &cli.scan_root)
        .context("Failed to build the filter registry")?;

    match cli.command {
        Commands::List => handle_list(&registry),
        Commands::Filter {
            names,
            include_closed,
        } => handle_filter(&registry, &cli.board_file, &names, include_closed)?,
    }

    Ok(())
}

/// Handle the 'list' command
fn handle_list(registry: &FilterRegistry) {
    println!("{}", "Available filters:".bold().blue());
    if registry.is_empty() {
        println!("  (none)");
    }
    for descriptor in registry.list() {
        println!("{}{}", "• ".green(), descriptor.name());
    }
}

/// Handle the 'filter' command
fn handle_filter(
    registry: &FilterRegistry,
    board_file: &Path,
    names: &[String],
    include_closed: bool,
) -> Result<()> {
    let board = Board::load_from_file(board_file)
        .with_context(|| format!("Failed to load board from {}", board_file.display()))?;
    tracing::info!(
        "Loaded board '{}' with {} cards",
        board.name,
        board.cards().len()
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = StreamConsole::new(stdin.lock(), stdout.lock());
    let selector = FilterSelector::new(registry);

    let pipeline = if names.is_empty() {
        choose_filters(&selector, &mut console, &board)?
    } else {
        let mut pipeline = FilterPipeline::new();
        for name in names {
            pipeline.push(selector.make_named(name, &mut console, &board.id)?);
        }
        pipeline
    };

    if pipeline.is_empty() {
        console.write_line("No filter selected")?;
        return Ok(());
    }

    let cards: Vec<Card> = if include_closed {
        board.cards().to_vec()
    } else {
        board.open_cards().cloned().collect()
    };
    let kept = pipeline.apply(cards)?;

    drop(console);
    print_cards(&board, &pipeline, &kept);
    Ok(())
}

/// Keep asking for filters until the user backs out.
fn choose_filters(
    selector: &FilterSelector<'_>,
    console: &mut dyn Console,
    board: &Board,
) -> Result<FilterPipeline> {
    let mut pipeline = FilterPipeline::new();
    loop {
        match selector.interactive_make(console, &board.id) {
            Ok(filter) => pipeline.push(filter),
            Err(err) if err.is_cancelled() => return Ok(pipeline),
            Err(err) => return Err(err.into()),
        }
    }
}

/// Helper function to format and print the kept cards
fn print_cards(board: &Board, pipeline: &FilterPipeline, cards: &[Card]) {
    println!(
        "{}",
        format!("Cards on '{}' matching {}:", board.name, pipeline.names().join(" + "))
            .bold()
            .blue()
    );
    if cards.is_empty() {
        println!("  (no cards)");
    }
    for card in cards {
        let due = card
            .due
            .map(|d| d.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{} {} [{}] members: {} due: {}",
            card.id.green(),
            card.name,
            card.labels.join(", "),
            card.members.join(", "),
            due
        );
    }
    println!("{} {} card(s)", "✓".green(), cards.len());
}
