use clap::{Parser, Subcommand};
use outliner::prelude::*;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Convert between flat outlines and initiative/task/checklist trees
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Log conversion details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse an outline row document into a tree plus deletion lists
    Parse {
        /// Path to a JSON array of outline rows
        input: PathBuf,
        #[command(flatten)]
        output: OutputArgs,
        /// Skip rows whose title is only whitespace
        #[arg(long)]
        whitespace_blank: bool,
    },
    /// Flatten an initiative tree document into outline rows
    Flatten {
        /// Path to a JSON array of initiatives
        input: PathBuf,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Print an outline row document as indented checkbox text
    Show {
        /// Path to a JSON array of outline rows
        input: PathBuf,
        /// Print the parsed tree instead of the raw rows
        #[arg(long)]
        tree: bool,
    },
}

#[derive(clap::Args, Debug)]
struct OutputArgs {
    /// Write the result to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Emit single-line JSON
    #[arg(long)]
    compact: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Parse {
            input,
            output,
            whitespace_blank,
        } => run_parse(input, output, whitespace_blank),
        Command::Flatten { input, output } => run_flatten(input, output),
        Command::Show { input, tree } => run_show(input, tree),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(default_level))
                .unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

fn run_parse(input: PathBuf, output: OutputArgs, whitespace_blank: bool) {
    let start = Instant::now();
    let rows = OutlineDocument::rows_from_file(&input)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to load outline: {}", e)));

    let parser = OutlineParser::builder()
        .treat_whitespace_as_blank(whitespace_blank)
        .build();
    let parsed = parser
        .parse(&rows)
        .unwrap_or_else(|e| exit_with_error(&format!("Outline is not a valid tree: {}", e)));

    let summary = parsed.summary();
    info!(
        initiatives = summary.initiatives,
        tasks = summary.tasks,
        checklist_items = summary.checklist_items,
        deletions = summary.deletions,
        elapsed = ?start.elapsed(),
        "parsed outline"
    );
    emit(&parsed, &output);
}

fn run_flatten(input: PathBuf, output: OutputArgs) {
    let start = Instant::now();
    let initiatives = OutlineDocument::initiatives_from_file(&input)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to load initiatives: {}", e)));

    let rows = flatten_tree_to_outline(&initiatives);
    info!(rows = rows.len(), elapsed = ?start.elapsed(), "flattened tree");
    emit(&rows, &output);
}

fn run_show(input: PathBuf, tree: bool) {
    let rows = OutlineDocument::rows_from_file(&input)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to load outline: {}", e)));

    if tree {
        let parsed = parse_outline_to_tree(&rows)
            .unwrap_or_else(|e| exit_with_error(&format!("Outline is not a valid tree: {}", e)));
        println!("{}", OutlineFormatter::format_tree(&parsed));

        let summary = parsed.summary();
        println!("\n--- Summary ---");
        println!("Initiatives:     {}", summary.initiatives);
        println!("Tasks:           {}", summary.tasks);
        println!("Checklist items: {}", summary.checklist_items);
        println!("Completed:       {}", summary.completed);
        println!("Deletions:       {}", summary.deletions);
    } else {
        println!("{}", OutlineFormatter::format_rows(&rows));
    }
}

fn emit<T: Serialize + ?Sized>(value: &T, output: &OutputArgs) {
    let serialized = if output.compact {
        serde_json::to_string(value).map_err(|e| e.to_string())
    } else {
        OutlineDocument::to_json_pretty(value).map_err(|e| e.to_string())
    };
    let json = serialized
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialize result: {}", e)));

    match &output.output {
        Some(path) => {
            fs::write(path, json).unwrap_or_else(|e| {
                exit_with_error(&format!("Failed to write '{}': {}", path.display(), e))
            });
            info!(path = %path.display(), "wrote result");
        }
        None => println!("{}", json),
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
