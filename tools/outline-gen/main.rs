use clap::Parser;
use outliner::prelude::*;
use rand::Rng;
use rand::rngs::ThreadRng;
use std::fs;

/// A CLI tool to generate sample initiative trees for the outliner
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_initiatives.json")]
    output: String,

    /// The number of initiatives to generate
    #[arg(long, default_value_t = 5)]
    initiatives: usize,

    /// The maximum number of tasks per initiative
    #[arg(long, default_value_t = 8)]
    max_tasks: usize,

    /// The maximum number of checklist items per task
    #[arg(long, default_value_t = 6)]
    max_items: usize,

    /// Also write the flattened outline rows to this path
    #[arg(long)]
    rows: Option<String>,
}

const VERBS: [&str; 8] = [
    "Draft", "Review", "Ship", "Plan", "Test", "Design", "Document", "Migrate",
];
const SUBJECTS: [&str; 8] = [
    "onboarding", "billing page", "release notes", "search", "roadmap", "API docs", "pricing",
    "dashboard",
];

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut rng = rand::rng();

    println!(
        "Generating {} initiative(s) (up to {} tasks, {} checklist items each)...",
        cli.initiatives, cli.max_tasks, cli.max_items
    );

    let mut next_id = 1u64;
    let initiatives: Vec<Initiative> = (0..cli.initiatives)
        .map(|_| generate_initiative(&mut rng, &mut next_id, cli.max_tasks, cli.max_items))
        .collect();

    OutlineDocument::save(&initiatives, &cli.output)?;
    println!(
        "Successfully generated {} entities and saved them to '{}'",
        next_id - 1,
        cli.output
    );

    if let Some(rows_path) = cli.rows {
        let rows = flatten_tree_to_outline(&initiatives);
        fs::write(&rows_path, OutlineDocument::to_json_pretty(&rows)?)?;
        println!("-> Wrote {} outline rows to '{}'", rows.len(), rows_path);
    }

    Ok(())
}

fn generate_initiative(
    rng: &mut ThreadRng,
    next_id: &mut u64,
    max_tasks: usize,
    max_items: usize,
) -> Initiative {
    let id = take_id(next_id);
    let task_count = rng.random_range(0..=max_tasks);
    let tasks = (0..task_count)
        .map(|_| generate_task(rng, next_id, max_items))
        .collect();
    Initiative {
        id: Some(id),
        title: Some(random_title(rng)),
        status: random_status(rng).to_string(),
        tasks,
    }
}

fn generate_task(rng: &mut ThreadRng, next_id: &mut u64, max_items: usize) -> Task {
    let id = take_id(next_id);
    let item_count = rng.random_range(0..=max_items);
    let checklist_items = (0..item_count)
        .map(|order| ChecklistItem {
            id: Some(take_id(next_id)),
            title: Some(random_title(rng)),
            is_complete: rng.random_bool(0.4),
            order: Some(order as u32),
        })
        .collect();
    Task {
        id: Some(id),
        title: Some(random_title(rng)),
        status: random_status(rng).to_string(),
        checklist_items,
    }
}

fn take_id(next_id: &mut u64) -> EntityId {
    let id = EntityId(next_id.to_string());
    *next_id += 1;
    id
}

fn random_title(rng: &mut ThreadRng) -> String {
    let verb = VERBS[rng.random_range(0..VERBS.len())];
    let subject = SUBJECTS[rng.random_range(0..SUBJECTS.len())];
    format!("{} {}", verb, subject)
}

fn random_status(rng: &mut ThreadRng) -> &'static str {
    match rng.random_range(0..3) {
        0 => Status::DONE,
        1 => Status::TO_DO,
        _ => "IN_PROGRESS",
    }
}
