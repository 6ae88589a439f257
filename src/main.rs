use clap::{Parser, Subcommand};
use colored::Colorize;
use eyre::Result;
use std::path::PathBuf;
use tasktracker::{Status, Task, TaskStore};

#[derive(Parser)]
#[command(name = "tasktracker")]
#[command(about = "Task tracker CLI - persistent task list backed by a JSON file")]
#[command(version)]
struct Cli {
    /// Path to the backing JSON file
    #[arg(short, long, default_value = TaskStore::DEFAULT_PATH)]
    file: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new task
    Add {
        /// Description of the task
        description: String,
    },

    /// List tasks, optionally filtered by status
    List {
        /// Optional status filter: todo, in-progress, done
        status: Option<String>,
    },

    /// Update the description of an existing task
    Update {
        /// ID of the task to update
        id: u64,
        /// New description
        description: String,
    },

    /// Delete a task
    Delete {
        /// ID of the task to delete
        id: u64,
    },

    /// Mark a task as in progress
    MarkInProgress {
        /// ID of the task
        id: u64,
    },

    /// Mark a task as done
    MarkDone {
        /// ID of the task
        id: u64,
    },
}

fn main() -> Result<()> {
    // Setup tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let store = TaskStore::new(&cli.file);

    match cli.command {
        Commands::Add { description } => {
            let task = store.add(&description)?;
            println!("Task added: {}", summary(&task));
        }
        Commands::List { status } => {
            let tasks = store.list(status.as_deref())?;
            print_task_list(&tasks, status.as_deref());
        }
        Commands::Update { id, description } => {
            let task = store.update(id, &description)?;
            println!("Task updated: {}", summary(&task));
        }
        Commands::Delete { id } => {
            store.delete(id)?;
            println!("Task deleted: {id}");
        }
        Commands::MarkInProgress { id } => {
            store.mark_in_progress(id)?;
            println!("Task marked as in progress: {id}");
        }
        Commands::MarkDone { id } => {
            store.mark_done(id)?;
            println!("Task marked as done: {id}");
        }
    }

    Ok(())
}

fn print_task_list(tasks: &[Task], status: Option<&str>) {
    if tasks.is_empty() {
        match status {
            Some(s) => println!("No tasks found with status: {s}."),
            None => println!("No tasks found."),
        }
        return;
    }

    println!("\nListing {} tasks:", tasks.len());
    println!("{}", "-".repeat(40));
    for task in tasks {
        println!(
            "{} - {} - {}",
            task.id,
            task.description,
            colored_status(task.status)
        );
    }
    println!();
}

fn summary(task: &Task) -> String {
    format!("{} - {} - {}", task.id, task.description, task.status)
}

fn colored_status(status: Status) -> colored::ColoredString {
    match status {
        Status::Todo => status.as_str().yellow(),
        Status::InProgress => status.as_str().blue(),
        Status::Done => status.as_str().green(),
    }
}
