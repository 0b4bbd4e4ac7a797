// Interactive session shell for the task list
//
// State lives only for the lifetime of the process: quitting discards the
// list. Commands address tasks by their 1-based position in the currently
// visible view, which is re-rendered after every change.

use chrono::DateTime;
use clap::Parser;
use colored::Colorize;
use eyre::Result;
use serde::Serialize;
use std::io::{self, IsTerminal, Write};
use tasklist::{Task, TaskCounts, TaskId, TaskListStore, ViewFilter};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tasklist")]
#[command(about = "TaskList CLI - Session-local to-do list with filtered views and derived counts")]
#[command(version = env!("GIT_DESCRIBE"))]
struct Cli {
    /// Initial view filter (all, active, completed)
    #[arg(short, long, default_value = "all")]
    filter: String,

    /// Show creation times next to each task
    #[arg(short, long)]
    timestamps: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

/// Shell state: the store plus the display options that outlive one command
struct Session {
    store: TaskListStore,
    timestamps: bool,
}

fn main() -> Result<()> {
    // Setup tracing; shell output goes to stdout, diagnostics to stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let mut store = TaskListStore::new();
    store.set_filter(cli.filter.parse()?);

    let mut session = Session {
        store,
        timestamps: cli.timestamps,
    };

    // Prompt and banner only when a human is typing; piped input stays clean
    let interactive = io::stdin().is_terminal();
    if interactive {
        println!(
            "{}",
            "tasklist session (type 'help' for commands, 'quit' to leave)".bold()
        );
    }
    render(&session);

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        if interactive {
            print!("> ");
            io::stdout().flush()?;
        }

        line.clear();
        if stdin.read_line(&mut line)? == 0 {
            // EOF ends the session
            if interactive {
                println!();
            }
            break;
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if !dispatch(&mut session, trimmed)? {
            break;
        }
    }

    Ok(())
}

/// Run one shell command; returns false when the session should end
fn dispatch(session: &mut Session, line: &str) -> Result<bool> {
    let (verb, rest) = split_verb(line);

    match verb {
        "add" => {
            session.store.add(rest);
            render(session);
        }
        "toggle" | "done" => match resolve_index(&session.store, rest) {
            Ok(id) => {
                session.store.toggle(id);
                render(session);
            }
            Err(msg) => println!("{}", msg.red()),
        },
        "rename" => {
            let (idx, title) = split_index_arg(rest);
            match resolve_index(&session.store, idx) {
                Ok(id) => {
                    session.store.rename(id, title);
                    render(session);
                }
                Err(msg) => println!("{}", msg.red()),
            }
        }
        "rm" => match resolve_index(&session.store, rest) {
            Ok(id) => {
                session.store.delete(id);
                render(session);
            }
            Err(msg) => println!("{}", msg.red()),
        },
        "clear" => {
            if session.store.completed_count() == 0 {
                println!("No completed tasks to clear");
            } else {
                session.store.clear_completed();
                render(session);
            }
        }
        "filter" => {
            if rest.is_empty() {
                println!("Filter: {}", session.store.filter());
            } else {
                match rest.parse::<ViewFilter>() {
                    Ok(filter) => {
                        session.store.set_filter(filter);
                        render(session);
                    }
                    Err(e) => println!("{}", e.to_string().red()),
                }
            }
        }
        "list" => render(session),
        "counts" => println!("{}", counts_line(&session.store)),
        "show" => match resolve_index(&session.store, rest) {
            Ok(id) => show_task(&session.store, id),
            Err(msg) => println!("{}", msg.red()),
        },
        "dump" => println!("{}", serde_json::to_string_pretty(&snapshot(&session.store))?),
        "help" => print_help(),
        "quit" | "exit" => return Ok(false),
        other => println!("Unknown command: {} (type 'help')", other),
    }

    Ok(true)
}

/// Print the visible view followed by the counters
fn render(session: &Session) {
    let store = &session.store;

    println!();
    if store.filter() != ViewFilter::All {
        println!("{}", format!("[view: {}]", store.filter()).cyan());
    }

    let visible = store.visible_items();
    if visible.is_empty() {
        println!("{}", "No tasks in this view.".dimmed());
    } else {
        for (i, task) in visible.iter().enumerate() {
            let marker = if task.done { "[x]" } else { "[ ]" };
            let mut row = format!("{:>3}. {} {}", i + 1, marker, task.title);
            if session.timestamps {
                row.push_str(&format!("  ({})", format_time(task.created_at, "%Y-%m-%d %H:%M")));
            }
            if task.done {
                println!("{}", row.dimmed().strikethrough());
            } else {
                println!("{}", row);
            }
        }
    }

    println!("{}", counts_line(store));
}

/// The one-line counter summary shown under every view
fn counts_line(store: &TaskListStore) -> String {
    let counts = store.counts();
    format!(
        "Total: {} • Active: {} • Completed: {}",
        counts.total, counts.active, counts.completed
    )
}

/// Print every field of one task, with the creation time made readable
fn show_task(store: &TaskListStore, id: TaskId) {
    let task = match store.items().iter().find(|t| t.id == id) {
        Some(task) => task,
        None => return,
    };

    println!("id:      {}", task.id);
    println!("title:   {}", task.title);
    println!("done:    {}", task.done);
    println!(
        "created: {}",
        format_time(task.created_at, "%Y-%m-%d %H:%M:%S UTC")
    );
}

/// Render an epoch-millisecond timestamp with the given strftime format
fn format_time(ms: i64, fmt: &str) -> String {
    DateTime::from_timestamp_millis(ms)
        .map(|dt| dt.format(fmt).to_string())
        .unwrap_or_else(|| format!("{} ms since epoch", ms))
}

/// Split a command line into its verb and the remainder
fn split_verb(line: &str) -> (&str, &str) {
    match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim_start()),
        None => (line, ""),
    }
}

/// Split "N rest of line" into the index token and the remainder
fn split_index_arg(rest: &str) -> (&str, &str) {
    match rest.split_once(char::is_whitespace) {
        Some((idx, title)) => (idx, title.trim_start()),
        None => (rest, ""),
    }
}

/// Resolve a 1-based position in the visible view to a task id
fn resolve_index(store: &TaskListStore, arg: &str) -> Result<TaskId, String> {
    let arg = arg.trim();
    let n: usize = arg
        .parse()
        .map_err(|_| format!("Expected a task number, got '{}'", arg))?;

    let visible = store.visible_items();
    if n == 0 || n > visible.len() {
        return Err(format!("No task {} in the current view", n));
    }
    Ok(visible[n - 1].id)
}

#[derive(Serialize)]
struct Snapshot<'a> {
    filter: ViewFilter,
    counts: TaskCounts,
    items: &'a [Task],
}

/// Everything the session holds, in one serializable value
fn snapshot(store: &TaskListStore) -> Snapshot<'_> {
    Snapshot {
        filter: store.filter(),
        counts: store.counts(),
        items: store.items(),
    }
}

fn print_help() {
    println!("Commands:");
    println!("  add <title>         Add a task to the top of the list");
    println!("  done <n>            Toggle task n in the current view (alias: toggle)");
    println!("  rename <n> <title>  Replace the title of task n");
    println!("  rm <n>              Delete task n");
    println!("  clear               Remove all completed tasks");
    println!("  filter [name]       Show or set the view filter (all, active, completed)");
    println!("  list                Redraw the current view");
    println!("  counts              Print the counters only");
    println!("  show <n>            Full detail for task n");
    println!("  dump                Print the session state as JSON");
    println!("  help                This message");
    println!("  quit                Leave the session (alias: exit)");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_store() -> TaskListStore {
        let mut store = TaskListStore::new();
        store.add("write report");
        store.add("buy milk");
        store.add("call dentist");
        // "buy milk" sits at row 1
        store.toggle(store.items()[1].id);
        store
    }

    #[test]
    fn test_counts_line_format() {
        let store = sample_store();

        assert_eq!(counts_line(&store), "Total: 3 • Active: 2 • Completed: 1");
    }

    #[test]
    fn test_split_verb() {
        assert_eq!(split_verb("add buy milk"), ("add", "buy milk"));
        assert_eq!(split_verb("list"), ("list", ""));
        assert_eq!(split_verb("add   padded"), ("add", "padded"));
    }

    #[test]
    fn test_split_index_arg() {
        assert_eq!(split_index_arg("2 new title"), ("2", "new title"));
        assert_eq!(split_index_arg("2"), ("2", ""));
        assert_eq!(split_index_arg("2   padded  out"), ("2", "padded  out"));
    }

    #[test]
    fn test_resolve_index_uses_visible_view() {
        let mut store = sample_store();
        store.set_filter(ViewFilter::Completed);

        let id = resolve_index(&store, "1").unwrap();
        let task = store.items().iter().find(|t| t.id == id).unwrap();
        assert_eq!(task.title, "buy milk");
    }

    #[test]
    fn test_resolve_index_rejects_zero_and_out_of_range() {
        let store = sample_store();

        assert!(resolve_index(&store, "0").is_err());
        assert!(resolve_index(&store, "4").is_err());
    }

    #[test]
    fn test_resolve_index_rejects_non_numeric() {
        let store = sample_store();

        let err = resolve_index(&store, "first").unwrap_err();
        assert!(err.contains("task number"));
    }

    #[test]
    fn test_format_time() {
        assert_eq!(
            format_time(1_700_000_000_000, "%Y-%m-%d %H:%M:%S UTC"),
            "2023-11-14 22:13:20 UTC"
        );
        // Out of chrono's range falls back to the raw value
        assert!(format_time(i64::MAX, "%Y").contains("ms since epoch"));
    }

    #[test]
    fn test_snapshot_serializes_session_state() {
        let mut store = sample_store();
        store.set_filter(ViewFilter::Active);

        let json = serde_json::to_string(&snapshot(&store)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["filter"], "active");
        assert_eq!(value["counts"]["total"], 3);
        assert_eq!(value["counts"]["active"], 2);
        assert_eq!(value["counts"]["completed"], 1);
        assert_eq!(value["items"].as_array().unwrap().len(), 3);
    }
}
