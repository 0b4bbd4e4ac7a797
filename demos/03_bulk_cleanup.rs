//! Example 03: Bulk Cleanup and No-op Degradation
//!
//! This example demonstrates clearing all completed tasks at once, plus the
//! commands that quietly do nothing: blank titles and unknown ids never fail,
//! they just leave the session unchanged.
//!
//! Run with: cargo run --example 03_bulk_cleanup

use eyre::Result;
use tasklist::{TaskId, TaskListStore};

fn main() -> Result<()> {
    println!("TaskList Bulk Cleanup Example");
    println!("=============================\n");

    // Seed a session with a mix of done and pending tasks
    let mut store = TaskListStore::new();
    store.add("Archive old branches");
    store.add("Update dependencies");
    store.add("Fix flaky test");
    store.add("Write release notes");
    store.toggle(store.items()[0].id);
    store.toggle(store.items()[2].id);

    println!("1. SNAPSHOT - Session state as JSON...");
    let json = serde_json::to_string_pretty(store.items())?;
    println!("{}\n", json);

    // No-op degradation: bad input changes nothing
    println!("2. NO-OPS - Commands that quietly do nothing...");
    let before = store.counts();
    store.add("   ");
    store.toggle(TaskId::now_v7());
    store.rename(TaskId::now_v7(), "ghost");
    store.delete(TaskId::now_v7());
    let after = store.counts();
    println!("   Counts before: {:?}", before);
    println!("   Counts after:  {:?}", after);
    println!("   Unchanged: {}\n", before == after);

    // Bulk cleanup: drop everything completed in one step
    println!("3. CLEAR - Removing all completed tasks...");
    let completed = store.completed_count();
    store.clear_completed();
    println!("   Removed {} tasks", completed);
    for task in store.visible_items() {
        println!("   [ ] {}", task.title);
    }
    println!();

    // Clearing again is a no-op
    println!("4. CLEAR AGAIN - Nothing left to remove...");
    store.clear_completed();
    let counts = store.counts();
    println!(
        "   Total: {}, Active: {}, Completed: {}\n",
        counts.total, counts.active, counts.completed
    );

    println!("Example complete!");
    Ok(())
}
